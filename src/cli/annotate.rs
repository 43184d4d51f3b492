// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Annotate command - store the compliance verdict on each record

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use super::check::loader_for;
use crate::config::SrdLintConfig;
use crate::errors::SrdLintError;
use crate::records::{read_document, render_document};

/// Run the annotate command
pub async fn run(
    file: PathBuf,
    content_type: Option<String>,
    output: Option<PathBuf>,
    config: &SrdLintConfig,
    verbose: bool,
) -> Result<()> {
    let loader = loader_for(content_type.as_deref(), config);

    let mut document = read_document(&file).await?;
    let summary = loader.annotate_document(&file, &mut document)?;

    // Output keeps the format of its own extension, or of the input on stdout
    let content = render_document(output.as_deref().unwrap_or(file.as_path()), &document)?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, &content)
                .await
                .map_err(|e| SrdLintError::FileWriteError {
                    path: path.clone(),
                    error: e.to_string(),
                })?;

            eprintln!(
                "{} Annotated {} records ({} compliant, {} not) → {}",
                "✓".green(),
                summary.total,
                summary.compliant,
                summary.non_compliant(),
                path.display()
            );
        }
        None => {
            print!("{}", content);
            if verbose {
                eprintln!(
                    "Annotated {} records ({} compliant)",
                    summary.total, summary.compliant
                );
            }
        }
    }

    Ok(())
}
