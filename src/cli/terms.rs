// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Terms command - list the protected term table

use colored::Colorize;
use miette::Result;

use super::OutputFormat;
use crate::config::SrdLintConfig;
use crate::srd::{terms, TermCategory};
use crate::utils::print_header;

/// Run the terms command
pub async fn run(
    category: Option<String>,
    format: Option<OutputFormat>,
    config: &SrdLintConfig,
    _verbose: bool,
) -> Result<()> {
    let filter = category
        .as_deref()
        .map(str::parse::<TermCategory>)
        .transpose()
        .map_err(|e| miette::miette!("{}", e))?;

    let selected: Vec<_> = terms::table()
        .filter(|(c, _)| filter.map_or(true, |f| f == *c))
        .collect();

    match config.output_format(format) {
        OutputFormat::Text => {
            println!();
            print_header("Protected Terms");

            for (category, list) in &selected {
                println!();
                println!("{} ({})", category.as_str().bold(), list.len());
                for term in list.iter() {
                    println!("  {}", term);
                }
            }
            println!();
        }
        OutputFormat::Json => {
            let json: Vec<_> = selected
                .iter()
                .map(|(category, list)| {
                    serde_json::json!({
                        "category": category,
                        "terms": list,
                    })
                })
                .collect();

            println!(
                "{}",
                serde_json::to_string_pretty(&json)
                    .map_err(|e| miette::miette!("Failed to serialize JSON: {}", e))?
            );
        }
    }

    Ok(())
}
