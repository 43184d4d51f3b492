// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! srdlint - SRD Compliance Linter
//!
//! Flag homebrew content that references non-SRD D&D intellectual property.

use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use srdlint::cli::{check::CheckOptions, Cli, Commands};
use srdlint::SrdLintConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "srdlint=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    srdlint::utils::configure_colors();

    let cli = Cli::parse();

    // Change to specified directory if provided
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir).map_err(|e| {
            miette::miette!("Failed to change to directory '{}': {}", dir.display(), e)
        })?;
    }

    let working_dir = std::env::current_dir()
        .map_err(|e| miette::miette!("Failed to get current directory: {}", e))?;
    let config = SrdLintConfig::discover(cli.config.as_deref(), &working_dir)?;

    // Dispatch to command handlers
    match cli.command {
        Commands::Check {
            files,
            content_type,
            format,
            fail_on_warnings,
        } => {
            let options = CheckOptions {
                files,
                content_type,
                format,
                fail_on_warnings,
            };
            srdlint::cli::check::run(options, &config, cli.verbose).await
        }
        Commands::Annotate {
            file,
            content_type,
            output,
        } => srdlint::cli::annotate::run(file, content_type, output, &config, cli.verbose).await,
        Commands::Suggest { term } => srdlint::cli::suggest::run(term, cli.verbose).await,
        Commands::Terms { category, format } => {
            srdlint::cli::terms::run(category, format, &config, cli.verbose).await
        }
    }
}
