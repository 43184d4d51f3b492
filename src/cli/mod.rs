// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! CLI command definitions and handlers
//!
//! Defines the command-line interface for srdlint.

pub mod annotate;
pub mod check;
pub mod suggest;
pub mod terms;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// SRD compliance linter for homebrew content
///
/// Flags references to D&D content that is not part of the SRD.
#[derive(Parser, Debug)]
#[clap(
    name = "srdlint",
    version,
    about = "SRD compliance linter for D&D 5E homebrew content",
    long_about = None,
    after_help = "Examples:\n\
        srdlint check hero.json -t character    Check a character record\n\
        srdlint check 'spells/*.json' -t spell  Check every spell file\n\
        srdlint check backup.json               Check a full backup\n\
        srdlint annotate backup.json -o out.json Store isSrdCompliant flags\n\
        srdlint suggest Waterdeep               Suggest compliant alternatives\n\n\
        See 'srdlint <command> --help' for more information on a specific command."
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Change to directory before executing
    #[clap(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Config file (default: .srdlint.yaml, then the user config)
    #[clap(long, global = true, value_name = "FILE", env = "SRDLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check records for protected content
    Check {
        /// Record files or glob patterns (JSON or YAML)
        #[clap(required = true)]
        files: Vec<String>,

        /// Content type of records outside backups (character, world, spell, item, monster)
        #[clap(short = 't', long = "type", value_name = "TYPE")]
        content_type: Option<String>,

        /// Output format (default: config `format`, then text)
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Fail when any record has warnings
        #[clap(long)]
        fail_on_warnings: bool,
    },

    /// Write isSrdCompliant onto every record of a file
    Annotate {
        /// Record file (JSON or YAML)
        file: PathBuf,

        /// Content type of records outside backups
        #[clap(short = 't', long = "type", value_name = "TYPE")]
        content_type: Option<String>,

        /// Output file (default: stdout)
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Suggest compliant alternatives for a term
    Suggest {
        /// Term to replace, e.g. "Forgotten Realms"
        term: String,
    },

    /// List protected terms
    Terms {
        /// Only show one category
        #[clap(short, long)]
        category: Option<String>,

        /// Output format (default: config `format`, then text)
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::parse_from(["srdlint", "check", "a.json", "b.json", "-t", "spell"]);

        match cli.command {
            Commands::Check {
                files,
                content_type,
                format,
                fail_on_warnings,
            } => {
                assert_eq!(files, vec!["a.json", "b.json"]);
                assert_eq!(content_type.as_deref(), Some("spell"));
                assert_eq!(format, None);
                assert!(!fail_on_warnings);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_requires_files() {
        assert!(Cli::try_parse_from(["srdlint", "check"]).is_err());
    }

    #[test]
    fn test_output_format() {
        let cli = Cli::parse_from(["srdlint", "terms", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Commands::Terms {
                format: Some(OutputFormat::Json),
                ..
            }
        ));

        assert!(Cli::try_parse_from(["srdlint", "terms", "--format", "xml"]).is_err());
    }
}
