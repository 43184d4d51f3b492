// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Error types with helpful messages
//!
//! Validation itself never fails; compliance findings are issues, not errors.
//! These errors cover the layers around it: reading record files, parsing
//! them, and loading configuration.

mod educational;

pub use educational::EducationalMessage;

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for srdlint operations
pub type SrdLintResult<T> = Result<T, SrdLintError>;

/// Main error type for srdlint
#[derive(Error, Debug, Diagnostic)]
pub enum SrdLintError {
    // ─────────────────────────────────────────────────────────────────────────
    // Input Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("File not found: {path}")]
    #[diagnostic(code(srdlint::file_not_found))]
    FileNotFound {
        path: PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to read file '{path}': {error}")]
    #[diagnostic(code(srdlint::file_read_error))]
    FileReadError { path: PathBuf, error: String },

    #[error("Failed to write file '{path}': {error}")]
    #[diagnostic(code(srdlint::file_write_error))]
    FileWriteError { path: PathBuf, error: String },

    #[error("No input files matched pattern: {pattern}")]
    #[diagnostic(
        code(srdlint::no_input_files),
        help("Check that files matching '{pattern}' exist")
    )]
    NoInputFiles { pattern: String },

    #[error("Unsupported input in '{path}': {reason}")]
    #[diagnostic(
        code(srdlint::unsupported_input),
        help("Inputs must hold a record object, an array of records, or a backup keyed by collection")
    )]
    UnsupportedInput { path: PathBuf, reason: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Invalid configuration in '{path}': {reason}")]
    #[diagnostic(
        code(srdlint::invalid_config),
        help("See 'srdlint --help' for the supported .srdlint.yaml keys")
    )]
    InvalidConfig { path: PathBuf, reason: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Format Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("YAML parsing error: {message}")]
    #[diagnostic(code(srdlint::yaml_error))]
    Yaml { message: String },

    #[error("JSON parsing error: {message}")]
    #[diagnostic(code(srdlint::json_error))]
    Json { message: String },

    #[error("Glob pattern error: {message}")]
    #[diagnostic(code(srdlint::glob_error))]
    GlobPattern { message: String },
}

impl From<serde_yaml::Error> for SrdLintError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml { message: e.to_string() }
    }
}

impl From<serde_json::Error> for SrdLintError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { message: e.to_string() }
    }
}

impl From<glob::PatternError> for SrdLintError {
    fn from(e: glob::PatternError) -> Self {
        Self::GlobPattern { message: e.to_string() }
    }
}

impl SrdLintError {
    /// Create a file not found error, hinting at globbing when relevant
    pub fn file_not_found(path: PathBuf) -> Self {
        let help = if path.to_string_lossy().contains(|c: char| matches!(c, '*' | '?' | '[')) {
            Some("Quote glob patterns so srdlint expands them, e.g. 'records/*.json'".into())
        } else {
            Some("Check the path, or run with -C to change the working directory".into())
        };

        Self::FileNotFound { path, help }
    }

    /// Create a read error for a file
    pub fn read_failed(path: &std::path::Path, e: impl std::fmt::Display) -> Self {
        Self::FileReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_help() {
        match SrdLintError::file_not_found(PathBuf::from("records/*.json")) {
            SrdLintError::FileNotFound { help: Some(help), .. } => assert!(help.contains("Quote")),
            other => panic!("unexpected error: {:?}", other),
        }

        match SrdLintError::file_not_found(PathBuf::from("hero.json")) {
            SrdLintError::FileNotFound { help: Some(help), .. } => assert!(help.contains("-C")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let err: SrdLintError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, SrdLintError::Json { .. }));
        assert!(err.to_string().starts_with("JSON parsing error"));
    }
}
