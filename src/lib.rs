// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! # srdlint - SRD Compliance Linter
//!
//! `srdlint` flags homebrew D&D 5E content that references intellectual
//! property outside the open System Reference Document.
//!
//! ## Features
//!
//! - **Term scanning** - Names and descriptions checked against curated protected terms
//! - **Type-specific checks** - Character classes and races, world settings and regions,
//!   spell, item and monster names
//! - **Suggestions** - Compliant replacements for flagged terms
//! - **Annotation** - Store the `isSrdCompliant` verdict on records and backups
//!
//! ## Quick Start
//!
//! ```bash
//! # Check a character
//! srdlint check hero.json --type character
//!
//! # Check a whole backup
//! srdlint check backup.json
//!
//! # Get alternatives for a flagged term
//! srdlint suggest "Forgotten Realms"
//! ```
//!
//! ## Library use
//!
//! ```
//! use srdlint::{is_srd_compliant, validate_srd_compliance, ContentRecord, ContentType};
//!
//! let record = ContentRecord::named("Bigby's Hand");
//! let issues = validate_srd_compliance(&record, &ContentType::Spell);
//!
//! assert_eq!(issues.len(), 2);
//! assert!(!is_srd_compliant(&record, &ContentType::Spell));
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod records;
pub mod srd;
pub mod utils;

// Re-export commonly used types
pub use config::SrdLintConfig;
pub use errors::{EducationalMessage, SrdLintError, SrdLintResult};
pub use records::{annotate, LoadedRecord, RecordLoader};

// Re-export validator API
pub use srd::{
    check_for_protected_terms, is_srd_compliant, suggest_alternatives, validate_srd_compliance,
    ComplianceIssue, ComplianceReport, ContentRecord, ContentType, Severity, TermCategory,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
