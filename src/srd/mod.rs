// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! SRD compliance validation
//!
//! This module detects references to protected (non-SRD) D&D content in
//! user-authored homebrew records:
//! - Curated protected term table, scanned in a fixed category order
//! - Record validation with content-type specific checks
//! - A compliant/non-compliant verdict
//! - Replacement suggestions for flagged terms

pub mod record;
pub mod report;
pub mod suggestions;
pub mod terms;
pub mod validator;

pub use record::{ContentRecord, ContentType, Region};
pub use report::{ComplianceReport, IssueStats};
pub use suggestions::suggest_alternatives;
pub use terms::TermCategory;
pub use validator::{
    check_for_protected_terms, find_protected_term, is_srd_compliant, validate_srd_compliance, ComplianceIssue,
    Severity,
};
