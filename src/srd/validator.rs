// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! SRD compliance validation
//!
//! Scans the free-text fields of a record against the protected term table
//! and runs the checks specific to the record's content type. Every function
//! here is pure and total: missing fields and unknown content types simply
//! produce no issues.

use serde::{Deserialize, Serialize};

use super::record::{ContentRecord, ContentType};
use super::terms::TermCategory;

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Self::Error, Self::Warning, Self::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single compliance finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceIssue {
    pub severity: Severity,

    pub message: String,

    /// Record field the issue refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ComplianceIssue {
    pub fn error(message: impl Into<String>, field: &str) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            field: Some(field.to_string()),
        }
    }

    pub fn warning(message: impl Into<String>, field: &str) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            field: Some(field.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Return the first term, in list order, occurring in `text` (ignoring case)
pub fn check_for_protected_terms<'a>(text: Option<&str>, terms: &[&'a str]) -> Option<&'a str> {
    let text = text.filter(|t| !t.is_empty())?.to_lowercase();

    terms
        .iter()
        .copied()
        .find(|term| text.contains(&term.to_lowercase()))
}

/// Scan `text` against every category in canonical order, stopping at the first hit
pub fn find_protected_term(text: Option<&str>) -> Option<(TermCategory, &'static str)> {
    TermCategory::ALL
        .into_iter()
        .find_map(|category| check_for_protected_terms(text, category.terms()).map(|t| (category, t)))
}

/// Validate a record, returning issues in the order they were found
pub fn validate_srd_compliance(
    record: &ContentRecord,
    content_type: &ContentType,
) -> Vec<ComplianceIssue> {
    let mut issues = Vec::new();

    let name = record.name.as_deref();
    let description = record.description.as_deref();

    if let Some((_, term)) = find_protected_term(name) {
        issues.push(ComplianceIssue::error(
            format!(
                "Name contains \"{}\", which is protected content not in the SRD.",
                term
            ),
            "name",
        ));
    }

    if let Some((_, term)) = find_protected_term(description) {
        issues.push(ComplianceIssue::error(
            format!(
                "Description contains \"{}\", which is protected content not in the SRD.",
                term
            ),
            "description",
        ));
    }

    match content_type {
        ContentType::Character => check_character(record, &mut issues),
        ContentType::World => check_world(record, &mut issues),
        ContentType::Spell => {
            if check_for_protected_terms(name, TermCategory::Spells.terms()).is_some() {
                issues.push(ComplianceIssue::error(
                    "Spell name is a protected spell not in the SRD.",
                    "name",
                ));
            }
        }
        ContentType::Item => {
            if check_for_protected_terms(name, TermCategory::Items.terms()).is_some() {
                issues.push(ComplianceIssue::error(
                    "Item name is a protected magic item not in the SRD.",
                    "name",
                ));
            }
        }
        ContentType::Monster => {
            if check_for_protected_terms(name, TermCategory::Monsters.terms()).is_some() {
                issues.push(ComplianceIssue::error(
                    "Monster name is a protected creature not in the SRD.",
                    "name",
                ));
            }
        }
        ContentType::Other(_) => {}
    }

    // Deliberately case-sensitive, unlike the term scans
    if description.is_some_and(|d| d.contains("copyright")) {
        issues.push(ComplianceIssue::warning(
            "Description mentions copyright. Make sure it does not reproduce copyrighted text.",
            "description",
        ));
    }

    issues
}

fn check_character(record: &ContentRecord, issues: &mut Vec<ComplianceIssue>) {
    if let Some(term) =
        check_for_protected_terms(record.class.as_deref(), TermCategory::Subclasses.terms())
    {
        issues.push(ComplianceIssue::error(
            format!("Class \"{}\" is a protected subclass not in the SRD.", term),
            "class",
        ));
    }

    // Races are checked against the monster list; there is no race list.
    if let Some(term) =
        check_for_protected_terms(record.race.as_deref(), TermCategory::Monsters.terms())
    {
        issues.push(ComplianceIssue::error(
            format!("Race \"{}\" is protected content not in the SRD.", term),
            "race",
        ));
    }
}

fn check_world(record: &ContentRecord, issues: &mut Vec<ComplianceIssue>) {
    if record
        .genre
        .as_deref()
        .is_some_and(|g| g.to_lowercase() == "forgotten realms")
    {
        issues.push(ComplianceIssue::error(
            "The Forgotten Realms setting is protected content not in the SRD.",
            "genre",
        ));
    }

    let Some(regions) = &record.regions else {
        return;
    };

    for region in regions {
        let name = region.name.as_deref();
        if let Some(term) = check_for_protected_terms(name, TermCategory::Locations.terms()) {
            issues.push(ComplianceIssue::error(
                format!(
                    "Region \"{}\" contains the protected location \"{}\".",
                    name.unwrap_or_default(),
                    term
                ),
                "regions",
            ));
            break;
        }
    }
}

/// True when validation yields no error-severity issue
pub fn is_srd_compliant(record: &ContentRecord, content_type: &ContentType) -> bool {
    !validate_srd_compliance(record, content_type)
        .iter()
        .any(ComplianceIssue::is_error)
}
