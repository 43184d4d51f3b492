// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Compliance reports
//!
//! Groups the issues of one validation run by severity for display.

use serde::Serialize;

use super::record::{ContentRecord, ContentType};
use super::validator::{validate_srd_compliance, ComplianceIssue, Severity};

/// Issue counts by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueStats {
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

/// Outcome of validating one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    /// Content type the record was validated as
    pub content_type: ContentType,

    /// No error-severity issues
    pub compliant: bool,

    /// Issues in the order they were found
    pub issues: Vec<ComplianceIssue>,

    pub stats: IssueStats,
}

impl ComplianceReport {
    /// Build a report from already-computed issues
    pub fn new(content_type: ContentType, issues: Vec<ComplianceIssue>) -> Self {
        let mut stats = IssueStats::default();
        for issue in &issues {
            match issue.severity {
                Severity::Error => stats.errors += 1,
                Severity::Warning => stats.warnings += 1,
                Severity::Info => stats.info += 1,
            }
        }

        Self {
            content_type,
            compliant: stats.errors == 0,
            issues,
            stats,
        }
    }

    /// Validate a record and summarise the result
    pub fn for_record(record: &ContentRecord, content_type: &ContentType) -> Self {
        let issues = validate_srd_compliance(record, content_type);
        Self::new(content_type.clone(), issues)
    }

    /// Issues of one severity, in insertion order
    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &ComplianceIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    /// Non-empty severity groups, errors first
    pub fn grouped(&self) -> Vec<(Severity, Vec<&ComplianceIssue>)> {
        Severity::ALL
            .into_iter()
            .map(|s| (s, self.by_severity(s).collect::<Vec<_>>()))
            .filter(|(_, group)| !group.is_empty())
            .collect()
    }

    pub fn has_warnings(&self) -> bool {
        self.stats.warnings > 0
    }
}
