// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Terminal color utilities
//!
//! Provides consistent color schemes across the CLI.

use colored::{ColoredString, Colorize};

use crate::srd::Severity;

/// Icon for an issue severity
pub fn severity_icon(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "✗".red(),
        Severity::Warning => "⚠".yellow(),
        Severity::Info => "→".blue(),
    }
}

/// Group heading for an issue severity
pub fn severity_heading(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "Errors".red().bold(),
        Severity::Warning => "Warnings".yellow().bold(),
        Severity::Info => "Info".blue().bold(),
    }
}

/// Disable colors when NO_COLOR is set or output is not a terminal
pub fn configure_colors() {
    if !should_use_colors() {
        colored::control::set_override(false);
    }
}

/// Check if colors should be used
pub fn should_use_colors() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    std::io::IsTerminal::is_terminal(&std::io::stdout())
}

/// Print a styled header
pub fn print_header(title: &str) {
    println!("{}", title.bold());
    println!("{}", "═".repeat(title.chars().count().max(40)));
}

/// Print a styled section
pub fn print_section(title: &str) {
    println!();
    println!("{}:", title.bold());
}

/// Print a bullet point
pub fn print_bullet(content: &str) {
    println!("  • {}", content);
}

/// Print a success check
pub fn print_success(msg: &str) {
    println!("  {} {}", "✓".green(), msg);
}
