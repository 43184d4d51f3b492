// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Suggest command - compliant alternatives for a protected term

use colored::Colorize;
use miette::Result;

use crate::errors::EducationalMessage;
use crate::srd::{find_protected_term, suggest_alternatives};
use crate::utils::{print_bullet, print_section};

/// Run the suggest command
pub async fn run(term: String, verbose: bool) -> Result<()> {
    println!();
    println!("{} {}", "Alternatives for".bold(), term.cyan());

    match find_protected_term(Some(term.as_str())) {
        Some((category, found)) => {
            println!("  Protected {} term: {}", category, found.bold());
        }
        None => {
            println!("  {}", "Not a protected term".dimmed());
        }
    }

    print_section("Suggestions");
    for suggestion in suggest_alternatives(&term) {
        print_bullet(&suggestion);
    }

    if verbose {
        if let Some((category, _)) = find_protected_term(Some(term.as_str())) {
            println!();
            print!("{}", EducationalMessage::for_category(category));
        }
    }

    println!();
    Ok(())
}
