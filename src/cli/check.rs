// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Check command - validate records against the protected term table

use colored::Colorize;
use miette::Result;

use super::OutputFormat;
use crate::config::SrdLintConfig;
use crate::records::{expand_inputs, LoadedRecord, RecordLoader};
use crate::srd::{find_protected_term, suggest_alternatives, ComplianceReport, ContentType};
use crate::utils::{print_header, print_success, severity_heading, severity_icon};
use crate::EducationalMessage;

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub files: Vec<String>,
    pub content_type: Option<String>,
    pub format: Option<OutputFormat>,
    pub fail_on_warnings: bool,
}

/// Run the check command
pub async fn run(options: CheckOptions, config: &SrdLintConfig, verbose: bool) -> Result<()> {
    let loader = loader_for(options.content_type.as_deref(), config);
    let fail_on_warnings = options.fail_on_warnings || config.fail_on_warnings;

    let files = expand_inputs(&options.files)?;
    let mut checked = Vec::new();

    for file in &files {
        let (_, records) = loader.load_file(file).await?;
        tracing::debug!("Loaded {} records from {}", records.len(), file.display());

        for record in records {
            let report = record.report();
            checked.push((record, report));
        }
    }

    match config.output_format(options.format) {
        OutputFormat::Text => print_text(&checked, verbose),
        OutputFormat::Json => print_json(&checked)?,
    }

    let failing = checked
        .iter()
        .filter(|(_, report)| !report.compliant || (fail_on_warnings && report.has_warnings()))
        .count();

    if failing > 0 {
        return Err(miette::miette!(
            "{} of {} records failed the SRD compliance check",
            failing,
            checked.len()
        ));
    }

    Ok(())
}

/// Build a loader from the CLI type, the config default, then the generic tag
pub fn loader_for(content_type: Option<&str>, config: &SrdLintConfig) -> RecordLoader {
    let loader = match content_type
        .map(ContentType::from)
        .or_else(|| config.default_content_type())
    {
        Some(content_type) => RecordLoader::new(content_type),
        None => RecordLoader::default(),
    };

    if !loader.default_type().is_recognized() {
        tracing::debug!(
            "Content type '{}' has no type-specific checks",
            loader.default_type()
        );
    }

    loader.with_collections(config.collection_overrides())
}

fn print_text(checked: &[(LoadedRecord, ComplianceReport)], verbose: bool) {
    println!();
    print_header("SRD Compliance Report");
    println!();

    for (record, report) in checked {
        let title = match record.name() {
            Some(name) => format!("{} ({})", record.label, name),
            None => record.label.clone(),
        };

        if report.issues.is_empty() {
            print_success(&format!("{} [{}]", title, report.content_type));
            continue;
        }

        let icon = if report.compliant {
            "⚠".yellow()
        } else {
            "✗".red()
        };
        println!("  {} {} [{}]", icon, title.bold(), report.content_type);

        for (severity, issues) in report.grouped() {
            println!("      {}:", severity_heading(severity));
            for issue in issues {
                let field = issue
                    .field
                    .as_deref()
                    .map(|f| format!("{}: ", f))
                    .unwrap_or_default();
                println!("        {} {}{}", severity_icon(severity), field.dimmed(), issue.message);
            }
        }

        if verbose {
            print_hints(record);
        }
    }

    let compliant = checked.iter().filter(|(_, r)| r.compliant).count();
    println!();
    println!(
        "{}: {}/{} records compliant",
        "Summary".bold(),
        compliant,
        checked.len()
    );
    println!();
}

/// Explain and suggest replacements for the terms found in a record
fn print_hints(record: &LoadedRecord) {
    let fields = [record.name(), record.value.get("description").and_then(|v| v.as_str())];

    for (category, term) in fields.into_iter().filter_map(find_protected_term) {
        let message = EducationalMessage::for_category(category);
        println!("      {} {} ({})", "→".blue(), term.bold(), message.summary.dimmed());
        for suggestion in suggest_alternatives(term) {
            println!("          • {}", suggestion);
        }
    }
}

fn print_json(checked: &[(LoadedRecord, ComplianceReport)]) -> Result<()> {
    let json: Vec<_> = checked
        .iter()
        .map(|(record, report)| {
            serde_json::json!({
                "source": record.label,
                "name": record.name(),
                "contentType": report.content_type,
                "isSrdCompliant": report.compliant,
                "stats": report.stats,
                "issues": report.issues,
            })
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&json)
            .map_err(|e| miette::miette!("Failed to serialize JSON: {}", e))?
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_prefers_cli_type() {
        let config = SrdLintConfig {
            default_content_type: Some("world".into()),
            ..Default::default()
        };

        assert_eq!(
            loader_for(Some("spell"), &config).default_type(),
            &ContentType::Spell
        );
        assert_eq!(loader_for(None, &config).default_type(), &ContentType::World);
        assert_eq!(
            loader_for(None, &SrdLintConfig::default()).default_type(),
            &ContentType::from(crate::records::GENERIC_TAG)
        );
    }

    #[test]
    fn test_loader_uses_config_collections() {
        let mut config = SrdLintConfig::default();
        config.collections.insert("bestiary".into(), "monster".into());

        let loader = loader_for(None, &config);
        assert_eq!(loader.collection_type("bestiary"), Some(&ContentType::Monster));
        assert_eq!(loader.collection_type("spells"), Some(&ContentType::Spell));
    }
}
