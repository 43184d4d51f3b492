// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Educational messages
//!
//! Explains why a flagged term is a problem, so authors learn what the SRD
//! covers while fixing their content.

use crate::srd::TermCategory;

const SRD_LICENSE_URL: &str = "https://dnd.wizards.com/resources/systems-reference-document";

/// Educational message with explanation and examples
#[derive(Debug, Clone)]
pub struct EducationalMessage {
    /// Short summary of the issue
    pub summary: String,
    /// Detailed explanation
    pub explanation: String,
    /// Example of compliant usage
    pub example: Option<String>,
    /// Link to documentation
    pub docs_url: Option<String>,
}

impl EducationalMessage {
    /// Explain why terms of a category are flagged
    pub fn for_category(category: TermCategory) -> Self {
        let (summary, explanation, example) = match category {
            TermCategory::Settings => (
                "Published campaign setting",
                "Named campaign settings are product identity. The SRD contains\n\
                 rules, not worlds, so shareable homebrew needs its own setting.",
                Some("// Instead of:\nA hero of the Forgotten Realms\n\n// Write:\nA hero of the Shattered Coast"),
            ),
            TermCategory::Locations => (
                "Named location from a published setting",
                "Cities, regions and dungeons of published settings are not in the SRD.\n\
                 Describe the place and give it a name of your own.",
                Some("// Instead of:\nBorn in Waterdeep\n\n// Write:\nBorn in a great coastal trade city"),
            ),
            TermCategory::Characters => (
                "Named character or deity",
                "Iconic characters are product identity even when they appear in\n\
                 spell or item names. Create your own heroes and villains.",
                None,
            ),
            TermCategory::Subclasses => (
                "Subclass outside the SRD",
                "The SRD includes one subclass per class. Other subclasses come\n\
                 from supplements and cannot be shared under the open licence.",
                Some("// SRD subclasses include:\nChampion, Thief, Evocation, Life Domain, Lore"),
            ),
            TermCategory::Factions => (
                "Faction from a published setting",
                "Organisations such as guilds, cults and alliances belong to their\n\
                 settings. Invent a faction that fills the same role.",
                None,
            ),
            TermCategory::Monsters => (
                "Creature outside the SRD",
                "Some well-known creatures were deliberately left out of the SRD.\n\
                 Design an original creature or use an SRD stat block.",
                None,
            ),
            TermCategory::Items => (
                "Named magic item or artifact",
                "Named artifacts are tied to published adventures and settings.\n\
                 Generic magic items from the SRD are fine to use.",
                None,
            ),
            TermCategory::Spells => (
                "Spell outside the SRD",
                "Many SRD spells drop the wizard's name from the title, and some\n\
                 spells only exist in supplements. Use the SRD name or your own.",
                Some("// Instead of:\nBigby's Hand\n\n// Write:\nArcane Hand"),
            ),
        };

        Self {
            summary: summary.into(),
            explanation: explanation.into(),
            example: example.map(Into::into),
            docs_url: Some(SRD_LICENSE_URL.into()),
        }
    }
}

impl std::fmt::Display for EducationalMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "{}", self.explanation)?;

        if let Some(ref example) = self.example {
            writeln!(f)?;
            writeln!(f, "Example:")?;
            writeln!(f, "────────")?;
            writeln!(f, "{}", example)?;
        }

        if let Some(ref url) = self.docs_url {
            writeln!(f)?;
            writeln!(f, "Learn more: {}", url)?;
        }

        Ok(())
    }
}
