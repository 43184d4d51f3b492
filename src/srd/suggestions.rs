// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Alternative phrasing for flagged terms

use super::terms::TermCategory;

/// Hand-picked replacements for the most frequently flagged terms
const CURATED: &[(&str, &[&str])] = &[
    (
        "Forgotten Realms",
        &[
            "Create your own campaign setting",
            "Use a generic fantasy world",
            "Describe the world without naming a published setting",
        ],
    ),
    (
        "Waterdeep",
        &[
            "A great coastal city of trade",
            "The City of Splendors (renamed)",
            "Name your own port metropolis",
        ],
    ),
    (
        "Baldur's Gate",
        &["A walled trading city on a river", "Name your own gate city"],
    ),
    (
        "Drizzt",
        &[
            "A dark elf ranger of your own creation",
            "An exiled hero from the underground",
        ],
    ),
    (
        "Beholder",
        &[
            "A floating many-eyed aberration",
            "Eye tyrant (renamed and redesigned)",
        ],
    ),
    (
        "Mind Flayer",
        &["A psionic brain-eating aberration", "An original tentacled horror"],
    ),
    (
        "Bigby's Hand",
        &["Arcane Hand", "Give the spell a name of your own"],
    ),
    (
        "Tasha's Hideous Laughter",
        &["Hideous Laughter", "Give the spell a name of your own"],
    ),
    (
        "Melf's Acid Arrow",
        &["Acid Arrow", "Give the spell a name of your own"],
    ),
    (
        "Leomund's Tiny Hut",
        &["Tiny Hut", "Give the spell a name of your own"],
    ),
];

const DEFAULT: &[&str] = &["Create an original alternative", "Rename this element"];

/// Categories with a generic fallback suggestion, in lookup order
const FALLBACK: &[(TermCategory, &str)] = &[
    (TermCategory::Settings, "Create an original campaign setting"),
    (TermCategory::Locations, "Create an original location name"),
    (TermCategory::Characters, "Create an original character"),
    (
        TermCategory::Spells,
        "Use the SRD version of this spell or create an original one",
    ),
    (TermCategory::Items, "Create an original magic item"),
];

/// Suggest compliant replacements for a protected term
///
/// Accepts any input; unknown terms get the default suggestions.
pub fn suggest_alternatives(term: &str) -> Vec<String> {
    let needle = term.to_lowercase();

    if let Some((_, suggestions)) = CURATED.iter().find(|(key, _)| key.to_lowercase() == needle) {
        return suggestions.iter().map(|s| s.to_string()).collect();
    }

    if let Some((_, suggestion)) = FALLBACK.iter().find(|(category, _)| category.contains(term)) {
        return vec![suggestion.to_string()];
    }

    DEFAULT.iter().map(|s| s.to_string()).collect()
}
