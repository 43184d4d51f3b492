// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Protected term table
//!
//! Curated lists of names tied to D&D intellectual property that is not part
//! of the System Reference Document. Categories are scanned in the order of
//! [`TermCategory::ALL`].

use serde::{Deserialize, Serialize};

/// Category of protected terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermCategory {
    /// Published campaign settings
    Settings,
    /// Named places from published settings
    Locations,
    /// Named characters and deities
    Characters,
    /// Subclasses outside the SRD
    Subclasses,
    /// Organisations and factions
    Factions,
    /// Creatures outside the SRD
    Monsters,
    /// Named magic items and artifacts
    Items,
    /// Spells outside the SRD, including eponymous wizard spells
    Spells,
}

impl TermCategory {
    /// Canonical scan order
    pub const ALL: [TermCategory; 8] = [
        Self::Settings,
        Self::Locations,
        Self::Characters,
        Self::Subclasses,
        Self::Factions,
        Self::Monsters,
        Self::Items,
        Self::Spells,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Locations => "locations",
            Self::Characters => "characters",
            Self::Subclasses => "subclasses",
            Self::Factions => "factions",
            Self::Monsters => "monsters",
            Self::Items => "items",
            Self::Spells => "spells",
        }
    }

    /// Terms in this category, in table order
    pub fn terms(&self) -> &'static [&'static str] {
        match self {
            Self::Settings => SETTINGS,
            Self::Locations => LOCATIONS,
            Self::Characters => CHARACTERS,
            Self::Subclasses => SUBCLASSES,
            Self::Factions => FACTIONS,
            Self::Monsters => MONSTERS,
            Self::Items => ITEMS,
            Self::Spells => SPELLS,
        }
    }

    /// Whether `term` is listed in this category, ignoring case
    pub fn contains(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.terms().iter().any(|t| t.to_lowercase() == needle)
    }
}

impl std::fmt::Display for TermCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TermCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown term category: {}", s))
    }
}

/// Iterate the whole table in canonical category order
pub fn table() -> impl Iterator<Item = (TermCategory, &'static [&'static str])> {
    TermCategory::ALL.into_iter().map(|c| (c, c.terms()))
}

// No term may contain a term from an earlier category (or an earlier entry
// of its own category) as a substring, otherwise the earlier one is reported.

const SETTINGS: &[&str] = &[
    "Forgotten Realms",
    "Faerûn",
    "Faerun",
    "Greyhawk",
    "Eberron",
    "Ravenloft",
    "Dark Sun",
    "Spelljammer",
    "Planescape",
    "Dragonlance",
    "Krynn",
    "Mystara",
    "Theros",
    "Ravnica",
    "Wildemount",
    "Exandria",
    "Strixhaven",
    "Athas",
];

const LOCATIONS: &[&str] = &[
    "Waterdeep",
    "Baldur's Gate",
    "Neverwinter",
    "Menzoberranzan",
    "Icewind Dale",
    "Sword Coast",
    "Candlekeep",
    "Barovia",
    "Undermountain",
    "Luskan",
    "Silverymoon",
    "Myth Drannor",
    "Chult",
    "Calimshan",
    "Sharn",
];

const CHARACTERS: &[&str] = &[
    "Drizzt",
    "Elminster",
    "Mordenkainen",
    "Xanathar",
    "Volothamp",
    "Strahd",
    "Vecna",
    "Acererak",
    "Lolth",
    "Raistlin",
    "Minsc",
    "Jarlaxle",
    "Bruenor",
    "Khelben",
];

const SUBCLASSES: &[&str] = &[
    "Echo Knight",
    "Hexblade",
    "Swashbuckler",
    "Gloom Stalker",
    "Arcane Archer",
    "Bladesinger",
    "Battle Master",
    "Eldritch Knight",
    "Samurai",
    "Path of the Zealot",
    "College of Swords",
    "Way of Shadow",
    "Oath of Vengeance",
    "Circle of Spores",
    "Chronurgy",
    "Graviturgy",
    "Soulknife",
    "Rune Knight",
];

const FACTIONS: &[&str] = &[
    "Harpers",
    "Zhentarim",
    "Lords' Alliance",
    "Emerald Enclave",
    "Order of the Gauntlet",
    "Red Wizards",
    "Cult of the Dragon",
    "Bregan D'aerthe",
];

const MONSTERS: &[&str] = &[
    "Beholder",
    "Mind Flayer",
    "Illithid",
    "Githyanki",
    "Githzerai",
    "Displacer Beast",
    "Carrion Crawler",
    "Umber Hulk",
    "Yuan-ti",
    "Kuo-toa",
    "Slaad",
    "Death Tyrant",
    "Kenku",
    "Tabaxi",
    "Tortle",
];

const ITEMS: &[&str] = &[
    "Wand of Orcus",
    "Blackrazor",
    "Moonblade",
    "Sword of Kas",
    "Axe of the Dwarvish Lords",
    "Book of Vile Darkness",
    "Rod of Seven Parts",
    "Orb of Dragonkind",
    "Blackstaff",
    "Spelljamming Helm",
];

const SPELLS: &[&str] = &[
    "Bigby's Hand",
    "Tasha's Hideous Laughter",
    "Tasha's Mind Whip",
    "Melf's Acid Arrow",
    "Otiluke's Resilient Sphere",
    "Leomund's Tiny Hut",
    "Tenser's Floating Disk",
    "Evard's Black Tentacles",
    "Rary's Telepathic Bond",
    "Drawmij's Instant Summons",
    "Nystul's Magic Aura",
    "Snilloc's Snowball Swarm",
    "Booming Blade",
    "Green-Flame Blade",
    "Toll the Dead",
    "Mind Sliver",
    "Synaptic Static",
    "Silvery Barbs",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_is_fixed() {
        let names: Vec<_> = table().map(|(c, _)| c.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "settings",
                "locations",
                "characters",
                "subclasses",
                "factions",
                "monsters",
                "items",
                "spells"
            ]
        );
    }

    #[test]
    fn test_no_category_is_empty() {
        for (category, terms) in table() {
            assert!(!terms.is_empty(), "{} has no terms", category);
        }
    }

    #[test]
    fn test_no_term_shadows_a_later_term() {
        let all: Vec<&str> = table().flat_map(|(_, terms)| terms.iter().copied()).collect();

        for (i, later) in all.iter().enumerate() {
            let later_lower = later.to_lowercase();
            for earlier in &all[..i] {
                assert!(
                    !later_lower.contains(&earlier.to_lowercase()),
                    "'{}' is shadowed by '{}'",
                    later,
                    earlier
                );
            }
        }
    }

    #[test]
    fn test_contains_ignores_case() {
        assert!(TermCategory::Locations.contains("waterdeep"));
        assert!(TermCategory::Settings.contains("FORGOTTEN REALMS"));
        assert!(!TermCategory::Settings.contains("Forgotten"));
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("Spells".parse::<TermCategory>(), Ok(TermCategory::Spells));
        assert!("races".parse::<TermCategory>().is_err());
    }
}
