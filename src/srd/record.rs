// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Content records and content type tags
//!
//! Records come from editor form state and backups, so they are loosely
//! shaped. Every field is optional, and a field holding the wrong kind of
//! value is treated as absent rather than rejected.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Kind of homebrew content being validated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    Character,
    World,
    Spell,
    Item,
    Monster,
    /// Any other tag; only the generic checks apply
    Other(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Character => "character",
            Self::World => "world",
            Self::Spell => "spell",
            Self::Item => "item",
            Self::Monster => "monster",
            Self::Other(tag) => tag,
        }
    }

    /// Whether type-specific checks exist for this tag
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for ContentType {
    fn from(tag: &str) -> Self {
        match tag {
            "character" => Self::Character,
            "world" => Self::World,
            "spell" => Self::Spell,
            "item" => Self::Item,
            "monster" => Self::Monster,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ContentType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl std::str::FromStr for ContentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ContentType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// A region entry of a world record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Region {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The fields of a content record that compliance checks read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Character class or subclass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,

    /// World genre or setting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<Region>>,
}

impl ContentRecord {
    /// Record with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = Some(race.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_region(mut self, name: impl Into<String>) -> Self {
        self.regions.get_or_insert_with(Vec::new).push(Region {
            name: Some(name.into()),
        });
        self
    }

    /// Extract a record from an arbitrary JSON value
    ///
    /// Never fails: non-objects yield an empty record.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);

        let regions = map.get("regions").and_then(Value::as_array).map(|entries| {
            entries
                .iter()
                .map(|entry| Region {
                    name: entry
                        .get("name")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                })
                .collect()
        });

        Self {
            name: text("name"),
            description: text("description"),
            class: text("class"),
            race: text("race"),
            genre: text("genre"),
            regions,
        }
    }
}

impl<'de> Deserialize<'de> for ContentRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
