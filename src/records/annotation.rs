// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Compliance annotation
//!
//! Stores the derived verdict on each record as `isSrdCompliant`, the flag
//! that listings and exports filter on.

use std::path::Path;

use serde_json::Value;

use super::{DocumentShape, RecordLoader};
use crate::errors::{SrdLintError, SrdLintResult};
use crate::srd::{is_srd_compliant, ContentRecord, ContentType};

/// Field written onto annotated records
pub const COMPLIANCE_FIELD: &str = "isSrdCompliant";

/// Counts from annotating a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub total: usize,
    pub compliant: usize,
}

impl AnnotationSummary {
    pub fn non_compliant(&self) -> usize {
        self.total - self.compliant
    }

    fn record(&mut self, compliant: bool) {
        self.total += 1;
        if compliant {
            self.compliant += 1;
        }
    }
}

/// Set `isSrdCompliant` on a record and return the verdict
///
/// Values that are not objects are left untouched.
pub fn annotate(value: &mut Value, content_type: &ContentType) -> bool {
    let compliant = is_srd_compliant(&ContentRecord::from_value(value), content_type);

    if let Some(map) = value.as_object_mut() {
        map.insert(COMPLIANCE_FIELD.to_string(), Value::Bool(compliant));
    }

    compliant
}

impl RecordLoader {
    /// Annotate every record of a document in place, keeping its shape
    pub fn annotate_document(
        &self,
        path: &Path,
        document: &mut Value,
    ) -> SrdLintResult<AnnotationSummary> {
        let shape = self
            .shape(document)
            .ok_or_else(|| SrdLintError::UnsupportedInput {
                path: path.to_path_buf(),
                reason: "expected an object or array".into(),
            })?;

        let mut summary = AnnotationSummary::default();

        match (shape, document) {
            (DocumentShape::Single, value) => {
                summary.record(annotate(value, self.default_type()));
            }
            (DocumentShape::List, Value::Array(entries)) => {
                for value in entries {
                    summary.record(annotate(value, self.default_type()));
                }
            }
            (DocumentShape::Backup, Value::Object(map)) => {
                for (key, value) in map.iter_mut() {
                    let (Some(content_type), Value::Array(entries)) = (self.collection_type(key), value)
                    else {
                        continue;
                    };

                    for entry in entries {
                        summary.record(annotate(entry, content_type));
                    }
                }
            }
            _ => {}
        }

        tracing::debug!(
            "{}: annotated {} records, {} compliant",
            path.display(),
            summary.total,
            summary.compliant
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_annotate_record() {
        let mut value = json!({"name": "Eye of the Storm", "description": "copyright 2024"});
        assert!(annotate(&mut value, &ContentType::Item));
        assert_eq!(value[COMPLIANCE_FIELD], true);

        let mut value = json!({"name": "Moonblade"});
        assert!(!annotate(&mut value, &ContentType::Item));
        assert_eq!(value[COMPLIANCE_FIELD], false);
        assert_eq!(value["name"], "Moonblade");
    }

    #[test]
    fn test_annotate_overwrites_stale_flag() {
        let mut value = json!({"name": "Strahd", "isSrdCompliant": true});
        assert!(!annotate(&mut value, &"npc".into()));
        assert_eq!(value[COMPLIANCE_FIELD], false);
    }

    #[test]
    fn test_annotate_non_object() {
        let mut value = json!("Waterdeep");
        assert!(annotate(&mut value, &ContentType::World));
        assert_eq!(value, json!("Waterdeep"));
    }

    #[test]
    fn test_annotate_backup_document() {
        let loader = RecordLoader::default();
        let mut doc = json!({
            "version": 2,
            "characters": [
                {"name": "Korrin", "class": "Fighter"},
                {"name": "Ysolde", "class": "Echo Knight"},
            ],
            "monsters": [{"name": "Umber Hulk"}],
        });

        let summary = loader.annotate_document(Path::new("b.json"), &mut doc).unwrap();

        assert_eq!(summary, AnnotationSummary { total: 3, compliant: 1 });
        assert_eq!(summary.non_compliant(), 2);
        assert_eq!(doc["characters"][0][COMPLIANCE_FIELD], true);
        assert_eq!(doc["characters"][1][COMPLIANCE_FIELD], false);
        assert_eq!(doc["monsters"][0][COMPLIANCE_FIELD], false);
        assert_eq!(doc["version"], 2);
    }

    #[test]
    fn test_annotate_nameless_world_flags_the_world() {
        let loader = RecordLoader::new(ContentType::World);
        let mut doc = json!({"genre": "Forgotten Realms", "regions": [{"name": "The Greenmarch"}]});

        let summary = loader.annotate_document(Path::new("w.json"), &mut doc).unwrap();

        assert_eq!(summary, AnnotationSummary { total: 1, compliant: 0 });
        assert_eq!(doc[COMPLIANCE_FIELD], false);
        assert!(doc["regions"][0].get(COMPLIANCE_FIELD).is_none());
    }

    #[test]
    fn test_annotate_list_matches_validator() {
        let loader = RecordLoader::new(ContentType::Spell);
        let mut doc = json!([{"name": "Mind Sliver"}, {"name": "Star Lance"}]);

        let summary = loader.annotate_document(Path::new("s.json"), &mut doc).unwrap();
        assert_eq!(summary.total, 2);

        for entry in doc.as_array().unwrap() {
            let expected = is_srd_compliant(&ContentRecord::from_value(entry), &ContentType::Spell);
            assert_eq!(entry[COMPLIANCE_FIELD], expected);
        }
    }
}
