// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Record sources
//!
//! Loads homebrew records from JSON or YAML documents. A document is one of:
//! - a single record object
//! - an array of records
//! - a backup object keyed by collection (`characters`, `spells`, ...)
//!
//! Records in a backup take the content type of their collection; the others
//! use the loader's default type. Records may carry arrays under collection
//! names of their own (a character's `spells`), so an object only counts as a
//! backup when the loader has no type of its own or the object carries export
//! metadata.

mod annotation;

pub use annotation::{annotate, AnnotationSummary, COMPLIANCE_FIELD};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::{SrdLintError, SrdLintResult};
use crate::srd::{ComplianceReport, ContentRecord, ContentType};

/// Tag used when nothing names a content type; only generic checks apply
pub const GENERIC_TAG: &str = "generic";

/// Backup collections and the content type of their records
const COLLECTIONS: &[(&str, &str)] = &[
    ("characters", "character"),
    ("worlds", "world"),
    ("spells", "spell"),
    ("items", "item"),
    ("magicItems", "item"),
    ("monsters", "monster"),
    ("classes", "class"),
    ("races", "race"),
    ("npcs", "npc"),
];

/// Keys written by backup exports
const BACKUP_METADATA: &[&str] = &["version", "exportDate"];

/// Shape of a loaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    Single,
    List,
    Backup,
}

/// A record pulled out of a document, ready to validate
#[derive(Debug, Clone)]
pub struct LoadedRecord {
    /// Where the record came from, e.g. `backup.json#spells[2]`
    pub label: String,

    pub content_type: ContentType,

    /// The record as stored
    pub value: Value,
}

impl LoadedRecord {
    pub fn record(&self) -> ContentRecord {
        ContentRecord::from_value(&self.value)
    }

    /// Display name of the record, if it has one
    pub fn name(&self) -> Option<&str> {
        self.value.get("name").and_then(Value::as_str)
    }

    pub fn report(&self) -> ComplianceReport {
        ComplianceReport::for_record(&self.record(), &self.content_type)
    }
}

/// Loads records and resolves their content types
#[derive(Debug, Clone)]
pub struct RecordLoader {
    default_type: ContentType,
    collections: BTreeMap<String, ContentType>,
}

impl RecordLoader {
    /// Create a loader using `default_type` for records outside backups
    pub fn new(default_type: ContentType) -> Self {
        let collections = COLLECTIONS
            .iter()
            .map(|(key, tag)| (key.to_string(), ContentType::from(*tag)))
            .collect();

        Self {
            default_type,
            collections,
        }
    }

    /// Add or replace collection mappings
    pub fn with_collections(mut self, overrides: BTreeMap<String, ContentType>) -> Self {
        self.collections.extend(overrides);
        self
    }

    pub fn default_type(&self) -> &ContentType {
        &self.default_type
    }

    /// Content type of a backup collection
    pub fn collection_type(&self, key: &str) -> Option<&ContentType> {
        self.collections.get(key)
    }

    /// Classify a document
    pub fn shape(&self, document: &Value) -> Option<DocumentShape> {
        match document {
            Value::Array(_) => Some(DocumentShape::List),
            Value::Object(map) => {
                let has_collections = map
                    .iter()
                    .any(|(key, value)| value.is_array() && self.collections.contains_key(key));
                let looks_exported =
                    matches!(&self.default_type, ContentType::Other(tag) if tag == GENERIC_TAG)
                        || BACKUP_METADATA.iter().any(|key| map.contains_key(*key));

                let is_backup = !map.contains_key("name") && has_collections && looks_exported;

                Some(if is_backup {
                    DocumentShape::Backup
                } else {
                    DocumentShape::Single
                })
            }
            _ => None,
        }
    }

    /// Pull the records out of a parsed document
    pub fn extract(&self, path: &Path, document: &Value) -> SrdLintResult<Vec<LoadedRecord>> {
        let source = path.display().to_string();

        let shape = self.shape(document).ok_or_else(|| SrdLintError::UnsupportedInput {
            path: path.to_path_buf(),
            reason: format!("expected an object or array, found {}", kind_of(document)),
        })?;

        let records = match (shape, document) {
            (DocumentShape::Single, _) => vec![LoadedRecord {
                label: source.clone(),
                content_type: self.default_type.clone(),
                value: document.clone(),
            }],
            (DocumentShape::List, Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .map(|(i, value)| LoadedRecord {
                    label: format!("{}[{}]", source, i),
                    content_type: self.default_type.clone(),
                    value: value.clone(),
                })
                .collect(),
            (DocumentShape::Backup, Value::Object(map)) => {
                let mut records = Vec::new();
                for (key, value) in map {
                    let (Some(content_type), Some(entries)) =
                        (self.collection_type(key), value.as_array())
                    else {
                        continue;
                    };

                    records.extend(entries.iter().enumerate().map(|(i, value)| LoadedRecord {
                        label: format!("{}#{}[{}]", source, key, i),
                        content_type: content_type.clone(),
                        value: value.clone(),
                    }));
                }
                records
            }
            _ => Vec::new(),
        };

        tracing::debug!("{}: {:?} document with {} records", source, shape, records.len());

        Ok(records)
    }

    /// Read, parse and extract a file
    pub async fn load_file(&self, path: &Path) -> SrdLintResult<(Value, Vec<LoadedRecord>)> {
        let document = read_document(path).await?;
        let records = self.extract(path, &document)?;
        Ok((document, records))
    }
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self::new(ContentType::from(GENERIC_TAG))
    }
}

/// Read a JSON or YAML document; the extension decides, JSON otherwise
pub async fn read_document(path: &Path) -> SrdLintResult<Value> {
    if !path.exists() {
        return Err(SrdLintError::file_not_found(path.to_path_buf()));
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SrdLintError::read_failed(path, e))?;

    parse_document(path, &content)
}

/// Parse document text according to the file extension
pub fn parse_document(path: &Path, content: &str) -> SrdLintResult<Value> {
    if is_yaml(path) {
        Ok(serde_yaml::from_str(content)?)
    } else {
        Ok(serde_json::from_str(content)?)
    }
}

/// Render a document in the format the file extension names, JSON otherwise
pub fn render_document(path: &Path, document: &Value) -> SrdLintResult<String> {
    if is_yaml(path) {
        Ok(serde_yaml::to_string(document)?)
    } else {
        Ok(format!("{}\n", serde_json::to_string_pretty(document)?))
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}

/// Expand glob patterns into files, keeping plain paths as given
pub fn expand_inputs(patterns: &[String]) -> SrdLintResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if !pattern.contains(|c: char| matches!(c, '*' | '?' | '[')) {
            files.push(PathBuf::from(pattern));
            continue;
        }

        let matched: Vec<PathBuf> = glob::glob(pattern)?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();

        if matched.is_empty() {
            return Err(SrdLintError::NoInputFiles {
                pattern: pattern.clone(),
            });
        }

        files.extend(matched);
    }

    Ok(files)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_single_record() {
        let loader = RecordLoader::new(ContentType::Spell);
        let doc = json!({"name": "Bigby's Hand", "level": 5});

        assert_eq!(loader.shape(&doc), Some(DocumentShape::Single));

        let records = loader.extract(Path::new("hand.json"), &doc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "hand.json");
        assert_eq!(records[0].content_type, ContentType::Spell);
        assert_eq!(records[0].name(), Some("Bigby's Hand"));
        assert!(!records[0].report().compliant);
    }

    #[test]
    fn test_record_list() {
        let loader = RecordLoader::new(ContentType::Monster);
        let doc = json!([{"name": "Ash Wyrm"}, {"name": "Beholder"}]);

        let records = loader.extract(Path::new("bestiary.json"), &doc).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].label, "bestiary.json[1]");
        assert!(records[0].report().compliant);
        assert_eq!(records[1].report().stats.errors, 2);
    }

    #[test]
    fn test_backup_uses_collection_types() {
        let loader = RecordLoader::new(ContentType::Item);
        let doc = json!({
            "version": 2,
            "exportDate": "2024-05-01T10:00:00Z",
            "spells": [{"name": "Silvery Barbs"}],
            "worlds": [{"name": "Aldoria", "genre": "forgotten realms"}],
            "npcs": [{"name": "Old Tom"}],
            "settings": {"theme": "dark"},
        });

        assert_eq!(loader.shape(&doc), Some(DocumentShape::Backup));

        let records = loader.extract(Path::new("backup.json"), &doc).unwrap();
        assert_eq!(records.len(), 3);

        let spell = records.iter().find(|r| r.label == "backup.json#spells[0]").unwrap();
        assert_eq!(spell.content_type, ContentType::Spell);
        assert_eq!(spell.report().stats.errors, 2);

        let world = records.iter().find(|r| r.label == "backup.json#worlds[0]").unwrap();
        assert_eq!(world.content_type, ContentType::World);
        assert!(!world.report().compliant);

        let npc = records.iter().find(|r| r.label == "backup.json#npcs[0]").unwrap();
        assert_eq!(npc.content_type, ContentType::from("npc"));
    }

    #[test]
    fn test_named_object_is_not_backup() {
        let loader = RecordLoader::default();
        let doc = json!({"name": "Aldoria", "regions": [{"name": "Waterdeep"}]});

        assert_eq!(loader.shape(&doc), Some(DocumentShape::Single));
    }

    #[test]
    fn test_nameless_world_is_single_record() {
        let loader = RecordLoader::new(ContentType::World);
        let doc = json!({"genre": "Forgotten Realms", "regions": [{"name": "The Greenmarch"}]});

        assert_eq!(loader.shape(&doc), Some(DocumentShape::Single));

        let records = loader.extract(Path::new("w.json"), &doc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "w.json");
        assert_eq!(records[0].content_type, ContentType::World);

        let report = records[0].report();
        assert!(!report.compliant);
        assert_eq!(report.issues[0].field.as_deref(), Some("genre"));
    }

    #[test]
    fn test_nameless_character_keeps_its_checks() {
        let loader = RecordLoader::new(ContentType::Character);
        let doc = json!({
            "class": "Hexblade",
            "spells": [{"name": "Eldritch Blast"}],
            "items": [{"name": "Longsword"}],
        });

        assert_eq!(loader.shape(&doc), Some(DocumentShape::Single));

        let records = loader.extract(Path::new("c.json"), &doc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content_type, ContentType::Character);
        assert_eq!(records[0].report().issues[0].field.as_deref(), Some("class"));
    }

    #[test]
    fn test_export_metadata_marks_backup() {
        let loader = RecordLoader::new(ContentType::Character);

        let exported = json!({"exportDate": "2024-05-01", "spells": [{"name": "Hex"}]});
        assert_eq!(loader.shape(&exported), Some(DocumentShape::Backup));

        // Without a type of its own the loader treats collections as a backup
        let untyped = json!({"spells": [{"name": "Hex"}]});
        assert_eq!(RecordLoader::default().shape(&untyped), Some(DocumentShape::Backup));
        assert_eq!(loader.shape(&untyped), Some(DocumentShape::Single));
    }

    #[test]
    fn test_collection_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert("heroes".to_string(), ContentType::Character);
        let loader = RecordLoader::default().with_collections(overrides);

        let doc = json!({"heroes": [{"name": "Korrin", "race": "Tortle"}]});
        let records = loader.extract(Path::new("b.json"), &doc).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content_type, ContentType::Character);
        assert!(!records[0].report().compliant);
    }

    #[test]
    fn test_scalar_document_rejected() {
        let err = RecordLoader::default()
            .extract(Path::new("x.json"), &json!("just text"))
            .unwrap_err();

        match err {
            SrdLintError::UnsupportedInput { reason, .. } => assert!(reason.contains("a string")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_by_extension() {
        let yaml = parse_document(Path::new("r.yml"), "name: Strahd\nlevel: 9\n").unwrap();
        assert_eq!(yaml["name"], "Strahd");

        let json = parse_document(Path::new("r.records"), r#"{"name": "Strahd"}"#).unwrap();
        assert_eq!(json["name"], "Strahd");

        let err = parse_document(Path::new("r.json"), "name: Strahd").unwrap_err();
        assert!(matches!(err, SrdLintError::Json { .. }));
    }

    #[test]
    fn test_render_by_extension() {
        let doc = json!({"name": "Strahd", "isSrdCompliant": false});

        let yaml = render_document(Path::new("out.YML"), &doc).unwrap();
        assert!(yaml.contains("name: Strahd"));
        assert_eq!(parse_document(Path::new("out.yml"), &yaml).unwrap(), doc);

        let json = render_document(Path::new("out.json"), &doc).unwrap();
        assert!(json.ends_with("}\n"));
        assert_eq!(parse_document(Path::new("out.json"), &json).unwrap(), doc);
    }

    #[tokio::test]
    async fn test_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("spells.json");
        std::fs::write(&path, r#"[{"name": "Toll the Dead"}, {"name": "Frost Lance"}]"#).unwrap();

        let (document, records) = RecordLoader::new(ContentType::Spell)
            .load_file(&path)
            .await
            .unwrap();

        assert!(document.is_array());
        assert_eq!(records.len(), 2);
        assert!(!records[0].report().compliant);
        assert!(records[1].report().compliant);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = read_document(Path::new("/definitely/not/here.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, SrdLintError::FileNotFound { .. }));
    }

    #[test]
    fn test_expand_inputs() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.json"), "{}").unwrap();
        std::fs::write(temp.path().join("b.json"), "{}").unwrap();
        std::fs::write(temp.path().join("c.yaml"), "{}").unwrap();

        let pattern = format!("{}/*.json", temp.path().display());
        let files = expand_inputs(&[pattern, "plain.json".to_string()]).unwrap();

        assert_eq!(files.len(), 3);
        assert_eq!(files[2], PathBuf::from("plain.json"));

        let none = format!("{}/*.toml", temp.path().display());
        assert!(matches!(
            expand_inputs(&[none]),
            Err(SrdLintError::NoInputFiles { .. })
        ));
    }
}
