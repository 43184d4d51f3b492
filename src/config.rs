// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 srdlint contributors

//! Configuration loading
//!
//! Settings come from `.srdlint.yaml` in the working directory, or from the
//! per-user config directory when the project has none.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::errors::{SrdLintError, SrdLintResult};
use crate::srd::ContentType;

/// Project config file name
pub const CONFIG_FILE: &str = ".srdlint.yaml";

/// Configuration from .srdlint.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrdLintConfig {
    /// Config version
    #[serde(default = "default_version")]
    pub version: String,

    /// Content type for records whose type cannot be inferred
    #[serde(default)]
    pub default_content_type: Option<String>,

    /// Treat warnings as failures in `check`
    #[serde(default)]
    pub fail_on_warnings: bool,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Extra backup collection names and the content type of their records
    #[serde(default)]
    pub collections: BTreeMap<String, String>,
}

fn default_version() -> String {
    "1".to_string()
}

impl Default for SrdLintConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            default_content_type: None,
            fail_on_warnings: false,
            format: None,
            collections: BTreeMap::new(),
        }
    }
}

impl SrdLintConfig {
    /// Load from file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> SrdLintResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| SrdLintError::read_failed(path, e))?;

        // An empty file is a valid, empty config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| SrdLintError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load from project directory (looks for .srdlint.yaml)
    pub fn load_from_project(project_root: &Path) -> SrdLintResult<Self> {
        Self::load(&project_root.join(CONFIG_FILE))
    }

    /// Resolve the config in effect
    ///
    /// An explicit path must exist. Otherwise the project file wins over the
    /// user file, and defaults apply when neither exists.
    pub fn discover(explicit: Option<&Path>, project_root: &Path) -> SrdLintResult<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(SrdLintError::file_not_found(path.to_path_buf()));
            }
            tracing::debug!("Using config {}", path.display());
            return Self::load(path);
        }

        let project = project_root.join(CONFIG_FILE);
        if project.exists() {
            tracing::debug!("Using project config {}", project.display());
            return Self::load(&project);
        }

        if let Some(user) = user_config_path().filter(|p| p.exists()) {
            tracing::debug!("Using user config {}", user.display());
            return Self::load(&user);
        }

        Ok(Self::default())
    }

    /// Output format, preferring the one given on the command line
    pub fn output_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.or(self.format).unwrap_or(OutputFormat::Text)
    }

    /// Content type to use when neither the CLI nor the input names one
    pub fn default_content_type(&self) -> Option<ContentType> {
        self.default_content_type.as_deref().map(ContentType::from)
    }

    /// Collection mappings from config
    pub fn collection_overrides(&self) -> BTreeMap<String, ContentType> {
        self.collections
            .iter()
            .map(|(key, tag)| (key.clone(), ContentType::from(tag.as_str())))
            .collect()
    }
}

/// Per-user config file, e.g. `~/.config/srdlint/config.yaml`
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "srdlint").map(|d| d.config_dir().join("config.yaml"))
}
