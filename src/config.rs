//! Serializable configuration for a migration run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MigrateError, Result};
use crate::rules::{DEFAULT_CONTROLLER, DEFAULT_MOCK_TYPES};

/// Suffix that marks Go test files.
pub const DEFAULT_SUFFIX: &str = "_test.go";

/// A serializable specification for an extra rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransformSpec {
    /// Replace a literal string with another.
    #[serde(rename = "replace_literal")]
    ReplaceLiteral { from: String, to: String },

    /// Replace using a regex pattern.
    #[serde(rename = "replace_pattern")]
    ReplacePattern { pattern: String, replacement: String },
}

/// Settings for a batch conversion.
///
/// Every field has a default, so a file only needs the keys it changes.
///
/// # Example YAML
///
/// ```yaml
/// root: server
/// suffix: _test.go
/// controller: ctrl
/// mock_types:
///   - Client
///   - Locker
/// exclude:
///   - "**/vendor/**"
/// transforms:
///   - type: replace_literal
///     from: "RegisterMockTestingT(t)"
///     to: "ctrl := gomock.NewController(t)"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Directory searched for test files.
    pub root: PathBuf,

    /// File name suffix of candidate files.
    pub suffix: String,

    /// Identifier of the gomock controller passed to constructors.
    pub controller: String,

    /// Mock types whose constructors are rewritten explicitly.
    pub mock_types: Vec<String>,

    /// Glob patterns, relative to `root`, of files to skip.
    pub exclude: Vec<String>,

    /// Extra rules applied after the built-in ones.
    pub transforms: Vec<TransformSpec>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            suffix: DEFAULT_SUFFIX.to_string(),
            controller: DEFAULT_CONTROLLER.to_string(),
            mock_types: DEFAULT_MOCK_TYPES.iter().map(|t| t.to_string()).collect(),
            exclude: Vec::new(),
            transforms: Vec::new(),
        }
    }
}

impl MigrationConfig {
    /// Loads a config file, choosing JSON or YAML by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MigrateError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_yaml_str(&content)?,
        };
        Ok(config)
    }

    /// Parses a YAML config.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a JSON config.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() {
            return Err(MigrateError::InvalidConfig(
                "suffix must not be empty".to_string(),
            ));
        }
        if self.controller.is_empty() {
            return Err(MigrateError::InvalidConfig(
                "controller must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
