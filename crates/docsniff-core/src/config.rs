//! Configuration types for docsniff.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Decides which rules are registered and at which severity. The rules'
/// target kinds and skip-sets are not configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use (e.g., "all", "classes", "functions").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for failing a run (default: "error").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled. Rules are enabled unless disabled explicitly.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Returns the severity threshold for failing a run.
    ///
    /// # Errors
    ///
    /// Returns an error if `fail_on` is not a known severity.
    pub fn fail_on(&self) -> Result<Severity, ConfigError> {
        self.fail_on
            .as_deref()
            .map_or(Ok(Severity::Error), str::parse)
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Unknown severity name.
    #[error("Unknown severity `{value}`. Valid values: error, warning, info")]
    InvalidSeverity {
        /// The rejected value.
        value: String,
    },
}
