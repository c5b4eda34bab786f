//! Comparison configuration
//!
//! Hosts that want a configurable default comparison load a
//! [`ConditionsConfig`] and pass [`ConditionsConfig::comparison`] into the
//! checks that take one. Configuration is read from:
//! - Default values (ordinal comparison)
//! - JSON documents
//! - Environment variables (`CONDITIONS_CULTURE`, `CONDITIONS_IGNORE_CASE`)
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::comparison::{CultureInfo, StringComparison};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable naming the culture for string comparisons
pub const CULTURE_ENV: &str = "CONDITIONS_CULTURE";
/// Environment variable selecting case-insensitive comparisons
pub const IGNORE_CASE_ENV: &str = "CONDITIONS_IGNORE_CASE";

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Library configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionsConfig {
    /// Comparison used by hosts for string checks
    pub comparison: StringComparison,
}

impl ConditionsConfig {
    /// Parse configuration from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Defaults merged with environment overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.merge_with_env();
        config
    }

    /// Apply environment overrides
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides looked up through `lookup`
    ///
    /// A culture switches to culture-sensitive comparison; the ignore-case
    /// flag keeps the current culture (or ordinal) mode and only toggles case.
    pub fn merge_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let ignore_case = match lookup(IGNORE_CASE_ENV) {
            Some(value) => {
                let value = value.trim().to_lowercase();
                value == "true" || value == "1"
            }
            None => self.comparison.ignores_case(),
        };

        let culture = match lookup(CULTURE_ENV) {
            Some(tag) => Some(CultureInfo::new(tag)),
            None => self.comparison.culture_info().cloned(),
        };

        self.comparison = match culture {
            Some(culture) => StringComparison::culture(culture, ignore_case),
            None if ignore_case => StringComparison::OrdinalIgnoreCase,
            None => StringComparison::Ordinal,
        };
        tracing::debug!(
            target: "conditions",
            comparison = %self.comparison,
            "configured comparison"
        );
    }

    pub fn comparison(&self) -> StringComparison {
        self.comparison.clone()
    }
}
