//! Configuration structures and validation
//!
//! This module defines the TOML schema for separator configuration.

use serde::{Deserialize, Serialize};
use sentsep_core::{SeparatorRule, DEFAULT_MAX_STEPS, DEFAULT_SEPARATORS};
use std::path::Path;

use crate::error::{EngineError, Result};

/// Root separator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparatorConfig {
    /// Name and description
    #[serde(default)]
    pub metadata: Metadata,
    /// Separator set and cap
    #[serde(default)]
    pub separators: Separators,
}

/// Configuration metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Configuration name, `custom` when absent
    #[serde(default = "default_name")]
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

/// Separator set and consumption cap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    /// Replaces the default set entirely when given
    #[serde(default = "default_chars")]
    pub chars: Vec<char>,
    /// Cursor steps allowed per consumption run
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_name() -> String {
    "custom".to_string()
}

fn default_chars() -> Vec<char> {
    DEFAULT_SEPARATORS.to_vec()
}

fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: None,
        }
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            chars: default_chars(),
            max_steps: default_max_steps(),
        }
    }
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            metadata: Metadata {
                name: "default".to_string(),
                description: None,
            },
            separators: Separators::default(),
        }
    }
}

impl SeparatorConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: SeparatorConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            EngineError::ParseError(msg) => {
                EngineError::ParseError(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Validate configuration
    ///
    /// An empty separator list is accepted: the rule then never fires.
    pub fn validate(&self) -> Result<()> {
        if self.separators.max_steps == 0 {
            return Err(EngineError::ConfigError(
                "max_steps must be at least 1".to_string(),
            ));
        }

        if self.effective_separator_count() == 0 {
            tracing::warn!(
                config = %self.metadata.name,
                "separator set is empty, no sentence boundaries will be detected"
            );
        }

        Ok(())
    }

    /// Number of distinct separators the rule will actually use
    ///
    /// Closing quotes and duplicates in `chars` do not count.
    pub fn effective_separator_count(&self) -> usize {
        self.to_rule().separators().len()
    }

    /// Build the separator rule described by this configuration
    pub fn to_rule(&self) -> SeparatorRule {
        SeparatorRule::with_separators(self.separators.chars.iter().copied())
            .with_max_steps(self.separators.max_steps)
    }
}
