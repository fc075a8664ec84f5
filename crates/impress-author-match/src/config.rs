//! Comparison tolerances and name-order policy

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalization::MAX_NORMALIZED_LEN;
use crate::similarity::DEFAULT_TOKEN_TOLERANCE;
use crate::tokenizer::NameOrder;

/// Settings for an author-list comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
#[serde(default)]
pub struct MatchConfig {
    /// How comma-free author names are ordered
    pub name_order: NameOrder,
    /// Inclusive whole-author tolerance; `None` uses the default (< 10)
    pub author_tolerance: Option<u32>,
    /// Inclusive tolerance for individual name tokens
    pub token_tolerance: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            name_order: NameOrder::LastFirst,
            author_tolerance: None,
            token_tolerance: DEFAULT_TOKEN_TOLERANCE as u32,
        }
    }
}

impl MatchConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration that also accepts "First Last" names
    pub fn first_last() -> Self {
        Self {
            name_order: NameOrder::FirstLast,
            ..Self::default()
        }
    }

    pub(crate) fn author_tolerance(&self) -> Option<usize> {
        self.author_tolerance.map(|t| t as usize)
    }

    pub(crate) fn token_tolerance(&self) -> usize {
        self.token_tolerance as usize
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        // No distance over truncated strings can exceed the truncation length
        if let Some(tolerance) = self.author_tolerance {
            if tolerance as usize > MAX_NORMALIZED_LEN {
                return Err(ConfigError::OutOfRange(format!(
                    "author_tolerance must be at most {}",
                    MAX_NORMALIZED_LEN
                )));
            }
        }

        if self.token_tolerance as usize > MAX_NORMALIZED_LEN {
            return Err(ConfigError::OutOfRange(format!(
                "token_tolerance must be at most {}",
                MAX_NORMALIZED_LEN
            )));
        }

        Ok(())
    }
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.name_order, NameOrder::LastFirst);
        assert_eq!(config.author_tolerance, None);
        assert_eq!(config.token_tolerance, 3);
    }

    #[test]
    fn test_json_serialization() {
        let config = MatchConfig::first_last();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"first_last\""));
        let parsed = MatchConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed = MatchConfig::from_json(r#"{"token_tolerance": 1}"#).unwrap();
        assert_eq!(parsed.token_tolerance, 1);
        assert_eq!(parsed.name_order, NameOrder::LastFirst);
        assert_eq!(parsed.author_tolerance, None);
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_toml_config() {
        let parsed = MatchConfig::from_toml("name_order = \"first_last\"\nauthor_tolerance = 5\n").unwrap();
        assert_eq!(parsed.name_order, NameOrder::FirstLast);
        assert_eq!(parsed.author_tolerance, Some(5));
        assert_eq!(parsed.token_tolerance, 3);
    }

    #[test]
    fn test_out_of_range() {
        let config = MatchConfig {
            author_tolerance: Some(256),
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = MatchConfig {
            token_tolerance: 1000,
            ..MatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange(
                "token_tolerance must be at most 255".to_string()
            ))
        );
    }
}
