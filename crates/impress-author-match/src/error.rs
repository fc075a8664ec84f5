//! Error types for impress-author-match
//!
//! Comparing author lists never fails. Errors only come from decoding
//! loosely-typed input and from loading or validating configuration.

use thiserror::Error;

pub use crate::config::ConfigError;

/// Result type alias for author-match operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Main error type for author-match operations
#[derive(Error, Debug)]
pub enum MatchError {
    /// Input was neither a string nor a list of strings
    #[error("Invalid author input: expected a string or an array of strings, got {0}")]
    InvalidInput(String),

    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
