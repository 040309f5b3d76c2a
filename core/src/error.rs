//! Error types and handling for codepeek core
//!
//! Interpretation itself never fails: unrecognized input is reported as
//! [`crate::Interpretation::NoResult`]. These types cover the surrounding
//! concerns (settings validation and result serialization).

use thiserror::Error;

/// Result type alias for codepeek operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for codepeek core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}
