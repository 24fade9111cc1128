//! Error handling module for CleanCut

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for CleanCut operations
#[derive(Error, Debug)]
pub enum CleanCutError {
    /// Interval engine error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration file: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    /// Rendering error
    #[error("Failed to render output: {message}")]
    OutputError { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for CleanCutError {
    fn from(e: serde_json::Error) -> Self {
        CleanCutError::OutputError {
            message: e.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CleanCutError {
    fn from(e: serde_yaml::Error) -> Self {
        CleanCutError::OutputError {
            message: e.to_string(),
        }
    }
}

/// Result type alias for CleanCut operations
pub type CleanCutResult<T> = std::result::Result<T, CleanCutError>;
