//! Error types for monitor-bulk

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Main error type
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
