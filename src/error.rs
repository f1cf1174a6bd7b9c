//! Error types for the EAS client.

use thiserror::Error;

/// Errors that can occur while talking to the EAS server.
#[derive(Error, Debug)]
pub enum EasError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed server response: {0}")]
    Parse(String),

    #[error("Event creation failed (status {status})")]
    CreationFailed { status: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for EasError {
    fn from(err: reqwest::Error) -> Self {
        EasError::Network(err.to_string())
    }
}

impl From<roxmltree::Error> for EasError {
    fn from(err: roxmltree::Error) -> Self {
        EasError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for EasError {
    fn from(err: serde_json::Error) -> Self {
        EasError::Serialization(err.to_string())
    }
}

/// Result type alias for EAS operations.
pub type EasResult<T> = Result<T, EasError>;
