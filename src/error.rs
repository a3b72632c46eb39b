//! Error types for Dolla.

use std::time::Duration;

/// Top-level error type: what can stop the program from starting or
/// reading input. Chat and dictionary failures never get here; they
/// become replies.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors talking to the `/api/chat` endpoint.
///
/// Every variant is recoverable: the widget turns them into the fixed
/// apology message.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Chat request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    #[error("Chat endpoint returned HTTP {status}")]
    BadStatus { status: u16 },

    #[error("Invalid chat response: {reason}")]
    InvalidResponse { reason: String },

    #[error("Chat request timed out after {timeout:?}")]
    Timeout { timeout: Duration },
}

/// Online financial dictionary errors.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Dictionary request failed: {0}")]
    Request(String),

    #[error("Dictionary returned HTTP {status}")]
    BadStatus { status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
