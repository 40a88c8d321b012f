//! Domain-level error types for chat-markdown-renderer.
//!
//! Rendering itself never fails: malformed markdown degrades to a
//! best-effort plain rendering. Errors exist only at the edges
//! (file I/O, theme config, JSON encoding).

use std::path::PathBuf;
use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input file not found at the given location.
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Configuration or theme file error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON encoding of rendered output failed.
    #[error("Serialization error: {message}")]
    Serialize {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AppError {
    /// Create a serialization error from a `serde_json` error.
    pub fn serialize(err: serde_json::Error) -> Self {
        Self::Serialize {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
