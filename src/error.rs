//! Error types for the homevar settings store.

use crate::document::DocumentKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, merging or persisting a config document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Failed to encode document as {format}: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    #[error("Type mismatch at {path}: cannot merge {incoming} into {destination}")]
    TypeMismatch {
        path: String,
        destination: DocumentKind,
        incoming: DocumentKind,
    },

    #[error("Could not determine the home directory of the current user")]
    NoHomeDirectory,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error is a missing file rather than a real failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
