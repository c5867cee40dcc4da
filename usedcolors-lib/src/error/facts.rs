//! Facts loading error types

use std::path::PathBuf;

use super::ConfigError;

/// Errors that can occur while loading a facts document.
#[derive(Debug, thiserror::Error)]
pub enum FactsError {
    /// The document could not be read from disk.
    #[error("Failed to read facts from {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the expected shape.
    #[error("Malformed facts document: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration embedded in the document is unusable.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl FactsError {
    /// Creates a new I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
