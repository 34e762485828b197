//! Error types for the core crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by core operations (extraction, file I/O, reports).
#[derive(Debug, Error)]
pub enum CoreError {
    /// The configured public-id prefix is empty or otherwise unusable.
    #[error("Invalid public-id prefix: {0}")]
    InvalidPrefix(String),

    /// The extraction pattern could not be compiled.
    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// File could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents were not valid JSON of the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using [`CoreError`].
pub type CoreResult<T> = std::result::Result<T, CoreError>;
