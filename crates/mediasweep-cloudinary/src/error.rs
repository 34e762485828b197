//! Error types for the Cloudinary Admin API client.

use thiserror::Error;

/// Errors produced by the Cloudinary client.
#[derive(Debug, Error)]
pub enum CloudinaryError {
    /// Authentication was rejected (HTTP 401).
    #[error("Cloudinary authentication failed: {0}")]
    Auth(String),

    /// The API answered with a non-success status.
    #[error("Cloudinary API error (status {status}): {detail}")]
    Api { status: u16, detail: String },

    /// Transport-level failure (connection, timeout, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("Failed to parse Cloudinary response: {0}")]
    Parse(String),

    /// A delete call was handed more ids than a single request accepts.
    #[error("Delete batch of {len} ids exceeds the per-call limit of {limit}")]
    BatchTooLarge { len: usize, limit: usize },

    /// The client could not be constructed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Type alias for Results using [`CloudinaryError`].
pub type CloudinaryResult<T> = std::result::Result<T, CloudinaryError>;
