//! Error types for the WPGraphQL client.

use thiserror::Error;

/// Errors produced by the WordPress media client.
#[derive(Debug, Error)]
pub enum WordPressError {
    /// The GraphQL endpoint answered with a non-success HTTP status.
    ///
    /// The pagination loop treats this as an abort signal and keeps the
    /// pages gathered so far.
    #[error("GraphQL endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// Transport-level failure (connection, timeout, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the expected GraphQL shape.
    #[error("Failed to parse GraphQL response: {0}")]
    Parse(String),

    /// The response parsed but carried no `data.mediaItems` payload.
    #[error("GraphQL response missing mediaItems data{}", detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default())]
    MissingData { detail: Option<String> },

    /// The client could not be constructed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Type alias for Results using [`WordPressError`].
pub type WordPressResult<T> = std::result::Result<T, WordPressError>;
