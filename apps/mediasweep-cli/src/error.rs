//! CLI error types and exit codes

use mediasweep_cloudinary::CloudinaryError;
use mediasweep_core::CoreError;
use mediasweep_wordpress::WordPressError;
use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error
/// - 2: Authentication failure
/// - 3: Network error
/// - 4: Validation error
/// - 5: Server error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cloudinary authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Connection failed: {0}\n\nTroubleshooting:\n  - Check your internet connection\n  - Verify the endpoint URLs in your config\n  - Try again in a few moments")]
    ConnectionFailed(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::AuthenticationFailed(_) => 2,
            CliError::Network(_) | CliError::ConnectionFailed(_) => 3,
            CliError::Validation(_) => 4,
            CliError::Server(_) => 5,
            CliError::Api { status, .. } => {
                if *status >= 500 {
                    5
                } else if *status == 401 || *status == 403 {
                    2
                } else {
                    4
                }
            }
            CliError::Config(_) | CliError::Io(_) => 1,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::Config(_) => {
                Some("Create a config.json in the mediasweep config directory (see README).")
            }
            CliError::AuthenticationFailed(_) => {
                Some("Check cloud_name, api_key and api_secret in your config.")
            }
            CliError::ConnectionFailed(_) => Some("Check your network connection and try again."),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Config(format!("JSON error: {}", e))
    }
}

impl From<CoreError> for CliError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidPrefix(msg) => CliError::Validation(msg),
            CoreError::Pattern(e) => CliError::Validation(e.to_string()),
            CoreError::Io { .. } => CliError::Io(e.to_string()),
            CoreError::Json(e) => CliError::Validation(format!("JSON error: {e}")),
        }
    }
}

impl From<WordPressError> for CliError {
    fn from(e: WordPressError) -> Self {
        match e {
            WordPressError::Network(inner) => {
                if inner.is_connect() {
                    CliError::ConnectionFailed(inner.to_string())
                } else if inner.is_timeout() {
                    CliError::Network("Request timed out".to_string())
                } else {
                    CliError::Network(inner.to_string())
                }
            }
            WordPressError::Status { status } => CliError::Api {
                status,
                message: "GraphQL endpoint returned an error".to_string(),
            },
            WordPressError::Parse(msg) => CliError::Server(msg),
            WordPressError::MissingData { .. } => CliError::Server(e.to_string()),
            WordPressError::InvalidConfig(msg) => CliError::Config(msg),
        }
    }
}

impl From<CloudinaryError> for CliError {
    fn from(e: CloudinaryError) -> Self {
        match e {
            CloudinaryError::Auth(msg) => CliError::AuthenticationFailed(msg),
            CloudinaryError::Api { status, detail } => CliError::Api {
                status,
                message: detail,
            },
            CloudinaryError::Network(inner) => {
                if inner.is_connect() {
                    CliError::ConnectionFailed(inner.to_string())
                } else {
                    CliError::Network(inner.to_string())
                }
            }
            CloudinaryError::Parse(msg) => CliError::Server(msg),
            CloudinaryError::BatchTooLarge { .. } => CliError::Validation(e.to_string()),
            CloudinaryError::InvalidConfig(msg) => CliError::Config(msg),
        }
    }
}
