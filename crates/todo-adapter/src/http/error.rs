/*
[INPUT]:  Error sources (request construction, transport, server responses)
[OUTPUT]: Structured error type mapped onto submission outcome tiers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing outcome classification
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the todo adapter
#[derive(Error, Debug)]
pub enum TodoError {
    /// Server answered with a non-success status
    #[error("Server error (status {status}): {}", message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// Request was sent but no response came back
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request could not be built by the HTTP client
    #[error("Request error: {0}")]
    Request(#[source] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// No access token available for an authenticated call
    #[error("No access token available, please sign in first")]
    MissingToken,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Which outcome tier an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTier {
    Server,
    Network,
    Client,
}

impl TodoError {
    /// Classify a transport error returned by `RequestBuilder::send`.
    ///
    /// Builder failures never left the process; everything else means the
    /// request went out and no usable response came back.
    pub fn from_send_error(err: reqwest::Error) -> Self {
        if err.is_builder() {
            TodoError::Request(err)
        } else {
            TodoError::Network(err)
        }
    }

    /// Create a server error from status code and optional message
    pub fn server_error(status: StatusCode, message: Option<String>) -> Self {
        TodoError::Server {
            status: status.as_u16(),
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    pub fn tier(&self) -> ErrorTier {
        match self {
            TodoError::Server { .. } => ErrorTier::Server,
            TodoError::Network(_) => ErrorTier::Network,
            TodoError::Request(_)
            | TodoError::UrlParse(_)
            | TodoError::MissingToken
            | TodoError::Config(_) => ErrorTier::Client,
        }
    }
}

/// Result type alias for todo adapter operations
pub type Result<T> = std::result::Result<T, TodoError>;
