//! Client error types

use thiserror::Error;

/// Client error type
///
/// Status-mapped variants carry the backend's `message` field when the error
/// body had one, otherwise the raw body text (possibly empty).
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rejected input (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not logged in or wrong credentials (401)
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource already exists (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-success status
    #[error("Server error ({status}): {message}")]
    Internal { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Message the backend attached to the failure, if any
    pub fn server_message(&self) -> Option<&str> {
        let message = match self {
            Self::Validation(m)
            | Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Conflict(m) => m,
            Self::Internal { message, .. } => message,
            Self::Http(_) | Self::Serialization(_) => return None,
        };
        let trimmed = message.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Server message, or `fallback` when the failure carried none
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message().unwrap_or(fallback)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
