//! Error types for the OAuth callback relay.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Every error converts to an HTTP response at the handler
//! boundary; none terminates the process.

use axum::http::StatusCode;

/// Errors surfaced while handling a relay request.
#[derive(thiserror::Error, Debug)]
pub enum RelayError {
    /// Request validation failed (missing or malformed fields).
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// The outbound forwarding call failed at the transport level
    /// (connection refused, timeout, DNS failure).
    #[error("Failed to forward to container: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Unexpected internal fault during request handling.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error maps to at the handler boundary.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type alias for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;
