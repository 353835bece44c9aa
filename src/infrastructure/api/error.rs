//! HTTP client error types.

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::errors::StorageError;

/// Errors raised while sending a request or reading its response.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("invalid client configuration: {0}")]
    Configuration(String),

    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read stored token: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Creates configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns the HTTP status for non-success responses.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
