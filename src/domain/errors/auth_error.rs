//! Authentication error type.

use thiserror::Error;

/// The single error kind surfaced by the login flow.
///
/// Transport failures, rejected credentials and malformed responses all
/// collapse into a message here. Callers cannot tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    message: String,
}

impl AuthError {
    /// Message used when the underlying failure has none.
    pub const FALLBACK_MESSAGE: &'static str = "Unexpected error";

    /// Creates error with message, substituting the fallback for an empty one.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            return Self::unexpected();
        }
        Self { message }
    }

    /// Creates the generic fallback error.
    #[must_use]
    pub fn unexpected() -> Self {
        Self {
            message: Self::FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Normalizes any error into an `AuthError`, keeping its message.
    #[must_use]
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(error.to_string())
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for AuthError {
    fn default() -> Self {
        Self::unexpected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("{0}")]
    struct Inner(String);

    #[test]
    fn test_keeps_original_message() {
        let error = AuthError::from_error(&Inner("connection refused".to_string()));
        assert_eq!(error.message(), "connection refused");
        assert_eq!(error.to_string(), "connection refused");
    }

    #[test]
    fn test_empty_message_falls_back() {
        let error = AuthError::from_error(&Inner(String::new()));
        assert_eq!(error.message(), AuthError::FALLBACK_MESSAGE);
    }

    #[test]
    fn test_whitespace_message_is_kept() {
        assert_eq!(AuthError::new("  ").message(), "  ");
    }

    #[test]
    fn test_default_is_unexpected() {
        assert_eq!(AuthError::default().message(), "Unexpected error");
    }
}
