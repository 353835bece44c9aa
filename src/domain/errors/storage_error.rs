//! Persistent storage error types.

use thiserror::Error;

/// Storage error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StorageError {
    #[error("storage location not available: {0}")]
    NotAvailable(String),

    #[error("failed to read storage: {0}")]
    ReadFailed(String),

    #[error("failed to write storage: {0}")]
    WriteFailed(String),

    #[error("storage file is corrupt: {0}")]
    Corrupt(String),
}

impl StorageError {
    /// Creates read failure.
    #[must_use]
    pub fn read(message: impl Into<String>) -> Self {
        Self::ReadFailed(message.into())
    }

    /// Creates write failure.
    #[must_use]
    pub fn write(message: impl Into<String>) -> Self {
        Self::WriteFailed(message.into())
    }
}
