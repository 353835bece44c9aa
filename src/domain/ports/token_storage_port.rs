//! Token storage port definition.

use crate::domain::entities::AuthToken;
use crate::domain::errors::StorageError;

/// Port for token persistence operations.
///
/// Access is synchronous. Nothing ties a read or write here to an in-flight
/// request, and logout never goes through this port.
pub trait TokenStoragePort: Send + Sync {
    /// Retrieves stored token.
    ///
    /// # Errors
    /// Returns error if the backing storage cannot be read.
    fn get_token(&self) -> Result<Option<AuthToken>, StorageError>;

    /// Stores token, replacing any previous one.
    ///
    /// # Errors
    /// Returns error if the backing storage cannot be written.
    fn store_token(&self, token: &AuthToken) -> Result<(), StorageError>;

    /// Checks if token exists.
    ///
    /// # Errors
    /// Returns error if the backing storage cannot be read.
    fn has_token(&self) -> Result<bool, StorageError> {
        Ok(self.get_token()?.is_some())
    }
}
