//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthToken, Credentials};
use crate::domain::errors::AuthError;

/// Port for the credential exchange.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchanges credentials for a token.
    ///
    /// The token is returned, not stored.
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, AuthError>;
}
