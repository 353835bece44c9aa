//! Network login effect.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::store::{AuthAction, Store};
use crate::domain::entities::{AuthToken, Credentials};
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Exchanges credentials for a token and reports progress to the store.
///
/// Dispatches `auth/login/pending` and then `auth/login/fulfilled` or
/// `auth/login/rejected`. None of these change the auth flag and the token
/// is not persisted; callers decide what to do with it.
#[derive(Clone)]
pub struct LoginEffect {
    auth_port: Arc<dyn AuthPort>,
    store: Store,
}

impl LoginEffect {
    /// Creates new login effect.
    #[must_use]
    pub fn new(auth_port: Arc<dyn AuthPort>, store: Store) -> Self {
        Self { auth_port, store }
    }

    /// Runs the effect.
    ///
    /// Concurrent runs are not de-duplicated.
    ///
    /// # Errors
    /// Returns the normalized error from the auth service.
    pub async fn execute(&self, credentials: Credentials) -> Result<AuthToken, AuthError> {
        debug!(username = %credentials.username(), "Starting login effect");
        self.store.dispatch(AuthAction::LoginPending);

        match self.auth_port.login(&credentials).await {
            Ok(token) => {
                info!(token = %token, "Login effect fulfilled");
                self.store.dispatch(AuthAction::LoginFulfilled(token.clone()));
                Ok(token)
            }
            Err(e) => {
                warn!(error = %e, "Login effect rejected");
                self.store.dispatch(AuthAction::LoginRejected(e.clone()));
                Err(e)
            }
        }
    }
}
