//! Login endpoint adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::client::ApiClient;
use super::dto::{LoginRequest, LoginResponse};
use crate::domain::entities::{AuthToken, Credentials};
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Path of the credential exchange endpoint.
pub const LOGIN_PATH: &str = "/api/login";

/// Exchanges credentials for a token over HTTP.
pub struct HttpAuthService {
    client: Arc<ApiClient>,
}

impl HttpAuthService {
    /// Creates service over a shared client.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthPort for HttpAuthService {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
        debug!(username = %credentials.username(), "Sending login request");

        let body = LoginRequest {
            username: credentials.username(),
            password: credentials.password(),
        };

        let response: LoginResponse = self
            .client
            .post(LOGIN_PATH, &body, None)
            .await
            .map_err(|e| {
                warn!(error = %e, "Login request failed");
                AuthError::from_error(&e)
            })?;

        let token = AuthToken::new(response.token);
        debug!(token = %token, "Login request succeeded");
        Ok(token)
    }
}
