//! Headless subcommands.
//!
//! Each command returns the text to print instead of writing to stdout.

use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::{info, warn};

use crate::application::store::Store;
use crate::application::use_cases::LoginEffect;
use crate::domain::entities::{AuthToken, Credentials};
use crate::domain::ports::{AuthPort, TokenStoragePort};
use crate::infrastructure::api::{ApiClient, RequestOptions};
use crate::infrastructure::config::HttpMethod;

/// Runs `login`, `token` and `request` against shared services.
pub struct CommandRunner {
    store: Store,
    auth_port: Arc<dyn AuthPort>,
    token_storage: Arc<dyn TokenStoragePort>,
    client: Arc<ApiClient>,
}

impl CommandRunner {
    /// Creates runner.
    #[must_use]
    pub fn new(
        store: Store,
        auth_port: Arc<dyn AuthPort>,
        token_storage: Arc<dyn TokenStoragePort>,
        client: Arc<ApiClient>,
    ) -> Self {
        Self {
            store,
            auth_port,
            token_storage,
            client,
        }
    }

    /// Runs the login effect. The token is persisted only when `save` is set.
    ///
    /// # Errors
    /// Returns error if the login fails or the token cannot be stored.
    pub async fn login(&self, credentials: Credentials, save: bool) -> Result<String> {
        let effect = LoginEffect::new(self.auth_port.clone(), self.store.clone());
        let token = effect
            .execute(credentials)
            .await
            .wrap_err_with(|| format!("Login against {} failed", self.client.base_url()))?;

        let mut output = format!("Logged in, token {token}");
        if save {
            self.token_storage.store_token(&token)?;
            info!("Saved login token");
            output.push_str("\nToken saved");
        }
        Ok(output)
    }

    /// Prints the stored token, masked unless `raw`.
    ///
    /// # Errors
    /// Returns error if the token store cannot be read.
    pub fn show_token(&self, raw: bool) -> Result<String> {
        Ok(match self.token_storage.get_token()? {
            Some(token) if raw => token.as_str().to_string(),
            Some(token) => token.masked(),
            None => "No token stored".to_string(),
        })
    }

    /// Replaces the stored token.
    ///
    /// # Errors
    /// Returns error for an empty value or if the token store cannot be written.
    pub fn set_token(&self, value: String) -> Result<String> {
        let token = AuthToken::non_empty(value).ok_or_else(|| eyre!("token must not be empty"))?;
        self.token_storage.store_token(&token)?;
        Ok("Token saved".to_string())
    }

    /// Sends a request through the intercepted client and pretty-prints the payload.
    ///
    /// Bodies are only sent with `post` and `put`.
    ///
    /// # Errors
    /// Returns error for invalid JSON or headers, or if the request fails.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&str>,
        authorization: Option<&str>,
        headers: &[String],
    ) -> Result<String> {
        let mut body = body
            .map(serde_json::from_str::<serde_json::Value>)
            .transpose()
            .wrap_err("--body is not valid JSON")?;

        if body.is_some() && matches!(method, HttpMethod::Get | HttpMethod::Delete) {
            warn!(?method, "Ignoring body for request without payload");
            body = None;
        }

        let mut options = headers
            .iter()
            .try_fold(RequestOptions::new(), |options, line| options.raw_header(line))?;
        if let Some(value) = authorization {
            options = options.authorization(value)?;
        }

        let payload: serde_json::Value = self
            .client
            .request(method.into(), path, body, Some(options))
            .await?;

        Ok(serde_json::to_string_pretty(&payload)?)
    }
}
