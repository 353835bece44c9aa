//! Request middleware.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use tracing::{debug, warn};

use super::error::ApiError;
use super::request::ApiRequest;
use crate::domain::entities::AuthToken;
use crate::domain::ports::TokenStoragePort;

/// Transforms a request before it is sent. Interceptors run in registration order.
pub trait RequestInterceptor: Send + Sync {
    /// Returns the transformed request.
    ///
    /// # Errors
    /// Returns error to abort the request.
    fn intercept(&self, request: ApiRequest) -> Result<ApiRequest, ApiError>;
}

/// Sets the JSON content type and the bearer token header.
///
/// `Content-Type` is always overwritten. `Authorization` is only added when
/// the caller did not set one and `token` is non-empty.
#[must_use]
pub fn apply_auth_headers(mut request: ApiRequest, token: Option<&AuthToken>) -> ApiRequest {
    request
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if request.has_authorization() {
        return request;
    }

    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return request;
    };

    match HeaderValue::from_str(&token.bearer()) {
        Ok(mut value) => {
            value.set_sensitive(true);
            request.headers.insert(AUTHORIZATION, value);
        }
        Err(_) => {
            warn!(token = %token, "Stored token is not a valid header value, skipping");
        }
    }

    request
}

/// Interceptor that reads the token store on every request.
pub struct BearerTokenInterceptor {
    storage: Arc<dyn TokenStoragePort>,
}

impl BearerTokenInterceptor {
    /// Creates interceptor over the given token store.
    #[must_use]
    pub fn new(storage: Arc<dyn TokenStoragePort>) -> Self {
        Self { storage }
    }
}

impl RequestInterceptor for BearerTokenInterceptor {
    fn intercept(&self, request: ApiRequest) -> Result<ApiRequest, ApiError> {
        let token = self.storage.get_token()?;
        debug!(
            path = %request.path,
            has_token = token.is_some(),
            explicit_auth = request.has_authorization(),
            "Applying auth headers"
        );
        Ok(apply_auth_headers(request, token.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockTokenStorage;
    use crate::infrastructure::api::request::RequestOptions;
    use reqwest::Method;

    fn get(path: &str) -> ApiRequest {
        ApiRequest::new(Method::GET, path)
    }

    #[test]
    fn test_stored_token_becomes_bearer() {
        let token = AuthToken::new("T");
        let request = apply_auth_headers(get("/api/me"), Some(&token));

        assert_eq!(request.headers[AUTHORIZATION], "Bearer T");
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_explicit_authorization_wins() {
        let options = RequestOptions::new().authorization("Bearer override").unwrap();
        let token = AuthToken::new("stored");

        let request = apply_auth_headers(get("/api/me").with_options(options), Some(&token));

        assert_eq!(request.headers[AUTHORIZATION], "Bearer override");
        assert_eq!(request.headers.get_all(AUTHORIZATION).iter().count(), 1);
    }

    #[test]
    fn test_no_token_no_authorization() {
        let request = apply_auth_headers(get("/api/me"), None);

        assert!(!request.has_authorization());
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_empty_token_ignored() {
        let token = AuthToken::new("");
        let request = apply_auth_headers(get("/api/me"), Some(&token));

        assert!(!request.has_authorization());
    }

    #[test]
    fn test_content_type_always_overwritten() {
        let options = RequestOptions::new().header(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        let request = apply_auth_headers(get("/api/me").with_options(options), None);

        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_whitespace_token_still_sent() {
        let token = AuthToken::new("   ");
        let request = apply_auth_headers(get("/api/me"), Some(&token));

        assert_eq!(request.headers[AUTHORIZATION], "Bearer    ");
    }

    #[test]
    fn test_interceptor_reads_storage() {
        let interceptor = BearerTokenInterceptor::new(Arc::new(MockTokenStorage::with_token("abc")));
        let request = interceptor.intercept(get("/api/me")).unwrap();

        assert_eq!(request.headers[AUTHORIZATION], "Bearer abc");
    }

    #[test]
    fn test_interceptor_propagates_storage_failure() {
        let interceptor = BearerTokenInterceptor::new(Arc::new(MockTokenStorage::failing()));
        let result = interceptor.intercept(get("/api/me"));

        assert!(matches!(result, Err(ApiError::Storage(_))));
    }
}
