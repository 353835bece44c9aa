//! JSON HTTP client with request interceptors.

use std::sync::Arc;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::ApiError;
use super::interceptor::RequestInterceptor;
use super::request::{ApiRequest, RequestOptions};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client returning parsed JSON payloads rather than responses.
///
/// Every request passes through the configured interceptors before it is
/// sent. There is no retry and no timeout beyond reqwest's defaults.
pub struct ApiClient {
    http: Client,
    base_url: String,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl ApiClient {
    /// Creates builder.
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a `GET` request.
    ///
    /// # Errors
    /// Returns error on interceptor, transport, status or decode failure.
    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<R, ApiError> {
        self.request(Method::GET, path, None, options).await
    }

    /// Sends a `POST` request with a JSON body.
    ///
    /// # Errors
    /// Returns error on encode, interceptor, transport, status or decode failure.
    pub async fn post<R, B>(
        &self,
        path: &str,
        body: &B,
        options: Option<RequestOptions>,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode(body)?;
        self.request(Method::POST, path, Some(body), options).await
    }

    /// Sends a `PUT` request with a JSON body.
    ///
    /// # Errors
    /// Returns error on encode, interceptor, transport, status or decode failure.
    pub async fn put<R, B>(
        &self,
        path: &str,
        body: &B,
        options: Option<RequestOptions>,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode(body)?;
        self.request(Method::PUT, path, Some(body), options).await
    }

    /// Sends a `DELETE` request.
    ///
    /// # Errors
    /// Returns error on interceptor, transport, status or decode failure.
    pub async fn delete<R: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<R, ApiError> {
        self.request(Method::DELETE, path, None, options).await
    }

    /// Sends a request with any method.
    ///
    /// # Errors
    /// Returns error on interceptor, transport, status or decode failure.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        options: Option<RequestOptions>,
    ) -> Result<R, ApiError> {
        let mut request = ApiRequest::new(method, path);
        if let Some(body) = body {
            request = request.with_body(body);
        }
        if let Some(options) = options {
            request = request.with_options(options);
        }

        let request = self.prepare(request)?;
        self.send(request).await
    }

    /// Runs the interceptor chain.
    ///
    /// # Errors
    /// Returns the first interceptor error.
    pub fn prepare(&self, request: ApiRequest) -> Result<ApiRequest, ApiError> {
        self.interceptors
            .iter()
            .try_fold(request, |request, interceptor| interceptor.intercept(request))
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let url = self.url_for(&request.path);
        debug!(method = %request.method, url = %url, "Sending request");

        let mut builder = self
            .http
            .request(request.method, &url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body).map_err(|e| ApiError::Encode(e.to_string()))?;
            builder = builder.body(bytes);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Request failed");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for_status(status));
        }

        let bytes = response.bytes().await?;
        decode(&bytes)
    }

    fn error_for_status(status: StatusCode) -> ApiError {
        let message = format!("Request failed with status code {}", status.as_u16());
        warn!(status = %status, "Server returned error status");
        ApiError::Status { status, message }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(bytes: &[u8]) -> Result<R, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Builder for [`ApiClient`].
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl ApiClientBuilder {
    /// Sets base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Appends an interceptor to the chain.
    #[must_use]
    pub fn interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    /// Returns error if no base URL was given or the HTTP client cannot be created.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ApiError::configuration("base URL is required"))?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(ApiClient {
            http,
            base_url,
            interceptors: self.interceptors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockTokenStorage;
    use crate::infrastructure::api::interceptor::BearerTokenInterceptor;
    use serde_json::{Value, json};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, storage: MockTokenStorage) -> ApiClient {
        ApiClient::builder()
            .base_url(server.uri())
            .interceptor(BearerTokenInterceptor::new(Arc::new(storage)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = ApiClient::builder().build();
        assert!(matches!(result, Err(ApiError::Configuration(_))));
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::builder()
            .base_url("http://localhost:3000/")
            .build()
            .unwrap();

        assert_eq!(client.url_for("/api/login"), "http://localhost:3000/api/login");
        assert_eq!(client.url_for("api/login"), "http://localhost:3000/api/login");
        assert_eq!(client.url_for("https://other.test/x"), "https://other.test/x");
    }

    #[tokio::test]
    async fn test_get_sends_bearer_and_returns_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .and(header("authorization", "Bearer abc123"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "TEST"})))
            .mount(&server)
            .await;

        let client = client_for(&server, MockTokenStorage::with_token("abc123"));
        let payload: Value = client.get("/api/me", None).await.unwrap();

        assert_eq!(payload, json!({"name": "TEST"}));
    }

    #[tokio::test]
    async fn test_no_token_sends_no_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/public"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server, MockTokenStorage::new());
        let _: Value = client.get("/api/public", None).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
        assert_eq!(requests[0].headers["content-type"], "application/json");
    }

    #[tokio::test]
    async fn test_explicit_authorization_is_sent_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/items/1"))
            .and(header("authorization", "Basic dXNlcjpwdw=="))
            .and(body_json(json!({"done": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .mount(&server)
            .await;

        let client = client_for(&server, MockTokenStorage::with_token("stored"));
        let options = RequestOptions::new()
            .authorization("Basic dXNlcjpwdw==")
            .unwrap();
        let payload: Value = client
            .put("/api/items/1", &json!({"done": true}), Some(options))
            .await
            .unwrap();

        assert_eq!(payload["id"], 1);
    }

    #[tokio::test]
    async fn test_delete_with_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/items/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server, MockTokenStorage::new());
        let result: Result<(), _> = client.delete("/api/items/1", None).await;

        tokio_test::assert_ok!(result);
    }

    #[tokio::test]
    async fn test_error_status_ignores_body_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/items"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"message": "name is required"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, MockTokenStorage::new());
        let error = client
            .post::<Value, _>("/api/items", &json!({}), None)
            .await
            .unwrap_err();

        assert_eq!(error.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(error.to_string(), "Request failed with status code 422");
    }

    #[tokio::test]
    async fn test_error_status_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server, MockTokenStorage::new());
        let error = client.get::<Value>("/api/me", None).await.unwrap_err();

        assert_eq!(error.to_string(), "Request failed with status code 500");
    }

    #[tokio::test]
    async fn test_malformed_payload_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, MockTokenStorage::new());
        let result = client.get::<Value>("/api/me", None).await;

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_storage_failure_aborts_before_sending() {
        let server = MockServer::start().await;

        let client = client_for(&server, MockTokenStorage::failing());
        let result = client.get::<Value>("/api/me", None).await;

        assert!(matches!(result, Err(ApiError::Storage(_))));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
