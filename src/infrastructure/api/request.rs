//! Outgoing request representation.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

use super::error::ApiError;

/// A request as seen by interceptors, before it reaches the transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the base URL, or an absolute URL.
    pub path: String,
    /// Headers to send.
    pub headers: HeaderMap,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Creates a request without headers or body.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Sets JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Merges per-call options into the request.
    ///
    /// The first value of each option header replaces existing ones; later
    /// values of the same header are appended.
    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        let mut current: Option<HeaderName> = None;
        for (name, value) in options.headers {
            match name {
                Some(name) => {
                    self.headers.insert(&name, value);
                    current = Some(name);
                }
                None => {
                    if let Some(name) = &current {
                        self.headers.append(name, value);
                    }
                }
            }
        }
        self
    }

    /// Returns whether an `Authorization` header is already set.
    #[must_use]
    pub fn has_authorization(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }
}

/// Per-call configuration override.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: HeaderMap,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, replacing earlier values of the same name.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Adds a header value, keeping earlier values of the same name.
    #[must_use]
    pub fn append(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Parses and appends a raw `Name: value` header.
    ///
    /// # Errors
    /// Returns error if the line has no colon or an invalid name or value.
    pub fn raw_header(self, line: &str) -> Result<Self, ApiError> {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| ApiError::InvalidHeader(format!("expected `Name: value`, got `{line}`")))?;
        let name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
        let value = HeaderValue::from_str(value.trim())
            .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
        Ok(self.append(name, value))
    }

    /// Sets an explicit `Authorization` header, which wins over the stored token.
    ///
    /// # Errors
    /// Returns error if the value is not a valid header value.
    pub fn authorization(self, value: &str) -> Result<Self, ApiError> {
        let value =
            HeaderValue::from_str(value).map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
        Ok(self.header(AUTHORIZATION, value))
    }
}
