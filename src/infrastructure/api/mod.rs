//! HTTP API client.

mod auth_service;
mod client;
mod dto;
mod error;
mod interceptor;
mod request;

pub use auth_service::{HttpAuthService, LOGIN_PATH};
pub use client::{ApiClient, ApiClientBuilder};
pub use error::ApiError;
pub use interceptor::{BearerTokenInterceptor, RequestInterceptor, apply_auth_headers};
pub use request::{ApiRequest, RequestOptions};
