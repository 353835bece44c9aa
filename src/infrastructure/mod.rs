//! Infrastructure layer with external service adapters.

/// HTTP API client and login adapter.
pub mod api;
/// Application configuration.
pub mod config;
/// Token storage adapters.
pub mod storage;

pub use api::{
    ApiClient, ApiClientBuilder, ApiError, ApiRequest, BearerTokenInterceptor, HttpAuthService,
    RequestInterceptor, RequestOptions,
};
pub use config::{AppConfig, CliArgs, LogLevel, LoginMode, StorageManager};
pub use storage::{LocalStorage, LocalTokenStorage};
