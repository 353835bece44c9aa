//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{AppConfig, LogLevel, LoginConfig, LoginMode};
pub use args::{CliArgs, Command, HttpMethod, TokenCommand};
pub use storage::{ConfigError, StorageManager};
