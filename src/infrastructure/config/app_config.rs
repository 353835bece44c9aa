//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::domain::entities::Credentials;

const APP_NAME: &str = "authshell";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "authshell";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// What the "Login" control does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LoginMode {
    /// Flip the flag with the synchronous login action.
    #[default]
    Action,
    /// Run the network login effect with the configured credentials.
    Effect,
}

impl std::fmt::Display for LoginMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Action => write!(f, "action"),
            Self::Effect => write!(f, "effect"),
        }
    }
}

/// Login control configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Login variant.
    #[serde(default)]
    pub mode: LoginMode,

    /// Username sent by the login effect.
    #[serde(default = "default_username")]
    pub username: String,

    /// Password sent by the login effect.
    #[serde(default = "default_password")]
    pub password: String,
}

impl LoginConfig {
    /// Builds credentials from the configured pair.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            mode: LoginMode::default(),
            username: default_username(),
            password: default_password(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Base URL every request path is resolved against.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Directory holding `storage.toml`. Defaults to the per-user data dir.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    /// Login control configuration.
    #[serde(default)]
    pub login: LoginConfig,
}

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_username() -> String {
    "TEST".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = &args.api_url {
            self.api_base_url.clone_from(api_url);
        }
        if let Some(storage_dir) = &args.storage_dir {
            self.storage_dir = Some(storage_dir.clone());
        }
        if let Some(login_mode) = args.login_mode {
            self.login.mode = login_mode;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("authshell.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            api_base_url: default_api_base_url(),
            storage_dir: None,
            login: LoginConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            api_base_url = "https://api.example.test"

            [login]
            mode = "effect"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.api_base_url, "https://api.example.test");
        assert_eq!(config.login.mode, LoginMode::Effect);
        assert_eq!(config.login.username, "TEST");
        assert_eq!(config.login.password, "password");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.login.mode, LoginMode::Action);
        assert!(config.storage_dir.is_none());
    }

    #[test]
    fn test_args_override_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "authshell",
            "--api-url",
            "http://127.0.0.1:8080",
            "--login-mode",
            "effect",
            "--log-level",
            "debug",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.login.mode, LoginMode::Effect);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_credentials_from_config() {
        let credentials = LoginConfig::default().credentials();
        assert_eq!(credentials.username(), "TEST");
        assert_eq!(credentials.password(), "password");
    }
}
