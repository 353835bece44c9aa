//! Command line arguments.

use super::app_config::{LogLevel, LoginMode};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "authshell",
    version,
    about = "A minimal terminal shell for authenticated API access",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the API.
    #[arg(long, value_name = "URL", env = "AUTHSHELL_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Directory for persisted storage.
    #[arg(long, value_name = "PATH", env = "AUTHSHELL_STORAGE_DIR", global = true)]
    pub storage_dir: Option<PathBuf>,

    /// What the Login control does.
    #[arg(long, value_enum, global = true)]
    pub login_mode: Option<LoginMode>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the terminal UI (default).
    Ui,

    /// Exchange credentials for a token without opening the UI.
    Login {
        /// Username, defaults to the configured one.
        #[arg(short, long)]
        username: Option<String>,

        /// Password, defaults to the configured one.
        #[arg(short, long, env = "AUTHSHELL_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Persist the returned token.
        #[arg(long)]
        save: bool,
    },

    /// Read or write the stored token.
    Token {
        #[allow(missing_docs)]
        #[command(subcommand)]
        action: TokenCommand,
    },

    /// Send a request through the authenticated client and print the payload.
    Request {
        /// HTTP method.
        #[arg(value_enum)]
        method: HttpMethod,

        /// Path relative to the API base URL.
        path: String,

        /// JSON body for post and put.
        #[arg(long, value_name = "JSON")]
        body: Option<String>,

        /// Explicit Authorization header, overrides the stored token.
        #[arg(long, value_name = "VALUE")]
        authorization: Option<String>,

        /// Extra header, repeatable.
        #[arg(short = 'H', long = "header", value_name = "NAME: VALUE")]
        headers: Vec<String>,
    },
}

/// Token subcommands.
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Print the stored token, masked unless --raw is given.
    Show {
        /// Print the raw value.
        #[arg(long)]
        raw: bool,
    },

    /// Replace the stored token.
    Set {
        /// Token value.
        value: String,
    },
}

/// Methods accepted by `request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[allow(missing_docs)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}
