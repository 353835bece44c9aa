use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use authshell::application::Store;
use authshell::domain::Credentials;
use authshell::infrastructure::config::{Command, TokenCommand};
use authshell::infrastructure::{
    ApiClient, AppConfig, BearerTokenInterceptor, CliArgs, HttpAuthService, LocalStorage,
    LocalTokenStorage, StorageManager,
};
use authshell::presentation::{App, CommandRunner};

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    let log_path = if to_file {
        config.effective_log_path()
    } else {
        config.log_path.clone()
    };

    if let Some(log_path) = log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let manager = StorageManager::new()?;
    let mut config = manager
        .load_config(args.config.as_deref())
        .wrap_err("Failed to load configuration")?;
    config.merge_with_args(args);
    Ok(config)
}

struct Services {
    store: Store,
    token_storage: Arc<LocalTokenStorage>,
    client: Arc<ApiClient>,
    auth: Arc<HttpAuthService>,
}

impl Services {
    fn into_runner(self) -> CommandRunner {
        CommandRunner::new(self.store, self.auth, self.token_storage, self.client)
    }
}

fn build_services(config: &AppConfig) -> Result<Services> {
    let local_storage = match &config.storage_dir {
        Some(dir) => LocalStorage::in_dir(dir),
        None => LocalStorage::new()?,
    };
    let token_storage = Arc::new(LocalTokenStorage::new(local_storage));

    let client = Arc::new(
        ApiClient::builder()
            .base_url(&config.api_base_url)
            .interceptor(BearerTokenInterceptor::new(token_storage.clone()))
            .build()?,
    );
    let auth = Arc::new(HttpAuthService::new(client.clone()));

    Ok(Services {
        store: Store::new(),
        token_storage,
        client,
        auth,
    })
}

async fn run_ui(config: AppConfig, services: Services) -> Result<()> {
    let app = App::new(services.store, services.auth, config.login);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    result
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let mut args = CliArgs::parse();
    let config = load_config(&args)?;
    let command = args.command.take().unwrap_or(Command::Ui);

    init_logging(&config, matches!(command, Command::Ui))?;
    info!(version = authshell::VERSION, api = %config.api_base_url, "Starting authshell");

    let services = build_services(&config)?;

    let output = match command {
        Command::Ui => return run_ui(config, services).await,
        Command::Login {
            username,
            password,
            save,
        } => {
            let credentials = Credentials::new(
                username.unwrap_or_else(|| config.login.username.clone()),
                password.unwrap_or_else(|| config.login.password.clone()),
            );
            services.into_runner().login(credentials, save).await?
        }
        Command::Token { action } => match action {
            TokenCommand::Show { raw } => services.into_runner().show_token(raw)?,
            TokenCommand::Set { value } => services.into_runner().set_token(value)?,
        },
        Command::Request {
            method,
            path,
            body,
            authorization,
            headers,
        } => {
            services
                .into_runner()
                .request(
                    method,
                    &path,
                    body.as_deref(),
                    authorization.as_deref(),
                    &headers,
                )
                .await?
        }
    };

    println!("{output}");
    Ok(())
}
