use std::process::ExitCode;

use clap::Parser;
use sevadesk::cli::{self, Cli};
use sevadesk::config::{AppConfig, Config, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();

    // Initialize tracing first so configuration loading is logged;
    // stdout is reserved for tables and prompts
    let app = AppConfig::from_env()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sevadesk={}", app.log_level)));
    let registry = tracing_subscriber::registry().with(filter);
    match app.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::debug!(
        env = %config.app.env,
        api = %config.api.api_root(),
        source = %config.api.base_url_source,
        overrides = !config.endpoints.is_empty(),
        "Configuration loaded"
    );

    cli::run(args, &config).await
}
