use anyhow::{Context, Result};
use clap::Parser;
use portfolio_chat::app_log;
use portfolio_chat::{core::ConfigManager, start_web_server};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "portfolio-chat")]
#[command(about = "Portfolio chat relay API server")]
struct Cli {
    /// Path to config.yaml
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Port to listen on (overrides config and ROCKET_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Profile document to serve (overrides config and PROFILE_PATH)
    #[arg(long)]
    profile: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigManager::load(&cli.config)?;
    if let Some(port) = cli.port {
        config.environment.port = port;
    }
    if let Some(profile) = cli.profile {
        config.environment.profile_path = profile;
    }

    init_logging(config.environment.log_file.as_ref())?;

    app_log!(info, "Port: {}", config.environment.port);
    app_log!(info, "Profile: {}", config.environment.profile_path.display());
    app_log!(
        info,
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );

    start_web_server(config).await
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let json_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(json_layer)
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_chat=info,rocket::server=off")),
        )
        .init();

    Ok(())
}
