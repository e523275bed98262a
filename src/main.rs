//! Nordisk Sites Server
//!
//! Run with: cargo run --bin nordisk-sites
//!
//! # Configuration
//!
//! Settings come from `--config`, or the first of
//! `~/.config/nordisk/config.toml`, `/etc/nordisk/config.toml` and
//! `./config.toml`. Environment variables override the file:
//! - `NORDISK_HOST`, `NORDISK_PORT`: listen address (default: 0.0.0.0:8080)
//! - `NORDISK_PUBLIC_URL`: externally visible base URL
//! - `NORDISK_BACKEND_URL`: lead-capture backend
//! - `NORDISK_CHAT_URL`: remote chat service
//! - `NORDISK_LOG_LEVEL`, `NORDISK_LOG_FORMAT`: logging (`pretty` or `json`)
//! - `RUST_LOG`: full filter directive, wins over the level above

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nordisk_sites::backend::BackendClient;
use nordisk_sites::config::{Config, LoggingConfig};
use nordisk_sites::web::{serve, AppState};

#[derive(Parser)]
#[command(name = "nordisk-sites")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the Nordisk brand sites")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.default_filter().into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Nordisk sites v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Public URL: {}", config.server.public_url);

    // Pages render without the backend; only forms and email checks need it
    let backend = BackendClient::new(config.backend.url.clone(), config.backend.timeout())?;
    match backend.health_check().await {
        Ok(()) => tracing::info!("Backend reachable at {}", backend.base_url()),
        Err(e) => tracing::warn!(
            "Backend not available: {} (registrations will fail until it is)",
            e
        ),
    }

    let state = AppState::from_config(&config)?;
    serve(state, &config.server).await?;

    Ok(())
}
