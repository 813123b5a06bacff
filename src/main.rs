//! LexPro contact dispatch server - Main entry point
//!
//! Serves the email dispatch function over HTTP: it receives contact form
//! submissions and sends a confirmation and a notification email through Resend.

use anyhow::Result;
use lexpro_contact::server::{run_server, AppState};
use lexpro_contact::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact dispatch server (provider: {}, operator: {})",
        config.resend_api_url, config.operator_email
    );

    let state = AppState::from_config(&config);
    run_server(state, &config.bind_address).await?;

    info!("Contact dispatch server shutdown complete");
    Ok(())
}
