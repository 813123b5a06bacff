//! HTTP server for the email dispatch function.
//!
//! Exposes the dispatch endpoint (at `/` and `/send-contact-email`) and a
//! health check. Every response carries permissive CORS headers so the
//! landing page can call the function from any origin.

pub mod handlers;

use crate::config::Config;
use crate::dispatch::DispatchService;
use crate::mailer::{ResendClient, ResendSender};
use crate::metrics::Metrics;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::routing::{any, get};
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Value of `Access-Control-Allow-Headers` on every response.
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Largest request body the dispatch endpoint reads, in bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub dispatch: DispatchService,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(dispatch: DispatchService) -> Self {
        Self {
            dispatch,
            started_at: Instant::now(),
        }
    }

    /// Wire the Resend client, sender and dispatch service from configuration.
    pub fn from_config(config: &Config) -> Self {
        let metrics = Metrics::new();
        let client = ResendClient::new(config, metrics.clone());
        let sender = Arc::new(ResendSender::new(client));

        Self::new(DispatchService::new(
            sender,
            config.from_address.clone(),
            config.operator_email.clone(),
            metrics,
        ))
    }
}

/// Build the router with CORS headers and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::send_contact_email))
        .route("/send-contact-email", any(handlers::send_contact_email))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to `bind_address` and serve until Ctrl-C.
///
/// # Arguments
/// * `state` - Shared handler state
/// * `bind_address` - Socket address such as `0.0.0.0:8000`
pub async fn run_server(state: AppState, bind_address: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
