//! HTTP client for the Resend transactional email API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and maps
//! provider failures onto [`MailerError`].

mod async_wrapper;
pub use async_wrapper::{EmailSender, ResendSender};

use crate::config::Config;
use crate::error::{is_timeout, MailerError, MailerResult};
use crate::metrics::{Metrics, ProviderTimer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// One email as accepted by `POST /emails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Successful send acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendReceipt {
    /// Provider-assigned message id
    pub id: String,
}

/// Error body returned by the provider.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    message: String,
}

/// HTTP client for the Resend API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ResendClient {
    /// Base URL for the Resend API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ResendClient {
    /// Create a new ResendClient from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.resend_api_url.clone(),
            api_key: config.resend_api_key.clone(),
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Create a ResendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Send one email.
    pub fn send(&self, email: &OutboundEmail) -> MailerResult<SendReceipt> {
        let url = self.build_url("/emails");
        let timer = ProviderTimer::new(self.metrics.clone());

        tracing::debug!("POST {} (subject: {})", url, email.subject);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(email)
            .map_err(Self::map_error);

        let response = match result {
            Ok(response) => {
                timer.complete();
                response
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {}", url, e);
                timer.complete_with_error();
                return Err(e);
            }
        };

        let body = response
            .into_string()
            .map_err(|e| MailerError::HttpError(e.to_string()))?;
        let receipt: SendReceipt = serde_json::from_str(&body)?;

        tracing::debug!("POST {} - Sent (id: {})", url, receipt.id);
        Ok(receipt)
    }

    /// Map a ureq error to a MailerError.
    fn map_error(error: ureq::Error) -> MailerError {
        match error {
            ureq::Error::Status(code, response) => {
                let raw = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                let message = serde_json::from_str::<ProviderErrorBody>(&raw)
                    .ok()
                    .map(|body| body.message)
                    .filter(|m| !m.is_empty())
                    .unwrap_or(raw);

                match code {
                    401 | 403 => MailerError::Unauthorized,
                    422 => MailerError::InvalidEmail(message),
                    429 => MailerError::RateLimitExceeded,
                    _ => MailerError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    MailerError::HttpError("Connection failed".to_string())
                } else if is_timeout(&transport) {
                    MailerError::Timeout
                } else {
                    MailerError::HttpError(transport.to_string())
                }
            }
        }
    }
}
