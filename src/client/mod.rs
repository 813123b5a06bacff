//! HTTP client for invoking the email dispatch function.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Calls are authenticated with the public
//! function key, sent both as a bearer token and as the `apikey` header.

mod async_wrapper;
pub use async_wrapper::{AsyncFunctionClient, FunctionInvoker};

use crate::config::ClientConfig;
use crate::error::{is_timeout, InvokeError, InvokeResult};
use crate::models::ContactSubmission;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Identifies this client to the function.
const CLIENT_INFO: &str = concat!("lexpro-contact/", env!("CARGO_PKG_VERSION"));

/// JSON body returned by the dispatch function.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FunctionResponse {
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

/// HTTP client for the dispatch function.
#[derive(Clone)]
pub struct FunctionClient {
    /// Full endpoint URL
    function_url: String,

    /// Public function key
    function_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl FunctionClient {
    /// Create a new FunctionClient from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            function_url: config.function_url.clone(),
            function_key: config.function_key.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a FunctionClient for an explicit URL (useful for testing).
    #[doc(hidden)]
    pub fn with_url(function_url: String, function_key: String) -> Self {
        Self::new(&ClientConfig {
            function_url,
            function_key,
            request_timeout: 10,
        })
    }

    /// POST a sanitized submission to the function.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx answers and a 2xx answer with
    /// `success: false` are all errors.
    pub fn invoke(&self, submission: &ContactSubmission) -> InvokeResult<FunctionResponse> {
        tracing::debug!("POST {}", self.function_url);

        let response = self
            .agent
            .post(&self.function_url)
            .set("Authorization", &format!("Bearer {}", self.function_key))
            .set("apikey", &self.function_key)
            .set("x-client-info", CLIENT_INFO)
            .set("Content-Type", "application/json")
            .send_json(submission)
            .map_err(Self::map_error)?;

        let body = response
            .into_string()
            .map_err(|e| InvokeError::HttpError(e.to_string()))?;
        let parsed: FunctionResponse = serde_json::from_str(&body)?;

        if !parsed.success {
            let reason = parsed
                .error
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(InvokeError::Rejected(reason));
        }

        Ok(parsed)
    }

    /// Map a ureq error to an InvokeError.
    fn map_error(error: ureq::Error) -> InvokeError {
        match error {
            ureq::Error::Status(code, response) => {
                let raw = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                let message = serde_json::from_str::<FunctionResponse>(&raw)
                    .ok()
                    .and_then(|body| body.error)
                    .unwrap_or(raw);

                InvokeError::FunctionError {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    InvokeError::HttpError("Connection failed".to_string())
                } else if is_timeout(&transport) {
                    InvokeError::Timeout
                } else {
                    InvokeError::HttpError(transport.to_string())
                }
            }
        }
    }
}
