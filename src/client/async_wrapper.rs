//! Async wrapper around the synchronous FunctionClient.
//!
//! This module provides an async interface to the synchronous FunctionClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use super::{FunctionClient, FunctionResponse};
use crate::error::{InvokeError, InvokeResult};
use crate::models::ContactSubmission;
use async_trait::async_trait;
use std::sync::Arc;

/// Remote invocation of the dispatch function.
///
/// The submission handler only depends on this trait.
#[async_trait]
pub trait FunctionInvoker: Send + Sync {
    async fn invoke(&self, submission: &ContactSubmission) -> InvokeResult<FunctionResponse>;
}

/// Async wrapper around synchronous FunctionClient.
#[derive(Clone)]
pub struct AsyncFunctionClient {
    client: Arc<FunctionClient>,
}

impl AsyncFunctionClient {
    pub fn new(client: FunctionClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl FunctionInvoker for AsyncFunctionClient {
    async fn invoke(&self, submission: &ContactSubmission) -> InvokeResult<FunctionResponse> {
        let client = self.client.clone();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || client.invoke(&submission))
            .await
            .map_err(|e| InvokeError::HttpError(format!("Task join error: {}", e)))?
    }
}
