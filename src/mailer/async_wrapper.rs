//! Async email sending on top of the synchronous ResendClient.
//!
//! `ResendSender` runs each blocking send on `tokio::task::spawn_blocking`
//! so the HTTP handler never blocks the async runtime.

use super::{OutboundEmail, ResendClient, SendReceipt};
use crate::error::{MailerError, MailerResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Anything that can deliver an [`OutboundEmail`].
///
/// The dispatch service only depends on this trait, so tests can swap in an
/// in-memory sender.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> MailerResult<SendReceipt>;
}

/// Async wrapper around the synchronous ResendClient.
#[derive(Clone)]
pub struct ResendSender {
    client: Arc<ResendClient>,
}

impl ResendSender {
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl EmailSender for ResendSender {
    async fn send(&self, email: OutboundEmail) -> MailerResult<SendReceipt> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.send(&email))
            .await
            .map_err(|e| MailerError::HttpError(format!("Task join error: {}", e)))?
    }
}
