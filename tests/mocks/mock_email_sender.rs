use async_trait::async_trait;
use lexpro_contact::error::{MailerError, MailerResult};
use lexpro_contact::mailer::{EmailSender, OutboundEmail, SendReceipt};
use std::sync::{Arc, Mutex};

/// Mock email sender for testing.
///
/// Records every email it is asked to send. Sends to the recipient set with
/// `fail_for` are rejected with a provider error.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    fail_for: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every send addressed to `recipient`.
    pub fn fail_for(&self, recipient: &str) {
        *self.fail_for.lock().unwrap() = Some(recipient.to_string());
    }

    /// Emails accepted so far, in completion order.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// The accepted email addressed to `recipient`, if any.
    pub fn sent_to(&self, recipient: &str) -> Option<OutboundEmail> {
        self.sent()
            .into_iter()
            .find(|email| email.to.iter().any(|to| to == recipient))
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, email: OutboundEmail) -> MailerResult<SendReceipt> {
        let failing = self.fail_for.lock().unwrap().clone();
        if let Some(recipient) = failing {
            if email.to.contains(&recipient) {
                return Err(MailerError::ApiError {
                    status: 500,
                    message: "Provider unavailable".to_string(),
                });
            }
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(email);
        Ok(SendReceipt {
            id: format!("msg-{}", sent.len()),
        })
    }
}
