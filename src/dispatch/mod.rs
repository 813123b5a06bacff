//! Email dispatch for contact submissions.
//!
//! Turns one request body into two emails: a confirmation to the submitter
//! and a notification to the operator. The body is parsed and re-validated
//! with the same rules as the form before anything is rendered.

use crate::error::{DispatchError, DispatchResult};
use crate::mailer::{EmailSender, OutboundEmail, SendReceipt};
use crate::metrics::Metrics;
use crate::models::{ContactForm, ContactSubmission};
use crate::templates::{render_confirmation, render_notification, RenderedEmail};
use crate::validation::validate;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Wire shape of a dispatch request body.
///
/// Required keys must be present as strings; optional keys may be missing,
/// `null` or empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactPayload {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub empresa: String,
    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default)]
    pub empleados: Option<String>,
    #[serde(default)]
    pub mensaje: Option<String>,
}

impl From<ContactPayload> for ContactForm {
    fn from(payload: ContactPayload) -> Self {
        ContactForm {
            name: payload.nombre,
            email: payload.email,
            phone: payload.telefono,
            company: payload.empresa,
            role: payload.cargo.unwrap_or_default(),
            employee_count: payload.empleados.unwrap_or_default(),
            message: payload.mensaje.unwrap_or_default(),
        }
    }
}

/// Provider ids of the two emails sent for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReceipt {
    pub confirmation: SendReceipt,
    pub notification: SendReceipt,
}

/// Parse and re-validate a raw request body.
///
/// # Errors
///
/// `MalformedPayload` when the body is not the expected JSON object,
/// `InvalidSubmission` when any field is out of bounds.
pub fn parse_submission(body: &[u8]) -> DispatchResult<ContactSubmission> {
    let payload: ContactPayload = serde_json::from_slice(body)
        .map_err(|e| DispatchError::MalformedPayload(e.to_string()))?;

    validate(&ContactForm::from(payload)).map_err(DispatchError::InvalidSubmission)
}

/// Sends the confirmation and notification emails for a submission.
#[derive(Clone)]
pub struct DispatchService {
    sender: Arc<dyn EmailSender>,
    from_address: String,
    operator_email: String,
    metrics: Metrics,
}

impl DispatchService {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        from_address: impl Into<String>,
        operator_email: impl Into<String>,
        metrics: Metrics,
    ) -> Self {
        Self {
            sender,
            from_address: from_address.into(),
            operator_email: operator_email.into(),
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn outbound(&self, to: String, rendered: RenderedEmail) -> OutboundEmail {
        OutboundEmail {
            from: self.from_address.clone(),
            to: vec![to],
            subject: rendered.subject,
            html: rendered.html,
        }
    }

    /// Render both emails and send them concurrently.
    ///
    /// Succeeds only if both sends succeed. A failed send does not cancel the
    /// other one once it is in flight, so a retry may duplicate an email.
    pub async fn dispatch(
        &self,
        submission: &ContactSubmission,
        received_at: NaiveDateTime,
    ) -> DispatchResult<DispatchReceipt> {
        let confirmation = self.outbound(
            submission.email().to_string(),
            render_confirmation(submission),
        );
        let notification = self.outbound(
            self.operator_email.clone(),
            render_notification(submission, &received_at),
        );

        let (confirmation, notification) = futures::future::try_join(
            self.sender.send(confirmation),
            self.sender.send(notification),
        )
        .await?;

        Ok(DispatchReceipt {
            confirmation,
            notification,
        })
    }

    /// Parse, re-validate and dispatch one request body, stamping the
    /// notification with the current local time.
    pub async fn handle(&self, body: &[u8]) -> DispatchResult<DispatchReceipt> {
        let submission = match parse_submission(body) {
            Ok(submission) => submission,
            Err(e) => {
                warn!("Rejected contact submission: {}", e);
                self.metrics.record_dispatch_rejected();
                return Err(e);
            }
        };

        debug!(
            "Dispatching submission from {} ({})",
            submission.company(),
            submission.email().domain()
        );

        match self
            .dispatch(&submission, chrono::Local::now().naive_local())
            .await
        {
            Ok(receipt) => {
                info!(
                    "Emails sent (confirmation: {}, notification: {})",
                    receipt.confirmation.id, receipt.notification.id
                );
                self.metrics.record_dispatch_succeeded();
                Ok(receipt)
            }
            Err(e) => {
                error!("Error sending emails: {}", e);
                self.metrics.record_dispatch_failed();
                Err(e)
            }
        }
    }
}
