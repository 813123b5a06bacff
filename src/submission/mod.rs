//! Contact form submission flow.
//!
//! Holds the form state and drives one submission: validate, sanitize,
//! invoke the dispatch function, then report the result through a toast.
//! The form is cleared only after a successful send so the user can retry
//! after a failure. Nothing is retried automatically.

use crate::client::FunctionInvoker;
use crate::domain::{Field, FieldErrors};
use crate::models::ContactForm;
use crate::validation::validate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error};

/// Submit button label while idle.
pub const SUBMIT_LABEL: &str = "Solicitar Demostración Gratuita";

/// Submit button label while a submission is in flight.
pub const SUBMITTING_LABEL: &str = "Enviando...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A transient notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    /// Shown after the function confirmed both emails.
    pub fn sent() -> Self {
        Self {
            title: "¡Formulario enviado!".to_string(),
            description: "Te hemos enviado un email de confirmación. Nos pondremos en contacto contigo pronto.".to_string(),
            variant: ToastVariant::Default,
        }
    }

    /// Shown after any submission failure.
    pub fn failed() -> Self {
        Self {
            title: "Error".to_string(),
            description: "Ha ocurrido un error al enviar el formulario. Por favor intenta nuevamente.".to_string(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Surface that displays toasts.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Result of one call to [`SubmissionHandler::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Both emails were sent; the form was reset.
    Sent,
    /// The call failed; the form keeps its values.
    Failed(String),
    /// Validation failed; no network call was made.
    Invalid(FieldErrors),
}

/// Sets the in-progress flag for its lifetime.
struct InProgress {
    flag: Arc<AtomicBool>,
}

impl InProgress {
    fn begin(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag: flag.clone() }
    }
}

impl Drop for InProgress {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Form state plus the collaborators needed to submit it.
pub struct SubmissionHandler {
    form: ContactForm,
    errors: FieldErrors,
    submitting: Arc<AtomicBool>,
    invoker: Arc<dyn FunctionInvoker>,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionHandler {
    pub fn new(invoker: Arc<dyn FunctionInvoker>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            form: ContactForm::default(),
            errors: FieldErrors::new(),
            submitting: Arc::new(AtomicBool::new(false)),
            invoker,
            notifier,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Update one field as the user types.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Replace the whole form.
    pub fn fill(&mut self, form: ContactForm) {
        self.form = form;
    }

    /// Inline errors from the last submit attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn field_error(&self, field: Field) -> Option<String> {
        self.errors.message(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Shared view of the in-progress flag, for observers outside the handler.
    pub fn submitting_flag(&self) -> Arc<AtomicBool> {
        self.submitting.clone()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Validate, sanitize and send the current form.
    ///
    /// The sanitized values are validated again, so a field that only met
    /// its minimum length because of `<` or `>` blocks the submission.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let payload = match validate(&self.form).and_then(|_| validate(&self.form.sanitized())) {
            Ok(payload) => payload,
            Err(errors) => {
                debug!("Form has {} invalid field(s)", errors.len());
                self.errors = errors.clone();
                return SubmitOutcome::Invalid(errors);
            }
        };
        self.errors = FieldErrors::new();

        let _in_progress = InProgress::begin(&self.submitting);

        match self.invoker.invoke(&payload).await {
            Ok(_) => {
                self.notifier.notify(Toast::sent());
                self.form.reset();
                SubmitOutcome::Sent
            }
            Err(e) => {
                error!("Error submitting form: {}", e);
                self.notifier.notify(Toast::failed());
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FunctionResponse;
    use crate::error::{InvokeError, InvokeResult};
    use crate::models::ContactSubmission;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FailingInvoker;

    #[async_trait]
    impl FunctionInvoker for FailingInvoker {
        async fn invoke(&self, _: &ContactSubmission) -> InvokeResult<FunctionResponse> {
            Err(InvokeError::Timeout)
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(Mutex<Vec<Toast>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.0.lock().unwrap().push(toast);
        }
    }

    #[test]
    fn test_in_progress_guard_resets_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        {
            let _guard = InProgress::begin(&flag);
            assert!(flag.load(Ordering::SeqCst));
        }
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_labels() {
        let handler = SubmissionHandler::new(
            Arc::new(FailingInvoker),
            Arc::new(RecordingNotifier::default()),
        );
        assert_eq!(handler.submit_label(), SUBMIT_LABEL);
        handler.submitting.store(true, Ordering::SeqCst);
        assert_eq!(handler.submit_label(), SUBMITTING_LABEL);
        assert!(!handler.can_submit());
    }

    #[test]
    fn test_failure_keeps_form() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut handler = SubmissionHandler::new(Arc::new(FailingInvoker), notifier.clone());
        handler.set_field(Field::Name, "Ana Pérez");
        handler.set_field(Field::Email, "ana@empresa.cl");
        handler.set_field(Field::Phone, "+56912345678");
        handler.set_field(Field::Company, "Acme SpA");

        let outcome = tokio_test::block_on(handler.submit());
        assert_eq!(outcome, SubmitOutcome::Failed("Request timeout".to_string()));
        assert_eq!(handler.form().name, "Ana Pérez");
        assert!(!handler.is_submitting());
        assert_eq!(notifier.0.lock().unwrap().as_slice(), &[Toast::failed()]);
    }
}
