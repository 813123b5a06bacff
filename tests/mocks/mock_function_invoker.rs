use async_trait::async_trait;
use lexpro_contact::client::{FunctionInvoker, FunctionResponse};
use lexpro_contact::error::{InvokeError, InvokeResult};
use lexpro_contact::models::ContactSubmission;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock dispatch function for testing.
///
/// Records every payload, answers with success unless told to fail, and
/// remembers whether the watched in-progress flag was set during each call.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockFunctionInvoker {
    payloads: Arc<Mutex<Vec<ContactSubmission>>>,
    failure: Arc<Mutex<Option<String>>>,
    watched_flag: Arc<Mutex<Option<Arc<AtomicBool>>>>,
    flag_seen: Arc<Mutex<Vec<bool>>>,
}

#[allow(dead_code)]
impl MockFunctionInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call with a provider-style failure.
    pub fn fail_with(&self, error: &str) {
        *self.failure.lock().unwrap() = Some(error.to_string());
    }

    /// Answer with success again.
    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Record the value of `flag` whenever the function is invoked.
    pub fn watch(&self, flag: Arc<AtomicBool>) {
        *self.watched_flag.lock().unwrap() = Some(flag);
    }

    pub fn payloads(&self) -> Vec<ContactSubmission> {
        self.payloads.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    /// Flag values observed during each call.
    pub fn flag_seen(&self) -> Vec<bool> {
        self.flag_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl FunctionInvoker for MockFunctionInvoker {
    async fn invoke(&self, submission: &ContactSubmission) -> InvokeResult<FunctionResponse> {
        self.payloads.lock().unwrap().push(submission.clone());

        if let Some(flag) = self.watched_flag.lock().unwrap().as_ref() {
            self.flag_seen
                .lock()
                .unwrap()
                .push(flag.load(Ordering::SeqCst));
        }

        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(InvokeError::FunctionError {
                status: 500,
                message: error,
            });
        }

        Ok(FunctionResponse {
            success: true,
            message: Some("Emails enviados correctamente".to_string()),
            error: None,
        })
    }
}
