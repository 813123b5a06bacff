//! In-memory collaborators for integration tests.

mod mock_email_sender;
mod mock_function_invoker;
mod recording_notifier;

#[allow(unused_imports)]
pub use mock_email_sender::MockEmailSender;
#[allow(unused_imports)]
pub use mock_function_invoker::MockFunctionInvoker;
#[allow(unused_imports)]
pub use recording_notifier::RecordingNotifier;
