//! Error types for the LexPro contact pipeline.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::FieldErrors;
use std::io;
use thiserror::Error;

/// Errors that can occur when talking to the transactional email provider.
#[derive(Error, Debug)]
pub enum MailerError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider returned an error status code
    #[error("Email provider error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// API key rejected by the provider
    #[error("Authentication with email provider failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Provider rejected the message as invalid
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

/// Errors that can occur when invoking the remote dispatch function.
#[derive(Error, Debug)]
pub enum InvokeError {
    /// Function could not be reached
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Function answered with a non-2xx status
    #[error("Function error (status {status}): {message}")]
    FunctionError { status: u16, message: String },

    /// Function answered 2xx but reported a failure in its body
    #[error("Function reported failure: {0}")]
    Rejected(String),

    /// Failed to encode the payload or parse the response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while handling one dispatch request.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Body is not a JSON object of the expected shape
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Payload failed server-side validation
    #[error("Invalid submission: {0}")]
    InvalidSubmission(FieldErrors),

    /// The email provider failed to send one of the emails
    #[error(transparent)]
    Mailer(#[from] MailerError),
}

impl DispatchError {
    /// HTTP status the dispatch endpoint answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MalformedPayload(_) | Self::InvalidSubmission(_) => 400,
            Self::Mailer(_) => 500,
        }
    }
}

/// Convenience type alias for Results with MailerError
pub type MailerResult<T> = Result<T, MailerError>;

/// Convenience type alias for Results with InvokeError
pub type InvokeResult<T> = Result<T, InvokeError>;

/// Convenience type alias for Results with DispatchError
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Whether a ureq transport failure was caused by the request timing out.
///
/// Other I/O failures (connection reset, truncated response) are not timeouts.
pub(crate) fn is_timeout(transport: &ureq::Transport) -> bool {
    std::error::Error::source(transport)
        .and_then(|source| source.downcast_ref::<io::Error>())
        .is_some_and(|e| is_timeout_kind(e.kind()))
}

fn is_timeout_kind(kind: io::ErrorKind) -> bool {
    matches!(kind, io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}
