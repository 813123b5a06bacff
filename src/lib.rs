//! LexPro Contact - lead capture for the LexPro ERP landing page.
//!
//! This library covers the contact form from the moment the user presses
//! submit to the moment two emails leave the server.
//!
//! # Architecture
//!
//! - **domain**: Form fields, bounds, email value object and validation errors
//! - **models**: Raw form state and the validated, sanitizable submission
//! - **validation**: Total form validation shared by client and server
//! - **submission**: Client-side submission flow with toast feedback
//! - **client**: HTTP client that invokes the dispatch function
//! - **templates**: Confirmation and notification email bodies
//! - **mailer**: HTTP client for the Resend email API
//! - **dispatch**: Server-side parsing, re-validation and dual email send
//! - **server**: Axum endpoint with CORS and health check
//! - **metrics**: Counters for provider calls and dispatch outcomes
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod client;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod mailer;
pub mod metrics;
pub mod models;
pub mod server;
pub mod submission;
pub mod templates;
pub mod validation;

pub use client::{AsyncFunctionClient, FunctionClient, FunctionInvoker, FunctionResponse};
pub use config::{ClientConfig, Config};
pub use dispatch::{DispatchReceipt, DispatchService};
pub use domain::{EmailAddress, Field, FieldErrors, ValidationError};
pub use error::{ConfigError, DispatchError, InvokeError, MailerError};
pub use mailer::{EmailSender, OutboundEmail, ResendClient, ResendSender, SendReceipt};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{sanitize_input, ContactForm, ContactSubmission};
pub use server::{router, AppState};
pub use submission::{Notifier, SubmissionHandler, SubmitOutcome, Toast, ToastVariant};
pub use validation::{validate, validate_map};
