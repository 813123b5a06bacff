//! Data models for the contact pipeline.
//!
//! This module contains the raw form state and the validated submission that
//! travels from the form to the dispatch function.

pub mod form;
pub mod submission;

pub use form::{sanitize_input, ContactForm};
pub use submission::ContactSubmission;
