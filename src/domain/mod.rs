//! Domain value objects and types.
//!
//! This module contains the contact form fields with their bounds, the
//! validated email address type and the validation error types. Value
//! objects validate at construction time so invalid data cannot be
//! represented downstream.

pub mod email;
pub mod errors;
pub mod field;

pub use email::EmailAddress;
pub use errors::{FieldErrors, ValidationError};
pub use field::{Field, FieldRule};
