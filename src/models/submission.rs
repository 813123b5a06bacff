//! Validated contact submission.

use crate::domain::{EmailAddress, Field};
use serde::Serialize;

/// A contact submission that passed validation.
///
/// Only the validator constructs this type. It serializes to the dispatch
/// function payload; absent optional fields are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    #[serde(rename = "nombre")]
    name: String,

    email: EmailAddress,

    #[serde(rename = "telefono")]
    phone: String,

    #[serde(rename = "empresa")]
    company: String,

    #[serde(rename = "cargo", skip_serializing_if = "Option::is_none")]
    role: Option<String>,

    #[serde(rename = "empleados", skip_serializing_if = "Option::is_none")]
    employee_count: Option<String>,

    #[serde(rename = "mensaje", skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ContactSubmission {
    pub(crate) fn new(
        name: String,
        email: EmailAddress,
        phone: String,
        company: String,
        role: Option<String>,
        employee_count: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            company,
            role,
            employee_count,
            message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn employee_count(&self) -> Option<&str> {
        self.employee_count.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Value of any field; `None` for absent optional fields.
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(self.email.as_str()),
            Field::Phone => Some(&self.phone),
            Field::Company => Some(&self.company),
            Field::Role => self.role(),
            Field::EmployeeCount => self.employee_count(),
            Field::Message => self.message(),
        }
    }
}
