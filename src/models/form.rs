//! Raw contact form state.

use crate::domain::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static MARKUP_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new("[<>]").expect("Failed to compile markup character regex"));

/// Remove every `<` and `>` and trim surrounding whitespace.
///
/// This is a minimal guard against markup in rendered emails; templates still
/// escape every value they interpolate.
pub fn sanitize_input(input: &str) -> String {
    MARKUP_CHARS.replace_all(input, "").trim().to_string()
}

/// Values currently typed into the contact form.
///
/// `ContactForm::default()` is the empty state the form resets to after a
/// successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub role: String,
    pub employee_count: String,
    pub message: String,
}

impl ContactForm {
    /// Build a form from a `wire key -> value` map. Unknown keys are ignored
    /// and missing keys stay empty.
    pub fn from_map(values: &HashMap<String, String>) -> Self {
        let mut form = Self::default();
        for (key, value) in values {
            if let Some(field) = Field::from_key(key) {
                form.set(field, value.clone());
            }
        }
        form
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Role => &self.role,
            Field::EmployeeCount => &self.employee_count,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::Role => &mut self.role,
            Field::EmployeeCount => &mut self.employee_count,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Clear every field back to its empty default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy with every field passed through [`sanitize_input`].
    ///
    /// The result still has to be validated: removing markup characters can
    /// leave a field shorter than its minimum.
    pub fn sanitized(&self) -> Self {
        Self {
            name: sanitize_input(&self.name),
            email: sanitize_input(&self.email),
            phone: sanitize_input(&self.phone),
            company: sanitize_input(&self.company),
            role: sanitize_input(&self.role),
            employee_count: sanitize_input(&self.employee_count),
            message: sanitize_input(&self.message),
        }
    }
}
