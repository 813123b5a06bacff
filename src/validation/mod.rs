//! Contact form validation.
//!
//! Validation is total: every field is checked and every violation is
//! collected. Nothing here performs I/O, so the same rules run in the form
//! and again on the dispatch server.

use crate::domain::{EmailAddress, Field, FieldErrors, ValidationError};
use crate::models::{ContactForm, ContactSubmission};
use std::collections::HashMap;

/// Validate a filled-in form.
///
/// Values are trimmed before their length is measured; lengths count
/// characters, not bytes. Optional fields that are blank become `None`.
///
/// # Errors
///
/// Returns every field that failed, keyed by field.
pub fn validate(form: &ContactForm) -> Result<ContactSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = check_length(Field::Name, &form.name, &mut errors);
    let email = check_email(&form.email, &mut errors);
    let phone = check_length(Field::Phone, &form.phone, &mut errors);
    let company = check_length(Field::Company, &form.company, &mut errors);
    let role = check_length(Field::Role, &form.role, &mut errors);
    let employee_count = check_length(Field::EmployeeCount, &form.employee_count, &mut errors);
    let message = check_length(Field::Message, &form.message, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    match (name, email, phone, company) {
        (Some(name), Some(email), Some(phone), Some(company)) => Ok(ContactSubmission::new(
            name,
            email,
            phone,
            company,
            role,
            employee_count,
            message,
        )),
        // Every required field either yields a value or records an error
        _ => Err(errors),
    }
}

/// Validate a `wire key -> value` map.
pub fn validate_map(values: &HashMap<String, String>) -> Result<ContactSubmission, FieldErrors> {
    validate(&ContactForm::from_map(values))
}

/// Check one text field against its bounds, returning the trimmed value.
fn check_length(field: Field, raw: &str, errors: &mut FieldErrors) -> Option<String> {
    let rule = field.rule();
    let value = raw.trim();
    let len = value.chars().count();

    if len == 0 && !rule.required {
        return None;
    }

    if len < rule.min {
        errors.push(ValidationError::TooShort {
            field,
            min: rule.min,
        });
        return None;
    }

    if len > rule.max {
        errors.push(ValidationError::TooLong {
            field,
            max: rule.max,
        });
        return None;
    }

    Some(value.to_string())
}

fn check_email(raw: &str, errors: &mut FieldErrors) -> Option<EmailAddress> {
    let value = raw.trim();

    let email = match EmailAddress::new(value) {
        Ok(email) => email,
        Err(e) => {
            errors.push(e);
            return None;
        }
    };

    let max = Field::Email.rule().max;
    if value.chars().count() > max {
        errors.push(ValidationError::TooLong {
            field: Field::Email,
            max,
        });
        return None;
    }

    Some(email)
}
