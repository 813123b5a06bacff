//! HTML email bodies for a contact submission.
//!
//! Two fixed templates: the confirmation sent back to the submitter and the
//! notification sent to the operator. Optional fields only produce a line
//! when present. `maud` escapes every interpolated value.

use crate::domain::Field;
use crate::models::ContactSubmission;
use chrono::NaiveDateTime;
use maud::{html, Markup};

/// Subject of the confirmation email.
pub const CONFIRMATION_SUBJECT: &str = "Gracias por contactarnos - LexPro ERP";

const CONTAINER_STYLE: &str = "font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;";
const DETAILS_STYLE: &str =
    "background-color: #f7fafc; padding: 20px; border-radius: 8px; margin: 20px 0;";

const OPTIONAL_FIELDS: [Field; 3] = [Field::Role, Field::EmployeeCount, Field::Message];

/// Subject and HTML body of one email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

/// Format a timestamp the way the es-ES locale prints a short date-time,
/// e.g. `7/3/2025, 9:05:01`.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format("%-d/%-m/%Y, %-H:%M:%S").to_string()
}

/// One `Label: value` line per field that has a value.
fn field_lines(submission: &ContactSubmission, fields: &[Field]) -> Markup {
    html! {
        @for field in fields {
            @if let Some(value) = submission.value(*field) {
                p { strong { (field.label()) ":" } " " (value) }
            }
        }
    }
}

/// Confirmation sent to the submitter.
pub fn render_confirmation(submission: &ContactSubmission) -> RenderedEmail {
    let markup = html! {
        div style=(CONTAINER_STYLE) {
            h1 style="color: #1a365d;" { "¡Gracias por tu interés en LexPro ERP!" }
            p { "Hola " strong { (submission.name()) } "," }
            p { "Hemos recibido tu consulta y nos pondremos en contacto contigo a la brevedad." }
            div style=(DETAILS_STYLE) {
                h3 { "Datos de tu consulta:" }
                (field_lines(submission, &[Field::Company, Field::Email, Field::Phone]))
                (field_lines(submission, &OPTIONAL_FIELDS))
            }
            p { "Nuestro equipo comercial se comunicará contigo en las próximas 24 horas." }
            p { "Saludos," br; strong { "Equipo LexPro ERP" } }
        }
    };

    RenderedEmail {
        subject: CONFIRMATION_SUBJECT.to_string(),
        html: markup.into_string(),
    }
}

/// Notification sent to the operator, stamped with `received_at`.
pub fn render_notification(
    submission: &ContactSubmission,
    received_at: &NaiveDateTime,
) -> RenderedEmail {
    let markup = html! {
        div style=(CONTAINER_STYLE) {
            h1 style="color: #dc2626;" { "Nueva consulta recibida" }
            div style=(DETAILS_STYLE) {
                h3 { "Datos del contacto:" }
                (field_lines(
                    submission,
                    &[Field::Name, Field::Email, Field::Phone, Field::Company],
                ))
                (field_lines(submission, &OPTIONAL_FIELDS))
            }
            p { strong { "Fecha:" } " " (format_timestamp(received_at)) }
        }
    };

    RenderedEmail {
        subject: format!("Nueva consulta de {} - LexPro ERP", submission.company()),
        html: markup.into_string(),
    }
}
