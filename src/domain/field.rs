//! Contact form fields and their bounds.

use std::fmt;

/// One field of the contact form.
///
/// Variants are declared in form order, which is also the iteration order of
/// [`FieldErrors`](super::FieldErrors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Role,
    EmployeeCount,
    Message,
}

/// Length bounds for a single field, counted in characters after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Minimum length; only enforced for required fields
    pub min: usize,
    /// Maximum length
    pub max: usize,
    /// Whether the field must be present
    pub required: bool,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Role,
        Field::EmployeeCount,
        Field::Message,
    ];

    /// JSON key used on the wire and in form maps.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "nombre",
            Field::Email => "email",
            Field::Phone => "telefono",
            Field::Company => "empresa",
            Field::Role => "cargo",
            Field::EmployeeCount => "empleados",
            Field::Message => "mensaje",
        }
    }

    /// Label used in rendered emails.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nombre",
            Field::Email => "Email",
            Field::Phone => "Teléfono",
            Field::Company => "Empresa",
            Field::Role => "Cargo",
            Field::EmployeeCount => "Empleados",
            Field::Message => "Mensaje",
        }
    }

    /// Look a field up by its wire key.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn rule(self) -> FieldRule {
        let (min, max, required) = match self {
            Field::Name => (2, 100, true),
            Field::Email => (1, 100, true),
            Field::Phone => (8, 20, true),
            Field::Company => (2, 200, true),
            Field::Role => (0, 100, false),
            Field::EmployeeCount => (0, 50, false),
            Field::Message => (0, 1000, false),
        };
        FieldRule { min, max, required }
    }

    /// Message shown when a value is shorter than the minimum.
    pub(crate) fn too_short_message(self) -> &'static str {
        match self {
            Field::Name => "El nombre debe tener al menos 2 caracteres",
            Field::Email => "Por favor ingresa un email válido",
            Field::Phone => "El teléfono debe tener al menos 8 caracteres",
            Field::Company => "El nombre de la empresa debe tener al menos 2 caracteres",
            Field::Role | Field::EmployeeCount | Field::Message => "Este campo es obligatorio",
        }
    }

    /// Message shown when a value is longer than the maximum.
    pub(crate) fn too_long_message(self) -> &'static str {
        match self {
            Field::Name => "El nombre es demasiado largo",
            Field::Email => "El email es demasiado largo",
            Field::Phone => "El teléfono es demasiado largo",
            Field::Company => "El nombre de la empresa es demasiado largo",
            Field::Role => "El cargo es demasiado largo",
            Field::EmployeeCount => "Este campo es demasiado largo",
            Field::Message => "El mensaje es demasiado largo",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
