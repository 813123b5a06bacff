//! Domain validation errors.

use super::field::Field;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required value missing or shorter than its minimum.
    TooShort { field: Field, min: usize },

    /// Value longer than its maximum.
    TooLong { field: Field, max: usize },

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::TooShort { field, .. } | Self::TooLong { field, .. } => *field,
            Self::InvalidEmail(_) => Field::Email,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { field, .. } => f.write_str(field.too_short_message()),
            Self::TooLong { field, .. } => f.write_str(field.too_long_message()),
            Self::InvalidEmail(_) => f.write_str(Field::Email.too_short_message()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every validation failure of one submission, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, keeping the first one reported for a field.
    pub fn push(&mut self, error: ValidationError) {
        self.0.entry(error.field()).or_insert(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Human-readable message for a field, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in self.0.values() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field(), error)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

// Serializes as `{ "<wire key>": "<message>" }`
impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field.key(), &error.to_string())?;
        }
        map.end()
    }
}
