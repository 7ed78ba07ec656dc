use std::fmt;

use crate::delegate::field::ALLOWED_FIELDS;

/// Raised by `bind` when a field name is outside the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid delegated field '{}' (expected one of: {})",
            self.field,
            ALLOWED_FIELDS.join(", ")
        )
    }
}

impl std::error::Error for ValidationError {}
