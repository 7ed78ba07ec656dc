use std::fmt;

use crate::delegate::error::ValidationError;

/// Field names a delegate may be bound to, in declaration order.
pub const ALLOWED_FIELDS: [&str; 2] = ["image", "text"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Image,
    Text,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Image => "image",
            FieldName::Text => "text",
        }
    }

    /// Exact, case-sensitive match against the allow-list.
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        match name {
            "image" => Ok(FieldName::Image),
            "text" => Ok(FieldName::Text),
            other => Err(ValidationError::new(other)),
        }
    }
}

impl TryFrom<&str> for FieldName {
    type Error = ValidationError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        FieldName::parse(name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
