use std::fmt;

use crate::delegate::error::ValidationError;

#[derive(Debug)]
pub enum LayoutError {
    /// Layout file or directory could not be read
    Read { path: String, source: std::io::Error },

    /// YAML did not match the layout model
    Parse { path: String, source: serde_yaml::Error },

    /// Report or value serialization failed
    Serialize { context: String, source: serde_json::Error },

    /// A declared field failed the allow-list check during assembly
    Validation { layout: String, source: ValidationError },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Read { path, source } => {
                write!(f, "Failed to read layout '{}': {}", path, source)
            }
            LayoutError::Parse { path, source } => {
                write!(f, "Failed to parse layout '{}': {}", path, source)
            }
            LayoutError::Serialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            LayoutError::Validation { layout, source } => {
                write!(f, "Layout '{}' rejected: {}", layout, source)
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Read { source, .. } => Some(source),
            LayoutError::Parse { source, .. } => Some(source),
            LayoutError::Serialize { source, .. } => Some(source),
            LayoutError::Validation { source, .. } => Some(source),
        }
    }
}
