use serde::{Deserialize, Serialize};

use crate::{
    container::ui::UiContainer,
    delegate::identifier::{Identifier, new_identifier},
    layout::error::LayoutError,
    trace::logger::TraceLogger,
};

/// A declarative container description, usually deserialized from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutSpec {
    /// Container name, used in reports and trace events
    pub name: String,

    /// Where the container's identifier comes from
    #[serde(default)]
    pub identifier: IdentifierSpec,

    /// Field names to bind, in declaration order
    #[serde(default)]
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum IdentifierSpec {
    /// The canonical 100/101 identifier
    #[default]
    Canonical,

    /// Both sub-identifiers given verbatim
    Explicit { image_id: String, text_id: String },

    /// `image_id = base`, `text_id = base + 1`
    Sequential { base: u64 },

    /// Fingerprint of a resource key
    Resource { key: String },
}

impl IdentifierSpec {
    pub fn resolve(&self) -> Identifier {
        match self {
            IdentifierSpec::Canonical => new_identifier(),
            IdentifierSpec::Explicit { image_id, text_id } => {
                Identifier::new(image_id.as_str(), text_id.as_str())
            }
            IdentifierSpec::Sequential { base } => Identifier::sequential(*base),
            IdentifierSpec::Resource { key } => Identifier::from_resource(key),
        }
    }
}

impl LayoutSpec {
    /// Build the container this layout describes.
    pub fn assemble(&self, tracer: &TraceLogger) -> Result<UiContainer, LayoutError> {
        UiContainer::build_traced(&self.name, &self.fields, self.identifier.resolve(), tracer)
            .map_err(|source| LayoutError::Validation {
                layout: self.name.clone(),
                source,
            })
    }
}
