use crate::delegate::{error::ValidationError, field::FieldName, identifier::Identifier};

/// A validated association between a field name and its identifier.
///
/// Only `bind` constructs a `Binding`, so holding one means the name has
/// already passed the allow-list check. There is no way to unbind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    field: FieldName,
    id: Identifier,
}

impl Binding {
    pub fn field(&self) -> FieldName {
        self.field
    }

    pub fn identifier(&self) -> &Identifier {
        &self.id
    }

    pub fn read(&self) -> String {
        read(self)
    }
}

/// Validate `field_name` and bind it to `id`.
pub fn bind(field_name: &str, id: Identifier) -> Result<Binding, ValidationError> {
    let field = FieldName::parse(field_name)?;
    Ok(Binding { field, id })
}

/// Derive the delegated value: `<field>_<sub-identifier>`.
pub fn read(binding: &Binding) -> String {
    let suffix = match binding.field {
        FieldName::Image => binding.id.image_id(),
        FieldName::Text => binding.id.text_id(),
    };
    format!("{}_{}", binding.field.as_str(), suffix)
}
