use std::collections::BTreeMap;

use crate::{
    delegate::{
        binding::{Binding, bind},
        error::ValidationError,
        field::FieldName,
        identifier::Identifier,
    },
    trace::{
        logger::TraceLogger,
        trace::{TraceEvent, TraceKind},
    },
};

/// A record whose fields are all delegated to one identifier.
///
/// Every declared field is bound during `build`; a container that exists
/// has only valid, readable bindings.
#[derive(Debug, Clone)]
pub struct UiContainer {
    name: String,
    id: Identifier,
    bindings: BTreeMap<FieldName, Binding>,
}

impl UiContainer {
    pub fn build<S: AsRef<str>>(
        name: &str,
        fields: &[S],
        id: Identifier,
    ) -> Result<Self, ValidationError> {
        Self::build_traced(name, fields, id, &TraceLogger::disabled())
    }

    /// Bind `fields` in declaration order, stopping at the first invalid name.
    pub fn build_traced<S: AsRef<str>>(
        name: &str,
        fields: &[S],
        id: Identifier,
        tracer: &TraceLogger,
    ) -> Result<Self, ValidationError> {
        let mut bindings = BTreeMap::new();

        for field in fields {
            let field = field.as_ref();
            let binding = match bind(field, id.clone()) {
                Ok(b) => b,
                Err(e) => {
                    tracer.log(
                        &TraceEvent::now(tracer.next_seq(), name, TraceKind::Rejected, field)
                            .with_error(&e),
                    );
                    return Err(e);
                }
            };

            // Later declarations of the same field are no-ops
            if bindings.contains_key(&binding.field()) {
                tracer.log(&TraceEvent::now(
                    tracer.next_seq(),
                    name,
                    TraceKind::Duplicate,
                    field,
                ));
                continue;
            }

            tracer.log(
                &TraceEvent::now(tracer.next_seq(), name, TraceKind::Bind, field)
                    .with_value(binding.read()),
            );
            bindings.insert(binding.field(), binding);
        }

        Ok(Self {
            name: name.to_string(),
            id,
            bindings,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> &Identifier {
        &self.id
    }

    /// Read a declared field. Undeclared and invalid names both yield `None`.
    pub fn get(&self, field: &str) -> Option<String> {
        let field = FieldName::parse(field).ok()?;
        self.bindings.get(&field).map(Binding::read)
    }

    pub fn get_traced(&self, field: &str, tracer: &TraceLogger) -> Option<String> {
        let value = self.get(field);
        let event = TraceEvent::now(tracer.next_seq(), &self.name, TraceKind::Read, field);
        let event = match &value {
            Some(v) => event.with_value(v),
            None => event.with_error("field not declared"),
        };
        tracer.log(&event);
        value
    }

    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    /// Every declared field's value, keyed by field name.
    pub fn values(&self) -> BTreeMap<String, String> {
        self.bindings
            .iter()
            .map(|(field, binding)| (field.as_str().to_string(), binding.read()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
