//! Delegated-field binding: a field name is validated against a fixed
//! allow-list once, at bind time, and every later read derives its value
//! from an immutable identifier.

pub mod cli;
pub mod container;
pub mod delegate;
pub mod layout;
pub mod report;
pub mod trace;

pub use container::ui::UiContainer;
pub use delegate::{
    binding::{Binding, bind, read},
    error::ValidationError,
    field::{ALLOWED_FIELDS, FieldName},
    identifier::{Identifier, new_identifier},
};
