pub mod error;
pub mod layout_model;
pub mod loader;
