pub mod binding;
pub mod error;
pub mod field;
pub mod identifier;
