//! Core contracts for tagsmith.
//!
//! This crate defines the type descriptions the generator walks, the dynamic
//! values it produces, and small naming helpers shared across crates.

pub mod error;
pub mod naming;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use naming::is_exported;
pub use types::{FieldDescriptor, FloatKind, IntKind, OpaqueKind, StructDescriptor, TypeDescriptor};
pub use value::{Value, narrow_float};

/// Parses a JSON type description.
pub fn parse_type_description(json: &str) -> Result<TypeDescriptor> {
    Ok(serde_json::from_str(json)?)
}
