//! Tag-driven synthetic value generation.
//!
//! A [`Faker`] walks a [`TypeDescriptor`](tagsmith_core::TypeDescriptor) and
//! fills every position with plausible data. Struct fields carry textual
//! directives that select a named provider from the [`GeneratorRegistry`],
//! constrain strings, numbers and collections, or request values that are
//! unique per key.

pub mod config;
pub mod errors;
pub mod extract;
pub mod faker;
pub mod generators;
pub mod lang;
pub mod synth;
pub mod tags;
pub mod unique;

pub use config::{FakerConfig, NumberBoundary};
pub use errors::{FakerError, FakerResult};
pub use faker::Faker;
pub use generators::{GeneratorRegistry, Provider, ProviderContext};
pub use lang::Language;
pub use synth::Synthesizer;
pub use tags::FieldDirective;
pub use unique::UniquenessLedger;
