//! Type-directed synthesis.
//!
//! [`Synthesizer`] walks a [`TypeDescriptor`] and builds a [`Value`]. Untagged
//! positions follow the structural rules of their kind; tagged struct fields
//! go through the registry first and fall back to the extractors.

use chrono::{Duration, Utc};
use rand::{Rng, RngCore};
use tracing::debug;

use tagsmith_core::{FieldDescriptor, StructDescriptor, TypeDescriptor, Value, is_exported};

use crate::config::FakerConfig;
use crate::errors::{FakerError, FakerResult};
use crate::extract::{
    narrow_int, number_from_tag, slice_length, string_from_tag, strip_slice_length,
};
use crate::generators::{GeneratorRegistry, ProviderContext};
use crate::lang::ascii_letters;
use crate::tags::FieldDirective;
use crate::unique::UniquenessLedger;

/// Structs with this many fields or more are rejected.
pub const MAX_STRUCT_FIELDS: usize = 10;
/// Pointers at this depth or deeper are left nil.
pub const MAX_POINTER_DEPTH: usize = 2;
/// Exclusive upper bound for untagged string lengths.
const UNTAGGED_STRING_MAX: usize = 28;
/// Largest offset from now for synthesized timestamps.
const TIME_OFFSET_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// One synthesis pass over borrowed configuration, registry and ledger.
pub struct Synthesizer<'a> {
    config: &'a FakerConfig,
    registry: &'a GeneratorRegistry,
    ledger: &'a UniquenessLedger,
    rng: &'a mut dyn RngCore,
}

impl<'a> Synthesizer<'a> {
    pub fn new(
        config: &'a FakerConfig,
        registry: &'a GeneratorRegistry,
        ledger: &'a UniquenessLedger,
        rng: &'a mut dyn RngCore,
    ) -> Self {
        Self {
            config,
            registry,
            ledger,
            rng,
        }
    }

    /// Builds a fresh value for `ty`.
    pub fn synthesize(&mut self, ty: &TypeDescriptor, depth: usize) -> FakerResult<Value> {
        self.synthesize_from(ty, None, depth)
    }

    /// Builds a value for `ty`; `original` feeds skipped, kept and unsettable
    /// struct fields.
    pub fn synthesize_from(
        &mut self,
        ty: &TypeDescriptor,
        original: Option<&Value>,
        depth: usize,
    ) -> FakerResult<Value> {
        match ty {
            TypeDescriptor::Pointer { to } => {
                if depth >= MAX_POINTER_DEPTH {
                    return Ok(Value::Null);
                }
                let pointee = original.and_then(Value::pointee);
                let value = self.synthesize_from(to, pointee, depth + 1)?;
                Ok(Value::Pointer(Box::new(value)))
            }
            TypeDescriptor::Time => {
                let offset = self
                    .rng
                    .random_range(-TIME_OFFSET_SECONDS..=TIME_OFFSET_SECONDS);
                Ok(Value::Time(Utc::now() + Duration::seconds(offset)))
            }
            TypeDescriptor::Struct(desc) => self.synthesize_struct(desc, original, depth),
            TypeDescriptor::String => {
                let len = self.rng.random_range(0..UNTAGGED_STRING_MAX);
                Ok(Value::String(ascii_letters(len, self.rng)))
            }
            TypeDescriptor::Slice { of } => {
                let len = self.config.collection_size(self.rng);
                if len == 0 && self.config.nil_if_len_zero {
                    return Ok(Value::Null);
                }
                let items = (0..len)
                    .map(|_| self.synthesize(of, depth))
                    .collect::<FakerResult<Vec<_>>>()?;
                Ok(Value::List(items))
            }
            TypeDescriptor::Array { of, len } => {
                let items = (0..*len)
                    .map(|_| self.synthesize(of, depth + 1))
                    .collect::<FakerResult<Vec<_>>>()?;
                Ok(Value::List(items))
            }
            TypeDescriptor::Map { key, value } => {
                ensure_exported(key)?;
                ensure_exported(value)?;
                let len = self.config.collection_size(self.rng);
                if len == 0 && self.config.nil_if_len_zero {
                    return Ok(Value::Null);
                }
                let mut entries = Vec::with_capacity(len);
                for _ in 0..len {
                    let entry_key = self.synthesize(key, depth)?;
                    let entry_value = self.synthesize(value, depth)?;
                    Value::insert_entry(&mut entries, entry_key, entry_value);
                }
                Ok(Value::Map(entries))
            }
            TypeDescriptor::Int { int } => {
                if !self.config.randomize_numbers {
                    return Ok(ty.zero_value());
                }
                let raw = self.config.number_boundary.random_int(self.rng);
                Ok(narrow_int(*int, raw))
            }
            TypeDescriptor::Float { float } => {
                if !self.config.randomize_numbers {
                    return Ok(ty.zero_value());
                }
                let value = self.config.number_boundary.random_float(*float, self.rng);
                Ok(Value::Float(value))
            }
            TypeDescriptor::Bool => {
                if !self.config.randomize_numbers {
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(self.rng.random_bool(0.5)))
            }
            TypeDescriptor::Named { ty: inner, .. } => self.synthesize_from(inner, original, depth),
            TypeDescriptor::Opaque { opaque } => {
                Err(FakerError::UnsupportedKind(opaque.as_str().to_string()))
            }
        }
    }

    /// Resolves `directive` for a pointer target and stores the result in
    /// its pointee.
    pub fn apply_directive(
        &mut self,
        ty: &TypeDescriptor,
        target: &mut Value,
        directive: &str,
    ) -> FakerResult<()> {
        let TypeDescriptor::Pointer { to } = ty.resolved() else {
            return Err(FakerError::NotAPointer(ty.to_string()));
        };
        let current = target
            .pointee()
            .cloned()
            .unwrap_or_else(|| to.zero_value());
        let value = self.resolve_directive(to, &current, directive, 0)?;
        *target = Value::Pointer(Box::new(value));
        Ok(())
    }

    fn synthesize_struct(
        &mut self,
        desc: &StructDescriptor,
        original: Option<&Value>,
        depth: usize,
    ) -> FakerResult<Value> {
        if desc.fields.len() >= MAX_STRUCT_FIELDS {
            return Err(FakerError::TooManyFields {
                name: desc.name.clone(),
                count: desc.fields.len(),
            });
        }

        let mut fields = Vec::with_capacity(desc.fields.len());
        for field in &desc.fields {
            let previous = original
                .and_then(|value| value.field(&field.name))
                .cloned()
                .unwrap_or_else(|| field.ty.zero_value());
            let value = self.synthesize_field(field, previous, depth)?;
            fields.push((field.name.clone(), value));
        }
        Ok(Value::Struct(fields))
    }

    fn synthesize_field(
        &mut self,
        field: &FieldDescriptor,
        previous: Value,
        depth: usize,
    ) -> FakerResult<Value> {
        if !field.settable {
            return Ok(previous);
        }
        let directive = FieldDirective::parse(&field.tag);
        if directive.is_skip() || (directive.keep_original && !previous.is_zero()) {
            return Ok(previous);
        }
        if !directive.unique {
            return self.produce_field(field, &directive, &previous, depth);
        }

        let key = if directive.is_structural() {
            field.name.as_str()
        } else {
            directive.generator.as_str()
        };
        let ledger = self.ledger;
        let retries = self.config.max_unique_retries;
        ledger.generate_unique(key, retries, || {
            self.produce_field(field, &directive, &previous, depth)
        })
    }

    fn produce_field(
        &mut self,
        field: &FieldDescriptor,
        directive: &FieldDirective,
        previous: &Value,
        depth: usize,
    ) -> FakerResult<Value> {
        if directive.is_structural() {
            return self.synthesize(&field.ty, depth);
        }
        debug!(
            field = %field.name,
            directive = %directive.generator,
            "resolving tagged field"
        );
        self.resolve_directive(&field.ty, previous, &directive.generator, depth)
    }

    fn resolve_directive(
        &mut self,
        ty: &TypeDescriptor,
        current: &Value,
        name: &str,
        depth: usize,
    ) -> FakerResult<Value> {
        let registry = self.registry;
        let config = self.config;
        let registered = registry.contains(name);

        match ty.resolved() {
            TypeDescriptor::Pointer { to } => {
                if !registered {
                    return Err(FakerError::UnsupportedTag(name.to_string()));
                }
                if !registry.is_default(name) {
                    return self.call_provider(name, ty, current);
                }
                let fresh = to.zero_value();
                let value = self.call_provider(name, to, &fresh)?;
                Ok(Value::Pointer(Box::new(value)))
            }
            _ if registered => self.call_provider(name, ty, current),
            TypeDescriptor::String => Ok(Value::String(string_from_tag(name, config, self.rng)?)),
            TypeDescriptor::Int { .. } | TypeDescriptor::Float { .. } => {
                number_from_tag(name, ty, self.rng)
            }
            TypeDescriptor::Slice { of } => {
                let len = slice_length(name, config, self.rng)?;
                self.tagged_elements(of, name, len, depth)
            }
            TypeDescriptor::Array { of, len } => self.tagged_elements(of, name, *len, depth),
            TypeDescriptor::Map { key, value } => {
                ensure_exported(key)?;
                ensure_exported(value)?;
                let len = config.collection_size(self.rng);
                if len == 0 && config.nil_if_len_zero {
                    return Ok(Value::Null);
                }
                let mut entries = Vec::with_capacity(len);
                for _ in 0..len {
                    let entry_key = self.value_with_tag(key, name)?;
                    let entry_value = self.value_with_tag(value, name)?;
                    Value::insert_entry(&mut entries, entry_key, entry_value);
                }
                Ok(Value::Map(entries))
            }
            _ => Err(FakerError::UnsupportedTag(name.to_string())),
        }
    }

    fn call_provider(&mut self, name: &str, ty: &TypeDescriptor, current: &Value) -> FakerResult<Value> {
        let registry = self.registry;
        let provider = registry
            .provider(name)
            .ok_or_else(|| FakerError::UnsupportedTag(name.to_string()))?;
        let ctx = ProviderContext {
            tag: name,
            ty,
            current,
            config: self.config,
        };
        provider.provide(&ctx, self.rng)
    }

    /// Elements for a tagged slice or array. A registered residual tag drives
    /// each element through its provider; without element arguments the
    /// elements are synthesized structurally.
    fn tagged_elements(
        &mut self,
        of: &TypeDescriptor,
        tag: &str,
        len: usize,
        depth: usize,
    ) -> FakerResult<Value> {
        let residual = strip_slice_length(tag);
        let residual = residual.trim();
        let registered = self.registry.contains(residual);
        let items = (0..len)
            .map(|_| {
                if residual.is_empty() {
                    self.synthesize(of, depth)
                } else if registered {
                    self.call_provider(residual, of, &of.zero_value())
                } else {
                    self.value_with_tag(of, residual)
                }
            })
            .collect::<FakerResult<Vec<_>>>()?;
        Ok(Value::List(items))
    }

    /// Collection element driven by the extractors for its kind.
    fn value_with_tag(&mut self, ty: &TypeDescriptor, tag: &str) -> FakerResult<Value> {
        match ty.resolved() {
            TypeDescriptor::Int { .. } | TypeDescriptor::Float { .. } => {
                number_from_tag(tag, ty, self.rng)
            }
            TypeDescriptor::String => Ok(Value::String(string_from_tag(
                tag,
                self.config,
                self.rng,
            )?)),
            _ => Err(FakerError::UnsupportedKind(format!(
                "{ty} elements cannot be generated from tag \"{tag}\""
            ))),
        }
    }
}

/// Map keys and values must not use unexported named types.
fn ensure_exported(ty: &TypeDescriptor) -> FakerResult<()> {
    match ty.type_name() {
        Some(name) if !is_exported(name) => {
            Err(FakerError::UnexportedFieldKind(name.to_string()))
        }
        _ => Ok(()),
    }
}
