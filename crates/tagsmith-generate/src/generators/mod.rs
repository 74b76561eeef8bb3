use std::collections::BTreeMap;
use std::fmt;

use rand::RngCore;

use tagsmith_core::{TypeDescriptor, Value};

use crate::config::FakerConfig;
use crate::errors::{FakerError, FakerResult};

pub mod datetime;
pub mod geo;
pub mod identifiers;
pub mod lexical;
pub mod money;
pub mod network;
pub mod payment;
pub mod person;
pub mod phone;

/// Inputs handed to a provider.
pub struct ProviderContext<'a> {
    /// Directive name the provider was looked up by.
    pub tag: &'a str,
    /// Type the produced value must fit.
    pub ty: &'a TypeDescriptor,
    /// Value currently held by the target.
    pub current: &'a Value,
    pub config: &'a FakerConfig,
}

impl ProviderContext<'_> {
    pub fn unsupported(&self) -> FakerError {
        FakerError::TypeNotSupportedForTag {
            tag: self.tag.to_string(),
            ty: self.ty.to_string(),
        }
    }

    /// Wraps text for string targets, rejects everything else.
    pub fn text(&self, value: String) -> FakerResult<Value> {
        match self.ty.resolved() {
            TypeDescriptor::String => Ok(Value::String(value)),
            _ => Err(self.unsupported()),
        }
    }
}

/// Produces a value for a named directive.
pub trait Provider: Send + Sync {
    fn provide(&self, ctx: &ProviderContext<'_>, rng: &mut dyn RngCore) -> FakerResult<Value>;
}

impl<F> Provider for F
where
    F: Fn(&ProviderContext<'_>, &mut dyn RngCore) -> FakerResult<Value> + Send + Sync,
{
    fn provide(&self, ctx: &ProviderContext<'_>, rng: &mut dyn RngCore) -> FakerResult<Value> {
        self(ctx, rng)
    }
}

/// Provider for string-only generators.
pub(crate) struct TextProvider {
    produce: fn(&mut dyn RngCore) -> String,
}

impl TextProvider {
    pub(crate) fn new(produce: fn(&mut dyn RngCore) -> String) -> Self {
        Self { produce }
    }
}

impl Provider for TextProvider {
    fn provide(&self, ctx: &ProviderContext<'_>, rng: &mut dyn RngCore) -> FakerResult<Value> {
        ctx.text((self.produce)(rng))
    }
}

struct Entry {
    provider: Box<dyn Provider>,
    /// Built-in names also resolve through default synthesis for pointers.
    default_backed: bool,
}

/// Name to provider mapping used for directed synthesis.
pub struct GeneratorRegistry {
    entries: BTreeMap<String, Entry>,
}

impl GeneratorRegistry {
    /// Registry with every built-in provider.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        identifiers::register(&mut registry);
        network::register(&mut registry);
        payment::register(&mut registry);
        geo::register(&mut registry);
        phone::register(&mut registry);
        person::register(&mut registry);
        datetime::register(&mut registry);
        lexical::register(&mut registry);
        money::register(&mut registry);
        registry
    }

    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub(crate) fn register_builtin(&mut self, name: &'static str, provider: impl Provider + 'static) {
        self.entries.insert(
            name.to_string(),
            Entry {
                provider: Box::new(provider),
                default_backed: true,
            },
        );
    }

    /// Adds a provider under a new name.
    pub fn add_provider(
        &mut self,
        name: impl Into<String>,
        provider: impl Provider + 'static,
    ) -> FakerResult<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(FakerError::ProviderExists(name));
        }
        self.entries.insert(
            name,
            Entry {
                provider: Box::new(provider),
                default_backed: false,
            },
        );
        Ok(())
    }

    /// Swaps the provider behind an existing name, keeping its default flag.
    pub fn replace_provider(
        &mut self,
        name: &str,
        provider: impl Provider + 'static,
    ) -> FakerResult<()> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| FakerError::ProviderMissing(name.to_string()))?;
        entry.provider = Box::new(provider);
        Ok(())
    }

    /// Removes a provider added with [`GeneratorRegistry::add_provider`].
    pub fn remove_provider(&mut self, name: &str) -> FakerResult<()> {
        match self.entries.get(name) {
            None => Err(FakerError::ProviderMissing(name.to_string())),
            Some(entry) if entry.default_backed => {
                Err(FakerError::ProtectedProvider(name.to_string()))
            }
            Some(_) => {
                self.entries.remove(name);
                Ok(())
            }
        }
    }

    pub fn provider(&self, name: &str) -> Option<&dyn Provider> {
        self.entries.get(name).map(|entry| entry.provider.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_default(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|entry| entry.default_backed)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("names", &self.names())
            .finish()
    }
}
