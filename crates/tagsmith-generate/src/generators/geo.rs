use rand::{Rng, RngCore};

use tagsmith_core::{TypeDescriptor, Value, narrow_float};

use super::{GeneratorRegistry, ProviderContext};
use crate::errors::FakerResult;

pub const LATITUDE: &str = "lat";
pub const LONGITUDE: &str = "long";

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(LATITUDE, |ctx: &ProviderContext<'_>, rng: &mut dyn RngCore| {
        coordinate(ctx, 90.0, rng)
    });
    registry.register_builtin(LONGITUDE, |ctx: &ProviderContext<'_>, rng: &mut dyn RngCore| {
        coordinate(ctx, 180.0, rng)
    });
}

/// Coordinates only fit float fields.
fn coordinate(ctx: &ProviderContext<'_>, limit: f64, rng: &mut dyn RngCore) -> FakerResult<Value> {
    match ctx.ty.resolved() {
        TypeDescriptor::Float { float } => Ok(Value::Float(narrow_float(
            *float,
            rng.random_range(-limit..=limit),
        ))),
        _ => Err(ctx.unsupported()),
    }
}
