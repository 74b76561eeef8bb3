use fake::Fake;
use fake::faker::currency::en::CurrencyCode;
use rand::{Rng, RngCore};

use tagsmith_core::{TypeDescriptor, Value, narrow_float};

use super::{GeneratorRegistry, ProviderContext, TextProvider};
use crate::errors::FakerResult;

pub const CURRENCY: &str = "currency";
pub const AMOUNT: &str = "amount";
pub const AMOUNT_WITH_CURRENCY: &str = "amount_with_currency";

const MAX_AMOUNT: f64 = 10_000.0;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(CURRENCY, TextProvider::new(currency));
    registry.register_builtin(AMOUNT, amount);
    registry.register_builtin(AMOUNT_WITH_CURRENCY, TextProvider::new(amount_with_currency));
}

fn currency(rng: &mut dyn RngCore) -> String {
    CurrencyCode().fake_with_rng(rng)
}

fn random_amount(rng: &mut dyn RngCore) -> f64 {
    (rng.random_range(0.0..MAX_AMOUNT) * 100.0).round() / 100.0
}

/// Amounts fit float fields, or strings with two decimals.
fn amount(ctx: &ProviderContext<'_>, rng: &mut dyn RngCore) -> FakerResult<Value> {
    let value = random_amount(rng);
    match ctx.ty.resolved() {
        TypeDescriptor::Float { float } => Ok(Value::Float(narrow_float(*float, value))),
        TypeDescriptor::String => Ok(Value::String(format!("{value:.2}"))),
        _ => Err(ctx.unsupported()),
    }
}

fn amount_with_currency(rng: &mut dyn RngCore) -> String {
    let code = currency(rng);
    format!("{code} {:.2}", random_amount(rng))
}
