use fake::Fake;
use fake::faker::creditcard::en::CreditCardNumber;
use rand::{Rng, RngCore};

use super::{GeneratorRegistry, TextProvider};

pub const CC_NUMBER: &str = "cc_number";
pub const CC_TYPE: &str = "cc_type";

const CARD_TYPES: &[&str] = &[
    "VISA",
    "MasterCard",
    "American Express",
    "Discover",
    "JCB",
    "Diners Club",
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(CC_NUMBER, TextProvider::new(cc_number));
    registry.register_builtin(CC_TYPE, TextProvider::new(cc_type));
}

fn cc_number(rng: &mut dyn RngCore) -> String {
    CreditCardNumber().fake_with_rng(rng)
}

fn cc_type(rng: &mut dyn RngCore) -> String {
    CARD_TYPES[rng.random_range(0..CARD_TYPES.len())].to_string()
}
