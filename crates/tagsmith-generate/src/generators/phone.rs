use fake::Fake;
use fake::faker::phone_number::en::PhoneNumber;
use rand::{Rng, RngCore};

use super::{GeneratorRegistry, TextProvider};

pub const PHONE_NUMBER: &str = "phone_number";
pub const TOLL_FREE_NUMBER: &str = "toll_free_number";
pub const E164_PHONE_NUMBER: &str = "e_164_phone_number";

const TOLL_FREE_PREFIXES: &[&str] = &["800", "833", "844", "855", "866", "877", "888"];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(PHONE_NUMBER, TextProvider::new(phone_number));
    registry.register_builtin(TOLL_FREE_NUMBER, TextProvider::new(toll_free_number));
    registry.register_builtin(E164_PHONE_NUMBER, TextProvider::new(e164_phone_number));
}

fn phone_number(rng: &mut dyn RngCore) -> String {
    PhoneNumber().fake_with_rng(rng)
}

fn toll_free_number(rng: &mut dyn RngCore) -> String {
    let prefix = TOLL_FREE_PREFIXES[rng.random_range(0..TOLL_FREE_PREFIXES.len())];
    format!(
        "({prefix}) {:03}-{:04}",
        rng.random_range(200..1000),
        rng.random_range(0..10000)
    )
}

fn e164_phone_number(rng: &mut dyn RngCore) -> String {
    format!(
        "+{}{:010}",
        rng.random_range(1..100),
        rng.random_range(0..10_000_000_000_u64)
    )
}
