use rand::RngCore;

use super::{GeneratorRegistry, TextProvider};

pub const UUID_DIGIT: &str = "uuid_digit";
pub const UUID_HYPHENATED: &str = "uuid_hyphenated";

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(UUID_DIGIT, TextProvider::new(uuid_digit));
    registry.register_builtin(UUID_HYPHENATED, TextProvider::new(uuid_hyphenated));
}

fn random_uuid(rng: &mut dyn RngCore) -> uuid::Uuid {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    uuid::Uuid::from_bytes(bytes)
}

fn uuid_digit(rng: &mut dyn RngCore) -> String {
    random_uuid(rng).simple().to_string()
}

fn uuid_hyphenated(rng: &mut dyn RngCore) -> String {
    random_uuid(rng).hyphenated().to_string()
}
