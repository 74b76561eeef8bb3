use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use rand::RngCore;

use super::{GeneratorRegistry, TextProvider};

pub const WORD: &str = "word";
pub const SENTENCE: &str = "sentence";
pub const PARAGRAPH: &str = "paragraph";

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(WORD, TextProvider::new(word));
    registry.register_builtin(SENTENCE, TextProvider::new(sentence));
    registry.register_builtin(PARAGRAPH, TextProvider::new(paragraph));
}

fn word(rng: &mut dyn RngCore) -> String {
    Word().fake_with_rng(rng)
}

fn sentence(rng: &mut dyn RngCore) -> String {
    Sentence(4..10).fake_with_rng(rng)
}

fn paragraph(rng: &mut dyn RngCore) -> String {
    Paragraph(3..6).fake_with_rng(rng)
}
