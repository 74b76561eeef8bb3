use fake::Fake;
use fake::faker::name::en::{FirstName, LastName, Name};
use rand::{Rng, RngCore};

use super::{GeneratorRegistry, TextProvider};

pub const TITLE_MALE: &str = "title_male";
pub const TITLE_FEMALE: &str = "title_female";
pub const FIRST_NAME: &str = "first_name";
pub const FIRST_NAME_MALE: &str = "first_name_male";
pub const FIRST_NAME_FEMALE: &str = "first_name_female";
pub const LAST_NAME: &str = "last_name";
pub const NAME: &str = "name";
pub const GENDER: &str = "gender";

const TITLES_MALE: &[&str] = &["Mr.", "Dr.", "Prof.", "Lord", "King", "Prince"];
const TITLES_FEMALE: &[&str] = &[
    "Mrs.", "Ms.", "Miss", "Dr.", "Prof.", "Lady", "Queen", "Princess",
];
const FIRST_NAMES_MALE: &[&str] = &[
    "Aaron", "Benjamin", "Carlos", "Daniel", "Elijah", "Felix", "Gabriel", "Henry", "Isaac",
    "James", "Kevin", "Liam", "Mateo", "Noah", "Oscar", "Peter", "Samuel", "Thomas", "Victor",
    "William",
];
const FIRST_NAMES_FEMALE: &[&str] = &[
    "Abigail", "Beatrice", "Camila", "Diana", "Emma", "Fiona", "Grace", "Hannah", "Isabella",
    "Julia", "Katherine", "Lucy", "Maria", "Nora", "Olivia", "Penelope", "Rose", "Sofia",
    "Valentina", "Zoe",
];
const GENDERS: &[&str] = &["Male", "Female", "Prefer to skip"];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(TITLE_MALE, TextProvider::new(|rng| pick(TITLES_MALE, rng)));
    registry.register_builtin(TITLE_FEMALE, TextProvider::new(|rng| pick(TITLES_FEMALE, rng)));
    registry.register_builtin(FIRST_NAME, TextProvider::new(first_name));
    registry.register_builtin(
        FIRST_NAME_MALE,
        TextProvider::new(|rng| pick(FIRST_NAMES_MALE, rng)),
    );
    registry.register_builtin(
        FIRST_NAME_FEMALE,
        TextProvider::new(|rng| pick(FIRST_NAMES_FEMALE, rng)),
    );
    registry.register_builtin(LAST_NAME, TextProvider::new(last_name));
    registry.register_builtin(NAME, TextProvider::new(name));
    registry.register_builtin(GENDER, TextProvider::new(|rng| pick(GENDERS, rng)));
}

pub(crate) fn pick(values: &[&str], rng: &mut dyn RngCore) -> String {
    values[rng.random_range(0..values.len())].to_string()
}

fn first_name(rng: &mut dyn RngCore) -> String {
    FirstName().fake_with_rng(rng)
}

fn last_name(rng: &mut dyn RngCore) -> String {
    LastName().fake_with_rng(rng)
}

fn name(rng: &mut dyn RngCore) -> String {
    Name().fake_with_rng(rng)
}
