use std::env;

use tagsmith_core::{FieldDescriptor, IntKind, StructDescriptor, TypeDescriptor};
use tagsmith_generate::Faker;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed = env::args()
        .nth(1)
        .map(|raw| raw.parse::<u64>())
        .transpose()?
        .unwrap_or(42);

    let ty = TypeDescriptor::Struct(StructDescriptor::new(
        "Customer",
        vec![
            FieldDescriptor::tagged("Id", TypeDescriptor::String, "uuid_hyphenated,unique"),
            FieldDescriptor::tagged("Name", TypeDescriptor::String, "name"),
            FieldDescriptor::tagged("Email", TypeDescriptor::String, "email"),
            FieldDescriptor::tagged(
                "Age",
                TypeDescriptor::int(IntKind::U8),
                "boundary_start=18,boundary_end=90",
            ),
            FieldDescriptor::tagged(
                "Tags",
                TypeDescriptor::slice(TypeDescriptor::String),
                "len=6,slice_len=3",
            ),
            FieldDescriptor::new("Joined", TypeDescriptor::Time),
        ],
    ));

    let mut faker = Faker::seeded(seed);
    let mut value = ty.zero_value();
    faker.fake_data(&ty, &mut value)?;
    println!("{}", serde_json::to_string_pretty(&value.to_json())?);
    Ok(())
}
