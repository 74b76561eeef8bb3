use std::net::{Ipv4Addr, Ipv6Addr};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tagsmith_core::{FieldDescriptor, FloatKind, IntKind, StructDescriptor, TypeDescriptor, Value};
use tagsmith_generate::errors::{FakerError, FakerResult};
use tagsmith_generate::generators::{GeneratorRegistry, ProviderContext};
use tagsmith_generate::{Faker, FakerConfig};

fn provide(registry: &GeneratorRegistry, name: &str, ty: &TypeDescriptor) -> FakerResult<Value> {
    let config = FakerConfig::default();
    let current = ty.zero_value();
    let ctx = ProviderContext {
        tag: name,
        ty,
        current: &current,
        config: &config,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    registry
        .provider(name)
        .expect("provider exists")
        .provide(&ctx, &mut rng)
}

fn text(registry: &GeneratorRegistry, name: &str) -> String {
    match provide(registry, name, &TypeDescriptor::String) {
        Ok(Value::String(text)) => text,
        other => panic!("{name} should produce text, got {other:?}"),
    }
}

#[test]
fn registry_names_are_sorted_and_unique() {
    let registry = GeneratorRegistry::new();
    let names = registry.names();
    assert!(!names.is_empty());

    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(names, sorted);

    for name in [
        "email",
        "uuid_hyphenated",
        "uuid_digit",
        "cc_number",
        "lat",
        "long",
        "phone_number",
        "e_164_phone_number",
        "first_name",
        "gender",
        "unix_time",
        "timestamp",
        "sentence",
        "currency",
        "amount",
        "jwt",
    ] {
        assert!(registry.contains(name), "{name} should be registered");
        assert!(registry.is_default(name));
    }
}

#[test]
fn every_text_provider_fills_strings() {
    let registry = GeneratorRegistry::new();
    let numeric_only = ["lat", "long"];
    for name in registry.names() {
        if numeric_only.contains(&name) {
            continue;
        }
        let value = provide(&registry, name, &TypeDescriptor::String);
        assert!(
            matches!(value, Ok(Value::String(ref text)) if !text.is_empty()),
            "{name} produced {value:?}"
        );
    }
}

#[test]
fn identifier_and_network_shapes() {
    let registry = GeneratorRegistry::new();

    let digit = text(&registry, "uuid_digit");
    assert_eq!(digit.len(), 32);
    assert!(digit.chars().all(|ch| ch.is_ascii_hexdigit()));

    let hyphenated = text(&registry, "uuid_hyphenated");
    assert_eq!(hyphenated.len(), 36);
    assert_eq!(hyphenated.matches('-').count(), 4);

    assert!(text(&registry, "ipv4").parse::<Ipv4Addr>().is_ok());
    assert!(text(&registry, "ipv6").parse::<Ipv6Addr>().is_ok());
    assert!(text(&registry, "email").contains('@'));
    assert!(text(&registry, "url").starts_with("http"));
    assert_eq!(text(&registry, "jwt").split('.').count(), 3);
    assert_eq!(text(&registry, "mac_address").split(':').count(), 6);
}

#[test]
fn phone_shapes() {
    let registry = GeneratorRegistry::new();

    let e164 = text(&registry, "e_164_phone_number");
    assert!(e164.starts_with('+'));
    assert!(e164[1..].chars().all(|ch| ch.is_ascii_digit()));

    let toll_free = text(&registry, "toll_free_number");
    assert!(toll_free.starts_with('('));
    assert_eq!(toll_free.len(), "(800) 123-4567".len());
}

#[test]
fn typed_providers_reject_other_kinds() {
    let registry = GeneratorRegistry::new();

    let lat = provide(&registry, "lat", &TypeDescriptor::float(FloatKind::F64));
    assert!(matches!(lat, Ok(Value::Float(v)) if (-90.0..=90.0).contains(&v)));
    let long = provide(&registry, "long", &TypeDescriptor::float(FloatKind::F32));
    assert!(matches!(long, Ok(Value::Float(v)) if (-180.0..=180.0).contains(&v)));
    assert!(matches!(
        provide(&registry, "lat", &TypeDescriptor::String),
        Err(FakerError::TypeNotSupportedForTag { .. })
    ));

    let unix = provide(&registry, "unix_time", &TypeDescriptor::int(IntKind::I64));
    assert!(matches!(unix, Ok(Value::Int(seconds)) if seconds >= 0));
    assert!(matches!(
        provide(&registry, "unix_time", &TypeDescriptor::int(IntKind::I32)),
        Err(FakerError::TypeNotSupportedForTag { .. })
    ));

    assert!(matches!(
        provide(&registry, "timestamp", &TypeDescriptor::Time),
        Ok(Value::Time(_))
    ));
    assert!(matches!(
        provide(&registry, "email", &TypeDescriptor::int(IntKind::I32)),
        Err(FakerError::TypeNotSupportedForTag { .. })
    ));

    let amount = provide(&registry, "amount", &TypeDescriptor::float(FloatKind::F64));
    assert!(matches!(amount, Ok(Value::Float(v)) if (0.0..10_000.0).contains(&v)));
}

#[test]
fn custom_providers_can_be_added_replaced_and_removed() {
    let mut registry = GeneratorRegistry::new();
    let fixed = |_: &ProviderContext<'_>, _: &mut dyn RngCore| -> FakerResult<Value> {
        Ok(Value::String("fixed".to_string()))
    };

    registry.add_provider("fixed", fixed).expect("new name");
    assert!(registry.contains("fixed"));
    assert!(!registry.is_default("fixed"));
    assert!(matches!(
        registry.add_provider("fixed", fixed),
        Err(FakerError::ProviderExists(_))
    ));

    assert!(matches!(
        registry.remove_provider("email"),
        Err(FakerError::ProtectedProvider(_))
    ));
    registry.replace_provider("email", fixed).expect("email exists");
    assert_eq!(text(&registry, "email"), "fixed");
    assert!(registry.is_default("email"));

    registry.remove_provider("fixed").expect("custom provider removes");
    assert!(!registry.contains("fixed"));
    assert!(matches!(
        registry.remove_provider("fixed"),
        Err(FakerError::ProviderMissing(_))
    ));
    assert!(matches!(
        registry.replace_provider("nope", fixed),
        Err(FakerError::ProviderMissing(_))
    ));
}

#[test]
fn custom_providers_drive_struct_fields() {
    let mut faker = Faker::seeded(3);
    faker
        .registry_mut()
        .add_provider(
            "status_code",
            |ctx: &ProviderContext<'_>, _: &mut dyn RngCore| -> FakerResult<Value> {
                match ctx.ty.resolved() {
                    TypeDescriptor::Int { .. } => Ok(Value::Int(200)),
                    TypeDescriptor::Pointer { .. } => {
                        Ok(Value::Pointer(Box::new(Value::Int(404))))
                    }
                    _ => Err(ctx.unsupported()),
                }
            },
        )
        .expect("new name");

    let ty = TypeDescriptor::Struct(StructDescriptor::new(
        "Response",
        vec![
            FieldDescriptor::tagged("Code", TypeDescriptor::int(IntKind::I32), "status_code"),
            FieldDescriptor::tagged(
                "Fallback",
                TypeDescriptor::pointer(TypeDescriptor::int(IntKind::I32)),
                "status_code",
            ),
        ],
    ));
    let value = faker.synthesize(&ty, 0).expect("response");
    assert_eq!(value.field("Code"), Some(&Value::Int(200)));
    assert_eq!(
        value.field("Fallback").and_then(Value::pointee),
        Some(&Value::Int(404))
    );
}
