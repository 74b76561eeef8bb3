use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tagsmith_core::{FloatKind, IntKind, TypeDescriptor, Value};
use tagsmith_generate::errors::FakerError;
use tagsmith_generate::extract::{
    boundary_from_tag, language_from_tag, number_from_tag, one_of_args, slice_length,
    string_from_tag,
};
use tagsmith_generate::lang::{CHINESE, ENGLISH, RUSSIAN};
use tagsmith_generate::{FakerConfig, FieldDirective, Language, NumberBoundary};

#[test]
fn directive_control_tokens() {
    let skip = FieldDirective::parse("-");
    assert!(skip.is_skip());

    let plain = FieldDirective::parse("keep,unique");
    assert!(plain.is_structural());
    assert!(plain.keep_original);
    assert!(plain.unique);

    let args = FieldDirective::parse("len=4,lang=rus,unique");
    assert_eq!(args.generator, "len=4,lang=rus");
    assert!(!args.keep_original);
}

#[test]
fn slice_length_falls_back_to_config() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut config = FakerConfig::default();
    config.set_zero_collections(true);
    assert_eq!(slice_length("len=3", &config, &mut rng).ok(), Some(0));
    assert_eq!(slice_length("slice_len=12", &config, &mut rng).ok(), Some(12));
    assert!(matches!(
        slice_length("slice_len=many", &config, &mut rng),
        Err(FakerError::MalformedTag { .. })
    ));
}

#[test]
fn strings_respect_length_and_language() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let config = FakerConfig::default();

    let chinese = string_from_tag("len=6,lang=chi", &config, &mut rng).expect("chinese");
    assert_eq!(chinese.chars().count(), 6);
    assert!(chinese.chars().all(|ch| CHINESE.contains(ch)));

    let fallback = string_from_tag("lang=xyz", &config, &mut rng).expect("english fallback");
    assert_eq!(fallback.chars().count(), config.random_string_len);
    assert!(fallback.chars().all(|ch| ENGLISH.contains(ch)));

    let russian = string_from_tag("len=5,lang=russian", &config, &mut rng).expect("russian");
    assert_eq!(russian.chars().count(), 5);
    assert!(russian.chars().all(|ch| RUSSIAN.contains(ch)));

    assert!(matches!(
        string_from_tag("len=x", &config, &mut rng),
        Err(FakerError::MalformedTag { .. })
    ));
    assert!(matches!(
        string_from_tag("color", &config, &mut rng),
        Err(FakerError::UnsupportedTag(_))
    ));
}

#[test]
fn configured_language_applies_without_lang() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut config = FakerConfig::default();
    config.set_language(Language::Chinese);
    let text = string_from_tag("len=4", &config, &mut rng).expect("text");
    assert!(text.chars().all(|ch| CHINESE.contains(ch)));
    assert_eq!(language_from_tag("lang=RUS").ok(), Some(Language::Russian));
}

#[test]
fn one_of_strings_are_trimmed() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let config = FakerConfig::default();
    for _ in 0..20 {
        let picked = string_from_tag("oneof: red , blue", &config, &mut rng).expect("color");
        assert!(picked == "red" || picked == "blue", "{picked}");
    }
    assert_eq!(one_of_args("oneof:x,y,z").map(|args| args.len()).ok(), Some(3));
}

#[test]
fn numbers_from_boundaries_and_candidates() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let byte = TypeDescriptor::int(IntKind::U8);
    for _ in 0..100 {
        let value = number_from_tag("boundary_start=200,boundary_end=250", &byte, &mut rng);
        assert!(matches!(value, Ok(Value::Uint(v)) if (200..250).contains(&v)));
    }

    let float = TypeDescriptor::float(FloatKind::F64);
    let value = number_from_tag("boundary_start=-5, boundary_end=5", &float, &mut rng);
    assert!(matches!(value, Ok(Value::Float(v)) if (-5.0..5.0).contains(&v)));

    let value = number_from_tag("oneof:-1,7", &TypeDescriptor::int(IntKind::I16), &mut rng);
    assert!(matches!(value, Ok(Value::Int(-1 | 7))));

    assert!(matches!(
        number_from_tag("oneof:1,two", &byte, &mut rng),
        Err(FakerError::MalformedTag { .. })
    ));
    assert!(matches!(
        number_from_tag("oneof:1,300", &byte, &mut rng),
        Err(FakerError::MalformedTag { .. })
    ));
    assert!(matches!(
        number_from_tag("oneof:1,2,boundary_start=1,boundary_end=3", &byte, &mut rng),
        Err(FakerError::UnsupportedTag(_))
    ));
}

#[test]
fn boundary_pairs_are_validated() {
    assert_eq!(
        boundary_from_tag("boundary_start=1,boundary_end=4").ok(),
        Some(NumberBoundary::new(1, 4))
    );
    for tag in [
        "boundary_start=1",
        "boundary_start=1,boundary_start=4",
        "boundary_start=a,boundary_end=4",
        "boundary_start=1,boundary_end=4,len=3",
    ] {
        assert!(
            matches!(boundary_from_tag(tag), Err(FakerError::MalformedTag { .. })),
            "{tag} should be malformed"
        );
    }
}

#[test]
fn config_setters_reject_invalid_values() {
    let mut config = FakerConfig::default();
    assert!(matches!(
        config.set_random_max_size(0),
        Err(FakerError::InvalidConfig(_))
    ));
    assert!(matches!(
        config.set_number_boundary(5, 1),
        Err(FakerError::InvalidConfig(_))
    ));
    assert!(matches!(
        config.set_max_unique_retries(0),
        Err(FakerError::InvalidConfig(_))
    ));
    assert_eq!(config.random_max_size, 100);
    assert_eq!(config.number_boundary, NumberBoundary::new(0, 100));
}

#[test]
fn config_loads_from_toml_with_defaults() {
    let config: FakerConfig = toml::from_str(
        r#"
random_max_size = 5
language = "russian"
randomize_numbers = true

[number_boundary]
start = 1
end = 3
"#,
    )
    .expect("config parses");
    assert!(config.validate().is_ok());
    assert_eq!(config.random_max_size, 5);
    assert_eq!(config.language, Language::Russian);
    assert_eq!(config.random_string_len, 25);
    assert_eq!(config.max_unique_retries, 10_000);

    let invalid: FakerConfig = toml::from_str("random_max_size = 0").expect("parses");
    assert!(matches!(
        invalid.validate(),
        Err(FakerError::InvalidConfig(_))
    ));
}
