mod logging;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use schemars::schema_for;
use tagsmith_core::{Error as CoreError, TypeDescriptor, Value, parse_type_description};
use tagsmith_generate::{Faker, FakerConfig, FakerError, GeneratorRegistry};
use thiserror::Error;

use logging::init_logging;

#[derive(Debug, Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("type description error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Faker(#[from] FakerError),
    #[error("logging error: {0}")]
    Logging(String),
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(name = "tagsmith", version, about = "Tag-driven synthetic data")]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize values for a JSON type description.
    Generate(GenerateArgs),
    /// List registered generator names.
    Tags,
    /// Print the JSON schema of the type description format.
    Schema,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to the type description (JSON).
    #[arg(long = "type", value_name = "PATH")]
    type_path: PathBuf,
    /// Number of values to produce.
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Faker configuration (TOML).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Draw untagged numbers and bools from the configured boundary.
    #[arg(long, default_value_t = false)]
    randomize_numbers: bool,
    /// Print one pretty JSON array instead of JSON lines.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_json, cli.log_file.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Generate(args) => run_generate(args, &mut out),
        Command::Tags => run_tags(&mut out),
        Command::Schema => run_schema(&mut out),
    }
}

fn run_generate(args: GenerateArgs, out: &mut impl Write) -> CliResult<()> {
    let description = std::fs::read_to_string(&args.type_path)?;
    let ty = parse_type_description(&description)?;
    let mut config = match args.config.as_deref() {
        Some(path) => load_config(path)?,
        None => FakerConfig::default(),
    };
    if args.randomize_numbers {
        config.set_randomize_numbers(true);
    }

    let faker = match args.seed {
        Some(seed) => Faker::seeded(seed),
        None => Faker::new(),
    };
    let mut faker = faker.with_config(config);

    let timer = Instant::now();
    let values = generate_values(&mut faker, &ty, args.count)?;
    write_values(out, &values, args.pretty)?;

    tracing::info!(
        event = "generation_finished",
        ty = %ty,
        count = values.len(),
        duration_ms = timer.elapsed().as_millis()
    );
    Ok(())
}

fn load_config(path: &Path) -> CliResult<FakerConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: FakerConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

fn generate_values(faker: &mut Faker, ty: &TypeDescriptor, count: usize) -> CliResult<Vec<Value>> {
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let mut value = ty.zero_value();
        faker.fake_data(ty, &mut value)?;
        values.push(value);
    }
    Ok(values)
}

fn write_values(out: &mut impl Write, values: &[Value], pretty: bool) -> CliResult<()> {
    if pretty {
        let array: Vec<_> = values.iter().map(Value::to_json).collect();
        serde_json::to_writer_pretty(&mut *out, &array)?;
        writeln!(out)?;
        return Ok(());
    }
    for value in values {
        serde_json::to_writer(&mut *out, &value.to_json())?;
        writeln!(out)?;
    }
    Ok(())
}

fn run_tags(out: &mut impl Write) -> CliResult<()> {
    let registry = GeneratorRegistry::new();
    for name in registry.names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn run_schema(out: &mut impl Write) -> CliResult<()> {
    let schema = schema_for!(TypeDescriptor);
    serde_json::to_writer_pretty(&mut *out, &schema)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tagsmith_core::{FieldDescriptor, StructDescriptor};

    use super::*;

    #[test]
    fn generate_arguments_parse() {
        let cli = Cli::try_parse_from([
            "tagsmith",
            "generate",
            "--type",
            "user.json",
            "--count",
            "3",
            "--seed",
            "9",
            "--pretty",
        ])
        .expect("arguments parse");
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.type_path, PathBuf::from("user.json"));
        assert_eq!(args.count, 3);
        assert_eq!(args.seed, Some(9));
        assert!(args.pretty);
    }

    #[test]
    fn json_lines_are_reproducible_with_a_seed() {
        let ty = TypeDescriptor::Struct(StructDescriptor::new(
            "User",
            vec![
                FieldDescriptor::tagged("Email", TypeDescriptor::String, "email"),
                FieldDescriptor::tagged("Id", TypeDescriptor::String, "uuid_digit"),
            ],
        ));

        let render = |seed| {
            let mut faker = Faker::seeded(seed);
            let values = generate_values(&mut faker, &ty, 4).expect("values");
            let mut out = Vec::new();
            write_values(&mut out, &values, false).expect("written");
            String::from_utf8(out).expect("utf8")
        };

        let first = render(5);
        assert_eq!(first.lines().count(), 4);
        assert_eq!(first, render(5));
        for line in first.lines() {
            let row: serde_json::Value = serde_json::from_str(line).expect("json line");
            assert!(row["Email"].as_str().is_some_and(|email| email.contains('@')));
            assert_eq!(row["Id"].as_str().map(str::len), Some(32));
        }
    }

    #[test]
    fn tags_lists_registry_names() {
        let mut out = Vec::new();
        run_tags(&mut out).expect("tags written");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.lines().any(|line| line == "email"));
        assert!(text.lines().any(|line| line == "uuid_hyphenated"));
    }

    #[test]
    fn schema_names_every_kind() {
        let mut out = Vec::new();
        run_schema(&mut out).expect("schema written");
        let text = String::from_utf8(out).expect("utf8");
        for kind in ["pointer", "slice", "map", "struct", "named"] {
            assert!(text.contains(kind), "{kind} missing from schema");
        }
    }
}
