//! Sub-syntax extractors for directive arguments.

use std::sync::LazyLock;

use rand::{Rng, RngCore};
use regex::Regex;

use tagsmith_core::{FloatKind, IntKind, TypeDescriptor, Value};

use crate::config::{FakerConfig, NumberBoundary};
use crate::errors::{FakerError, FakerResult};
use crate::lang::Language;
use crate::tags::{BOUNDARY_END, BOUNDARY_START, LANGUAGE, LENGTH, ONE_OF, SLICE_LENGTH};

static LANGUAGE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)([a-z]{3})[a-z]*$").expect("language code pattern is valid")
});

/// Element count for a tagged slice: `slice_len=N` when present, otherwise
/// the configured random collection size.
pub fn slice_length(tag: &str, config: &FakerConfig, rng: &mut dyn RngCore) -> FakerResult<usize> {
    if !tag.contains(SLICE_LENGTH) {
        return Ok(config.collection_size(rng));
    }
    let raw = assignment(tag, SLICE_LENGTH)
        .ok_or_else(|| FakerError::malformed(tag, "slice_len requires a value"))?;
    let len: i64 = raw
        .parse()
        .map_err(|err| FakerError::malformed(tag, format!("slice_len '{raw}': {err}")))?;
    if len < 0 {
        return Err(FakerError::malformed(tag, "slice length can not be negative"));
    }
    Ok(len as usize)
}

/// Drops `slice_len=` tokens so the rest can drive element generation.
pub fn strip_slice_length(tag: &str) -> String {
    tag.split(',')
        .filter(|token| !names(token, SLICE_LENGTH))
        .collect::<Vec<_>>()
        .join(",")
}

/// String from `len=`, `lang=` and `oneof:` modifiers.
pub fn string_from_tag(
    tag: &str,
    config: &FakerConfig,
    rng: &mut dyn RngCore,
) -> FakerResult<String> {
    let has_len = mentions(tag, LENGTH);
    let has_lang = mentions(tag, LANGUAGE);
    let has_one_of = tag.contains(ONE_OF);
    if !has_len && !has_lang && !has_one_of {
        return Err(FakerError::UnsupportedTag(tag.to_string()));
    }

    let mut len = config.random_string_len;
    if has_len {
        let raw = assignment(tag, LENGTH)
            .ok_or_else(|| FakerError::malformed(tag, "len requires a value"))?;
        len = raw
            .parse()
            .map_err(|err| FakerError::malformed(tag, format!("len '{raw}': {err}")))?;
    }

    let mut language = config.language;
    if has_lang {
        language = language_from_tag(tag)?;
    }

    if has_one_of {
        let candidates = one_of_args(tag)?;
        let picked = candidates[rng.random_range(0..candidates.len())];
        return Ok(picked.trim().to_string());
    }

    Ok(language.alphabet().random_string(len, rng))
}

/// Language selected by `lang=<code>`, matched on its first three letters
/// regardless of case; unknown codes resolve to English.
pub fn language_from_tag(tag: &str) -> FakerResult<Language> {
    let code = assignment(tag, LANGUAGE)
        .ok_or_else(|| FakerError::malformed(tag, "lang requires a value"))?;
    let language = LANGUAGE_CODE
        .captures(code)
        .and_then(|caps| caps.get(1))
        .map_or(Language::English, |prefix| Language::from_code(prefix.as_str()));
    Ok(language)
}

/// Candidates of a `oneof:` directive, untrimmed.
pub fn one_of_args(tag: &str) -> FakerResult<Vec<&str>> {
    let args: Vec<&str> = tag.split(':').skip(1).collect();
    if args.len() != 1 {
        return Err(FakerError::malformed(
            tag,
            "oneof arguments are not compatible with the field type",
        ));
    }
    let list = args[0];
    if list.contains(",,") {
        return Err(FakerError::malformed(
            tag,
            "duplicate separator for oneof arguments",
        ));
    }
    let candidates: Vec<&str> = list.split(',').collect();
    if list.is_empty() || candidates.len() < 2 {
        return Err(FakerError::malformed(tag, "not enough arguments for oneof"));
    }
    Ok(candidates)
}

/// The `boundary_start=..,boundary_end=..` pair.
pub fn boundary_from_tag(tag: &str) -> FakerResult<NumberBoundary> {
    let tokens: Vec<&str> = tag.split(',').map(str::trim).collect();
    if tokens.len() != 2 {
        return Err(FakerError::malformed(
            tag,
            format!("expected 2 boundary arguments, found {}", tokens.len()),
        ));
    }
    let mut start = None;
    let mut end = None;
    for token in tokens {
        let Some((key, raw)) = token.split_once('=') else {
            return Err(FakerError::malformed(tag, format!("'{token}' is not key=value")));
        };
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|err| FakerError::malformed(tag, format!("'{token}': {err}")))?;
        match key.trim() {
            BOUNDARY_START => start = Some(value),
            BOUNDARY_END => end = Some(value),
            other => {
                return Err(FakerError::malformed(
                    tag,
                    format!("unknown boundary argument '{other}'"),
                ));
            }
        }
    }
    match (start, end) {
        (Some(start), Some(end)) => Ok(NumberBoundary::new(start, end)),
        _ => Err(FakerError::malformed(
            tag,
            "boundary needs both boundary_start and boundary_end",
        )),
    }
}

/// Number for an int or float target from `oneof:` or a boundary pair.
pub fn number_from_tag(
    tag: &str,
    ty: &TypeDescriptor,
    rng: &mut dyn RngCore,
) -> FakerResult<Value> {
    let has_one_of = tag.contains(ONE_OF);
    let has_start = mentions(tag, BOUNDARY_START);
    let has_end = mentions(tag, BOUNDARY_END);
    let using_one_of = has_one_of && !has_start && !has_end;
    let using_boundary = !has_one_of && has_start && has_end;
    if !using_one_of && !using_boundary {
        return Err(FakerError::UnsupportedTag(tag.to_string()));
    }

    if using_one_of {
        let candidates = one_of_args(tag)?
            .into_iter()
            .map(|raw| {
                parse_number_literal(ty, raw.trim()).ok_or_else(|| {
                    FakerError::malformed(tag, format!("'{}' is not a valid {ty}", raw.trim()))
                })
            })
            .collect::<FakerResult<Vec<_>>>()?;
        let idx = rng.random_range(0..candidates.len());
        return Ok(candidates.into_iter().nth(idx).unwrap_or(Value::Null));
    }

    let boundary = boundary_from_tag(tag)?;
    match ty.resolved() {
        TypeDescriptor::Int { int } => Ok(narrow_int(*int, boundary.random_int(rng))),
        TypeDescriptor::Float { float } => {
            Ok(Value::Float(boundary.random_float(*float, rng)))
        }
        other => Err(FakerError::UnsupportedKind(format!(
            "{other} is not a number type"
        ))),
    }
}

/// Converts to the target width the way a numeric cast would.
pub fn narrow_int(kind: IntKind, value: i64) -> Value {
    match kind {
        IntKind::I8 => Value::Int(i64::from(value as i8)),
        IntKind::I16 => Value::Int(i64::from(value as i16)),
        IntKind::I32 => Value::Int(i64::from(value as i32)),
        IntKind::I64 => Value::Int(value),
        IntKind::Isize => Value::Int(value as isize as i64),
        IntKind::U8 => Value::Uint(u64::from(value as u8)),
        IntKind::U16 => Value::Uint(u64::from(value as u16)),
        IntKind::U32 => Value::Uint(u64::from(value as u32)),
        IntKind::U64 => Value::Uint(value as u64),
        IntKind::Usize => Value::Uint(value as usize as u64),
    }
}

fn parse_number_literal(ty: &TypeDescriptor, text: &str) -> Option<Value> {
    match ty.resolved() {
        TypeDescriptor::Int { int } => match int {
            IntKind::I8 => text.parse::<i8>().ok().map(|v| Value::Int(v.into())),
            IntKind::I16 => text.parse::<i16>().ok().map(|v| Value::Int(v.into())),
            IntKind::I32 => text.parse::<i32>().ok().map(|v| Value::Int(v.into())),
            IntKind::I64 => text.parse::<i64>().ok().map(Value::Int),
            IntKind::Isize => text.parse::<isize>().ok().map(|v| Value::Int(v as i64)),
            IntKind::U8 => text.parse::<u8>().ok().map(|v| Value::Uint(v.into())),
            IntKind::U16 => text.parse::<u16>().ok().map(|v| Value::Uint(v.into())),
            IntKind::U32 => text.parse::<u32>().ok().map(|v| Value::Uint(v.into())),
            IntKind::U64 => text.parse::<u64>().ok().map(Value::Uint),
            IntKind::Usize => text.parse::<usize>().ok().map(|v| Value::Uint(v as u64)),
        },
        TypeDescriptor::Float { float } => match float {
            FloatKind::F32 => text.parse::<f32>().ok().map(|v| Value::Float(v.into())),
            FloatKind::F64 => text.parse::<f64>().ok().map(Value::Float),
        },
        _ => None,
    }
}

/// Value of the first `key=value` token, trimmed.
fn assignment<'t>(tag: &'t str, key: &str) -> Option<&'t str> {
    tag.split(',').find_map(|token| {
        let (name, value) = token.split_once('=')?;
        (name.trim() == key).then(|| value.trim())
    })
}

/// Whether some token is `key` alone or an assignment to it.
fn mentions(tag: &str, key: &str) -> bool {
    tag.split(',').any(|token| names(token, key))
}

fn names(token: &str, key: &str) -> bool {
    let name = token.split_once('=').map_or(token, |(name, _)| name);
    name.trim() == key
}
