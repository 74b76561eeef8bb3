use chrono::{DateTime, Datelike, Utc};
use rand::{Rng, RngCore};

use tagsmith_core::{IntKind, TypeDescriptor, Value};

use super::{GeneratorRegistry, ProviderContext, TextProvider};
use crate::errors::FakerResult;
use crate::generators::person::pick;

pub const UNIX_TIME: &str = "unix_time";
pub const DATE: &str = "date";
pub const TIME: &str = "time";
pub const MONTH_NAME: &str = "month_name";
pub const YEAR: &str = "year";
pub const DAY_OF_WEEK: &str = "day_of_week";
pub const DAY_OF_MONTH: &str = "day_of_month";
pub const TIMESTAMP: &str = "timestamp";
pub const CENTURY: &str = "century";
pub const TIMEZONE: &str = "timezone";
pub const TIME_PERIOD: &str = "time_period";

const CENTURIES: &[&str] = &[
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI", "XVII", "XVIII", "XIX", "XX", "XXI",
];
const TIMEZONES: &[&str] = &[
    "Africa/Cairo",
    "America/New_York",
    "America/Sao_Paulo",
    "Asia/Kolkata",
    "Asia/Shanghai",
    "Asia/Tokyo",
    "Australia/Sydney",
    "Europe/Berlin",
    "Europe/London",
    "Europe/Moscow",
    "Pacific/Auckland",
    "UTC",
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(UNIX_TIME, unix_time);
    registry.register_builtin(DATE, |ctx: &ProviderContext<'_>, rng: &mut dyn RngCore| {
        formatted_time(ctx, "%Y-%m-%d", rng)
    });
    registry.register_builtin(TIME, |ctx: &ProviderContext<'_>, rng: &mut dyn RngCore| {
        formatted_time(ctx, "%H:%M:%S", rng)
    });
    registry.register_builtin(TIMESTAMP, |ctx: &ProviderContext<'_>, rng: &mut dyn RngCore| {
        formatted_time(ctx, "%Y-%m-%d %H:%M:%S", rng)
    });
    registry.register_builtin(
        MONTH_NAME,
        TextProvider::new(|rng| random_datetime(rng).format("%B").to_string()),
    );
    registry.register_builtin(
        YEAR,
        TextProvider::new(|rng| random_datetime(rng).year().to_string()),
    );
    registry.register_builtin(
        DAY_OF_WEEK,
        TextProvider::new(|rng| random_datetime(rng).format("%A").to_string()),
    );
    registry.register_builtin(
        DAY_OF_MONTH,
        TextProvider::new(|rng| random_datetime(rng).format("%d").to_string()),
    );
    registry.register_builtin(CENTURY, TextProvider::new(|rng| pick(CENTURIES, rng)));
    registry.register_builtin(TIMEZONE, TextProvider::new(|rng| pick(TIMEZONES, rng)));
    registry.register_builtin(
        TIME_PERIOD,
        TextProvider::new(|rng| random_datetime(rng).format("%p").to_string()),
    );
}

/// Instant between the epoch and now, second precision.
pub fn random_datetime(rng: &mut dyn RngCore) -> DateTime<Utc> {
    let now = Utc::now().timestamp().max(1);
    DateTime::from_timestamp(rng.random_range(0..now), 0).unwrap_or_default()
}

/// Epoch seconds for wide integer fields, or their decimal text.
fn unix_time(ctx: &ProviderContext<'_>, rng: &mut dyn RngCore) -> FakerResult<Value> {
    let seconds = random_datetime(rng).timestamp();
    match ctx.ty.resolved() {
        TypeDescriptor::Int {
            int: IntKind::I64 | IntKind::Isize,
        } => Ok(Value::Int(seconds)),
        TypeDescriptor::Int {
            int: IntKind::U64 | IntKind::Usize,
        } => Ok(Value::Uint(seconds as u64)),
        TypeDescriptor::String => Ok(Value::String(seconds.to_string())),
        _ => Err(ctx.unsupported()),
    }
}

/// Formatted text for strings, the instant itself for time fields.
fn formatted_time(
    ctx: &ProviderContext<'_>,
    format: &str,
    rng: &mut dyn RngCore,
) -> FakerResult<Value> {
    let instant = random_datetime(rng);
    match ctx.ty.resolved() {
        TypeDescriptor::String => Ok(Value::String(instant.format(format).to_string())),
        TypeDescriptor::Time => Ok(Value::Time(instant)),
        _ => Err(ctx.unsupported()),
    }
}
