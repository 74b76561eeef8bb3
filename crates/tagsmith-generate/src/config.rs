use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tagsmith_core::{FloatKind, narrow_float};

use crate::errors::{FakerError, FakerResult};
use crate::lang::Language;

/// Half-open interval `[start, end)` for ranged numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberBoundary {
    pub start: i64,
    pub end: i64,
}

impl NumberBoundary {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Uniform integer in `[start, end)`, or `start` when the interval is empty.
    pub fn random_int(&self, rng: &mut dyn RngCore) -> i64 {
        if self.end <= self.start {
            return self.start;
        }
        rng.random_range(self.start..self.end)
    }

    /// Uniform float of width `kind` in `[start, end)`, or `start` when the
    /// interval is empty.
    pub fn random_float(&self, kind: FloatKind, rng: &mut dyn RngCore) -> f64 {
        let start = narrow_float(kind, self.start as f64);
        if self.end <= self.start {
            return start;
        }
        let end = self.end as f64;
        let span = end - self.start as f64;
        let value = narrow_float(kind, self.start as f64 + rng.random::<f64>() * span);
        // Rounding to the target width can land on the excluded end.
        if value >= end { start } else { value }
    }
}

impl Default for NumberBoundary {
    fn default() -> Self {
        Self::new(0, 100)
    }
}

/// Knobs read on every synthesis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FakerConfig {
    /// Length of strings produced by `lang=` directives without `len=`.
    pub random_string_len: usize,
    /// Exclusive upper bound for random slice and map sizes.
    pub random_max_size: usize,
    /// Forces every random collection size to zero.
    pub zero_collections: bool,
    /// Leaves empty random collections nil instead of allocating them.
    pub nil_if_len_zero: bool,
    /// Alphabet for `len=` strings without `lang=`.
    pub language: Language,
    /// Attempts made for a `unique` field before giving up.
    pub max_unique_retries: usize,
    /// Range used for untagged numbers when `randomize_numbers` is set.
    pub number_boundary: NumberBoundary,
    /// Untagged numbers and bools stay at zero unless this is set.
    pub randomize_numbers: bool,
}

impl Default for FakerConfig {
    fn default() -> Self {
        Self {
            random_string_len: 25,
            random_max_size: 100,
            zero_collections: false,
            nil_if_len_zero: false,
            language: Language::English,
            max_unique_retries: 10_000,
            number_boundary: NumberBoundary::default(),
            randomize_numbers: false,
        }
    }
}

impl FakerConfig {
    pub fn set_random_string_len(&mut self, len: usize) {
        self.random_string_len = len;
    }

    pub fn set_random_max_size(&mut self, size: usize) -> FakerResult<()> {
        if size < 1 {
            return Err(FakerError::InvalidConfig(format!(
                "collection size {size} is smaller than one"
            )));
        }
        self.random_max_size = size;
        Ok(())
    }

    pub fn set_zero_collections(&mut self, zero: bool) {
        self.zero_collections = zero;
    }

    pub fn set_nil_if_len_zero(&mut self, nil: bool) {
        self.nil_if_len_zero = nil;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_max_unique_retries(&mut self, retries: usize) -> FakerResult<()> {
        if retries == 0 {
            return Err(FakerError::InvalidConfig(
                "unique retries must be at least one".to_string(),
            ));
        }
        self.max_unique_retries = retries;
        Ok(())
    }

    pub fn set_number_boundary(&mut self, start: i64, end: i64) -> FakerResult<()> {
        if start > end {
            return Err(FakerError::InvalidConfig(
                "start value can not be bigger than end value".to_string(),
            ));
        }
        self.number_boundary = NumberBoundary::new(start, end);
        Ok(())
    }

    pub fn set_randomize_numbers(&mut self, randomize: bool) {
        self.randomize_numbers = randomize;
    }

    /// Re-checks invariants of a configuration built by deserialization.
    pub fn validate(&self) -> FakerResult<()> {
        if self.random_max_size < 1 {
            return Err(FakerError::InvalidConfig(
                "random_max_size must be at least one".to_string(),
            ));
        }
        if self.max_unique_retries == 0 {
            return Err(FakerError::InvalidConfig(
                "max_unique_retries must be at least one".to_string(),
            ));
        }
        if self.number_boundary.start > self.number_boundary.end {
            return Err(FakerError::InvalidConfig(
                "number_boundary start must be <= end".to_string(),
            ));
        }
        Ok(())
    }

    /// Size for a randomly sized slice or map.
    pub fn collection_size(&self, rng: &mut dyn RngCore) -> usize {
        if self.zero_collections {
            return 0;
        }
        rng.random_range(0..self.random_max_size.max(1))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn degenerate_boundary_returns_start() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(NumberBoundary::new(9, 9).random_int(&mut rng), 9);
        assert_eq!(NumberBoundary::new(9, 2).random_int(&mut rng), 9);
        assert_eq!(
            NumberBoundary::new(4, 1).random_float(FloatKind::F64, &mut rng),
            4.0
        );
    }

    #[test]
    fn full_range_float_stays_inside_the_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let boundary = NumberBoundary::new(i64::MIN, i64::MAX);
        for _ in 0..1000 {
            let value = boundary.random_float(FloatKind::F64, &mut rng);
            assert!(value >= i64::MIN as f64 && value < i64::MAX as f64, "{value}");
        }
    }

    #[test]
    fn narrowed_float_never_reaches_the_end() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let boundary = NumberBoundary::new(0, 100);
        for _ in 0..1000 {
            let value = boundary.random_float(FloatKind::F32, &mut rng);
            assert!((0.0..100.0).contains(&value), "{value}");
        }
    }

    #[test]
    fn setters_reject_invalid_values() {
        let mut config = FakerConfig::default();
        assert!(matches!(
            config.set_random_max_size(0),
            Err(FakerError::InvalidConfig(_))
        ));
        assert!(matches!(
            config.set_number_boundary(10, 1),
            Err(FakerError::InvalidConfig(_))
        ));
        assert!(config.set_number_boundary(-5, 5).is_ok());
        assert_eq!(config.number_boundary, NumberBoundary::new(-5, 5));
    }

    #[test]
    fn zero_collections_forces_empty_size() {
        let mut config = FakerConfig::default();
        config.set_zero_collections(true);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(config.collection_size(&mut rng), 0);
        }
    }
}
