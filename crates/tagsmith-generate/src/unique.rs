use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use tagsmith_core::Value;

use crate::errors::{FakerError, FakerResult};

/// Values already handed out, per logical key.
///
/// Entries never expire until [`UniquenessLedger::reset`]. The lock is only
/// held while checking and recording a candidate, so producers may recurse
/// into the ledger themselves.
#[derive(Debug, Default)]
pub struct UniquenessLedger {
    seen: Mutex<HashMap<String, Vec<Value>>>,
}

impl UniquenessLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `producer` until it yields a value not yet recorded under `key`.
    pub fn generate_unique<F>(
        &self,
        key: &str,
        max_retries: usize,
        mut producer: F,
    ) -> FakerResult<Value>
    where
        F: FnMut() -> FakerResult<Value>,
    {
        for _ in 0..max_retries {
            let candidate = producer()?;
            if self.record_if_new(key, &candidate) {
                return Ok(candidate);
            }
        }
        debug!(key, max_retries, "unique generation exhausted retries");
        Err(FakerError::UniqueGenerationFailed(key.to_string()))
    }

    /// Records `value` under `key` unless it is already present.
    pub fn record_if_new(&self, key: &str, value: &Value) -> bool {
        let mut seen = self.lock();
        let history = seen.entry(key.to_string()).or_default();
        if history.contains(value) {
            return false;
        }
        history.push(value.clone());
        true
    }

    pub fn contains(&self, key: &str, value: &Value) -> bool {
        self.lock()
            .get(key)
            .is_some_and(|history| history.contains(value))
    }

    /// History for `key` in production order.
    pub fn values(&self, key: &str) -> Vec<Value> {
        self.lock().get(key).cloned().unwrap_or_default()
    }

    /// Forgets every recorded value.
    pub fn reset(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Value>>> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retries_until_a_new_value_appears() {
        let ledger = UniquenessLedger::new();
        let mut next = 0;
        let mut producer = || {
            let value = Value::Int(next / 2);
            next += 1;
            Ok(value)
        };
        assert_eq!(ledger.generate_unique("k", 5, &mut producer).ok(), Some(Value::Int(0)));
        assert_eq!(ledger.generate_unique("k", 5, &mut producer).ok(), Some(Value::Int(1)));
        assert_eq!(ledger.values("k"), vec![Value::Int(0), Value::Int(1)]);
    }

    #[test]
    fn keys_are_independent() {
        let ledger = UniquenessLedger::new();
        assert!(ledger.record_if_new("a", &Value::Bool(true)));
        assert!(ledger.record_if_new("b", &Value::Bool(true)));
        assert!(!ledger.record_if_new("a", &Value::Bool(true)));
        ledger.reset();
        assert!(!ledger.contains("a", &Value::Bool(true)));
    }
}
