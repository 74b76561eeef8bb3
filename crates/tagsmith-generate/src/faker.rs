use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use tagsmith_core::{TypeDescriptor, Value};

use crate::config::FakerConfig;
use crate::errors::FakerResult;
use crate::generators::GeneratorRegistry;
use crate::synth::Synthesizer;
use crate::unique::UniquenessLedger;

/// Entry point tying configuration, providers, uniqueness history and a
/// seeded random source together.
///
/// Several fakers may share one [`UniquenessLedger`] through
/// [`Faker::with_ledger`]; everything else is owned per instance.
#[derive(Debug)]
pub struct Faker {
    config: FakerConfig,
    registry: GeneratorRegistry,
    ledger: Arc<UniquenessLedger>,
    rng: ChaCha8Rng,
}

impl Faker {
    /// Faker seeded from the thread-local generator.
    pub fn new() -> Self {
        Self::seeded(rand::rng().random())
    }

    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "faker created");
        Self {
            config: FakerConfig::default(),
            registry: GeneratorRegistry::new(),
            ledger: Arc::new(UniquenessLedger::new()),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn with_config(mut self, config: FakerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_registry(mut self, registry: GeneratorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_ledger(mut self, ledger: Arc<UniquenessLedger>) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn config(&self) -> &FakerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut FakerConfig {
        &mut self.config
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut GeneratorRegistry {
        &mut self.registry
    }

    pub fn ledger(&self) -> &Arc<UniquenessLedger> {
        &self.ledger
    }

    /// Forgets every value handed out under unique directives.
    pub fn reset_unique(&self) {
        self.ledger.reset();
    }

    /// Builds a fresh value for `ty` starting at pointer depth `depth`.
    pub fn synthesize(&mut self, ty: &TypeDescriptor, depth: usize) -> FakerResult<Value> {
        self.synthesizer().synthesize(ty, depth)
    }

    /// Fills the pointee of `target` using a single directive name.
    pub fn apply_directive(
        &mut self,
        ty: &TypeDescriptor,
        target: &mut Value,
        directive: &str,
    ) -> FakerResult<()> {
        self.synthesizer().apply_directive(ty, target, directive)
    }

    /// Runs `producer` until it yields a value not yet seen under `key`.
    pub fn generate_unique<F>(&mut self, key: &str, mut producer: F) -> FakerResult<Value>
    where
        F: FnMut(&mut Synthesizer<'_>) -> FakerResult<Value>,
    {
        let ledger = Arc::clone(&self.ledger);
        let retries = self.config.max_unique_retries;
        let mut synth = self.synthesizer();
        ledger.generate_unique(key, retries, || producer(&mut synth))
    }

    /// Replaces `target` with synthesized data for `ty`.
    ///
    /// Skipped, kept and unsettable fields read their previous value from
    /// `target`. Errors leave `target` untouched. A panic inside synthesis
    /// is logged, `target` is reset to the zero value of `ty` and the call
    /// still succeeds.
    pub fn fake_data(&mut self, ty: &TypeDescriptor, target: &mut Value) -> FakerResult<()> {
        let original = std::mem::replace(target, Value::Null);
        let outcome = {
            let mut synth = self.synthesizer();
            panic::catch_unwind(AssertUnwindSafe(|| {
                synth.synthesize_from(ty, Some(&original), 0)
            }))
        };

        match outcome {
            Ok(Ok(value)) => {
                *target = value;
                Ok(())
            }
            Ok(Err(err)) => {
                *target = original;
                Err(err)
            }
            Err(panic) => {
                warn!(
                    ty = %ty,
                    error = %panic_message(panic),
                    "synthesis panicked, target reset to zero value"
                );
                *target = ty.zero_value();
                Ok(())
            }
        }
    }

    fn synthesizer(&mut self) -> Synthesizer<'_> {
        Synthesizer::new(
            &self.config,
            &self.registry,
            &self.ledger,
            &mut self.rng,
        )
    }
}

impl Default for Faker {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during synthesis".to_string()
    }
}
