//! Plan generator
//!
//! Turns a [`GenerateRequest`] into a [`Plan`] in five stages per attempt:
//! block sequencing, equipment allocation, flow enforcement, content selection
//! and validation. A bounded retry loop keeps the first valid plan, or falls
//! back to the least-bad one. Generation never fails.

pub mod allocator;
pub mod driver;
pub mod flow;
pub mod random;
pub mod request;
pub mod selector;
pub mod sequencer;
pub mod validator;

pub use allocator::{RunLength, VarietyPattern, VarietyTable};
pub use driver::{GenerationOutcome, GenerationReport};
pub use random::{from_entropy, seeded, RandomSource, SequenceSource};
pub use request::{EquipmentPreferences, GenerateRequest, ResolvedRequest};
pub use selector::TransitionPolicy;
pub use validator::{ValidationReport, Violation};

use crate::catalog::Catalog;
use driver::AttemptContext;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Generator settings (the `[generator]` config section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub max_retries: u32,
    /// Distinct equipment types allowed in one plan
    pub max_equipment: usize,
    /// Primary equipment used when a request names none
    pub default_equipment: String,
    pub transition_policy: TransitionPolicy,
    pub variety: VarietyTable,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_retries: 50,
            max_equipment: 3,
            default_equipment: "reformer".to_string(),
            transition_policy: TransitionPolicy::default(),
            variety: VarietyTable::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_retries == 0 {
            return Err("max_retries must be at least 1".to_string());
        }
        if self.max_equipment == 0 {
            return Err("max_equipment must be at least 1".to_string());
        }
        if self.default_equipment.trim().is_empty() {
            return Err("default_equipment cannot be empty".to_string());
        }
        self.variety.validate()
    }
}

/// Plan generator bound to a read-only catalog.
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    catalog: &'a Catalog,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    pub fn new(catalog: &'a Catalog, config: GeneratorConfig) -> Self {
        Self { catalog, config }
    }

    pub fn with_defaults(catalog: &'a Catalog) -> Self {
        Self::new(catalog, GeneratorConfig::default())
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(
        &self,
        request: &GenerateRequest,
        rng: &mut dyn RandomSource,
    ) -> GenerationOutcome {
        let resolved = request.resolve(self.catalog, &self.config.default_equipment);
        debug!(
            duration = resolved.duration_minutes,
            level = %resolved.level.id,
            equipment = ?resolved.preferences.as_slice(),
            max_transitions = resolved.max_transitions,
            "Generating plan"
        );

        let ctx = AttemptContext {
            catalog: self.catalog,
            request: &resolved,
            variety: &self.config.variety,
            policy: self.config.transition_policy,
        };
        driver::run(&ctx, self.config.max_retries, self.config.max_equipment, rng)
    }
}
