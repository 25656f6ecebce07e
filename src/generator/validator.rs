//! Plan validation. Violations are data, never errors.

use crate::plan::Plan;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    EmptyBlock { block_id: String },
    TransitionCapExceeded { count: u32, cap: u32 },
    EquipmentCapExceeded { count: usize, cap: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyBlock { block_id } => write!(f, "block '{}' has no items", block_id),
            Violation::TransitionCapExceeded { count, cap } => {
                write!(f, "{} transitions exceed the cap of {}", count, cap)
            }
            Violation::EquipmentCapExceeded { count, cap } => {
                write!(f, "{} equipment types exceed the cap of {}", count, cap)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

pub fn validate(plan: &Plan, max_equipment: usize) -> ValidationReport {
    let mut violations: Vec<Violation> = plan
        .blocks
        .iter()
        .filter(|block| block.items.is_empty())
        .map(|block| Violation::EmptyBlock {
            block_id: block.id.clone(),
        })
        .collect();

    if plan.transitions > plan.max_transitions {
        violations.push(Violation::TransitionCapExceeded {
            count: plan.transitions,
            cap: plan.max_transitions,
        });
    }

    let distinct = plan.distinct_equipment().len();
    if distinct > max_equipment {
        violations.push(Violation::EquipmentCapExceeded {
            count: distinct,
            cap: max_equipment,
        });
    }

    ValidationReport { violations }
}
