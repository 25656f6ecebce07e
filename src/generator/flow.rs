//! Flow enforcement: repair equipment returns without creating empty blocks.
//!
//! A small state machine walks the allocation left to right. State is the
//! active equipment and the set of abandoned equipment (types the flow has
//! already moved away from). A block allocated to abandoned equipment is moved
//! to the active equipment, else to the floor surface, else the return is
//! accepted as a [`FlowStep::Bounce`].

use crate::catalog::{Availability, Block};
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStep {
    Keep,
    /// Moved onto the currently active equipment
    Reassigned { from: String },
    /// Moved onto the floor surface
    Floor { from: String },
    /// Returned to abandoned equipment because nothing else has items here
    Bounce,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowState {
    active: Option<String>,
    abandoned: BTreeSet<String>,
}

impl FlowState {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_abandoned(&self, equipment: &str) -> bool {
        self.abandoned.contains(equipment)
    }

    /// Visit one block and return the equipment it ends up with.
    pub fn visit(
        &mut self,
        block: &Block,
        allocated: &str,
        availability: &Availability,
        floor: &str,
    ) -> (String, FlowStep) {
        let (resolved, step) = if self.abandoned.contains(allocated) {
            match self.active.as_deref() {
                Some(active) if availability.is_usable(&block.id, active) => (
                    active.to_string(),
                    FlowStep::Reassigned {
                        from: allocated.to_string(),
                    },
                ),
                _ if availability.is_usable(&block.id, floor) => (
                    floor.to_string(),
                    FlowStep::Floor {
                        from: allocated.to_string(),
                    },
                ),
                _ => {
                    self.abandoned.remove(allocated);
                    (allocated.to_string(), FlowStep::Bounce)
                }
            }
        } else {
            (allocated.to_string(), FlowStep::Keep)
        };

        if let Some(previous) = self.active.take() {
            if previous != resolved {
                self.abandoned.insert(previous);
            }
        }
        self.active = Some(resolved.clone());
        (resolved, step)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRepair {
    pub equipment: Vec<String>,
    pub steps: Vec<FlowStep>,
}

impl FlowRepair {
    pub fn bounces(&self) -> usize {
        self.steps.iter().filter(|s| **s == FlowStep::Bounce).count()
    }
}

pub fn enforce_flow(
    blocks: &[&Block],
    allocated: &[String],
    availability: &Availability,
    floor: &str,
) -> FlowRepair {
    let mut state = FlowState::default();
    let mut equipment = Vec::with_capacity(allocated.len());
    let mut steps = Vec::with_capacity(allocated.len());

    for (block, allocated) in blocks.iter().zip(allocated) {
        let (resolved, step) = state.visit(block, allocated, availability, floor);
        if step != FlowStep::Keep {
            debug!(block = %block.id, ?step, equipment = %resolved, "Flow repaired");
        }
        equipment.push(resolved);
        steps.push(step);
    }

    FlowRepair { equipment, steps }
}
