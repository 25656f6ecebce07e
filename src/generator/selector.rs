//! Content selection: fill one block with items of its allocated equipment.
//!
//! Selection state carries across blocks for the whole plan: the active
//! equipment, the tracked sub-configuration, the transition counter and the
//! equipment-appearance sequence.

use super::random::{shuffle, RandomSource};
use crate::catalog::{Block, Catalog, Item, Level};
use crate::plan::PlanItem;
use serde::{Deserialize, Serialize};

/// Variants kept per selected item.
const MAX_VARIANTS: usize = 2;

/// What counts against the transition cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Only sub-configuration changes on the same equipment count; an equipment
    /// change is free and resets the tracked sub-configuration.
    #[default]
    SubConfiguration,
    /// Equipment changes count as a transition as well.
    EquipmentChangeCounts,
}

#[derive(Debug, Clone)]
pub struct SelectionState {
    policy: TransitionPolicy,
    cap: u32,
    transitions: u32,
    active_equipment: Option<String>,
    sub_configuration: Option<String>,
    placed_any: bool,
    equipment_flow: Vec<String>,
}

impl SelectionState {
    pub fn new(policy: TransitionPolicy, cap: u32) -> Self {
        Self {
            policy,
            cap,
            transitions: 0,
            active_equipment: None,
            sub_configuration: None,
            placed_any: false,
            equipment_flow: Vec::new(),
        }
    }

    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    pub fn into_equipment_flow(self) -> Vec<String> {
        self.equipment_flow
    }

    /// Sub-configuration to group candidates around, if comparable with `equipment`.
    fn comparable_sub_configuration(&self, equipment: &str) -> Option<&str> {
        if self.active_equipment.as_deref() == Some(equipment) {
            self.sub_configuration.as_deref()
        } else {
            None
        }
    }

    fn is_countable(&self, equipment_changed: bool, sub_changed: bool) -> bool {
        if !self.placed_any {
            return false;
        }
        match self.policy {
            TransitionPolicy::SubConfiguration => sub_changed && !equipment_changed,
            TransitionPolicy::EquipmentChangeCounts => equipment_changed || sub_changed,
        }
    }
}

/// Seconds available to a block: its typical share of `duration_minutes`,
/// scaled by the level's item-count multiplier. Also returns the unscaled minutes.
pub fn block_budget(block: &Block, total_typical: f64, duration_minutes: u32, level: &Level) -> (f64, f64) {
    let minutes = if total_typical > 0.0 {
        block.typical_minutes * f64::from(duration_minutes) / total_typical
    } else {
        0.0
    };
    (minutes, minutes * 60.0 * level.item_count_multiplier)
}

/// Effective sub-configuration: the floor surface has none.
fn effective_sub_configuration<'a>(item: &'a Item, equipment: &str, floor: &str) -> &'a str {
    if equipment == floor {
        ""
    } else {
        &item.sub_configuration
    }
}

pub fn select_block(
    catalog: &Catalog,
    block: &Block,
    equipment: &str,
    level: &Level,
    budget_seconds: f64,
    state: &mut SelectionState,
    rng: &mut dyn RandomSource,
) -> Vec<PlanItem> {
    let floor = catalog.floor();
    let mut candidates: Vec<&Item> = catalog.candidates(&block.id, equipment, level).collect();
    shuffle(&mut candidates, rng);

    // Stable sort keeps the shuffled order within each group.
    if let Some(tracked) = state.comparable_sub_configuration(equipment) {
        candidates.sort_by_key(|item| effective_sub_configuration(item, equipment, floor) != tracked);
    }

    let mut selected = Vec::new();
    let mut remaining = budget_seconds;
    for item in candidates {
        if remaining <= 0.0 && !selected.is_empty() {
            break;
        }
        let duration = f64::from(item.duration_seconds);
        if duration > remaining && !selected.is_empty() {
            continue;
        }

        let equipment_changed = state.active_equipment.as_deref() != Some(equipment);
        let effective = effective_sub_configuration(item, equipment, floor);
        let sub_changed =
            !effective.is_empty() && state.sub_configuration.as_deref() != Some(effective);

        if state.is_countable(equipment_changed, sub_changed) {
            if state.transitions >= state.cap {
                if !selected.is_empty() {
                    continue;
                }
                // First item of a block is always admitted, uncounted at the cap.
            } else {
                state.transitions += 1;
            }
        }

        if equipment_changed {
            state.active_equipment = Some(equipment.to_string());
            state.equipment_flow.push(equipment.to_string());
            state.sub_configuration = None;
        }
        if !effective.is_empty() {
            state.sub_configuration = Some(effective.to_string());
        }
        state.placed_any = true;

        selected.push(PlanItem {
            id: item.id.clone(),
            name: item.name.clone(),
            equipment: equipment.to_string(),
            sub_configuration: effective.to_string(),
            reps: item.reps,
            duration_seconds: item.duration_seconds,
            variants: item.variants.iter().take(MAX_VARIANTS).cloned().collect(),
            props: item.props.clone(),
            uses_auxiliary: item.uses_auxiliary,
        });
        remaining -= duration;
    }

    selected
}
