//! Plan records produced by the generator.
//!
//! A [`Plan`] is an opaque serializable document for the layers above the
//! generator; the JSON field names here are the stored and printed format.

use serde::{Deserialize, Serialize};

/// One selected catalog item inside a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    pub id: String,
    pub name: String,
    /// Equipment actually used for this item
    pub equipment: String,
    /// Effective sub-configuration (empty on the floor surface)
    pub sub_configuration: String,
    pub reps: u32,
    pub duration_seconds: u32,
    /// At most two named variants
    pub variants: Vec<String>,
    pub props: Vec<String>,
    pub uses_auxiliary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanBlock {
    pub id: String,
    pub name: String,
    /// 1-based position in the plan
    pub order: usize,
    /// Minutes allotted to the block, rounded to one decimal
    pub allocated_minutes: f64,
    pub items: Vec<PlanItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub duration_minutes: u32,
    pub level: String,
    pub level_name: String,
    /// Preference order: primary first
    pub equipment: Vec<String>,
    pub blocks: Vec<PlanBlock>,
    pub total_items: usize,
    /// Equipment in the order it became active; appended on every change
    pub equipment_flow: Vec<String>,
    pub transitions: u32,
    pub max_transitions: u32,
}

impl Plan {
    /// Distinct equipment of all items, in order of first use.
    pub fn distinct_equipment(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for item in self.blocks.iter().flat_map(|b| b.items.iter()) {
            if !seen.contains(&item.equipment) {
                seen.push(item.equipment.clone());
            }
        }
        seen
    }

    /// Remove empty blocks and renumber the rest from 1. Idempotent.
    pub fn prune_empty_blocks(&mut self) {
        self.blocks.retain(|block| !block.items.is_empty());
        for (index, block) in self.blocks.iter_mut().enumerate() {
            block.order = index + 1;
        }
        self.total_items = self.blocks.iter().map(|b| b.items.len()).sum();
    }

    /// Rebuild `equipment_flow` from the items, e.g. after a stored plan was edited.
    pub fn rebuild_equipment_flow(&mut self) {
        let mut flow: Vec<String> = Vec::new();
        for item in self.blocks.iter().flat_map(|b| b.items.iter()) {
            if flow.last() != Some(&item.equipment) {
                flow.push(item.equipment.clone());
            }
        }
        self.equipment_flow = flow;
    }

    /// Equipment that reappears after a different type was used (bounces).
    pub fn equipment_returns(&self) -> Vec<String> {
        let mut left: Vec<&String> = Vec::new();
        let mut returns = Vec::new();
        let mut active: Option<&String> = None;
        for equipment in &self.equipment_flow {
            if active == Some(equipment) {
                continue;
            }
            if left.contains(&equipment) {
                returns.push(equipment.clone());
            }
            if let Some(previous) = active {
                left.push(previous);
            }
            active = Some(equipment);
        }
        returns
    }

    /// blake3 fingerprint of the canonical JSON encoding.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let encoded = serde_json::to_vec(self)?;
        Ok(blake3::hash(&encoded).to_hex().to_string())
    }
}
