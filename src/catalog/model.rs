//! Catalog entities: equipment, blocks, levels and items.
//!
//! All of these are immutable once a [`super::Catalog`] has been built.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
}

/// Position rule of a block inside a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Always the first block of a plan
    Opening,
    /// May be moved by the block sequencer
    Reorderable,
    /// Always the last block of a plan
    Closing,
}

/// A named content grouping within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub name: String,
    pub kind: BlockKind,
    /// Typical share of a class in minutes; only used for time-budget proportioning.
    pub typical_minutes: f64,
}

/// Experience level. Levels are totally ordered by `rank`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub name: String,
    pub rank: f64,
    #[serde(default = "default_multiplier")]
    pub rep_multiplier: f64,
    #[serde(default = "default_multiplier")]
    pub item_count_multiplier: f64,
    pub max_transitions: u32,
}

fn default_multiplier() -> f64 {
    1.0
}

/// A single catalog entry assignable into a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub block: String,
    pub equipment: Vec<String>,
    /// Minimum level id required to use this item
    pub level: String,
    /// Equipment-specific setting, e.g. a spring load. Empty means none.
    #[serde(default)]
    pub sub_configuration: String,
    #[serde(default = "default_reps")]
    pub reps: u32,
    #[serde(default = "default_duration")]
    pub duration_seconds: u32,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub props: Vec<String>,
    /// Uses an auxiliary apparatus (box); never counted as an equipment type.
    #[serde(default)]
    pub uses_auxiliary: bool,
}

fn default_reps() -> u32 {
    8
}

fn default_duration() -> u32 {
    60
}

impl Item {
    pub fn supports(&self, equipment: &str) -> bool {
        self.equipment.iter().any(|e| e == equipment)
    }

    pub(crate) fn new(
        id: &str,
        name: &str,
        block: &str,
        equipment: &[&str],
        level: &str,
        sub_configuration: &str,
        reps: u32,
        duration_seconds: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            block: block.to_string(),
            equipment: equipment.iter().map(|e| e.to_string()).collect(),
            level: level.to_string(),
            sub_configuration: sub_configuration.to_string(),
            reps,
            duration_seconds,
            variants: Vec::new(),
            props: Vec::new(),
            uses_auxiliary: false,
        }
    }

    pub(crate) fn with_variants(mut self, variants: &[&str]) -> Self {
        self.variants = variants.iter().map(|v| v.to_string()).collect();
        self
    }

    pub(crate) fn with_props(mut self, props: &[&str]) -> Self {
        self.props = props.iter().map(|p| p.to_string()).collect();
        self
    }

    pub(crate) fn auxiliary(mut self) -> Self {
        self.uses_auxiliary = true;
        self
    }
}

/// Serialized catalog layout accepted by [`super::Catalog::from_json_str`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Equipment id treated as the floor surface (always considered available)
    #[serde(default = "default_floor")]
    pub floor: String,
    pub equipment: Vec<Equipment>,
    pub blocks: Vec<Block>,
    pub levels: Vec<Level>,
    pub items: Vec<Item>,
}

fn default_floor() -> String {
    "mat".to_string()
}
