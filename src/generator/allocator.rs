//! Equipment allocation: one equipment id per ordered block.
//!
//! The default assignment keeps every block on the primary equipment where
//! possible. A randomized variety pattern then moves a contiguous run of
//! interior blocks onto the secondary equipment, and the blocks after that run
//! are steered toward the floor surface. Contiguity is repaired afterwards by
//! [`super::flow`].

use super::random::{pick, RandomSource};
use super::request::EquipmentPreferences;
use crate::catalog::{Availability, Block, BlockAvailability, BlockKind};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::trace;

/// Inclusive bounds of a secondary run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunLength {
    pub min: usize,
    pub max: usize,
}

/// Decision table for the variety pattern.
///
/// A single roll `r` in [0, 1) picks the pattern: `r <= skip_below` keeps the
/// plan on the primary equipment, `r > high_above` uses `high_run`, anything in
/// between uses `medium_run`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VarietyTable {
    pub skip_below: f64,
    pub high_above: f64,
    pub medium_run: RunLength,
    pub high_run: RunLength,
    /// Earliest run start as a fraction of the block count (never before index 1)
    pub min_start_fraction: f64,
    /// Probability of drawing the start from the earlier half of eligible starts
    pub early_start_bias: f64,
}

impl Default for VarietyTable {
    fn default() -> Self {
        Self {
            skip_below: 0.10,
            high_above: 0.55,
            medium_run: RunLength { min: 3, max: 5 },
            high_run: RunLength { min: 4, max: 6 },
            min_start_fraction: 0.3,
            early_start_bias: 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarietyPattern {
    PrimaryOnly,
    Medium,
    High,
}

impl VarietyTable {
    pub fn pattern(&self, roll: f64) -> VarietyPattern {
        if roll <= self.skip_below {
            VarietyPattern::PrimaryOnly
        } else if roll > self.high_above {
            VarietyPattern::High
        } else {
            VarietyPattern::Medium
        }
    }

    fn run_length(&self, pattern: VarietyPattern) -> Option<RunLength> {
        match pattern {
            VarietyPattern::PrimaryOnly => None,
            VarietyPattern::Medium => Some(self.medium_run),
            VarietyPattern::High => Some(self.high_run),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.skip_below) || !(0.0..=1.0).contains(&self.high_above) {
            return Err("variety thresholds must lie in [0, 1]".to_string());
        }
        if self.skip_below > self.high_above {
            return Err("skip_below must not exceed high_above".to_string());
        }
        for run in [self.medium_run, self.high_run] {
            if run.min == 0 || run.min > run.max {
                return Err(format!("invalid run length {}..={}", run.min, run.max));
            }
        }
        if !(0.0..=1.0).contains(&self.min_start_fraction)
            || !(0.0..=1.0).contains(&self.early_start_bias)
        {
            return Err("start fraction and bias must lie in [0, 1]".to_string());
        }
        Ok(())
    }
}

/// Result of one allocation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// One equipment id per ordered block
    pub equipment: Vec<String>,
    pub pattern: VarietyPattern,
    /// Block indices reassigned to the secondary equipment
    pub secondary_run: Option<Range<usize>>,
}

pub fn allocate(
    blocks: &[&Block],
    availability: &Availability,
    preferences: &EquipmentPreferences,
    floor: &str,
    table: &VarietyTable,
    rng: &mut dyn RandomSource,
) -> Allocation {
    let per_block: Vec<BlockAvailability> =
        blocks.iter().map(|b| availability.block(&b.id)).collect();

    let mut equipment: Vec<String> = blocks
        .iter()
        .zip(&per_block)
        .map(|(block, counts)| default_equipment(block, counts, preferences, floor))
        .collect();

    let pattern = table.pattern(rng.next_f64());
    let secondary_run = match (preferences.secondary(), table.run_length(pattern)) {
        (Some(secondary), Some(run_length)) => {
            choose_secondary_run(blocks, &per_block, secondary, run_length, table, rng)
        }
        _ => None,
    };

    if let (Some(run), Some(secondary)) = (&secondary_run, preferences.secondary()) {
        for slot in &mut equipment[run.clone()] {
            *slot = secondary.to_string();
        }
        for index in run.end..blocks.len() {
            if let Some(choice) = after_run_equipment(&per_block[index], preferences, floor) {
                equipment[index] = choice;
            }
        }
    }

    trace!(?pattern, ?secondary_run, ?equipment, "Equipment allocated");
    Allocation {
        equipment,
        pattern,
        secondary_run,
    }
}

fn default_equipment(
    block: &Block,
    counts: &BlockAvailability,
    preferences: &EquipmentPreferences,
    floor: &str,
) -> String {
    let primary = preferences.primary();
    if block.kind == BlockKind::Closing && counts.is_usable(floor) {
        return floor.to_string();
    }
    if counts.is_usable(primary) {
        return primary.to_string();
    }
    if let Some(secondary) = preferences.secondary().filter(|s| counts.is_usable(s)) {
        return secondary.to_string();
    }
    if counts.is_usable(floor) {
        return floor.to_string();
    }
    counts.richest().unwrap_or(primary).to_string()
}

/// Pick a contiguous run of interior blocks that can all use `secondary`.
fn choose_secondary_run(
    blocks: &[&Block],
    per_block: &[BlockAvailability],
    secondary: &str,
    run_length: RunLength,
    table: &VarietyTable,
    rng: &mut dyn RandomSource,
) -> Option<Range<usize>> {
    let last = blocks.len().checked_sub(1)?;
    let eligible: Vec<usize> = (1..last)
        .filter(|&i| blocks[i].kind != BlockKind::Closing && per_block[i].is_usable(secondary))
        .collect();
    if eligible.is_empty() {
        return None;
    }

    let upper = run_length.max.min(eligible.len()).max(run_length.min);
    let wanted = rng.next_inclusive(run_length.min, upper);

    let min_start = ((blocks.len() as f64 * table.min_start_fraction) as usize).max(1);
    let starts: Vec<usize> = eligible.iter().copied().filter(|&i| i >= min_start).collect();
    let start = if starts.len() > 2 {
        let pool = if rng.next_f64() < table.early_start_bias {
            &starts[..starts.len() / 2 + 1]
        } else {
            &starts[..]
        };
        *pick(pool, rng)?
    } else {
        *starts.first()?
    };

    let mut end = start + 1;
    while end - start < wanted && eligible.contains(&end) {
        end += 1;
    }
    Some(start..end)
}

/// Priority for blocks after the secondary run: floor (when preferred) >
/// secondary > primary > richest preferred equipment.
fn after_run_equipment(
    counts: &BlockAvailability,
    preferences: &EquipmentPreferences,
    floor: &str,
) -> Option<String> {
    if preferences.contains(floor) && counts.is_usable(floor) {
        return Some(floor.to_string());
    }
    preferences
        .secondary()
        .filter(|s| counts.is_usable(s))
        .or_else(|| Some(preferences.primary()).filter(|p| counts.is_usable(p)))
        .or_else(|| counts.richest())
        .map(str::to_string)
}
