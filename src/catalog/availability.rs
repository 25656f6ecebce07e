//! Per-block item availability for a set of preferred equipment at one level.

use super::{Block, Catalog, Level};
use std::collections::HashMap;

/// Usable item counts of one block, one entry per counted equipment type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockAvailability {
    counts: Vec<(String, usize)>,
    preferred: usize,
}

impl BlockAvailability {
    pub fn count(&self, equipment: &str) -> usize {
        self.counts
            .iter()
            .find(|(id, _)| id == equipment)
            .map_or(0, |(_, count)| *count)
    }

    pub fn is_usable(&self, equipment: &str) -> bool {
        self.count(equipment) > 0
    }

    /// Preferred equipment with the most usable items; ties go to the earlier preference.
    pub fn richest(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (id, count) in &self.counts[..self.preferred] {
            if *count > 0 && best.map_or(true, |(_, c)| *count > c) {
                best = Some((id.as_str(), *count));
            }
        }
        best.map(|(id, _)| id)
    }
}

/// Availability table keyed by block id.
///
/// Counts every preferred equipment type plus the catalog's floor surface, which
/// is always considered even when the caller did not list it.
#[derive(Debug, Clone, Default)]
pub struct Availability {
    blocks: HashMap<String, BlockAvailability>,
}

impl Availability {
    pub fn compute<'a>(
        catalog: &Catalog,
        blocks: impl IntoIterator<Item = &'a Block>,
        preferences: &[String],
        level: &Level,
    ) -> Self {
        let mut counted: Vec<&str> = preferences.iter().map(String::as_str).collect();
        if !counted.contains(&catalog.floor()) {
            counted.push(catalog.floor());
        }

        let blocks = blocks
            .into_iter()
            .map(|block| {
                let counts = counted
                    .iter()
                    .map(|eq| {
                        let count = catalog.candidates(&block.id, eq, level).count();
                        (eq.to_string(), count)
                    })
                    .collect();
                (
                    block.id.clone(),
                    BlockAvailability {
                        counts,
                        preferred: preferences.len(),
                    },
                )
            })
            .collect();

        Self { blocks }
    }

    pub fn block(&self, block_id: &str) -> BlockAvailability {
        self.blocks.get(block_id).cloned().unwrap_or_default()
    }

    pub fn count(&self, block_id: &str, equipment: &str) -> usize {
        self.blocks
            .get(block_id)
            .map_or(0, |availability| availability.count(equipment))
    }

    pub fn is_usable(&self, block_id: &str, equipment: &str) -> bool {
        self.count(block_id, equipment) > 0
    }
}
