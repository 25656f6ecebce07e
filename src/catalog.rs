//! Exercise Catalog
//!
//! Immutable, read-only arena of blocks, levels, equipment and items. Built once
//! (from the built-in data or a JSON document) and passed by reference to every
//! generator component. Nothing mutates a catalog after construction.

mod availability;
mod builtin;
mod model;

pub use availability::{Availability, BlockAvailability};
pub use model::{Block, BlockKind, CatalogDocument, Equipment, Item, Level};

use crate::error::CatalogError;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use tracing::debug;

/// Filter for [`Catalog::query`]. Every field is optional; `None` matches all.
#[derive(Debug, Clone, Default)]
pub struct ItemQuery<'a> {
    pub block: Option<&'a str>,
    pub equipment: Option<&'a str>,
    /// Target level id: items usable at this level match
    pub level: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    floor: String,
    equipment: Vec<Equipment>,
    blocks: Vec<Block>,
    levels: Vec<Level>,
    items: Vec<Item>,
    level_ranks: HashMap<String, f64>,
    items_by_block: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self::index(builtin::document())
    }

    /// The built-in catalog as an editable document.
    pub fn builtin_document() -> CatalogDocument {
        builtin::document()
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_document(document)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            items = catalog.items.len(),
            "Loaded catalog from file"
        );
        Ok(catalog)
    }

    /// Validate a document and build the lookup indexes.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        validate(&document)?;
        Ok(Self::index(document))
    }

    fn index(document: CatalogDocument) -> Self {
        let CatalogDocument {
            floor,
            equipment,
            blocks,
            mut levels,
            items,
        } = document;

        let level_ranks = levels.iter().map(|l| (l.id.clone(), l.rank)).collect();
        let mut items_by_block: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, item) in items.iter().enumerate() {
            items_by_block
                .entry(item.block.clone())
                .or_default()
                .push(index);
        }
        levels.sort_by(|a, b| a.rank.total_cmp(&b.rank));

        Self {
            floor,
            equipment,
            blocks,
            levels,
            items,
            level_ranks,
            items_by_block,
        }
    }

    /// Equipment id of the floor surface (`mat` in the built-in catalog).
    pub fn floor(&self) -> &str {
        &self.floor
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn has_equipment(&self, id: &str) -> bool {
        self.equipment.iter().any(|e| e.id == id)
    }

    /// All blocks in declaration order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn opening_block(&self) -> &Block {
        self.fixed_block(BlockKind::Opening)
    }

    pub fn closing_block(&self) -> &Block {
        self.fixed_block(BlockKind::Closing)
    }

    fn fixed_block(&self, kind: BlockKind) -> &Block {
        // Exactly one block of each fixed kind is enforced in from_document.
        self.blocks
            .iter()
            .find(|b| b.kind == kind)
            .unwrap_or(&self.blocks[0])
    }

    /// Reorderable blocks in declaration order.
    pub fn reorderable_blocks(&self) -> Vec<&Block> {
        self.blocks
            .iter()
            .filter(|b| b.kind == BlockKind::Reorderable)
            .collect()
    }

    /// Levels ordered by rank.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, id: &str) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// Level used when a request names no level (or an unknown one).
    pub fn middle_level(&self) -> &Level {
        &self.levels[(self.levels.len() - 1) / 2]
    }

    pub fn resolve_level(&self, id: Option<&str>) -> &Level {
        id.and_then(|id| self.level(id))
            .unwrap_or_else(|| self.middle_level())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items of a block in declaration order.
    pub fn block_items(&self, block_id: &str) -> impl Iterator<Item = &Item> + '_ {
        self.items_by_block
            .get(block_id)
            .into_iter()
            .flatten()
            .map(move |&index| &self.items[index])
    }

    /// An item is usable at a target level when its minimum rank is not above it.
    pub fn is_usable(&self, item: &Item, level: &Level) -> bool {
        self.level_ranks
            .get(&item.level)
            .is_some_and(|rank| *rank <= level.rank)
    }

    /// Items usable at `level` in `block_id` that support `equipment`.
    pub fn candidates<'a>(
        &'a self,
        block_id: &'a str,
        equipment: &'a str,
        level: &'a Level,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        self.block_items(block_id)
            .filter(move |item| item.supports(equipment) && self.is_usable(item, level))
    }

    pub fn query(&self, query: &ItemQuery<'_>) -> Vec<&Item> {
        let level = query.level.map(|id| self.resolve_level(Some(id)));
        self.items
            .iter()
            .filter(|item| query.block.map_or(true, |b| item.block == b))
            .filter(|item| query.equipment.map_or(true, |e| item.supports(e)))
            .filter(|item| level.map_or(true, |l| self.is_usable(item, l)))
            .collect()
    }

    /// Items grouped by block id, every block present (possibly empty).
    /// An item passes the equipment filter when it supports any listed equipment.
    pub fn grouped_by_block(
        &self,
        level: Option<&str>,
        equipment: &[String],
    ) -> BTreeMap<String, Vec<&Item>> {
        let mut grouped = BTreeMap::new();
        for block in &self.blocks {
            let items = self
                .query(&ItemQuery {
                    block: Some(&block.id),
                    equipment: None,
                    level,
                })
                .into_iter()
                .filter(|item| equipment.is_empty() || equipment.iter().any(|e| item.supports(e)))
                .collect();
            grouped.insert(block.id.clone(), items);
        }
        grouped
    }
}

fn validate(document: &CatalogDocument) -> Result<(), CatalogError> {
    if document.levels.is_empty() {
        return Err(CatalogError::NoLevels);
    }

    let equipment_ids = unique_ids("equipment", document.equipment.iter().map(|e| e.id.as_str()))?;
    let block_ids = unique_ids("block", document.blocks.iter().map(|b| b.id.as_str()))?;
    let level_ids = unique_ids("level", document.levels.iter().map(|l| l.id.as_str()))?;
    unique_ids("item", document.items.iter().map(|i| i.id.as_str()))?;

    if !equipment_ids.contains(document.floor.as_str()) {
        return Err(CatalogError::UnknownFloor(document.floor.clone()));
    }
    for (kind, label) in [(BlockKind::Opening, "opening"), (BlockKind::Closing, "closing")] {
        if document.blocks.iter().filter(|b| b.kind == kind).count() != 1 {
            return Err(CatalogError::FixedBlock(label));
        }
    }

    for item in &document.items {
        if !block_ids.contains(item.block.as_str()) {
            return Err(CatalogError::UnknownBlock {
                item: item.id.clone(),
                block: item.block.clone(),
            });
        }
        if !level_ids.contains(item.level.as_str()) {
            return Err(CatalogError::UnknownLevel {
                item: item.id.clone(),
                level: item.level.clone(),
            });
        }
        if item.equipment.is_empty() {
            return Err(CatalogError::NoEquipment(item.id.clone()));
        }
        if let Some(unknown) = item
            .equipment
            .iter()
            .find(|e| !equipment_ids.contains(e.as_str()))
        {
            return Err(CatalogError::UnknownEquipment {
                item: item.id.clone(),
                equipment: unknown.clone(),
            });
        }
    }
    Ok(())
}

fn unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(seen)
}
