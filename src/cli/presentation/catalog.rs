//! Catalog presentation: blocks, levels, equipment and item tables.

use crate::catalog::{Block, BlockKind, Equipment, Item, Level};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;

pub fn format_blocks_text(blocks: &[Block]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Name", "Position", "Typical min"]);
    for block in blocks {
        let position = match block.kind {
            BlockKind::Opening => "opening",
            BlockKind::Reorderable => "reorderable",
            BlockKind::Closing => "closing",
        };
        table.add_row(vec![
            block.id.clone(),
            block.name.clone(),
            position.to_string(),
            format!("{}", block.typical_minutes),
        ]);
    }
    table.to_string()
}

pub fn format_levels_text(levels: &[Level]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Name", "Rank", "Reps x", "Items x", "Max transitions"]);
    for level in levels {
        table.add_row(vec![
            level.id.clone(),
            level.name.clone(),
            format!("{}", level.rank),
            format!("{}", level.rep_multiplier),
            format!("{}", level.item_count_multiplier),
            level.max_transitions.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_equipment_text(equipment: &[Equipment], floor: &str) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Name", ""]);
    for entry in equipment {
        let note = if entry.id == floor { "floor" } else { "" };
        table.add_row(vec![entry.id.clone(), entry.name.clone(), note.to_string()]);
    }
    table.to_string()
}

pub fn format_items_text(items: &[&Item]) -> String {
    if items.is_empty() {
        return "No matching items.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Name", "Block", "Equipment", "Level", "Setup", "Reps", "Sec"]);
    for item in items {
        table.add_row(vec![
            item.id.clone(),
            item.name.clone(),
            item.block.clone(),
            item.equipment.join(", "),
            item.level.clone(),
            item.sub_configuration.clone(),
            item.reps.to_string(),
            item.duration_seconds.to_string(),
        ]);
    }
    format!("{}\n{} items", table, items.len())
}

/// Grouped listing in catalog block order.
pub fn format_by_block_text(grouped: &BTreeMap<String, Vec<&Item>>, blocks: &[Block]) -> String {
    let mut sections = Vec::new();
    for block in blocks {
        let items = grouped.get(&block.id).map(Vec::as_slice).unwrap_or_default();
        let mut section = format!("{} ({})", block.name.bold(), items.len());
        if items.is_empty() {
            section.push_str(&format!("\n  {}", "no items".dimmed()));
        }
        for item in items {
            section.push_str(&format!("\n  {} [{}]", item.name, item.equipment.join(", ")));
        }
        sections.push(section);
    }
    sections.join("\n\n")
}
