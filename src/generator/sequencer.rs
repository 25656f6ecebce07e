//! Block sequencing: fixed endpoints, reorderable blocks in between.
//!
//! Reorderable blocks that cannot use the secondary equipment go first and the
//! secondary-capable ones last, so a contiguous secondary run can sit at the
//! tail without forcing a later block back onto the primary equipment.

use super::request::EquipmentPreferences;
use crate::catalog::{Availability, Block, Catalog};

/// Reorderable blocks, secondary-incapable first. Ties keep catalog order.
pub fn order_reorderable<'c>(
    catalog: &'c Catalog,
    availability: &Availability,
    preferences: &EquipmentPreferences,
) -> Vec<&'c Block> {
    let blocks = catalog.reorderable_blocks();
    let Some(secondary) = preferences.secondary() else {
        return blocks;
    };

    let (capable, incapable): (Vec<&Block>, Vec<&Block>) = blocks
        .into_iter()
        .partition(|block| availability.is_usable(&block.id, secondary));
    incapable.into_iter().chain(capable).collect()
}

/// Full block order: opening, sequenced reorderable blocks, closing.
pub fn ordered_blocks<'c>(
    catalog: &'c Catalog,
    availability: &Availability,
    preferences: &EquipmentPreferences,
) -> Vec<&'c Block> {
    let mut ordered = vec![catalog.opening_block()];
    ordered.extend(order_reorderable(catalog, availability, preferences));
    ordered.push(catalog.closing_block());
    ordered
}
