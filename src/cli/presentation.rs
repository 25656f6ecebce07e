//! CLI presentation: text and json formatters per command family.

mod catalog;
mod init;
mod plan;

pub use catalog::{
    format_blocks_text, format_by_block_text, format_equipment_text, format_items_text,
    format_levels_text,
};
pub use init::format_init_summary;
pub use plan::{
    format_outcome_text, format_plan_list_text, format_plan_text, format_saved_plan_text,
};

use crate::error::ApiError;
use serde::Serialize;

/// Pretty JSON for any serializable result.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}
