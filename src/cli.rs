//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to the planning API.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, is_mutation};
pub use output::{map_error, OutputFormat};
pub use parse::{CatalogCommands, Cli, Commands, PlanCommands};
pub use presentation::{
    format_blocks_text, format_by_block_text, format_equipment_text, format_init_summary,
    format_items_text, format_levels_text, format_outcome_text, format_plan_list_text,
    format_plan_text, format_saved_plan_text, to_json,
};
pub use route::RunContext;
