//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::{CatalogCommands, Commands, PlanCommands};

/// Command name string for log records (e.g. "generate", "plan.list").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Generate { .. } => "generate".to_string(),
        Commands::Init { .. } => "init".to_string(),
        Commands::Catalog { command } => format!("catalog.{}", catalog_command_name(command)),
        Commands::Plan { command } => format!("plan.{}", plan_command_name(command)),
    }
}

pub fn catalog_command_name(command: &CatalogCommands) -> &'static str {
    match command {
        CatalogCommands::Blocks { .. } => "blocks",
        CatalogCommands::Levels { .. } => "levels",
        CatalogCommands::Equipment { .. } => "equipment",
        CatalogCommands::Items { .. } => "items",
        CatalogCommands::ByBlock { .. } => "by_block",
    }
}

pub fn plan_command_name(command: &PlanCommands) -> &'static str {
    match command {
        PlanCommands::List { .. } => "list",
        PlanCommands::Show { .. } => "show",
        PlanCommands::Save { .. } => "save",
        PlanCommands::Update { .. } => "update",
        PlanCommands::Delete { .. } => "delete",
    }
}

/// Whether the command writes to the plan store or the workspace.
pub fn is_mutation(command: &Commands) -> bool {
    match command {
        Commands::Generate { save, .. } => save.is_some(),
        Commands::Init { .. } => true,
        Commands::Catalog { .. } => false,
        Commands::Plan { command } => matches!(
            command,
            PlanCommands::Save { .. } | PlanCommands::Update { .. } | PlanCommands::Delete { .. }
        ),
    }
}
