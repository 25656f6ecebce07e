//! CLI parse: clap types for Cadence. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cadence CLI - randomized workout plan generator
#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Generate time-boxed workout plans from an exercise catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plan
    Generate {
        /// Plan length in minutes
        #[arg(long, short = 'd', default_value = "50")]
        duration: u32,
        /// Level id (unknown or missing: the middle level)
        #[arg(long, short = 'l')]
        level: Option<String>,
        /// Equipment preference, primary first (repeatable)
        #[arg(long = "equipment", short = 'e')]
        equipment: Vec<String>,
        /// Override the level's transition cap
        #[arg(long)]
        max_transitions: Option<u32>,
        /// Seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Save the generated plan under this name
        #[arg(long)]
        save: Option<String>,
        /// Description stored with --save
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Write default config (and optionally the built-in catalog) into the workspace
    Init {
        /// Also export the built-in catalog to catalog.json and point the config at it
        #[arg(long)]
        catalog: bool,
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Browse the exercise catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Manage saved plans
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List blocks in catalog order
    Blocks {
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List levels by rank
    Levels {
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List equipment types
    Equipment {
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List items, optionally filtered
    Items {
        #[arg(long)]
        block: Option<String>,
        #[arg(long)]
        equipment: Option<String>,
        /// Items usable at this level
        #[arg(long)]
        level: Option<String>,
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Items grouped by block for a level and equipment selection
    ByBlock {
        #[arg(long)]
        level: Option<String>,
        #[arg(long = "equipment", short = 'e')]
        equipment: Vec<String>,
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List saved plans, most recently updated first
    List {
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show a saved plan
    Show {
        id: u64,
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Save a plan from a JSON file (output of `generate --format json`)
    Save {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Replace a saved plan's content from a JSON file
    Update {
        id: u64,
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a saved plan
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
