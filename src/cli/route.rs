//! CLI route: single route table and run context. Dispatches to the planning API and presentation.

use crate::api::PlanningApi;
use crate::catalog::ItemQuery;
use crate::config::ConfigLoader;
use crate::error::ApiError;
use crate::generator::{GenerateRequest, GenerationOutcome};
use crate::init::initialize_workspace;
use crate::plan::Plan;
use serde::Deserialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::output::OutputFormat;
use crate::cli::parse::{CatalogCommands, Commands, PlanCommands};
use crate::cli::presentation::{
    format_blocks_text, format_by_block_text, format_equipment_text, format_init_summary,
    format_items_text, format_levels_text, format_outcome_text, format_plan_list_text,
    format_saved_plan_text, to_json,
};
use crate::cli::{command_name, is_mutation};

/// Plan file accepted by `plan save` and `plan update`: either the full
/// `generate --format json` output or a bare plan document.
#[derive(Deserialize)]
#[serde(untagged)]
enum PlanFile {
    Outcome(GenerationOutcome),
    Plan(Plan),
}

impl PlanFile {
    fn into_plan(self) -> Plan {
        match self {
            PlanFile::Outcome(outcome) => outcome.plan,
            PlanFile::Plan(plan) => plan,
        }
    }
}

/// Runtime context for CLI execution: workspace and the planning API.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    api: PlanningApi,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        let api = PlanningApi::from_config(&config, &workspace_root)?;
        Ok(Self {
            api,
            workspace_root,
        })
    }

    /// Reference to the underlying planning API.
    pub fn api(&self) -> &PlanningApi {
        &self.api
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        debug!(command = %name, mutation = is_mutation(command), "Executing command");
        let result = self.execute_inner(command);
        match &result {
            Ok(_) => info!(command = %name, "Command completed"),
            Err(e) => info!(command = %name, error = %e, "Command failed"),
        }
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate {
                duration,
                level,
                equipment,
                max_transitions,
                seed,
                format,
                save,
                description,
            } => {
                let request = GenerateRequest {
                    duration_minutes: *duration,
                    level: level.clone(),
                    equipment: equipment.clone(),
                    max_transitions: *max_transitions,
                };
                self.handle_generate(&request, *seed, format, save.as_deref(), description)
            }
            Commands::Init { catalog, force } => {
                let result = initialize_workspace(&self.workspace_root, *catalog, *force)?;
                Ok(format_init_summary(&result, &self.workspace_root))
            }
            Commands::Catalog { command } => self.handle_catalog_command(command),
            Commands::Plan { command } => self.handle_plan_command(command),
        }
    }

    fn handle_generate(
        &self,
        request: &GenerateRequest,
        seed: Option<u64>,
        format: &str,
        save: Option<&str>,
        description: &str,
    ) -> Result<String, ApiError> {
        let format = OutputFormat::parse(format)?;
        let outcome = self.api.generate(request, seed);
        let saved_id = match save {
            Some(name) => Some(self.api.save_plan(&outcome.plan, name, description)?),
            None => None,
        };

        match format {
            OutputFormat::Json => match saved_id {
                Some(id) => to_json(&json!({ "saved_id": id, "plan": outcome.plan, "report": outcome.report })),
                None => to_json(&outcome),
            },
            OutputFormat::Text => {
                let mut out = format_outcome_text(&outcome);
                if let Some(id) = saved_id {
                    out.push_str(&format!("\n\nSaved as plan {}", id));
                }
                Ok(out)
            }
        }
    }

    fn handle_catalog_command(&self, command: &CatalogCommands) -> Result<String, ApiError> {
        match command {
            CatalogCommands::Blocks { format } => match OutputFormat::parse(format)? {
                OutputFormat::Json => to_json(self.api.blocks()),
                OutputFormat::Text => Ok(format_blocks_text(self.api.blocks())),
            },
            CatalogCommands::Levels { format } => match OutputFormat::parse(format)? {
                OutputFormat::Json => to_json(self.api.levels()),
                OutputFormat::Text => Ok(format_levels_text(self.api.levels())),
            },
            CatalogCommands::Equipment { format } => match OutputFormat::parse(format)? {
                OutputFormat::Json => to_json(self.api.equipment()),
                OutputFormat::Text => Ok(format_equipment_text(
                    self.api.equipment(),
                    self.api.catalog().floor(),
                )),
            },
            CatalogCommands::Items {
                block,
                equipment,
                level,
                format,
            } => {
                let format = OutputFormat::parse(format)?;
                let items = self.api.items(&ItemQuery {
                    block: block.as_deref(),
                    equipment: equipment.as_deref(),
                    level: level.as_deref(),
                });
                match format {
                    OutputFormat::Json => to_json(&items),
                    OutputFormat::Text => Ok(format_items_text(&items)),
                }
            }
            CatalogCommands::ByBlock {
                level,
                equipment,
                format,
            } => {
                let format = OutputFormat::parse(format)?;
                let grouped = self.api.items_by_block(level.as_deref(), equipment);
                match format {
                    OutputFormat::Json => to_json(&grouped),
                    OutputFormat::Text => Ok(format_by_block_text(&grouped, self.api.blocks())),
                }
            }
        }
    }

    fn handle_plan_command(&self, command: &PlanCommands) -> Result<String, ApiError> {
        match command {
            PlanCommands::List { format } => {
                let format = OutputFormat::parse(format)?;
                let summaries = self.api.list_plans()?;
                match format {
                    OutputFormat::Json => to_json(&summaries),
                    OutputFormat::Text => Ok(format_plan_list_text(&summaries)),
                }
            }
            PlanCommands::Show { id, format } => {
                let format = OutputFormat::parse(format)?;
                let saved = self.api.get_plan(*id)?;
                match format {
                    OutputFormat::Json => to_json(&saved),
                    OutputFormat::Text => Ok(format_saved_plan_text(&saved)),
                }
            }
            PlanCommands::Save {
                file,
                name,
                description,
            } => {
                let plan = self.read_plan_file(file)?;
                let id = self.api.save_plan(&plan, name, description)?;
                Ok(format!("Saved plan {}: {}", id, name.trim()))
            }
            PlanCommands::Update {
                id,
                file,
                name,
                description,
            } => {
                let plan = self.read_plan_file(file)?;
                self.api
                    .update_plan(*id, &plan, name.as_deref(), description.as_deref())?;
                Ok(format!("Updated plan {}", id))
            }
            PlanCommands::Delete { id, yes } => self.handle_plan_delete(*id, *yes),
        }
    }

    fn handle_plan_delete(&self, id: u64, yes: bool) -> Result<String, ApiError> {
        let saved = self.api.get_plan(id)?;
        if !yes {
            use dialoguer::Confirm;
            let confirmed = Confirm::new()
                .with_prompt(format!("Delete plan {} '{}'?", id, saved.name))
                .interact()
                .map_err(|e| ApiError::InvalidRequest(format!("Failed to get user input: {}", e)))?;

            if !confirmed {
                return Ok("Deletion cancelled".to_string());
            }
        }

        self.api.delete_plan(id)?;
        Ok(format!("Deleted plan {}: {}", id, saved.name))
    }

    fn read_plan_file(&self, file: &Path) -> Result<Plan, ApiError> {
        let path = if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.workspace_root.join(file)
        };
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            ApiError::InvalidRequest(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let parsed: PlanFile = serde_json::from_str(&contents).map_err(|e| {
            ApiError::InvalidRequest(format!("{} is not a plan document: {}", path.display(), e))
        })?;
        Ok(parsed.into_plan())
    }
}
