//! Planning API
//!
//! Stateless facade over the catalog, the generator and the plan store. The CLI
//! talks only to this type.

use crate::catalog::{Block, Catalog, Equipment, Item, ItemQuery, Level};
use crate::config::CadenceConfig;
use crate::error::ApiError;
use crate::generator::{
    from_entropy, seeded, GenerateRequest, GenerationOutcome, Generator, GeneratorConfig,
};
use crate::plan::Plan;
use crate::store::{PlanStore, SavedPlan, SavedPlanSummary, SledPlanStore};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Planning API service
pub struct PlanningApi {
    catalog: Arc<Catalog>,
    generator: GeneratorConfig,
    store: Arc<dyn PlanStore + Send + Sync>,
}

impl PlanningApi {
    pub fn new(
        catalog: Arc<Catalog>,
        generator: GeneratorConfig,
        store: Arc<dyn PlanStore + Send + Sync>,
    ) -> Self {
        Self {
            catalog,
            generator,
            store,
        }
    }

    /// Build the API from loaded configuration.
    ///
    /// Uses the configured JSON catalog when one is set, else the built-in one,
    /// and opens the sled store under the workspace root. The default
    /// equipment must exist in that catalog.
    pub fn from_config(config: &CadenceConfig, workspace_root: &Path) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                messages.join("\n")
            ))
        })?;

        let catalog = match config.catalog.resolved_path(workspace_root) {
            Some(path) => Catalog::from_json_file(&path)?,
            None => Catalog::builtin(),
        };
        let default_equipment = &config.generator.default_equipment;
        if !catalog.has_equipment(default_equipment) {
            return Err(ApiError::ConfigError(format!(
                "generator.default_equipment '{}' is not in the catalog",
                default_equipment
            )));
        }
        let store_path = config.system.storage.resolved_store_path(workspace_root);
        let store = SledPlanStore::new(&store_path)?;
        debug!(store = %store_path.display(), "Plan store opened");

        Ok(Self::new(
            Arc::new(catalog),
            config.generator.clone(),
            Arc::new(store),
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn generator_config(&self) -> &GeneratorConfig {
        &self.generator
    }

    /// Generate a plan. A seed makes the result reproducible.
    pub fn generate(&self, request: &GenerateRequest, seed: Option<u64>) -> GenerationOutcome {
        let generator = Generator::new(&self.catalog, self.generator.clone());
        match seed {
            Some(seed) => generator.generate(request, &mut seeded(seed)),
            None => generator.generate(request, &mut from_entropy()),
        }
    }

    pub fn save_plan(&self, plan: &Plan, name: &str, description: &str) -> Result<u64, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidRequest("plan name cannot be empty".to_string()));
        }
        let id = self.store.save(plan, name, description)?;
        info!(id, name, "Saved plan");
        Ok(id)
    }

    /// Load a saved plan. The equipment flow is rebuilt from the items and the
    /// level display name refreshed from the catalog.
    pub fn get_plan(&self, id: u64) -> Result<SavedPlan, ApiError> {
        let mut saved = self.store.get(id)?.ok_or(ApiError::PlanNotFound(id))?;
        saved.plan.rebuild_equipment_flow();
        if let Some(level) = self.catalog.level(&saved.plan.level) {
            saved.plan.level_name = level.name.clone();
        }
        Ok(saved)
    }

    pub fn list_plans(&self) -> Result<Vec<SavedPlanSummary>, ApiError> {
        Ok(self.store.list()?)
    }

    pub fn update_plan(
        &self,
        id: u64,
        plan: &Plan,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<(), ApiError> {
        if name.map_or(false, |n| n.trim().is_empty()) {
            return Err(ApiError::InvalidRequest("plan name cannot be empty".to_string()));
        }
        if !self.store.update(id, plan, name.map(str::trim), description)? {
            return Err(ApiError::PlanNotFound(id));
        }
        info!(id, "Updated plan");
        Ok(())
    }

    pub fn delete_plan(&self, id: u64) -> Result<(), ApiError> {
        if !self.store.delete(id)? {
            return Err(ApiError::PlanNotFound(id));
        }
        info!(id, "Deleted plan");
        Ok(())
    }

    pub fn blocks(&self) -> &[Block] {
        self.catalog.blocks()
    }

    pub fn levels(&self) -> &[Level] {
        self.catalog.levels()
    }

    pub fn equipment(&self) -> &[Equipment] {
        self.catalog.equipment()
    }

    pub fn items(&self, query: &ItemQuery<'_>) -> Vec<&Item> {
        self.catalog.query(query)
    }

    /// Items usable at `level` with any of `equipment`, grouped by block id.
    /// An empty equipment list means every equipment type.
    pub fn items_by_block(
        &self,
        level: Option<&str>,
        equipment: &[String],
    ) -> BTreeMap<String, Vec<&Item>> {
        let equipment: Vec<String> = if equipment.is_empty() {
            self.catalog.equipment().iter().map(|e| e.id.clone()).collect()
        } else {
            equipment.iter().map(|e| e.trim().to_lowercase()).collect()
        };
        self.catalog.grouped_by_block(level, &equipment)
    }
}
