//! Configuration loading facade.
//!
//! Layers, lowest to highest precedence: merge-policy defaults, the global
//! user file, workspace `config/config.toml`, `config/{CADENCE_ENV}.toml`,
//! then `CADENCE__*` environment variables.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::CadenceConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load layered configuration for a workspace.
    pub fn load(workspace_root: &Path) -> Result<CadenceConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: CadenceConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load a single configuration file on top of the defaults.
    pub fn load_from_file(path: &Path) -> Result<CadenceConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults only.
    pub fn defaults() -> CadenceConfig {
        CadenceConfig::default()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
