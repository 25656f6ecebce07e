//! Workspace initialization
//!
//! `cadence init` writes a `config/config.toml` holding the default settings
//! and, on request, a copy of the built-in catalog as editable JSON. Existing
//! files are skipped unless `force` is set.

use crate::catalog::Catalog;
use crate::config::CadenceConfig;
use crate::error::ApiError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Workspace-relative location of the exported catalog.
pub const CATALOG_FILE: &str = "catalog.json";

/// Result of initialization operation
#[derive(Debug, Clone, Default)]
pub struct InitResult {
    pub created: Vec<PathBuf>,
    pub overwritten: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Default configuration as pretty TOML. With `with_catalog`, the catalog path
/// points at the exported JSON file.
pub fn default_config_toml(with_catalog: bool) -> Result<String, ApiError> {
    let mut config = CadenceConfig::default();
    if with_catalog {
        config.catalog.path = Some(PathBuf::from(CATALOG_FILE));
    }
    toml::to_string_pretty(&config)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize default config: {}", e)))
}

/// Built-in catalog as pretty JSON.
pub fn builtin_catalog_json() -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(&Catalog::builtin_document())?)
}

/// Write the default files into `workspace_root`.
pub fn initialize_workspace(
    workspace_root: &Path,
    with_catalog: bool,
    force: bool,
) -> Result<InitResult, ApiError> {
    let mut result = InitResult::default();

    let config_path = workspace_root.join("config").join("config.toml");
    write_file(&config_path, &default_config_toml(with_catalog)?, force, &mut result)?;

    if with_catalog {
        let catalog_path = workspace_root.join(CATALOG_FILE);
        write_file(&catalog_path, &builtin_catalog_json()?, force, &mut result)?;
    }

    info!(
        workspace = %workspace_root.display(),
        created = result.created.len(),
        overwritten = result.overwritten.len(),
        skipped = result.skipped.len(),
        "Workspace initialized"
    );
    Ok(result)
}

fn write_file(
    path: &Path,
    contents: &str,
    force: bool,
    result: &mut InitResult,
) -> Result<(), ApiError> {
    let existed = path.exists();
    if existed && !force {
        result.skipped.push(path.to_path_buf());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ApiError::InvalidRequest(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    std::fs::write(path, contents).map_err(|e| {
        ApiError::InvalidRequest(format!("Failed to write {}: {}", path.display(), e))
    })?;

    if existed {
        result.overwritten.push(path.to_path_buf());
    } else {
        result.created.push(path.to_path_buf());
    }
    Ok(())
}
