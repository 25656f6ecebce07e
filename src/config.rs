//! Configuration System
//!
//! Layered runtime configuration for the generator, the catalog source, plan
//! storage and logging. See [`ConfigLoader`] for the precedence order.

use crate::generator::GeneratorConfig;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CadenceConfig {
    /// Plan generation settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// System-wide settings
    #[serde(default)]
    pub system: SystemConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the catalog comes from. No path means the built-in catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file, relative paths resolve against the workspace root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// System-wide configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Plan store directory, relative paths resolve against the workspace root
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".cadence/store")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Generator(String),
    Catalog(String),
    System(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Generator(msg) => write!(f, "Generator: {}", msg),
            ValidationError::Catalog(msg) => write!(f, "Catalog: {}", msg),
            ValidationError::System(msg) => write!(f, "System: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl SystemConfig {
    /// Validate system configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.storage.store_path.as_os_str().is_empty() {
            return Err("Store path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), String> {
        match &self.path {
            Some(path) if path.as_os_str().is_empty() => {
                Err("Catalog path cannot be empty".to_string())
            }
            _ => Ok(()),
        }
    }

    pub fn resolved_path(&self, workspace_root: &Path) -> Option<PathBuf> {
        self.path.as_ref().map(|path| resolve(workspace_root, path))
    }
}

impl StorageConfig {
    pub fn resolved_store_path(&self, workspace_root: &Path) -> PathBuf {
        resolve(workspace_root, &self.store_path)
    }
}

fn resolve(workspace_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace_root.join(path)
    }
}

impl CadenceConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.generator.validate() {
            errors.push(ValidationError::Generator(e));
        }
        if let Err(e) = self.catalog.validate() {
            errors.push(ValidationError::Catalog(e));
        }
        if let Err(e) = self.system.validate() {
            errors.push(ValidationError::System(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
