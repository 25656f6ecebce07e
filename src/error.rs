//! Error types for the Cadence plan generation system.
//!
//! Plan generation itself never fails: constraint failures are reported as
//! [`crate::generator::Violation`] data. The errors here cover the layers around
//! the generator (catalog loading, persistence, configuration, CLI requests).

use thiserror::Error;

/// Catalog loading and validation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Item {item} references unknown block: {block}")]
    UnknownBlock { item: String, block: String },

    #[error("Item {item} references unknown level: {level}")]
    UnknownLevel { item: String, level: String },

    #[error("Item {item} references unknown equipment: {equipment}")]
    UnknownEquipment { item: String, equipment: String },

    #[error("Item {0} lists no compatible equipment")]
    NoEquipment(String),

    #[error("Catalog must declare exactly one {0} block")]
    FixedBlock(&'static str),

    #[error("Catalog declares no levels")]
    NoLevels,

    #[error("Catalog floor equipment {0} is not declared")]
    UnknownFloor(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Catalog I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to open plan store: {0}")]
    Open(String),

    #[error("Failed to encode stored record: {0}")]
    Encode(String),

    #[error("Failed to decode stored record: {0}")]
    Decode(String),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        StorageError::Backend(err.to_string())
    }
}

/// API-level errors surfaced to the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Saved plan not found: {0}")]
    PlanNotFound(u64),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Output(err.to_string())
    }
}
