//! Saved Plan Store
//!
//! Named, persistent plans. Each saved plan keeps the full plan document plus a
//! flat summary record used for listings.

pub mod persistence;

pub use persistence::SledPlanStore;

use crate::error::StorageError;
use crate::plan::Plan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored plan document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub plan: Plan,
    /// blake3 of the plan's JSON encoding
    pub fingerprint: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
    pub updated_at: i64,
}

/// Listing record, stored separately from the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlanSummary {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub level: String,
    pub total_items: usize,
    pub transitions: u32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl SavedPlan {
    pub fn summary(&self) -> SavedPlanSummary {
        SavedPlanSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            duration_minutes: self.plan.duration_minutes,
            level: self.plan.level.clone(),
            total_items: self.plan.total_items,
            transitions: self.plan.transitions,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl SavedPlanSummary {
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.updated_at)
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}

/// Saved plan store interface
pub trait PlanStore {
    /// Persist a new plan and return its id.
    fn save(&self, plan: &Plan, name: &str, description: &str) -> Result<u64, StorageError>;

    fn get(&self, id: u64) -> Result<Option<SavedPlan>, StorageError>;

    /// Summaries, most recently updated first.
    fn list(&self) -> Result<Vec<SavedPlanSummary>, StorageError>;

    /// Replace the plan content (blocks, item count, transitions) and optionally
    /// the name and description. Duration, level and equipment stay as saved.
    /// Returns false when no plan has this id.
    fn update(
        &self,
        id: u64,
        plan: &Plan,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<bool, StorageError>;

    /// Returns false when no plan has this id.
    fn delete(&self, id: u64) -> Result<bool, StorageError>;
}
