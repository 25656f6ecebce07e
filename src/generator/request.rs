//! Generation requests and their normalization against a catalog.

use crate::catalog::{Catalog, Level};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Caller-facing request. Every field is forgiving: see [`GenerateRequest::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub duration_minutes: u32,
    #[serde(default)]
    pub level: Option<String>,
    /// Ordered preference list, primary first
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Overrides the level's default transition cap
    #[serde(default)]
    pub max_transitions: Option<u32>,
}

impl GenerateRequest {
    pub fn new(duration_minutes: u32, level: &str, equipment: &[&str]) -> Self {
        Self {
            duration_minutes,
            level: Some(level.to_string()),
            equipment: equipment.iter().map(|e| e.to_string()).collect(),
            max_transitions: None,
        }
    }

    pub fn with_max_transitions(mut self, cap: u32) -> Self {
        self.max_transitions = Some(cap);
        self
    }

    /// Resolve level, equipment and transition cap against the catalog.
    ///
    /// Unknown or missing level -> middle level. Unknown equipment ids are
    /// dropped; an empty result falls back to `[default_equipment]`.
    pub fn resolve<'c>(&self, catalog: &'c Catalog, default_equipment: &str) -> ResolvedRequest<'c> {
        let level = match self.level.as_deref() {
            Some(id) => catalog.level(id).unwrap_or_else(|| {
                warn!(level = id, "Unknown level, using middle level");
                catalog.middle_level()
            }),
            None => catalog.middle_level(),
        };

        let mut equipment: Vec<String> = Vec::new();
        for id in &self.equipment {
            let id = id.trim().to_lowercase();
            if !catalog.has_equipment(&id) {
                warn!(equipment = %id, "Ignoring unknown equipment");
                continue;
            }
            if !equipment.contains(&id) {
                equipment.push(id);
            }
        }
        if equipment.is_empty() {
            equipment.push(default_equipment.to_string());
        }

        ResolvedRequest {
            duration_minutes: self.duration_minutes.max(1),
            level,
            preferences: EquipmentPreferences::new(equipment),
            max_transitions: self.max_transitions.unwrap_or(level.max_transitions),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedRequest<'c> {
    pub duration_minutes: u32,
    pub level: &'c Level,
    pub preferences: EquipmentPreferences,
    pub max_transitions: u32,
}

/// Ordered, de-duplicated, non-empty equipment preference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentPreferences {
    list: Vec<String>,
}

impl EquipmentPreferences {
    /// `list` must be non-empty; [`GenerateRequest::resolve`] guarantees it.
    pub fn new(list: Vec<String>) -> Self {
        Self { list }
    }

    pub fn primary(&self) -> &str {
        self.list.first().map(String::as_str).unwrap_or_default()
    }

    pub fn secondary(&self) -> Option<&str> {
        self.list.get(1).map(String::as_str)
    }

    pub fn tertiary(&self) -> Option<&str> {
        self.list.get(2).map(String::as_str)
    }

    pub fn contains(&self, equipment: &str) -> bool {
        self.list.iter().any(|e| e == equipment)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.list
    }
}
