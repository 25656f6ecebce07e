//! Persistence layer for the saved plan store

use crate::error::StorageError;
use crate::plan::Plan;
use crate::store::{PlanStore, SavedPlan, SavedPlanSummary};
use chrono::Utc;
use sled::transaction::{ConflictableTransactionError, TransactionError};
use sled::Transactional;
use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

const PLANS_TREE: &str = "plans";
const SUMMARIES_TREE: &str = "summaries";

/// Sled-based implementation of PlanStore
///
/// Plan documents live in the `plans` tree as JSON, summaries in the
/// `summaries` tree as bincode. Keys are big-endian ids so iteration follows
/// insertion order.
pub struct SledPlanStore {
    db: sled::Db,
    plans: sled::Tree,
    summaries: sled::Tree,
    /// Last timestamp handed out; timestamps strictly increase per store
    clock: AtomicI64,
}

impl SledPlanStore {
    /// Open (or create) a store at the given directory
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path.as_ref()).map_err(|e| {
            StorageError::Open(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_db(db)
    }

    /// In-memory store that is never written to disk
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(|e| StorageError::Open(e.to_string()))?;
        Self::from_db(db)
    }

    fn from_db(db: sled::Db) -> Result<Self, StorageError> {
        let plans = db.open_tree(PLANS_TREE)?;
        let summaries = db.open_tree(SUMMARIES_TREE)?;
        Ok(Self {
            db,
            plans,
            summaries,
            clock: AtomicI64::new(0),
        })
    }

    fn tick(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .clock
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(now.max(last + 1)))
            .unwrap_or(now);
        now.max(previous + 1)
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }

    fn write(&self, saved: &SavedPlan) -> Result<(), StorageError> {
        let key = saved.id.to_be_bytes();
        let document =
            serde_json::to_vec(saved).map_err(|e| StorageError::Encode(e.to_string()))?;
        let summary = bincode::serialize(&saved.summary())
            .map_err(|e| StorageError::Encode(e.to_string()))?;

        (&self.plans, &self.summaries)
            .transaction(|(plans, summaries)| {
                plans.insert(&key[..], document.as_slice())?;
                summaries.insert(&key[..], summary.as_slice())?;
                Ok::<_, ConflictableTransactionError<()>>(())
            })
            .map_err(transaction_error)
    }
}

fn transaction_error(err: TransactionError<()>) -> StorageError {
    match err {
        TransactionError::Storage(e) => e.into(),
        TransactionError::Abort(()) => StorageError::Backend("transaction aborted".to_string()),
    }
}

fn fingerprint(plan: &Plan) -> Result<String, StorageError> {
    plan.fingerprint()
        .map_err(|e| StorageError::Encode(e.to_string()))
}

impl PlanStore for SledPlanStore {
    fn save(&self, plan: &Plan, name: &str, description: &str) -> Result<u64, StorageError> {
        // sled ids start at 0; saved plans are numbered from 1
        let id = self.db.generate_id()? + 1;
        let now = self.tick();
        let saved = SavedPlan {
            id,
            name: name.to_string(),
            description: description.to_string(),
            plan: plan.clone(),
            fingerprint: fingerprint(plan)?,
            created_at: now,
            updated_at: now,
        };
        self.write(&saved)?;
        debug!(id, name, "Plan saved");
        Ok(id)
    }

    fn get(&self, id: u64) -> Result<Option<SavedPlan>, StorageError> {
        match self.plans.get(id.to_be_bytes())? {
            Some(value) => {
                let saved: SavedPlan = serde_json::from_slice(&value)
                    .map_err(|e| StorageError::Decode(e.to_string()))?;
                Ok(Some(saved))
            }
            None => Ok(None),
        }
    }

    fn list(&self) -> Result<Vec<SavedPlanSummary>, StorageError> {
        let mut summaries = Vec::new();
        for entry in self.summaries.iter() {
            let (_, value) = entry?;
            let summary: SavedPlanSummary = bincode::deserialize(&value)
                .map_err(|e| StorageError::Decode(e.to_string()))?;
            summaries.push(summary);
        }
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(summaries)
    }

    fn update(
        &self,
        id: u64,
        plan: &Plan,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<bool, StorageError> {
        let Some(mut saved) = self.get(id)? else {
            return Ok(false);
        };

        saved.plan.blocks = plan.blocks.clone();
        saved.plan.total_items = plan.total_items;
        saved.plan.transitions = plan.transitions;
        if let Some(name) = name {
            saved.name = name.to_string();
        }
        if let Some(description) = description {
            saved.description = description.to_string();
        }
        saved.fingerprint = fingerprint(&saved.plan)?;
        saved.updated_at = self.tick();

        self.write(&saved)?;
        debug!(id, "Plan updated");
        Ok(true)
    }

    fn delete(&self, id: u64) -> Result<bool, StorageError> {
        let key = id.to_be_bytes();
        // document and summary go together; either one present counts as removed
        let removed = (&self.plans, &self.summaries)
            .transaction(|(plans, summaries)| {
                let document = plans.remove(&key[..])?;
                let summary = summaries.remove(&key[..])?;
                Ok::<_, ConflictableTransactionError<()>>(document.is_some() || summary.is_some())
            })
            .map_err(transaction_error)?;
        if removed {
            debug!(id, "Plan deleted");
        }
        Ok(removed)
    }
}
