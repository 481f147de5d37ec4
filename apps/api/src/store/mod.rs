//! Analysis history: a capped, most-recent-first list of `AnalysisRecord`s kept in a
//! single JSON slot.
//!
//! Nothing here returns an error to the caller: failures surface as `false` / `None`
//! and are logged, corrupt content reads as an empty history. A slot that cannot be
//! read is never written to. There is no locking across processes; concurrent
//! writers are last-write-wins.

pub mod slot;

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::models::analysis::{AnalysisRecord, RecordUpdate};
use crate::store::slot::{HistorySlot, SlotError};

/// Maximum number of records retained; saving beyond this evicts the oldest.
pub const HISTORY_CAPACITY: usize = 20;

#[derive(Clone)]
pub struct AnalysisStore {
    slot: Arc<dyn HistorySlot>,
}

impl AnalysisStore {
    pub fn new(slot: Arc<dyn HistorySlot>) -> Self {
        Self { slot }
    }

    /// Upserts `record`. A known id is replaced in place (position kept, `updated_at`
    /// refreshed); a new id goes to the front and the list is cut to capacity.
    pub fn save(&self, record: &AnalysisRecord) -> bool {
        let mut history = match self.load() {
            Ok(history) => history,
            Err(e) => {
                error!("Failed to save analysis {}: history unreadable: {e}", record.id);
                return false;
            }
        };

        match history.iter().position(|h| h.id == record.id) {
            Some(index) => {
                let mut replacement = record.clone();
                replacement.updated_at = Utc::now();
                history[index] = replacement;
            }
            None => {
                history.insert(0, record.clone());
                history.truncate(HISTORY_CAPACITY);
            }
        }

        match self.write(&history) {
            Ok(()) => {
                debug!("Saved analysis {} ({} in history)", record.id, history.len());
                true
            }
            Err(e) => {
                error!("Failed to save analysis {}: {e}", record.id);
                false
            }
        }
    }

    /// Merges `update` into the record with `id`. Returns `None` when the id is
    /// unknown (nothing is written), the history cannot be read or the write fails.
    pub fn update(&self, id: Uuid, update: RecordUpdate) -> Option<AnalysisRecord> {
        let mut history = match self.load() {
            Ok(history) => history,
            Err(e) => {
                error!("Failed to update analysis {id}: history unreadable: {e}");
                return None;
            }
        };
        let index = history.iter().position(|h| h.id == id)?;

        history[index].apply(update, Utc::now());
        let merged = history[index].clone();

        match self.write(&history) {
            Ok(()) => Some(merged),
            Err(e) => {
                error!("Failed to update analysis {id}: {e}");
                None
            }
        }
    }

    /// All well-formed records, most recent first.
    ///
    /// Unreadable slots, invalid JSON and non-array roots all read as empty. Entries
    /// without an id or without a numeric `readinessScore` are dropped, as are
    /// entries that no longer match the record schema.
    pub fn list(&self) -> Vec<AnalysisRecord> {
        self.load().unwrap_or_else(|e| {
            warn!("Failed to read analysis history: {e}");
            Vec::new()
        })
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<AnalysisRecord> {
        self.list().into_iter().find(|r| r.id == id)
    }

    /// Reads and filters the slot. Only a backend read failure is an error;
    /// corrupt content is an empty history.
    fn load(&self) -> Result<Vec<AnalysisRecord>, SlotError> {
        let Some(raw) = self.slot.get()? else {
            return Ok(Vec::new());
        };

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                warn!("Analysis history is not an array; treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!("Failed to parse analysis history (corrupt data ignored): {e}");
                return Ok(Vec::new());
            }
        };

        let history: Vec<AnalysisRecord> = items
            .into_iter()
            .filter(is_intact)
            .filter_map(|item| match serde_json::from_value::<AnalysisRecord>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Dropping malformed analysis record: {e}");
                    None
                }
            })
            .collect();
        Ok(history)
    }

    fn write(&self, history: &[AnalysisRecord]) -> Result<(), SlotError> {
        let json = serde_json::to_string(history)
            .map_err(|e| SlotError::Unavailable(format!("serialization failed: {e}")))?;
        self.slot.set(json)
    }
}

/// Minimal integrity check applied before schema deserialization.
fn is_intact(item: &Value) -> bool {
    let has_id = item
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| !id.is_empty());
    let has_score = item.get("readinessScore").is_some_and(Value::is_number);
    has_id && has_score
}
