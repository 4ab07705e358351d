//! Ordered game history for a single rating category.
//!
//! Edits and removals that miss their target are no-ops rather than errors,
//! tolerating UI state that points at an already-deleted record.

use serde::{Deserialize, Serialize};

use crate::rating::round_to_tenths;
use crate::record::{GameRecord, RecordPatch};

/// Identifies a record to remove: by stable id (preferred) or by positional
/// index (kept for callers that predate stable ids).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordRef<'a> {
    Id(&'a str),
    Position(usize),
}

/// Append-ordered collection of game records for one category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameHistory {
    records: Vec<GameRecord>,
}

impl GameHistory {
    pub fn new() -> Self {
        GameHistory::default()
    }

    pub fn from_records(records: Vec<GameRecord>) -> Self {
        GameHistory { records }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<GameRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Append a record, or replace in place when one with the same id already
    /// exists (a re-submitted form updates rather than duplicates).
    pub fn add(&mut self, record: GameRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Merge `patch` into the record with `id`. Returns false when no record
    /// matches. Last write wins.
    pub fn apply_edit(&mut self, id: &str, patch: &RecordPatch) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Re-derive the cached fields of the record with `id` from its current
    /// source fields. Returns false when no record matches.
    pub fn recompute(&mut self, id: &str) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.recompute();
                true
            }
            None => false,
        }
    }

    /// Remove a record. A missing id or out-of-range index is a no-op.
    pub fn remove(&mut self, target: RecordRef<'_>) -> Option<GameRecord> {
        let position = match target {
            RecordRef::Id(id) => self.records.iter().position(|record| record.id == id)?,
            RecordRef::Position(index) if index < self.records.len() => index,
            RecordRef::Position(_) => return None,
        };
        Some(self.records.remove(position))
    }

    /// Running total over the whole history, rounded to one decimal.
    pub fn total_change(&self) -> f64 {
        round_to_tenths(self.records.iter().map(|record| record.rating_change).sum())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
