use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::month::MonthKey;
use crate::rating::round_to_tenths;
use crate::record::GameRecord;

use super::BackupError;

/// Immutable copy of a record collection, tagged by month label and creation
/// time, with summary stats precomputed for list views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackupSnapshot {
    /// Month label, e.g. "August 2025". Snapshot identity: saving another
    /// snapshot under the same label overwrites the first.
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub records: Vec<GameRecord>,
    pub total_change: f64,
    pub game_count: usize,
}

impl BackupSnapshot {
    /// Capture a copy of `records` under `label`. An empty collection
    /// produces no snapshot.
    pub fn capture(
        label: impl Into<String>,
        records: &[GameRecord],
        created_at: DateTime<Utc>,
    ) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let total: f64 = records.iter().map(|record| record.rating_change).sum();
        Some(BackupSnapshot {
            label: label.into(),
            created_at,
            total_change: round_to_tenths(total),
            game_count: records.len(),
            records: records.to_vec(),
        })
    }

    /// Compact text-safe form: bitcode-serialized, base64-encoded. Suitable
    /// for copy-paste export.
    pub fn to_archive(&self) -> Result<String, BackupError> {
        let bytes =
            bitcode::serialize(self).map_err(|err| BackupError::Codec(err.to_string()))?;
        Ok(STANDARD.encode(bytes))
    }

    pub fn from_archive(archive: &str) -> Result<Self, BackupError> {
        let bytes = STANDARD
            .decode(archive)
            .map_err(|err| BackupError::Codec(err.to_string()))?;
        bitcode::deserialize(&bytes).map_err(|err| BackupError::Codec(err.to_string()))
    }
}

/// Label of the month holding the most games, used to tag snapshots taken
/// before a reset. Ties go to the earliest occurrence; an empty collection
/// falls back to the month `today` falls in.
pub fn dominant_month_label(records: &[GameRecord], today: NaiveDate) -> String {
    let mut counts: Vec<(MonthKey, usize)> = Vec::new();
    for record in records {
        let key = record.resolved_month_key();
        match counts.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key, 1)),
        }
    }

    let mut best: Option<(MonthKey, usize)> = None;
    for (key, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key.display_label())
        .unwrap_or_else(|| MonthKey::from_date(today).display_label())
}
