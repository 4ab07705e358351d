//! Monthly aggregation - derived, read-only views over a game history.
//!
//! Buckets are recomputed on every read from the current record collection;
//! they have no persistence of their own.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::warn;

use crate::month::MonthKey;
use crate::rating::round_to_tenths;
use crate::record::GameRecord;

/// Read view over the records sharing one month key.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyBucket {
    pub month_key: String,
    /// Expanded label, e.g. "August 2025".
    pub display_label: String,
    /// Member records in entry order, not re-sorted by date.
    pub records: Vec<GameRecord>,
    /// Rounded sum of member rating changes.
    pub total_change: f64,
    pub game_count: usize,
    /// True iff this bucket is the month `today` falls in.
    pub is_current_month: bool,
    /// Past months are frozen history; only the current month accepts edits.
    /// The aggregator reports the flag, the collaborator enforces it.
    pub is_mutable: bool,
}

/// Group `records` into per-month buckets, newest month first.
///
/// Records are grouped by their STORED month key; a record whose key is
/// unreadable is regrouped under a key derived from its date rather than
/// dropped. `today` is injected by the caller, never read from a clock.
pub fn group_by_month(records: &[GameRecord], today: NaiveDate) -> Vec<MonthlyBucket> {
    let mut groups: BTreeMap<MonthKey, Vec<GameRecord>> = BTreeMap::new();
    for record in records {
        let key = match record.month_key.parse::<MonthKey>() {
            Ok(key) => key,
            Err(err) => {
                let fallback = MonthKey::from_date(record.date);
                warn!(
                    "unreadable month key {:?} on record {}: {}; regrouping under {}",
                    record.month_key, record.id, err, fallback
                );
                fallback
            }
        };
        groups.entry(key).or_default().push(record.clone());
    }

    let current = MonthKey::from_date(today);
    let mut buckets: Vec<MonthlyBucket> = groups
        .into_iter()
        .map(|(key, members)| {
            let total: f64 = members.iter().map(|record| record.rating_change).sum();
            MonthlyBucket {
                month_key: key.to_string(),
                display_label: key.display_label(),
                total_change: round_to_tenths(total),
                game_count: members.len(),
                is_current_month: key == current,
                is_mutable: key == current,
                records: members,
            }
        })
        .collect();
    // BTreeMap iterates oldest first; the view wants newest first.
    buckets.reverse();
    buckets
}
