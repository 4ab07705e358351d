use chrono::{DateTime, NaiveDate, Utc};
use log::debug;

use crate::backup::{dominant_month_label, BackupSnapshot, BackupStore};
use crate::history::{GameHistory, RecordRef};
use crate::month::MonthKey;
use crate::monthly::{group_by_month, MonthlyBucket};
use crate::rating::rating_change;
use crate::record::{new_record_id, GameInput, GameRecord, RatingCategory, RecordPatch};
use crate::store::RecordStore;

use super::{TrackerConfig, TrackerError};

#[cfg(feature = "emitter")]
use super::notify::{events, ChangeNotifier};

/// Orchestrates one player's rating histories over an injected store.
///
/// Every operation takes its reference time as an argument; the tracker
/// never reads the system clock, so behavior is deterministic under test.
pub struct RatingTracker<S: RecordStore> {
    store: S,
    config: TrackerConfig,
    #[cfg(feature = "emitter")]
    notifier: ChangeNotifier,
}

impl<S: RecordStore> RatingTracker<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, TrackerConfig::default())
    }

    pub fn with_config(store: S, config: TrackerConfig) -> Self {
        RatingTracker {
            store,
            config,
            #[cfg(feature = "emitter")]
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a listener for tracker change events (see [`events`]).
    #[cfg(feature = "emitter")]
    pub fn on_change<F>(&self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.notifier.on(event, listener);
    }

    /// Delta the game would produce, without recording anything.
    pub fn preview(&self, input: &GameInput) -> Result<f64, TrackerError> {
        self.validate(input)?;
        Ok(rating_change(
            input.player_rating,
            input.opponent_rating,
            input.outcome,
            input.k_factor,
        ))
    }

    /// Record a game: validate, compute the delta, stamp id and month key,
    /// append, persist. Returns the stored record.
    pub fn record_game(
        &self,
        category: RatingCategory,
        input: GameInput,
    ) -> Result<GameRecord, TrackerError> {
        self.validate(&input)?;
        let mut history = self.load_history(category)?;
        let record = GameRecord::from_input(new_record_id(), category, input);
        history.add(record.clone());
        self.store.save(category, history.records())?;
        debug!("recorded game {} in {}", record.id, category);
        #[cfg(feature = "emitter")]
        self.notifier.notify(events::GAME_RECORDED, &record.id);
        Ok(record)
    }

    /// Merge a patch into the record with `id`. A stale id is a no-op
    /// returning false; a record in a past month is refused.
    pub fn edit_game(
        &self,
        category: RatingCategory,
        id: &str,
        patch: &RecordPatch,
        today: NaiveDate,
    ) -> Result<bool, TrackerError> {
        let mut history = self.load_history(category)?;
        let Some(record) = history.get(id) else {
            return Ok(false);
        };
        ensure_mutable(record, today)?;
        history.apply_edit(id, patch);
        self.store.save(category, history.records())?;
        #[cfg(feature = "emitter")]
        self.notifier.notify(events::GAME_EDITED, id);
        Ok(true)
    }

    /// Remove a record by id or legacy positional index. Missing targets are
    /// no-ops; a record in a past month is refused.
    pub fn remove_game(
        &self,
        category: RatingCategory,
        target: RecordRef<'_>,
        today: NaiveDate,
    ) -> Result<Option<GameRecord>, TrackerError> {
        let mut history = self.load_history(category)?;
        let record = match target {
            RecordRef::Id(id) => history.get(id),
            RecordRef::Position(index) => history.records().get(index),
        };
        let Some(record) = record else {
            return Ok(None);
        };
        ensure_mutable(record, today)?;
        let removed = history.remove(target);
        self.store.save(category, history.records())?;
        #[cfg(feature = "emitter")]
        if let Some(removed) = &removed {
            self.notifier.notify(events::GAME_REMOVED, &removed.id);
        }
        Ok(removed)
    }

    /// Re-derive the cached delta and month key of an intentionally edited
    /// record, then persist. The one path that moves a record between
    /// months.
    pub fn recompute_game(
        &self,
        category: RatingCategory,
        id: &str,
        today: NaiveDate,
    ) -> Result<bool, TrackerError> {
        let mut history = self.load_history(category)?;
        let Some(record) = history.get(id) else {
            return Ok(false);
        };
        ensure_mutable(record, today)?;
        history.recompute(id);
        self.store.save(category, history.records())?;
        #[cfg(feature = "emitter")]
        self.notifier.notify(events::GAME_RECOMPUTED, id);
        Ok(true)
    }

    /// Per-month buckets for one category, newest first.
    pub fn monthly(
        &self,
        category: RatingCategory,
        today: NaiveDate,
    ) -> Result<Vec<MonthlyBucket>, TrackerError> {
        Ok(group_by_month(&self.store.load(category)?, today))
    }

    /// Running total over the whole history, rounded to one decimal.
    pub fn total_change(&self, category: RatingCategory) -> Result<f64, TrackerError> {
        Ok(self.load_history(category)?.total_change())
    }

    /// Export the full collection as a bare JSON array.
    pub fn export_history(&self, category: RatingCategory) -> Result<String, TrackerError> {
        self.load_history(category)?
            .to_json()
            .map_err(|err| TrackerError::Serde(err.to_string()))
    }

    /// Replace the stored collection with an imported one. Returns how many
    /// records were imported.
    pub fn import_history(
        &self,
        category: RatingCategory,
        json: &str,
    ) -> Result<usize, TrackerError> {
        let history =
            GameHistory::from_json(json).map_err(|err| TrackerError::Serde(err.to_string()))?;
        self.store.save(category, history.records())?;
        debug!("imported {} records into {}", history.len(), category);
        #[cfg(feature = "emitter")]
        self.notifier
            .notify(events::HISTORY_IMPORTED, category.as_str());
        Ok(history.len())
    }

    /// Snapshot the current collection into `backups`, tagged by its busiest
    /// month. An empty collection produces no snapshot.
    pub fn backup<B: BackupStore>(
        &self,
        category: RatingCategory,
        backups: &B,
        created_at: DateTime<Utc>,
    ) -> Result<Option<BackupSnapshot>, TrackerError> {
        let records = self.store.load(category)?;
        let label = dominant_month_label(&records, created_at.date_naive());
        let Some(snapshot) = BackupSnapshot::capture(label, &records, created_at) else {
            return Ok(None);
        };
        backups.save_snapshot(snapshot.clone())?;
        Ok(Some(snapshot))
    }

    /// Replace the stored collection with a snapshot's records. Returns false
    /// when no snapshot carries `label`.
    pub fn restore_backup<B: BackupStore>(
        &self,
        category: RatingCategory,
        backups: &B,
        label: &str,
    ) -> Result<bool, TrackerError> {
        let Some(snapshot) = backups.get_snapshot(label)? else {
            return Ok(false);
        };
        self.store.save(category, &snapshot.records)?;
        debug!("restored {} from backup {:?}", category, label);
        #[cfg(feature = "emitter")]
        self.notifier
            .notify(events::HISTORY_RESTORED, category.as_str());
        Ok(true)
    }

    fn load_history(&self, category: RatingCategory) -> Result<GameHistory, TrackerError> {
        Ok(GameHistory::from_records(self.store.load(category)?))
    }

    fn validate(&self, input: &GameInput) -> Result<(), TrackerError> {
        let range = self.config.min_rating..=self.config.max_rating;
        for (field, value) in [
            ("player rating", input.player_rating),
            ("opponent rating", input.opponent_rating),
        ] {
            if !range.contains(&value) {
                return Err(TrackerError::RatingOutOfRange {
                    field,
                    value,
                    min: self.config.min_rating,
                    max: self.config.max_rating,
                });
            }
        }
        if input.k_factor <= 0.0 {
            return Err(TrackerError::InvalidKFactor(input.k_factor));
        }
        Ok(())
    }
}

/// Mutations target the stored month of the record; anything but the current
/// month is frozen history.
fn ensure_mutable(record: &GameRecord, today: NaiveDate) -> Result<(), TrackerError> {
    let month = record.resolved_month_key();
    if month != MonthKey::from_date(today) {
        return Err(TrackerError::ReadOnlyMonth {
            label: month.display_label(),
        });
    }
    Ok(())
}
