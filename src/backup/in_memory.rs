use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::store::BackupStore;
use super::{BackupError, BackupSnapshot};

/// In-memory backup store backed by `Arc<RwLock<HashMap>>`, keyed by month
/// label. Clone-friendly (cloning shares the same underlying storage).
#[derive(Clone)]
pub struct InMemoryBackupStore {
    storage: Arc<RwLock<HashMap<String, BackupSnapshot>>>,
}

impl Default for InMemoryBackupStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackupStore {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl BackupStore for InMemoryBackupStore {
    fn save_snapshot(&self, snapshot: BackupSnapshot) -> Result<(), BackupError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| BackupError::LockPoisoned("snapshot write"))?;
        storage.insert(snapshot.label.clone(), snapshot);
        Ok(())
    }

    fn get_snapshot(&self, label: &str) -> Result<Option<BackupSnapshot>, BackupError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| BackupError::LockPoisoned("snapshot read"))?;
        Ok(storage.get(label).cloned())
    }

    fn list_snapshots(&self) -> Result<Vec<BackupSnapshot>, BackupError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| BackupError::LockPoisoned("snapshot read"))?;
        let mut snapshots: Vec<BackupSnapshot> = storage.values().cloned().collect();
        snapshots.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(snapshots)
    }

    fn delete_snapshot(&self, label: &str) -> Result<bool, BackupError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| BackupError::LockPoisoned("snapshot write"))?;
        Ok(storage.remove(label).is_some())
    }

    fn clear(&self) -> Result<usize, BackupError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| BackupError::LockPoisoned("snapshot write"))?;
        let removed = storage.len();
        storage.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::GameOutcome;
    use crate::record::{GameInput, GameRecord, RatingCategory};
    use chrono::{DateTime, NaiveDate, Utc};

    fn snapshot(label: &str, created_at: &str) -> BackupSnapshot {
        let record = GameRecord::from_input(
            "g-1",
            RatingCategory::Standard,
            GameInput {
                player_rating: 1500,
                opponent_name: "Noa".to_string(),
                opponent_rating: 1480,
                k_factor: 20.0,
                outcome: GameOutcome::Win,
                date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            },
        );
        let created_at: DateTime<Utc> = created_at.parse().unwrap();
        BackupSnapshot::capture(label, &[record], created_at).unwrap()
    }

    #[test]
    fn save_and_get() {
        let store = InMemoryBackupStore::new();
        store
            .save_snapshot(snapshot("August 2025", "2025-08-31T09:00:00Z"))
            .unwrap();

        let loaded = store.get_snapshot("August 2025").unwrap().unwrap();
        assert_eq!(loaded.game_count, 1);
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryBackupStore::new();
        assert!(store.get_snapshot("missing").unwrap().is_none());
    }

    #[test]
    fn same_label_overwrites() {
        let store = InMemoryBackupStore::new();
        store
            .save_snapshot(snapshot("August 2025", "2025-08-30T09:00:00Z"))
            .unwrap();
        store
            .save_snapshot(snapshot("August 2025", "2025-08-31T18:00:00Z"))
            .unwrap();

        let snapshots = store.list_snapshots().unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(
            snapshots[0].created_at,
            "2025-08-31T18:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn list_is_newest_first() {
        let store = InMemoryBackupStore::new();
        store
            .save_snapshot(snapshot("July 2025", "2025-07-31T09:00:00Z"))
            .unwrap();
        store
            .save_snapshot(snapshot("August 2025", "2025-08-31T09:00:00Z"))
            .unwrap();

        let labels: Vec<_> = store
            .list_snapshots()
            .unwrap()
            .into_iter()
            .map(|s| s.label)
            .collect();
        assert_eq!(labels, ["August 2025", "July 2025"]);
    }

    #[test]
    fn delete_and_clear() {
        let store = InMemoryBackupStore::new();
        store
            .save_snapshot(snapshot("July 2025", "2025-07-31T09:00:00Z"))
            .unwrap();
        store
            .save_snapshot(snapshot("August 2025", "2025-08-31T09:00:00Z"))
            .unwrap();

        assert!(store.delete_snapshot("July 2025").unwrap());
        assert!(!store.delete_snapshot("July 2025").unwrap());
        assert_eq!(store.clear().unwrap(), 1);
        assert!(store.list_snapshots().unwrap().is_empty());
    }

    #[test]
    fn clone_shares_storage() {
        let store = InMemoryBackupStore::new();
        let clone = store.clone();
        store
            .save_snapshot(snapshot("August 2025", "2025-08-31T09:00:00Z"))
            .unwrap();

        assert!(clone.get_snapshot("August 2025").unwrap().is_some());
    }
}
