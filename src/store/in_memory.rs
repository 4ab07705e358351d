use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::debug;

use crate::record::{GameRecord, RatingCategory};

use super::schema;
use super::{RecordStore, StoreError};

/// In-memory record store backed by `Arc<RwLock<HashMap>>`.
///
/// Collections are held in their serialized payload form and run through the
/// schema codec on every load, so migration behaves exactly as it does
/// against a real backend. Clone-friendly (cloning shares the same underlying
/// storage).
#[derive(Clone)]
pub struct InMemoryRecordStore {
    storage: Arc<RwLock<HashMap<RatingCategory, String>>>,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a raw payload verbatim, at any supported schema version. Used to
    /// stage legacy payloads for migration tests and imports.
    pub fn seed_raw(
        &self,
        category: RatingCategory,
        payload: impl Into<String>,
    ) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("seed"))?;
        storage.insert(category, payload.into());
        Ok(())
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load(&self, category: RatingCategory) -> Result<Vec<GameRecord>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        match storage.get(&category) {
            Some(payload) => Ok(schema::decode_history(payload, category)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, category: RatingCategory, records: &[GameRecord]) -> Result<(), StoreError> {
        let payload = schema::encode_history(records)?;
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        storage.insert(category, payload);
        debug!("saved {} {} records", records.len(), category);
        Ok(())
    }

    fn clear(&self, category: RatingCategory) -> Result<bool, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        Ok(storage.remove(&category).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::GameOutcome;
    use crate::record::GameInput;
    use chrono::NaiveDate;

    fn record(id: &str) -> GameRecord {
        GameRecord::from_input(
            id,
            RatingCategory::Standard,
            GameInput {
                player_rating: 1500,
                opponent_name: "Petra".to_string(),
                opponent_rating: 1520,
                k_factor: 20.0,
                outcome: GameOutcome::Win,
                date: NaiveDate::from_ymd_opt(2025, 8, 5).unwrap(),
            },
        )
    }

    #[test]
    fn save_and_load() {
        let store = InMemoryRecordStore::new();
        store
            .save(RatingCategory::Standard, &[record("a"), record("b")])
            .unwrap();

        let loaded = store.load(RatingCategory::Standard).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "a");
    }

    #[test]
    fn load_missing_category_is_empty() {
        let store = InMemoryRecordStore::new();
        assert!(store.load(RatingCategory::Blitz).unwrap().is_empty());
    }

    #[test]
    fn categories_are_independent() {
        let store = InMemoryRecordStore::new();
        store.save(RatingCategory::Standard, &[record("a")]).unwrap();
        store.save(RatingCategory::Rapid, &[record("b")]).unwrap();

        assert_eq!(store.load(RatingCategory::Standard).unwrap()[0].id, "a");
        assert_eq!(store.load(RatingCategory::Rapid).unwrap()[0].id, "b");
        assert!(store.load(RatingCategory::Blitz).unwrap().is_empty());
    }

    #[test]
    fn clear_existing() {
        let store = InMemoryRecordStore::new();
        store.save(RatingCategory::Standard, &[record("a")]).unwrap();
        assert!(store.clear(RatingCategory::Standard).unwrap());
        assert!(store.load(RatingCategory::Standard).unwrap().is_empty());
        assert!(!store.clear(RatingCategory::Standard).unwrap());
    }

    #[test]
    fn seeded_legacy_payload_is_migrated_on_load() {
        let store = InMemoryRecordStore::new();
        store
            .seed_raw(
                RatingCategory::Rapid,
                r#"[{"player_rating":1700,"opponent_rating":1650,"k_factor":40,
                     "result":"loss","rating_change":-22.9,"date":"2025-07-02"}]"#,
            )
            .unwrap();

        let loaded = store.load(RatingCategory::Rapid).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category, RatingCategory::Rapid);
        assert_eq!(loaded[0].month_key, "2025-Jul");
        assert!(!loaded[0].id.is_empty());
    }

    #[test]
    fn clone_shares_storage() {
        let store = InMemoryRecordStore::new();
        let clone = store.clone();
        store.save(RatingCategory::Standard, &[record("a")]).unwrap();

        let loaded = clone.load(RatingCategory::Standard).unwrap();
        assert_eq!(loaded.len(), 1);
    }
}
