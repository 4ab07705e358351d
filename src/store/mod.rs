//! Storage boundary - the persistence collaborator behind a trait.
//!
//! The cloud database or on-device store lives outside this crate; it is
//! injected wherever a history has to be loaded or saved, so the engine and
//! aggregator stay free of any storage dependency. The crate ships an
//! in-memory implementation for tests and development.

mod in_memory;
pub mod schema;

use std::fmt;

use crate::record::{GameRecord, RatingCategory};

pub use in_memory::InMemoryRecordStore;
pub use schema::SchemaError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
    Schema(SchemaError),
    Storage(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "record store lock poisoned during {}", operation)
            }
            StoreError::Schema(err) => write!(f, "record store schema error: {}", err),
            StoreError::Storage(msg) => write!(f, "record store storage error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<SchemaError> for StoreError {
    fn from(err: SchemaError) -> Self {
        StoreError::Schema(err)
    }
}

/// Persistence seam for per-category record collections.
///
/// Implementors own id assignment durability, serialization, and delivery of
/// writes back to the next `load`. The core assumes each loaded collection is
/// well formed and deduplicated.
pub trait RecordStore: Send + Sync {
    /// Load the full collection for one category. A category that was never
    /// saved yields an empty collection.
    fn load(&self, category: RatingCategory) -> Result<Vec<GameRecord>, StoreError>;

    /// Replace the stored collection for one category.
    fn save(&self, category: RatingCategory, records: &[GameRecord]) -> Result<(), StoreError>;

    /// Drop the stored collection for one category. Returns true if one existed.
    fn clear(&self, category: RatingCategory) -> Result<bool, StoreError>;
}
