//! Backup snapshots - immutable copies of a record collection, one per month
//! label (latest wins).

mod in_memory;
mod snapshot;
mod store;

use std::fmt;

pub use in_memory::InMemoryBackupStore;
pub use snapshot::{dominant_month_label, BackupSnapshot};
pub use store::BackupStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupError {
    LockPoisoned(&'static str),
    /// Archive encoding or decoding failed.
    Codec(String),
}

impl fmt::Display for BackupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackupError::LockPoisoned(operation) => {
                write!(f, "backup store lock poisoned during {}", operation)
            }
            BackupError::Codec(msg) => write!(f, "backup archive codec error: {}", msg),
        }
    }
}

impl std::error::Error for BackupError {}
