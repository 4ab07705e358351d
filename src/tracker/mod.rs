//! Tracker - the orchestrator the surrounding application talks to.
//!
//! Wires the rating engine, history operations, monthly aggregation, and the
//! injected stores together, and enforces the policies the stateless pieces
//! only report: entry-form rating bounds and read-only past months.

mod config;
#[cfg(feature = "emitter")]
mod notify;
mod tracker;

use std::fmt;

use crate::backup::BackupError;
use crate::store::StoreError;

pub use config::TrackerConfig;
#[cfg(feature = "emitter")]
pub use notify::{events, ChangeNotifier};
pub use tracker::RatingTracker;

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// A rating from the entry form fell outside the configured range.
    RatingOutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    /// K-factor must be positive.
    InvalidKFactor(f64),
    /// The targeted record sits in a past month; frozen history refuses
    /// mutation.
    ReadOnlyMonth { label: String },
    Store(StoreError),
    Backup(BackupError),
    Serde(String),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::RatingOutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "{} {} outside the accepted range {}..={}",
                field, value, min, max
            ),
            TrackerError::InvalidKFactor(value) => {
                write!(f, "k-factor must be positive, got {}", value)
            }
            TrackerError::ReadOnlyMonth { label } => {
                write!(f, "{} is read-only; only the current month accepts edits", label)
            }
            TrackerError::Store(err) => write!(f, "store error: {}", err),
            TrackerError::Backup(err) => write!(f, "backup error: {}", err),
            TrackerError::Serde(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for TrackerError {}

impl From<StoreError> for TrackerError {
    fn from(err: StoreError) -> Self {
        TrackerError::Store(err)
    }
}

impl From<BackupError> for TrackerError {
    fn from(err: BackupError) -> Self {
        TrackerError::Backup(err)
    }
}
