mod backup;
mod history;
mod month;
mod monthly;
mod rating;
mod record;
mod store;
mod tracker;

pub use backup::{
    dominant_month_label, BackupError, BackupSnapshot, BackupStore, InMemoryBackupStore,
};
pub use history::{GameHistory, RecordRef};
pub use month::{MonthKey, MonthKeyError};
pub use monthly::{group_by_month, MonthlyBucket};
pub use rating::{
    rating_change, round_to_tenths, GameOutcome, RatingError, K_FACTOR_DEVELOPING,
    K_FACTOR_ESTABLISHED, K_FACTOR_STANDARD, MAX_RATING, MIN_RATING,
};
pub use record::{new_record_id, GameInput, GameRecord, RatingCategory, RecordPatch};
pub use store::{schema, InMemoryRecordStore, RecordStore, StoreError};
pub use tracker::{RatingTracker, TrackerConfig, TrackerError};

#[cfg(feature = "emitter")]
pub use tracker::{events, ChangeNotifier};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
