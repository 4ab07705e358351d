//! Game records and their cached derived fields.

mod game_record;
mod patch;

use uuid::Uuid;

pub use game_record::{GameInput, GameRecord, RatingCategory};
pub use patch::RecordPatch;

/// Fresh opaque record id, assigned once at creation and stable thereafter.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
