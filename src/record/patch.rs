use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rating::GameOutcome;

/// Partial update for a [`GameRecord`](super::GameRecord). Absent fields are
/// left untouched. `id`, `category`, and `month_key` are not patchable: the
/// id is stable for the record's lifetime, the category partitions histories,
/// and the month key stays anchored to the entry month.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<GameOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.player_rating.is_none()
            && self.opponent_name.is_none()
            && self.opponent_rating.is_none()
            && self.k_factor.is_none()
            && self.outcome.is_none()
            && self.rating_change.is_none()
            && self.date.is_none()
    }
}
