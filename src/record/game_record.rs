use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::month::MonthKey;
use crate::rating::{rating_change, GameOutcome};

use super::RecordPatch;

/// Time-control category. Each category is an independent history; records
/// from different categories are never aggregated together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingCategory {
    Standard,
    Rapid,
    Blitz,
}

impl RatingCategory {
    pub const ALL: [RatingCategory; 3] = [
        RatingCategory::Standard,
        RatingCategory::Rapid,
        RatingCategory::Blitz,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingCategory::Standard => "standard",
            RatingCategory::Rapid => "rapid",
            RatingCategory::Blitz => "blitz",
        }
    }
}

impl fmt::Display for RatingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form input for one game, before a record exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameInput {
    pub player_rating: i32,
    pub opponent_name: String,
    pub opponent_rating: i32,
    pub k_factor: f64,
    pub outcome: GameOutcome,
    pub date: NaiveDate,
}

/// One played game.
///
/// `rating_change` and `month_key` are cached at creation time rather than
/// recomputed on read, so a record survives later edits to its source fields
/// unchanged. The only path that re-derives them is [`GameRecord::recompute`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub player_rating: i32,
    pub opponent_name: String,
    pub opponent_rating: i32,
    pub k_factor: f64,
    pub outcome: GameOutcome,
    /// Engine output for the four inputs above, cached at creation time.
    pub rating_change: f64,
    pub category: RatingCategory,
    pub date: NaiveDate,
    /// Month bucket fixed at creation time. Edits to `date` leave the record
    /// anchored to its entry month until an explicit recompute.
    pub month_key: String,
}

impl GameRecord {
    /// Build a record from form input: computes the rating delta and stamps
    /// the month key from the game date.
    pub fn from_input(id: impl Into<String>, category: RatingCategory, input: GameInput) -> Self {
        let delta = rating_change(
            input.player_rating,
            input.opponent_rating,
            input.outcome,
            input.k_factor,
        );
        GameRecord {
            id: id.into(),
            player_rating: input.player_rating,
            opponent_name: input.opponent_name,
            opponent_rating: input.opponent_rating,
            k_factor: input.k_factor,
            outcome: input.outcome,
            rating_change: delta,
            category,
            date: input.date,
            month_key: MonthKey::from_date(input.date).to_string(),
        }
    }

    /// Merge a partial edit. Last write wins; `month_key` is never touched
    /// here, so an edited record stays in its entry month.
    pub fn apply(&mut self, patch: &RecordPatch) {
        if let Some(value) = patch.player_rating {
            self.player_rating = value;
        }
        if let Some(value) = &patch.opponent_name {
            self.opponent_name = value.clone();
        }
        if let Some(value) = patch.opponent_rating {
            self.opponent_rating = value;
        }
        if let Some(value) = patch.k_factor {
            self.k_factor = value;
        }
        if let Some(value) = patch.outcome {
            self.outcome = value;
        }
        if let Some(value) = patch.rating_change {
            self.rating_change = value;
        }
        if let Some(value) = patch.date {
            self.date = value;
        }
    }

    /// Re-derive both cached fields from the current source fields. The one
    /// explicit path for intentionally edited inputs.
    pub fn recompute(&mut self) {
        self.rating_change = rating_change(
            self.player_rating,
            self.opponent_rating,
            self.outcome,
            self.k_factor,
        );
        self.month_key = MonthKey::from_date(self.date).to_string();
    }

    /// Stored month key parsed, falling back to one derived from `date` when
    /// the stored string is unreadable.
    pub fn resolved_month_key(&self) -> MonthKey {
        self.month_key
            .parse()
            .unwrap_or_else(|_| MonthKey::from_date(self.date))
    }
}
