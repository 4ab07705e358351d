//! Versioned storage schema and one-shot migration of legacy payloads.
//!
//! Early deployments stored a bare record array with optional ids, no month
//! keys, and no category split. Migration happens exactly once, here at the
//! storage boundary; aggregation logic only ever sees current-form records.

use std::fmt;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::month::MonthKey;
use crate::rating::{GameOutcome, RatingError};
use crate::record::{new_record_id, GameRecord, RatingCategory};

pub const SCHEMA_VERSION: u32 = 2;

/// Current-form envelope written by [`encode_history`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredHistory {
    pub version: u32,
    pub records: Vec<GameRecord>,
}

/// Record shape found in version 1 payloads. Every field that later versions
/// made mandatory is optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub player_rating: i32,
    #[serde(default)]
    pub opponent_name: String,
    pub opponent_rating: i32,
    pub k_factor: f64,
    #[serde(alias = "result")]
    pub outcome: String,
    pub rating_change: f64,
    #[serde(default)]
    pub category: Option<RatingCategory>,
    pub date: NaiveDate,
    #[serde(default)]
    pub month_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    Serde(String),
    UnsupportedVersion(u32),
    Rating(RatingError),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Serde(msg) => write!(f, "schema decode error: {}", msg),
            SchemaError::UnsupportedVersion(version) => {
                write!(f, "unsupported schema version {}", version)
            }
            SchemaError::Rating(err) => write!(f, "schema migration error: {}", err),
        }
    }
}

impl std::error::Error for SchemaError {}

impl From<RatingError> for SchemaError {
    fn from(err: RatingError) -> Self {
        SchemaError::Rating(err)
    }
}

/// Encode a collection in the current envelope form.
pub fn encode_history(records: &[GameRecord]) -> Result<String, SchemaError> {
    let stored = StoredHistory {
        version: SCHEMA_VERSION,
        records: records.to_vec(),
    };
    serde_json::to_string(&stored).map_err(|err| SchemaError::Serde(err.to_string()))
}

/// Decode a stored payload at any supported version into current-form
/// records. Legacy records missing an id, month key, or category are
/// backfilled; `category` names the collection being loaded and becomes the
/// default for records that predate the category split.
pub fn decode_history(
    payload: &str,
    category: RatingCategory,
) -> Result<Vec<GameRecord>, SchemaError> {
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|err| SchemaError::Serde(err.to_string()))?;

    // Version 1 payloads are a bare record array with no envelope.
    if value.is_array() {
        let legacy: Vec<LegacyRecord> =
            serde_json::from_value(value).map_err(|err| SchemaError::Serde(err.to_string()))?;
        warn!(
            "migrating {} legacy {} records to schema v{}",
            legacy.len(),
            category,
            SCHEMA_VERSION
        );
        return legacy
            .into_iter()
            .map(|record| upgrade_record(record, category))
            .collect();
    }

    let version = value
        .get("version")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| SchemaError::Serde("missing schema version".to_string()))?
        as u32;
    if version != SCHEMA_VERSION {
        return Err(SchemaError::UnsupportedVersion(version));
    }

    let stored: StoredHistory =
        serde_json::from_value(value).map_err(|err| SchemaError::Serde(err.to_string()))?;
    Ok(stored.records)
}

fn upgrade_record(legacy: LegacyRecord, category: RatingCategory) -> Result<GameRecord, SchemaError> {
    let outcome: GameOutcome = legacy.outcome.parse()?;
    Ok(GameRecord {
        id: legacy.id.unwrap_or_else(new_record_id),
        player_rating: legacy.player_rating,
        opponent_name: legacy.opponent_name,
        opponent_rating: legacy.opponent_rating,
        k_factor: legacy.k_factor,
        outcome,
        rating_change: legacy.rating_change,
        category: legacy.category.unwrap_or(category),
        date: legacy.date,
        month_key: legacy
            .month_key
            .unwrap_or_else(|| MonthKey::from_date(legacy.date).to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY_PAYLOAD: &str = r#"[
        {
            "player_rating": 1888,
            "opponent_name": "Anna",
            "opponent_rating": 1700,
            "k_factor": 20,
            "result": "win",
            "rating_change": 5.1,
            "date": "2025-08-05"
        }
    ]"#;

    #[test]
    fn current_envelope_round_trips() {
        let record = GameRecord::from_input(
            "g-1",
            RatingCategory::Rapid,
            crate::record::GameInput {
                player_rating: 1500,
                opponent_name: "Omar".to_string(),
                opponent_rating: 1450,
                k_factor: 40.0,
                outcome: GameOutcome::Draw,
                date: NaiveDate::from_ymd_opt(2025, 8, 5).unwrap(),
            },
        );

        let payload = encode_history(&[record.clone()]).unwrap();
        assert!(payload.contains("\"version\":2"));
        let decoded = decode_history(&payload, RatingCategory::Rapid).unwrap();
        assert_eq!(decoded, vec![record]);
    }

    #[test]
    fn legacy_array_is_backfilled() {
        let decoded = decode_history(LEGACY_PAYLOAD, RatingCategory::Blitz).unwrap();
        assert_eq!(decoded.len(), 1);

        let record = &decoded[0];
        assert!(!record.id.is_empty());
        assert_eq!(record.outcome, GameOutcome::Win);
        assert_eq!(record.category, RatingCategory::Blitz);
        assert_eq!(record.month_key, "2025-Aug");
        assert_eq!(record.rating_change, 5.1);
    }

    #[test]
    fn legacy_fields_survive_when_present() {
        let payload = r#"[
            {
                "id": "kept",
                "player_rating": 1600,
                "opponent_rating": 1600,
                "k_factor": 10,
                "outcome": "draw",
                "rating_change": 0.0,
                "category": "rapid",
                "date": "2024-12-31",
                "month_key": "2024-Dec"
            }
        ]"#;
        let decoded = decode_history(payload, RatingCategory::Standard).unwrap();
        assert_eq!(decoded[0].id, "kept");
        assert_eq!(decoded[0].category, RatingCategory::Rapid);
        assert_eq!(decoded[0].month_key, "2024-Dec");
    }

    #[test]
    fn legacy_invalid_outcome_is_an_error_not_a_default() {
        let payload = r#"[
            {
                "player_rating": 1500,
                "opponent_rating": 1500,
                "k_factor": 20,
                "result": "tie",
                "rating_change": 0.0,
                "date": "2025-08-05"
            }
        ]"#;
        let err = decode_history(payload, RatingCategory::Standard).unwrap_err();
        assert_eq!(
            err,
            SchemaError::Rating(RatingError::InvalidOutcome("tie".to_string()))
        );
    }

    #[test]
    fn future_versions_are_refused() {
        let payload = r#"{"version": 3, "records": []}"#;
        assert_eq!(
            decode_history(payload, RatingCategory::Standard).unwrap_err(),
            SchemaError::UnsupportedVersion(3)
        );
    }

    #[test]
    fn garbage_is_a_serde_error() {
        assert!(matches!(
            decode_history("not json", RatingCategory::Standard),
            Err(SchemaError::Serde(_))
        ));
        assert!(matches!(
            decode_history("{}", RatingCategory::Standard),
            Err(SchemaError::Serde(_))
        ));
    }
}
