//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use rating_ledger::{GameInput, GameOutcome, GameRecord, RatingCategory};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn game_input(
    player_rating: i32,
    opponent_rating: i32,
    outcome: GameOutcome,
    k_factor: f64,
    game_date: NaiveDate,
) -> GameInput {
    GameInput {
        player_rating,
        opponent_name: "Opponent".to_string(),
        opponent_rating,
        k_factor,
        outcome,
        date: game_date,
    }
}

pub fn record(id: &str, outcome: GameOutcome, game_date: NaiveDate) -> GameRecord {
    GameRecord::from_input(
        id,
        RatingCategory::Standard,
        game_input(1888, 1700, outcome, 20.0, game_date),
    )
}
