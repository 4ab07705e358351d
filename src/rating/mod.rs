//! Rating engine - the FIDE Elo update for a single game.
//!
//! Pure and referentially transparent: the same inputs always produce the
//! same delta, so callers can preview a change before committing it as a
//! tracked record.

mod engine;
mod outcome;

pub use engine::{
    rating_change, round_to_tenths, K_FACTOR_DEVELOPING, K_FACTOR_ESTABLISHED, K_FACTOR_STANDARD,
    MAX_RATING, MIN_RATING,
};
pub use outcome::{GameOutcome, RatingError};
