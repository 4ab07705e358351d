use super::GameOutcome;

/// K-factor for players still establishing a rating.
pub const K_FACTOR_DEVELOPING: f64 = 40.0;
/// Default K-factor for rated players.
pub const K_FACTOR_STANDARD: f64 = 20.0;
/// K-factor once a player has reached an established top rating.
pub const K_FACTOR_ESTABLISHED: f64 = 10.0;

/// Rating range accepted from the entry form. The engine itself never
/// enforces these; validation belongs to the caller.
pub const MIN_RATING: i32 = 1400;
pub const MAX_RATING: i32 = 3500;

/// Rating differences beyond this are capped at exactly this value for
/// expected-score purposes, per the FIDE handbook.
const MAX_RATING_DIFF: f64 = 400.0;

/// Rating delta for a single game.
///
/// `diff = opponent - player` is clamped to ±400, the expected score is
/// `1 / (1 + 10^(diff/400))`, and the delta `k * (S - E)` is rounded to one
/// decimal place.
pub fn rating_change(
    player_rating: i32,
    opponent_rating: i32,
    outcome: GameOutcome,
    k_factor: f64,
) -> f64 {
    let diff =
        f64::from(opponent_rating - player_rating).clamp(-MAX_RATING_DIFF, MAX_RATING_DIFF);
    let expected = 1.0 / (1.0 + 10f64.powf(diff / 400.0));
    round_to_tenths(k_factor * (outcome.score() - expected))
}

/// Round to one decimal place, half away from zero.
///
/// Shared by per-game deltas and summed monthly totals so that float
/// summation noise never reaches the caller.
pub fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
