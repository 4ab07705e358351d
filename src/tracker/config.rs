use crate::rating::{K_FACTOR_STANDARD, MAX_RATING, MIN_RATING};

/// Entry-form bounds and defaults. Validation happens in the tracker; the
/// rating engine itself accepts any inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Inclusive rating range accepted for player and opponent.
    pub min_rating: i32,
    pub max_rating: i32,
    /// K-factor the UI pre-fills when the player has not chosen one.
    pub default_k_factor: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            min_rating: MIN_RATING,
            max_rating: MAX_RATING,
            default_k_factor: K_FACTOR_STANDARD,
        }
    }
}
