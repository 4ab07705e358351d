use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Result of a single game from the tracked player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Win,
    Draw,
    Loss,
}

impl GameOutcome {
    /// Score value `S` used by the rating formula.
    pub fn score(&self) -> f64 {
        match self {
            GameOutcome::Win => 1.0,
            GameOutcome::Draw => 0.5,
            GameOutcome::Loss => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameOutcome::Win => "win",
            GameOutcome::Draw => "draw",
            GameOutcome::Loss => "loss",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameOutcome {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(GameOutcome::Win),
            "draw" => Ok(GameOutcome::Draw),
            "loss" => Ok(GameOutcome::Loss),
            other => Err(RatingError::InvalidOutcome(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The outcome token was none of `win`, `draw`, `loss`. The caller must
    /// surface this as a data-entry problem, never default it.
    InvalidOutcome(String),
}

impl fmt::Display for RatingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingError::InvalidOutcome(value) => write!(
                f,
                "invalid game outcome {:?}, expected one of win/draw/loss",
                value
            ),
        }
    }
}

impl std::error::Error for RatingError {}
