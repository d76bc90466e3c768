//! Decided game outcomes.
//!
//! Heuristics use `f32::INFINITY` / `f32::NEG_INFINITY` to mark positions
//! that are already won or lost for the maximizing player. `Outcome` names
//! those cases so the search can stop without interpreting raw floats, and
//! lets a game declare a terminal position whose score is finite (a draw).

use serde::{Deserialize, Serialize};

/// Result of a finished game, from the maximizing player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Forced win for the maximizing player.
    Win,
    /// Forced loss for the maximizing player.
    Loss,
    /// Game over with no winner.
    Draw,
}

impl Outcome {
    /// Classify a heuristic value.
    ///
    /// Only the infinite sentinels are decided. Every finite value (and NaN)
    /// means the game goes on.
    #[must_use]
    pub fn from_heuristic(value: f32) -> Option<Self> {
        if value == f32::INFINITY {
            Some(Outcome::Win)
        } else if value == f32::NEG_INFINITY {
            Some(Outcome::Loss)
        } else {
            None
        }
    }

    /// Score the search assigns to this outcome.
    #[must_use]
    pub fn score(self) -> f32 {
        match self {
            Outcome::Win => f32::INFINITY,
            Outcome::Loss => f32::NEG_INFINITY,
            Outcome::Draw => 0.0,
        }
    }
}
