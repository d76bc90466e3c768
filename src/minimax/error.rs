//! Search and commit errors.

use std::error::Error;

use thiserror::Error;

/// Errors surfaced by the minimax engine.
#[derive(Error, Debug)]
pub enum SearchError {
    /// A heuristic returned NaN, which cannot be ordered against other scores.
    #[error("heuristic returned NaN at ply {ply}")]
    UnorderedHeuristic { ply: u32 },

    /// The chosen child has no move to replay on the live game.
    #[error("decided successor carries no producing move")]
    MissingProducingMove,

    /// The game's `Move::apply` failed. The engine's current board is unchanged.
    #[error("failed to apply decided move: {0}")]
    ApplyFailed(#[source] Box<dyn Error + Send + Sync>),
}
