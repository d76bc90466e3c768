//! Minimax configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Minimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// How many plies ahead to search.
    /// Zero evaluates the current state only and never produces a move.
    pub depth: u32,

    /// The player whose score the search maximizes.
    /// Every other player minimizes.
    pub maximizing_player: PlayerId,

    /// Use alpha-beta pruning.
    /// Pruning changes how many nodes are visited, never the result value.
    pub use_pruning: bool,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            maximizing_player: PlayerId::new(0),
            use_pruning: true,
        }
    }
}

impl MinimaxConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with a custom maximizing player.
    pub fn with_maximizing_player(mut self, player: PlayerId) -> Self {
        self.maximizing_player = player;
        self
    }

    /// Create a new config with pruning switched on or off.
    pub fn with_pruning(mut self, use_pruning: bool) -> Self {
        self.use_pruning = use_pruning;
        self
    }
}
