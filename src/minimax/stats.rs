//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one minimax search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered by the recursion, root included.
    pub nodes_visited: u64,

    /// Nodes scored by the heuristic because depth ran out or no move existed.
    pub leaf_evaluations: u64,

    /// Nodes whose outcome was already decided.
    pub terminal_nodes: u64,

    /// Successor scans stopped early by alpha-beta.
    pub cutoffs: u64,

    /// Candidate children returned by `GameState::successors`.
    pub successors_generated: u64,

    /// Candidates dropped because their cells matched the parent.
    pub noop_discarded: u64,

    /// Candidates dropped because an equal sibling came first.
    pub duplicates_discarded: u64,

    /// Deepest ply below the root that was entered.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Distinct children kept per expanded node.
    #[must_use]
    pub fn avg_branching(&self) -> f64 {
        let expanded = self
            .nodes_visited
            .saturating_sub(self.leaf_evaluations + self.terminal_nodes);
        if expanded == 0 {
            0.0
        } else {
            let kept = self
                .successors_generated
                .saturating_sub(self.noop_discarded + self.duplicates_discarded);
            kept as f64 / expanded as f64
        }
    }
}
