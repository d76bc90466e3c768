//! Depth-limited minimax, with and without alpha-beta pruning.
//!
//! Both variants explore the tree depth first and recursively. A node stops
//! expanding when (first match wins):
//! 1. no depth remains: scored by its heuristic
//! 2. its outcome is decided: scored by the outcome
//! 3. it has no distinct successor: scored by its heuristic
//!
//! Otherwise the player to move at the node picks the best child for
//! themselves: the maximizing player takes the highest value, everyone else
//! the lowest. Ties keep the earliest child, and the first child is the
//! pick until some child beats the starting bound.
//!
//! Pruning never changes the value returned for the root, only how many
//! nodes are visited to find it.

use std::time::Instant;

use log::{debug, trace};

use crate::core::{Outcome, PlayerId};
use crate::rules::GameState;

use super::error::SearchError;
use super::stats::SearchStats;
use super::successors::collect_successors;

/// Why a search stopped at a node instead of picking a child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Depth ran out.
    DepthExhausted,
    /// The game is already decided here.
    Terminal(Outcome),
    /// No action changes the state.
    NoLegalMoves,
}

/// The ideal child of a searched node.
#[derive(Debug)]
pub enum Choice<S> {
    /// A real successor, carrying the move that produced it.
    Child(S),
    /// The node itself: there is nothing to play from it.
    Stay(StopReason),
}

/// Value of a searched node plus its ideal child.
#[derive(Debug)]
pub struct SearchResult<S> {
    /// Minimax value from the maximizing player's point of view.
    pub value: f32,

    pub choice: Choice<S>,
}

impl<S> SearchResult<S> {
    fn stay(value: f32, reason: StopReason) -> Self {
        Self {
            value,
            choice: Choice::Stay(reason),
        }
    }

    fn child(value: f32, child: S) -> Self {
        Self {
            value,
            choice: Choice::Child(child),
        }
    }

    /// The chosen successor, if the search picked one.
    #[must_use]
    pub fn ideal_child(&self) -> Option<&S> {
        match &self.choice {
            Choice::Child(child) => Some(child),
            Choice::Stay(_) => None,
        }
    }

    /// Take the chosen successor.
    pub fn into_child(self) -> Option<S> {
        match self.choice {
            Choice::Child(child) => Some(child),
            Choice::Stay(_) => None,
        }
    }

    /// Why no successor was chosen, if none was.
    #[must_use]
    pub fn stop_reason(&self) -> Option<StopReason> {
        match self.choice {
            Choice::Child(_) => None,
            Choice::Stay(reason) => Some(reason),
        }
    }
}

/// A node either settles immediately or has children to scan.
enum Expansion<S> {
    Leaf(SearchResult<S>),
    Children(Vec<S>),
}

/// Minimax search context.
///
/// Holds no game data between searches, only the statistics of the most
/// recent one.
#[derive(Debug, Default)]
pub struct MinimaxSearch {
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent `search` call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search `depth` plies below `state`.
    ///
    /// Resets statistics, then runs alpha-beta with an open window when
    /// `use_pruning` is set and plain minimax otherwise.
    pub fn search<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        maximizing_player: PlayerId,
        use_pruning: bool,
    ) -> Result<SearchResult<S>, SearchError> {
        let start = Instant::now();
        self.stats.reset();

        let result = if use_pruning {
            self.alpha_beta(state, depth, maximizing_player, f32::NEG_INFINITY, f32::INFINITY)
        } else {
            self.minimax(state, depth, maximizing_player)
        }?;

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "{} search depth {} for {}: value {} over {} nodes ({} cutoffs, {}us)",
            if use_pruning { "alpha-beta" } else { "minimax" },
            depth,
            maximizing_player,
            result.value,
            self.stats.nodes_visited,
            self.stats.cutoffs,
            self.stats.time_us,
        );

        Ok(result)
    }

    /// Plain minimax: scans every child of every expanded node.
    ///
    /// Statistics accumulate across calls; `search` resets them.
    pub fn minimax<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        maximizing_player: PlayerId,
    ) -> Result<SearchResult<S>, SearchError> {
        self.minimax_at(state, depth, maximizing_player, 0)
    }

    /// Alpha-beta minimax within the window `(alpha, beta)`.
    ///
    /// With an open window the returned value is the exact minimax value.
    /// Statistics accumulate across calls; `search` resets them.
    pub fn alpha_beta<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        maximizing_player: PlayerId,
        alpha: f32,
        beta: f32,
    ) -> Result<SearchResult<S>, SearchError> {
        self.alpha_beta_at(state, depth, maximizing_player, alpha, beta, 0)
    }

    fn minimax_at<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        maximizing_player: PlayerId,
        ply: u32,
    ) -> Result<SearchResult<S>, SearchError> {
        let mut children = match self.expand(state, depth, ply)? {
            Expansion::Leaf(result) => return Ok(result),
            Expansion::Children(children) => children,
        };

        let maximizing = state.player_ply() == maximizing_player;
        let mut value = starting_value(maximizing);
        let mut ideal = 0;

        for (index, child) in children.iter().enumerate() {
            let child_value = self
                .minimax_at(child, depth - 1, maximizing_player, ply + 1)?
                .value;

            if improves(maximizing, child_value, value) {
                value = child_value;
                ideal = index;
            }
        }

        Ok(SearchResult::child(value, children.swap_remove(ideal)))
    }

    fn alpha_beta_at<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        maximizing_player: PlayerId,
        mut alpha: f32,
        mut beta: f32,
        ply: u32,
    ) -> Result<SearchResult<S>, SearchError> {
        let mut children = match self.expand(state, depth, ply)? {
            Expansion::Leaf(result) => return Ok(result),
            Expansion::Children(children) => children,
        };

        let maximizing = state.player_ply() == maximizing_player;
        let mut value = starting_value(maximizing);
        let mut ideal = 0;

        for (index, child) in children.iter().enumerate() {
            let child_value = self
                .alpha_beta_at(child, depth - 1, maximizing_player, alpha, beta, ply + 1)?
                .value;

            if !improves(maximizing, child_value, value) {
                continue;
            }
            value = child_value;
            ideal = index;

            if maximizing {
                alpha = alpha.max(value);
                if value >= beta {
                    self.stats.cutoffs += 1;
                    trace!("beta cutoff at ply {} after child {}", ply, index);
                    break;
                }
            } else {
                beta = beta.min(value);
                if value <= alpha {
                    self.stats.cutoffs += 1;
                    trace!("alpha cutoff at ply {} after child {}", ply, index);
                    break;
                }
            }
        }

        Ok(SearchResult::child(value, children.swap_remove(ideal)))
    }

    /// Terminal checks shared by both variants.
    fn expand<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        ply: u32,
    ) -> Result<Expansion<S>, SearchError> {
        self.stats.nodes_visited += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            let value = evaluate(state, ply)?;
            return Ok(Expansion::Leaf(SearchResult::stay(value, StopReason::DepthExhausted)));
        }

        if let Some(outcome) = state.outcome() {
            self.stats.terminal_nodes += 1;
            return Ok(Expansion::Leaf(SearchResult::stay(
                outcome.score(),
                StopReason::Terminal(outcome),
            )));
        }

        let children = collect_successors(state, &mut self.stats);
        if children.is_empty() {
            self.stats.leaf_evaluations += 1;
            let value = evaluate(state, ply)?;
            return Ok(Expansion::Leaf(SearchResult::stay(value, StopReason::NoLegalMoves)));
        }

        Ok(Expansion::Children(children))
    }
}

fn evaluate<S: GameState>(state: &S, ply: u32) -> Result<f32, SearchError> {
    let value = state.heuristic();
    if value.is_nan() {
        return Err(SearchError::UnorderedHeuristic { ply });
    }
    Ok(value)
}

fn starting_value(maximizing: bool) -> f32 {
    if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    }
}

/// Strict improvement, so ties keep the earlier child.
fn improves(maximizing: bool, candidate: f32, current: f32) -> bool {
    if maximizing {
        candidate > current
    } else {
        candidate < current
    }
}
