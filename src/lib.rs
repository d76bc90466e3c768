//! # minimax-engine
//!
//! A generic adversarial game-tree search engine: depth-limited minimax,
//! optionally with alpha-beta pruning, over any turn-based grid game.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The engine knows grids, players and scores, never
//!    rules. Games plug in by implementing two traits.
//!
//! 2. **Value States**: A state is an independent snapshot. Successor
//!    generation never mutates its parent, so siblings share nothing.
//!
//! 3. **Deferred Effects**: A move is computed during search and applied to
//!    the live game only once it has been chosen.
//!
//! ## Modules
//!
//! - `core`: Player IDs, grid snapshots, decided outcomes
//! - `rules`: `GameState` and `Move` traits for game implementations
//! - `minimax`: Search variants, successor deduplication, the driver engine

pub mod core;
pub mod rules;
pub mod minimax;

// Re-export commonly used types
pub use crate::core::{Cells, Grid, GridError, Outcome, PlayerId};

pub use crate::rules::{GameState, Move};

pub use crate::minimax::{
    distinct_successors, Choice, Decision, MinimaxConfig, MinimaxEngine, MinimaxSearch,
    SearchError, SearchResult, SearchStats, StopReason, WorldOf,
};
