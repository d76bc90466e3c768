//! Minimax game-tree search for minimax-engine.
//!
//! ## Overview
//!
//! Depth-limited minimax over any game implementing `GameState` and `Move`:
//!
//! - **Two variants**: plain minimax and alpha-beta pruning, which always
//!   agree on the value
//! - **N-Player Support**: one maximizing player, every other seat minimizes
//! - **Successor Deduplication**: no-op and repeated children are searched once
//! - **Explicit stops**: a node with nothing to play says why instead of
//!   returning a child with no move
//!
//! ## Usage
//!
//! ```rust,ignore
//! use minimax_engine::core::PlayerId;
//! use minimax_engine::minimax::{Decision, MinimaxEngine};
//!
//! let mut engine = MinimaxEngine::new(initial_board);
//!
//! // Look 9 plies ahead for player 1 with pruning, then play the move.
//! match engine.decide(&mut live_game, 9, PlayerId::new(1), true)? {
//!     Decision::Played { value } => println!("played, value {}", value),
//!     Decision::NoMove { reason, .. } => println!("nothing to play: {:?}", reason),
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod search;
pub mod stats;
pub mod successors;

// Re-export main types
pub use config::MinimaxConfig;
pub use engine::{Decision, MinimaxEngine, WorldOf};
pub use error::SearchError;
pub use search::{Choice, MinimaxSearch, SearchResult, StopReason};
pub use stats::SearchStats;
pub use successors::distinct_successors;
