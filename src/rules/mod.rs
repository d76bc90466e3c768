//! Contracts a concrete game implements.
//!
//! Games implement `GameState` and `Move` to define:
//! - What a position looks like (a `Grid`) and how good it is
//! - Which children each grid locus leads to
//! - How a chosen move is carried out in the live game
//!
//! The search engine calls into these traits but never interprets
//! game-specific concepts directly.

pub mod moves;
pub mod state;

pub use moves::Move;
pub use state::GameState;
