//! Core value types: players, grids, outcomes.
//!
//! Everything here is game-agnostic. Games give meaning to grid cells and
//! player numbers; the search only compares and copies them.

pub mod grid;
pub mod outcome;
pub mod player;

pub use grid::{Cells, Grid, GridError};
pub use outcome::Outcome;
pub use player::PlayerId;
