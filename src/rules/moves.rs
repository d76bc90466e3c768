//! The `Move` contract.
//!
//! A move is the difference between a parent state and one child. It is
//! used twice:
//! - during search, `compute` builds the child without side effects and
//!   stores the move inside it
//! - once a child is chosen, `apply` makes the same change happen in the
//!   live game (`World`)

use std::error::Error;

use super::state::GameState;

/// A transition between two states of one game.
pub trait Move: Sized {
    /// The state type this move produces.
    type State: GameState<Move = Self>;

    /// Whatever live system the game drives: a UI board, a log, a socket.
    type World;

    /// Failure while applying to the world.
    type Error: Error + Send + Sync + 'static;

    /// Build the child of `parent` reached by this move acting at `loci`.
    ///
    /// `loci[0]` is the acting tile; games with multi-tile moves (from/to)
    /// pass extra indices. The returned state owns `self` as its producing
    /// move. `parent` is not modified.
    fn compute(self, parent: &Self::State, loci: &[usize]) -> Self::State;

    /// Perform this move on the live game.
    ///
    /// Called at most once per decided move, right before the engine adopts
    /// the child as its current state.
    fn apply(&self, world: &mut Self::World) -> Result<(), Self::Error>;
}
