//! The `GameState` contract.

use crate::core::{Grid, Outcome, PlayerId};

use super::moves::Move;

/// A value snapshot of one ply of a game.
///
/// Games implement this trait on their own state type. The engine needs:
/// - the grid (whose ply it is plus cell contents) for comparison
/// - a heuristic score
/// - successor generation, one grid locus at a time
///
/// ## Implementation Notes
///
/// - `successors` must not mutate `self`, and every returned state must
///   carry the move that produced it (see `Move::compute`).
/// - Return an empty vec from `successors` when nothing can happen at a
///   locus. Returning a state with unchanged cells is allowed; the engine
///   drops it as a no-op.
/// - `heuristic` returns `f32::INFINITY` for a forced win for the maximizing
///   player and `f32::NEG_INFINITY` for a forced loss. Override `outcome`
///   to declare terminal positions some other way.
pub trait GameState: Sized {
    /// The move type that produces this game's states.
    type Move: Move<State = Self>;

    /// The grid snapshot for this ply.
    fn grid(&self) -> &Grid;

    fn grid_mut(&mut self) -> &mut Grid;

    /// The move that led here from the parent state, if any.
    ///
    /// `None` for an initial state.
    fn producing_move(&self) -> Option<&Self::Move>;

    /// Higher is better for the maximizing player.
    fn heuristic(&self) -> f32;

    /// All legal child states reachable by acting at `locus`.
    ///
    /// `locus` is in `0..grid().len()`.
    fn successors(&self, locus: usize) -> Vec<Self>;

    // === Provided ===

    /// The player who makes the next action.
    fn player_ply(&self) -> PlayerId {
        self.grid().player_ply()
    }

    /// Whether the game is already decided at this state.
    ///
    /// Default: an infinite heuristic is a decided win or loss, anything
    /// else means play continues.
    fn outcome(&self) -> Option<Outcome> {
        Outcome::from_heuristic(self.heuristic())
    }

    /// Structural value equality: dimensions, player and every cell.
    fn equals(&self, other: &Self) -> bool {
        self.grid() == other.grid()
    }

    /// Replace this state's grid with `source`'s, keeping this value's
    /// identity and producing move.
    fn copy_from(&mut self, source: &Self) {
        self.grid_mut().copy_from(source.grid());
    }
}
