//! 3x3 tic-tac-toe. Cells: 0 empty, 1 for the first player, 2 for the second.

use minimax_engine::{GameState, Grid, Move, PlayerId};
use thiserror::Error;

use super::{line_winner, EMPTY};

pub const FIRST: PlayerId = PlayerId::new(1);
pub const SECOND: PlayerId = PlayerId::new(2);

#[derive(Clone, Debug)]
pub struct TicTacToe {
    grid: Grid,
    placed: Option<Place>,
}

/// Put the mover's mark on one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Place {
    pub index: usize,
    pub mark: i32,
}

/// The "real" board the engine's decisions are played on.
#[derive(Debug, Default)]
pub struct LiveBoard {
    pub cells: [i32; 9],
    pub history: Vec<Place>,
}

#[derive(Error, Debug)]
pub enum LiveBoardError {
    #[error("cell {0} is already taken")]
    Occupied(usize),
}

impl Move for Place {
    type State = TicTacToe;
    type World = LiveBoard;
    type Error = LiveBoardError;

    fn compute(self, parent: &TicTacToe, loci: &[usize]) -> TicTacToe {
        let mut grid = parent.grid.clone();
        grid.set_cell(loci[0], self.mark);
        grid.set_player_ply(parent.player_ply().next_in(1, 2));
        TicTacToe {
            grid,
            placed: Some(self),
        }
    }

    fn apply(&self, world: &mut LiveBoard) -> Result<(), LiveBoardError> {
        if world.cells[self.index] != EMPTY {
            return Err(LiveBoardError::Occupied(self.index));
        }
        world.cells[self.index] = self.mark;
        world.history.push(*self);
        Ok(())
    }
}

impl TicTacToe {
    /// Empty board, first player to move.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(3, 3, FIRST),
            placed: None,
        }
    }

    pub fn from_cells(cells: [i32; 9], to_move: PlayerId) -> Self {
        Self {
            grid: Grid::from_cells(3, 3, to_move, &cells).expect("3x3 board"),
            placed: None,
        }
    }

    /// Play `indices` in order from an empty board, skipping taken cells
    /// and stopping once someone has won.
    pub fn after(indices: &[usize]) -> Self {
        let mut state = Self::new();
        for &index in indices {
            if state.winner().is_some() {
                break;
            }
            if let Some(next) = state.successors(index).pop() {
                state = next;
            }
        }
        state
    }

    pub fn winner(&self) -> Option<i32> {
        line_winner(&self.grid, 3)
    }

    pub fn is_full(&self) -> bool {
        self.grid.cells().iter().all(|&c| c != EMPTY)
    }
}

impl GameState for TicTacToe {
    type Move = Place;

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    fn producing_move(&self) -> Option<&Place> {
        self.placed.as_ref()
    }

    fn heuristic(&self) -> f32 {
        match self.winner() {
            Some(1) => f32::INFINITY,
            Some(_) => f32::NEG_INFINITY,
            None => 0.0,
        }
    }

    fn successors(&self, locus: usize) -> Vec<TicTacToe> {
        if self.grid.cell(locus) != EMPTY || self.winner().is_some() {
            return Vec::new();
        }
        let mark = self.player_ply().0 as i32;
        vec![Place { index: locus, mark }.compute(self, &[locus])]
    }
}
