//! Gravity "connect three" on a 4x3 board.
//!
//! Acting anywhere in a column drops the mover's piece to the lowest free
//! cell of that column, so every locus of a column yields the same child
//! and a full column yields the parent unchanged. Rows are numbered from
//! the top; row `height - 1` is the floor.

use std::convert::Infallible;

use minimax_engine::{GameState, Grid, Move, PlayerId};

use super::{line_winner, EMPTY};

pub const WIDTH: usize = 4;
pub const HEIGHT: usize = 3;

/// Column weights favouring the centre.
const WEIGHTS: [f32; WIDTH] = [1.0, 2.0, 2.0, 1.0];

#[derive(Clone, Debug)]
pub struct Gravity {
    grid: Grid,
    dropped: Option<DropPiece>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropPiece {
    pub column: usize,
}

impl Move for DropPiece {
    type State = Gravity;
    /// Columns played, in order.
    type World = Vec<usize>;
    type Error = Infallible;

    fn compute(self, parent: &Gravity, _loci: &[usize]) -> Gravity {
        let mut grid = parent.grid.clone();
        let floor = (0..HEIGHT)
            .rev()
            .find(|&y| grid.cell_at(self.column, y) == EMPTY);
        if let Some(y) = floor {
            grid.set_cell_at(self.column, y, parent.player_ply().0 as i32);
            grid.set_player_ply(parent.player_ply().next_in(1, 2));
        }
        Gravity {
            grid,
            dropped: Some(self),
        }
    }

    fn apply(&self, world: &mut Vec<usize>) -> Result<(), Infallible> {
        world.push(self.column);
        Ok(())
    }
}

impl Gravity {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(WIDTH, HEIGHT, PlayerId::new(1)),
            dropped: None,
        }
    }

    /// Drop into `columns` in order (taken modulo the width), stopping once
    /// someone has won.
    pub fn after(columns: &[usize]) -> Self {
        let mut state = Self::new();
        for &column in columns {
            if state.winner().is_some() {
                break;
            }
            state = DropPiece {
                column: column % WIDTH,
            }
            .compute(&state, &[column % WIDTH]);
        }
        state
    }

    pub fn winner(&self) -> Option<i32> {
        line_winner(&self.grid, 3)
    }
}

impl GameState for Gravity {
    type Move = DropPiece;

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    fn producing_move(&self) -> Option<&DropPiece> {
        self.dropped.as_ref()
    }

    fn heuristic(&self) -> f32 {
        match self.winner() {
            Some(1) => return f32::INFINITY,
            Some(_) => return f32::NEG_INFINITY,
            None => {}
        }
        self.grid
            .cells()
            .iter()
            .enumerate()
            .map(|(index, &owner)| {
                let weight = WEIGHTS[index % WIDTH];
                match owner {
                    1 => weight,
                    2 => -weight,
                    _ => 0.0,
                }
            })
            .sum()
    }

    fn successors(&self, locus: usize) -> Vec<Gravity> {
        if self.winner().is_some() {
            return Vec::new();
        }
        let column = locus % WIDTH;
        vec![DropPiece { column }.compute(self, &[locus])]
    }
}
