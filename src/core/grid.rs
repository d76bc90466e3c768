//! Grid snapshot: the value part of a game state.
//!
//! A `Grid` records whose ply it is plus a row-major sequence of
//! `width * height` integer cells. Games decide what the integers mean
//! (empty, owner, piece kind...). The engine only compares grids.
//!
//! ## Equality
//!
//! Two grids are equal iff width, height, player and every cell match.
//! Grids of different dimensions are simply unequal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::player::PlayerId;

/// Cells stay inline for boards up to 8x8.
pub type Cells = SmallVec<[i32; 64]>;

/// Errors from constructing a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid needs {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
}

/// One ply's worth of board contents.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    player_ply: PlayerId,
    width: usize,
    height: usize,
    cells: Cells,
}

impl Grid {
    /// Create a grid with every cell set to zero.
    #[must_use]
    pub fn new(width: usize, height: usize, player_ply: PlayerId) -> Self {
        Self {
            player_ply,
            width,
            height,
            cells: SmallVec::from_elem(0, width * height),
        }
    }

    /// Create a grid from existing cell contents.
    pub fn from_cells(
        width: usize,
        height: usize,
        player_ply: PlayerId,
        cells: &[i32],
    ) -> Result<Self, GridError> {
        let expected = width * height;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            player_ply,
            width,
            height,
            cells: SmallVec::from_slice(cells),
        })
    }

    /// Player who makes the next action.
    #[must_use]
    pub fn player_ply(&self) -> PlayerId {
        self.player_ply
    }

    pub fn set_player_ply(&mut self, player: PlayerId) {
        self.player_ply = player;
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    /// Row-major index of `(x, y)`.
    #[must_use]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Cell contents at a row-major index.
    #[must_use]
    pub fn cell(&self, index: usize) -> i32 {
        self.cells[index]
    }

    #[must_use]
    pub fn cell_at(&self, x: usize, y: usize) -> i32 {
        self.cells[self.index_of(x, y)]
    }

    pub fn set_cell(&mut self, index: usize, value: i32) {
        self.cells[index] = value;
    }

    pub fn set_cell_at(&mut self, x: usize, y: usize, value: i32) {
        let index = self.index_of(x, y);
        self.cells[index] = value;
    }

    /// Replace every field with `source`'s values.
    pub fn copy_from(&mut self, source: &Grid) {
        self.player_ply = source.player_ply;
        self.width = source.width;
        self.height = source.height;
        self.cells.clear();
        self.cells.extend_from_slice(&source.cells);
    }

    /// True if both grids hold identical cells, ignoring whose ply it is.
    #[must_use]
    pub fn same_cells(&self, other: &Grid) -> bool {
        self.cells == other.cells
    }
}
