//! Fixture games shared by the integration tests.

#![allow(dead_code)]

pub mod gravity;
pub mod tictactoe;

use minimax_engine::Grid;

pub const EMPTY: i32 = 0;

/// Owner of a `run`-long horizontal, vertical or diagonal line, if any.
pub fn line_winner(grid: &Grid, run: usize) -> Option<i32> {
    let (width, height) = (grid.width() as isize, grid.height() as isize);
    let directions = [(1, 0), (0, 1), (1, 1), (1, -1)];

    for y in 0..height {
        for x in 0..width {
            let owner = grid.cell_at(x as usize, y as usize);
            if owner == EMPTY {
                continue;
            }
            for (dx, dy) in directions {
                let end_x = x + dx * (run as isize - 1);
                let end_y = y + dy * (run as isize - 1);
                if !(0..width).contains(&end_x) || !(0..height).contains(&end_y) {
                    continue;
                }
                let complete = (1..run as isize)
                    .all(|step| grid.cell_at((x + dx * step) as usize, (y + dy * step) as usize) == owner);
                if complete {
                    return Some(owner);
                }
            }
        }
    }

    None
}

/// Route engine logs to the test harness; repeat calls are harmless.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
