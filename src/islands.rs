//! Island counting via connected-component labeling.
//!
//! Scans the grid in row-major order and flood-fills each unclaimed land
//! cell, so every maximal 4-connected land region is counted exactly once.
//! Counted cells are marked `Visited` in place.

use std::collections::VecDeque;

use crate::grid::{CellState, Grid};

/// Count the maximal 4-connected land regions in the grid.
///
/// Mutates the grid: every land cell ends up `Visited`. Running it again on
/// the already-marked grid returns 0, which is why the composition root
/// caches the first result instead of re-scanning.
pub fn count_islands(grid: &mut Grid) -> usize {
    let n = grid.size();
    let mut count = 0;

    for y in 0..n {
        for x in 0..n {
            if grid.get(x, y) == CellState::Land {
                count += 1;
                flood_fill(grid, x, y);
            }
        }
    }

    count
}

/// Mark every land cell 4-connected to `(x, y)` as `Visited`.
///
/// Breadth-first with an explicit work list; large maps can hold islands of
/// hundreds of thousands of cells, far beyond what recursion could handle.
fn flood_fill(grid: &mut Grid, x: usize, y: usize) {
    let mut queue = VecDeque::new();
    grid.set(x, y, CellState::Visited);
    queue.push_back((x, y));

    while let Some((cx, cy)) = queue.pop_front() {
        for (nx, ny) in grid.neighbors(cx, cy) {
            if grid.get(nx, ny) == CellState::Land {
                grid.set(nx, ny, CellState::Visited);
                queue.push_back((nx, ny));
            }
        }
    }
}
