//! Island (connected land region) discovery by flood fill
//!
//! Boundary rule: a cell is in bounds only when `0 < row < rows` and
//! `0 < col < cols`. Row 0 and column 0 are never explored, whatever they
//! hold. Land touching them is cut off at that edge.
//!
//! `explore_island_size` steps into neighbors with `explore_island`, so each
//! neighbor adds at most 1 to the size no matter how large the region behind
//! it is. The remaining cells are still marked visited.

use crate::collections::FxHashSet;
use super::{Cell, Grid};

/// (row, col) of a grid cell
pub type Position = (usize, usize);


fn in_bounds(grid: &Grid, row: usize, col: usize) -> bool {
    0 < row && row < grid.rows() && 0 < col && col < grid.cols()
}


/// Number of islands, one per flood fill started from an unvisited land cell
#[tracing::instrument(level = "debug", skip_all, fields(rows = grid.rows(), cols = grid.cols()))]
pub fn island_count(grid: &Grid) -> usize {
    let mut visited: FxHashSet<Position> = FxHashSet::default();

    let count = grid
        .positions()
        .filter(|&(row, col)| explore_island(grid, row, col, &mut visited))
        .count();

    tracing::debug!(count, "islands counted");
    count
}


/// Flood fill from (row, col), marking every reached land cell visited
/// Returns true if (row, col) is an in-bounds, unvisited land cell.
pub fn explore_island(grid: &Grid, row: usize, col: usize, visited: &mut FxHashSet<Position>) -> bool {
    if !in_bounds(grid, row, col) {
        return false;
    }
    if grid.get(row, col) != Some(Cell::Land) {
        return false;
    }
    if !visited.insert((row, col)) {
        return false;
    }

    // row, col >= 1 here so the subtractions cannot underflow
    explore_island(grid, row - 1, col, visited);
    explore_island(grid, row + 1, col, visited);
    explore_island(grid, row, col - 1, visited);
    explore_island(grid, row, col + 1, visited);
    true
}


/// Smallest island size above 1
/// Returns None when no island is bigger than a single cell.
#[tracing::instrument(level = "debug", skip_all, fields(rows = grid.rows(), cols = grid.cols()))]
pub fn minimum_island_size(grid: &Grid) -> Option<usize> {
    let mut visited: FxHashSet<Position> = FxHashSet::default();
    let mut min_size: Option<usize> = None;

    for (row, col) in grid.positions() {
        let size = explore_island_size(grid, row, col, &mut visited);
        if size > 1 && min_size.is_none_or(|min| size < min) {
            min_size = Some(size);
        }
    }

    tracing::debug!(?min_size, "smallest island");
    min_size
}


/// Size of the island found from (row, col), 0 if nothing new was found
/// Neighbors contribute through `explore_island`, see module docs.
pub fn explore_island_size(grid: &Grid, row: usize, col: usize, visited: &mut FxHashSet<Position>) -> usize {
    if !in_bounds(grid, row, col) {
        return 0;
    }
    if grid.get(row, col) != Some(Cell::Land) {
        return 0;
    }
    if !visited.insert((row, col)) {
        return 0;
    }

    let mut size = 1;
    size += usize::from(explore_island(grid, row - 1, col, visited));
    size += usize::from(explore_island(grid, row + 1, col, visited));
    size += usize::from(explore_island(grid, row, col - 1, visited));
    size += usize::from(explore_island(grid, row, col + 1, visited));
    size
}
