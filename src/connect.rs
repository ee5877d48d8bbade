use std::collections::VecDeque;

use crate::graph::Time;
use crate::grid::{Cell, Grid};

// N, W, E, S expansion order.
const DROW: [isize; 4] = [-1, 0, 0, 1];
const DCOL: [isize; 4] = [0, -1, 1, 0];

/// Breadth-first search from one station over corridor cells.
///
/// Returns every other station reachable without passing through a third
/// one, paired with its hop distance (one hop per cell entered, so two
/// stations joined by a single corridor cell are 2 hops apart). Corridor
/// cells are expanded; station cells are recorded as terminals and never
/// expanded. The visited scratch lives inside this call, so the grid is
/// untouched and the next search starts from a clean slate.
pub fn discover_adjacency(grid: &Grid, origin: (usize, usize)) -> Vec<((usize, usize), Time)> {
    let width = grid.width();
    let mut visited = vec![false; width * grid.height()];
    let mut queue: VecDeque<(usize, usize, Time)> = VecDeque::new();
    let mut reached = Vec::new();

    visited[origin.0 * width + origin.1] = true;
    queue.push_back((origin.0, origin.1, 0));

    while let Some((row, col, hops)) = queue.pop_front() {
        for i in 0..4 {
            let nrow = row as isize + DROW[i];
            let ncol = col as isize + DCOL[i];
            if !grid.in_bounds(nrow, ncol) {
                continue;
            }
            let (nrow, ncol) = (nrow as usize, ncol as usize);
            if visited[nrow * width + ncol] {
                continue;
            }
            match grid.cell(nrow, ncol) {
                Cell::Corridor => {
                    visited[nrow * width + ncol] = true;
                    queue.push_back((nrow, ncol, hops + 1));
                }
                Cell::Station => {
                    visited[nrow * width + ncol] = true;
                    reached.push(((nrow, ncol), hops + 1));
                }
                _ => {}
            }
        }
    }
    reached
}
