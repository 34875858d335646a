//! Flood-fill partitioning of open cells into 4-connected regions.

use std::collections::VecDeque;

use crate::types::Pos;

use super::grid::Grid;

/// One maximal 4-connected set of open cells, stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub cells: Vec<Pos>,
}

impl Region {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.binary_search(&pos).is_ok()
    }
}

/// True when every open cell is reachable from every other. A grid with no
/// open cells counts as connected.
pub fn is_connected(grid: &Grid) -> bool {
    let Some(start) = grid.positions().find(|&pos| grid.is_open(pos)) else {
        return true;
    };
    let mut visited = vec![false; grid.width() * grid.height()];
    flood_fill(grid, start, &mut visited).len() == grid.open_count()
}

/// Every region in discovery order: region `i` holds the `i`-th region met by a
/// row-major scan.
pub fn find_regions(grid: &Grid) -> Vec<Region> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();
    for pos in grid.positions() {
        if !grid.is_open(pos) || visited[offset(grid, pos)] {
            continue;
        }
        let mut cells = flood_fill(grid, pos, &mut visited);
        cells.sort_unstable();
        regions.push(Region { cells });
    }
    regions
}

/// Breadth-first fill from `start`; cells are marked visited when enqueued.
fn flood_fill(grid: &Grid, start: Pos, visited: &mut [bool]) -> Vec<Pos> {
    let mut reached = Vec::new();
    let mut open = VecDeque::from([start]);
    visited[offset(grid, start)] = true;

    while let Some(pos) = open.pop_front() {
        reached.push(pos);
        for next in pos.neighbors() {
            if !grid.is_open(next) {
                continue;
            }
            let index = offset(grid, next);
            if visited[index] {
                continue;
            }
            visited[index] = true;
            open.push_back(next);
        }
    }

    reached
}

fn offset(grid: &Grid, pos: Pos) -> usize {
    (pos.y as usize) * grid.width() + (pos.x as usize)
}
