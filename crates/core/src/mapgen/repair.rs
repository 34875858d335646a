//! Greedy region merging: carve L-shaped corridors between the nearest
//! connected/unconnected region pair until one region remains.
//!
//! The nearest-pair search compares every cell pair across the frontier, which
//! is fine for hand-sized maps but grows quadratically in both region count and
//! region size. Larger maps would want a spatial index here.

use crate::types::{Cell, Pos, manhattan};

use super::grid::Grid;
use super::regions::{Region, find_regions};

/// Consumes a grid and hands it back fully connected.
pub fn connect_regions(mut grid: Grid) -> Grid {
    connect_regions_in_place(&mut grid);
    grid
}

/// Returns the number of corridors carved; zero when already connected.
pub fn connect_regions_in_place(grid: &mut Grid) -> usize {
    let regions = find_regions(grid);
    if regions.len() <= 1 {
        return 0;
    }

    let mut owner = vec![None; grid.width() * grid.height()];
    for (index, region) in regions.iter().enumerate() {
        for &pos in &region.cells {
            owner[(pos.y as usize) * grid.width() + (pos.x as usize)] = Some(index);
        }
    }

    let mut connected = vec![false; regions.len()];
    connected[0] = true;
    let mut corridors = 0;

    while connected.iter().any(|&joined| !joined) {
        let Some((from, to)) = nearest_frontier_pair(&regions, &connected) else {
            break;
        };

        for pos in l_corridor(from, to) {
            grid.set(pos, Cell::Open);
            if let Some(index) = owner[(pos.y as usize) * grid.width() + (pos.x as usize)] {
                connected[index] = true;
            }
        }
        corridors += 1;
    }

    corridors
}

/// Closest cell pair between a connected region and an unconnected one.
/// Regions and their cells are scanned in index/row-major order and the first
/// strict minimum wins.
fn nearest_frontier_pair(regions: &[Region], connected: &[bool]) -> Option<(Pos, Pos)> {
    let mut best: Option<(u32, Pos, Pos)> = None;
    let (joined, pending): (Vec<_>, Vec<_>) =
        regions.iter().zip(connected).partition(|&(_, &is_joined)| is_joined);
    for (joined_region, _) in &joined {
        for (pending_region, _) in &pending {
            for &from in &joined_region.cells {
                for &to in &pending_region.cells {
                    let distance = manhattan(from, to);
                    if best.is_none_or(|(best_distance, _, _)| distance < best_distance) {
                        best = Some((distance, from, to));
                    }
                }
            }
        }
    }
    best.map(|(_, from, to)| (from, to))
}

/// Horizontal leg along `from.y`, then vertical leg along `to.x`. Both ends included.
fn l_corridor(from: Pos, to: Pos) -> Vec<Pos> {
    let mut path = Vec::with_capacity(manhattan(from, to) as usize + 1);
    let step_x = (to.x - from.x).signum();
    let mut x = from.x;
    path.push(Pos { y: from.y, x });
    while x != to.x {
        x += step_x;
        path.push(Pos { y: from.y, x });
    }

    let step_y = (to.y - from.y).signum();
    let mut y = from.y;
    while y != to.y {
        y += step_y;
        path.push(Pos { y, x: to.x });
    }
    path
}

#[cfg(test)]
mod tests {
    use proptest::collection;
    use proptest::prelude::*;

    use super::*;
    use crate::mapgen::regions::is_connected;

    #[test]
    fn l_corridor_walks_horizontally_then_vertically() {
        let path = l_corridor(Pos::new(5, 1), Pos::new(2, 3));
        assert_eq!(
            path,
            vec![
                Pos::new(5, 1),
                Pos::new(4, 1),
                Pos::new(3, 1),
                Pos::new(2, 1),
                Pos::new(2, 2),
                Pos::new(2, 3),
            ]
        );
        assert_eq!(l_corridor(Pos::new(4, 4), Pos::new(4, 4)), vec![Pos::new(4, 4)]);
    }

    #[test]
    fn two_rooms_are_joined_through_the_closest_gap() {
        let grid = Grid::from_rows(&[
            "#########",
            "#   #   #",
            "#   #   #",
            "#   #   #",
            "#########",
        ]);
        let open_before = grid.open_count();

        let repaired = connect_regions(grid);

        assert!(is_connected(&repaired));
        assert_eq!(repaired.open_count(), open_before + 1);
        assert!(repaired.is_open(Pos::new(4, 1)), "first minimum in row-major order wins");
    }

    #[test]
    fn chain_of_cells_needs_one_corridor_per_gap() {
        let mut grid = Grid::from_rows(&["#######", "# # # #", "#######"]);
        let corridors = connect_regions_in_place(&mut grid);

        assert_eq!(corridors, 2);
        assert_eq!(grid.to_rows(), ["#######", "#     #", "#######"]);
    }

    #[test]
    fn connected_grid_is_left_untouched() {
        let grid = Grid::from_rows(&["#####", "#   #", "#####"]);
        let mut repaired = grid.clone();
        assert_eq!(connect_regions_in_place(&mut repaired), 0);
        assert_eq!(repaired, grid);
    }

    fn grid_from_noise(width: usize, height: usize, noise: &[bool]) -> Grid {
        let mut grid = Grid::new(width, height);
        for (pos, &open) in grid.interior_positions().zip(noise) {
            if open {
                grid.set(pos, Cell::Open);
            }
        }
        grid
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn repair_connects_any_noise_without_closing_cells(
            width in 3_usize..=18,
            height in 3_usize..=14,
            noise in collection::vec(any::<bool>(), 16 * 12),
        ) {
            let grid = grid_from_noise(width, height, &noise);
            let region_count = find_regions(&grid).len();
            let mut repaired = grid.clone();
            let corridors = connect_regions_in_place(&mut repaired);

            prop_assert!(is_connected(&repaired));
            prop_assert_eq!(corridors, region_count.saturating_sub(1));
            for pos in grid.positions() {
                if grid.is_open(pos) {
                    prop_assert!(repaired.is_open(pos), "{pos:?} was closed by repair");
                }
                if grid.is_border(pos) {
                    prop_assert!(!repaired.is_open(pos), "{pos:?} border was opened");
                }
            }
        }
    }
}
