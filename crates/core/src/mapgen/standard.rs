//! Fixed-size cross layout: two crossing walls with guaranteed and random gaps,
//! plus scattered single-cell walls.

use rand_chacha::rand_core::Rng;

use crate::types::{Cell, Pos};

use super::grid::Grid;
use super::regions::is_connected;
use super::repair::connect_regions_in_place;
use super::seed::{random_interior_pos, random_usize};

pub const STANDARD_WIDTH: usize = 20;
pub const STANDARD_HEIGHT: usize = 10;

const EXTRA_GAPS_PER_WALL: usize = 2;
const SCATTERED_WALLS: usize = 10;

/// The scattered walls can seal off a pocket, and the junction of the two walls
/// closes the vertical wall's fixed gap, so the result is repaired whenever the
/// region finder reports more than one region.
pub fn generate_standard<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let width = STANDARD_WIDTH;
    let height = STANDARD_HEIGHT;
    let wall_x = (width / 2) as i32;
    let wall_y = (height / 2) as i32;
    let gap_x = (width / 3) as i32;

    let mut grid = Grid::new(width, height);
    for pos in grid.interior_positions() {
        grid.set(pos, Cell::Open);
    }

    for y in 1..(height as i32 - 1) {
        if y != wall_y {
            grid.set(Pos { y, x: wall_x }, Cell::Wall);
        }
    }
    for x in 1..(width as i32 - 1) {
        if x != gap_x {
            grid.set(Pos { y: wall_y, x }, Cell::Wall);
        }
    }

    for _ in 0..EXTRA_GAPS_PER_WALL {
        let y = random_off_junction(rng, height, wall_y);
        grid.set(Pos { y, x: wall_x }, Cell::Open);
    }
    for _ in 0..EXTRA_GAPS_PER_WALL {
        let x = random_off_junction(rng, width, wall_x);
        grid.set(Pos { y: wall_y, x }, Cell::Open);
    }

    for _ in 0..SCATTERED_WALLS {
        let pos = random_interior_pos(rng, &grid);
        grid.set(pos, Cell::Wall);
    }

    if !is_connected(&grid) {
        connect_regions_in_place(&mut grid);
    }
    grid
}

/// Interior coordinate along a wall of length `extent`, skipping the junction.
fn random_off_junction<R: Rng + ?Sized>(rng: &mut R, extent: usize, junction: i32) -> i32 {
    let candidate = random_usize(rng, 1, extent - 3) as i32;
    if candidate >= junction { candidate + 1 } else { candidate }
}
