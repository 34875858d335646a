//! Cellular-automaton cave generation.
//!
//! Pipeline: random noise, synchronous smoothing, best-effort open-ratio top-up,
//! border sealing, connectivity repair, then connectivity-preserving corridor
//! punching. Connectivity of the result is unconditional; the open ratio is not.

use rand_chacha::rand_core::Rng;

use crate::error::MapGenError;
use crate::types::Cell;

use super::config::CaveConfig;
use super::grid::Grid;
use super::regions::is_connected;
use super::repair::connect_regions_in_place;
use super::seed::{chance, random_interior_pos};

#[derive(Clone, Debug, Default)]
pub struct CaveGenerator {
    config: CaveConfig,
}

impl CaveGenerator {
    pub fn new(config: CaveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CaveConfig {
        &self.config
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Grid, MapGenError> {
        if width < 3 || height < 3 {
            return Err(MapGenError::DimensionsTooSmall { width, height });
        }
        self.config.validate()?;

        let mut grid = seed_noise(width, height, self.config.open_probability, rng);
        for _ in 0..self.config.smoothing_iterations {
            grid = smooth_step(&grid, &self.config);
        }
        top_up_open_ratio(&mut grid, &self.config, rng);
        grid.seal_border();

        if !is_connected(&grid) {
            connect_regions_in_place(&mut grid);
        }
        punch_corridors(&mut grid, self.config.corridor_punch_attempts(width, height), rng);

        Ok(grid)
    }
}

fn seed_noise<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    open_probability: f64,
    rng: &mut R,
) -> Grid {
    let mut grid = Grid::new(width, height);
    for pos in grid.interior_positions() {
        if chance(rng, open_probability) {
            grid.set(pos, Cell::Open);
        }
    }
    grid
}

/// One synchronous automaton step: every interior cell is decided from the
/// previous generation, never from cells already updated in this pass.
pub fn smooth_step(previous: &Grid, config: &CaveConfig) -> Grid {
    let mut next = previous.clone();
    for pos in previous.interior_positions() {
        let walls = previous.wall_count_around(pos);
        match previous.cell(pos) {
            Cell::Wall if walls < config.birth_limit => next.set(pos, Cell::Open),
            Cell::Open if walls > config.death_limit => next.set(pos, Cell::Wall),
            _ => {}
        }
    }
    next
}

/// Opens random interior walls until the target ratio is met or the attempt
/// budget runs out. Every draw counts as an attempt, hit or miss.
fn top_up_open_ratio<R: Rng + ?Sized>(grid: &mut Grid, config: &CaveConfig, rng: &mut R) {
    let target = config.min_open_cells(grid.interior_area());
    let mut open = grid.interior_open_count();
    let mut attempts = 0;
    while open < target && attempts < config.open_ratio_attempts {
        let pos = random_interior_pos(rng, grid);
        if grid.cell(pos) == Cell::Wall {
            grid.set(pos, Cell::Open);
            open += 1;
        }
        attempts += 1;
    }
}

/// Tentatively opens random interior walls, keeping each only if the map stays
/// connected.
fn punch_corridors<R: Rng + ?Sized>(grid: &mut Grid, attempts: usize, rng: &mut R) {
    for _ in 0..attempts {
        let pos = random_interior_pos(rng, grid);
        if grid.cell(pos) != Cell::Wall {
            continue;
        }
        grid.set(pos, Cell::Open);
        if !is_connected(grid) {
            grid.set(pos, Cell::Wall);
        }
    }
}
