//! Procedural map generation: cave and standard layouts with connectivity repair.

pub mod config;
pub mod grid;
pub mod seed;

mod cave;
mod regions;
mod repair;
mod standard;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::error::MapGenError;

pub use cave::{CaveGenerator, smooth_step};
pub use config::CaveConfig;
pub use grid::Grid;
pub use regions::{Region, find_regions, is_connected};
pub use repair::{connect_regions, connect_regions_in_place};
pub use standard::{STANDARD_HEIGHT, STANDARD_WIDTH, generate_standard};

/// Fixed 20x10 cross layout.
pub fn generate_standard_map<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    generate_standard(rng)
}

/// Cave map of caller-chosen size using the default cave parameters.
pub fn generate_random_map<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Grid, MapGenError> {
    CaveGenerator::default().generate(width, height, rng)
}

/// Seeded convenience wrapper; `None` draws a fresh runtime seed.
pub fn generate_cave(width: usize, height: usize, seed: Option<u64>) -> Result<Grid, MapGenError> {
    let seed = seed.unwrap_or_else(seed::runtime_seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_random_map(width, height, &mut rng)
}
