//! Seed derivation and small draw helpers over an injected random stream.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::rand_core::Rng;

use crate::types::Pos;

use super::grid::Grid;

static RUNTIME_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Seed for callers that did not supply one. Distinct per call within a process.
pub fn runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = RUNTIME_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

pub fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

/// Uniform draw from `min_value..=max_value`.
pub fn random_usize<R: Rng + ?Sized>(rng: &mut R, min_value: usize, max_value: usize) -> usize {
    debug_assert!(min_value <= max_value);
    let range_size = (max_value - min_value) as u64 + 1;
    min_value + (rng.next_u64() % range_size) as usize
}

/// Uniform draw from `min_value..=max_value`.
pub fn random_i32<R: Rng + ?Sized>(rng: &mut R, min_value: i32, max_value: i32) -> i32 {
    debug_assert!(min_value <= max_value);
    let range_size = min_value.abs_diff(max_value) as u64 + 1;
    min_value + (rng.next_u64() % range_size) as i32
}

/// Uniform draw from `[0, 1)` using the top 53 bits.
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
}

pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    random_unit(rng) < probability
}

/// Uniform non-border position. The grid must be at least 3x3.
pub fn random_interior_pos<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> Pos {
    let x = random_usize(rng, 1, grid.width() - 2);
    let y = random_usize(rng, 1, grid.height() - 2);
    Pos { y: y as i32, x: x as i32 }
}
