//! Tunable parameters for the cellular-automaton cave generator.

use serde::{Deserialize, Serialize};

use crate::error::MapGenError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveConfig {
    /// Chance that an interior cell starts open.
    pub open_probability: f64,
    pub smoothing_iterations: u32,
    /// A wall with fewer wall cells than this in its 3x3 block opens.
    pub birth_limit: usize,
    /// An open cell with more wall cells than this in its 3x3 block closes.
    pub death_limit: usize,
    /// Target share of the interior that should be open.
    pub min_open_ratio: f64,
    pub open_ratio_attempts: u32,
    /// Corridor punch attempts are `width * height / corridor_punch_divisor`.
    pub corridor_punch_divisor: usize,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            open_probability: 0.6,
            smoothing_iterations: 3,
            birth_limit: 4,
            death_limit: 5,
            min_open_ratio: 0.4,
            open_ratio_attempts: 1000,
            corridor_punch_divisor: 100,
        }
    }
}

impl CaveConfig {
    pub fn validate(&self) -> Result<(), MapGenError> {
        for (field, value) in
            [("open_probability", self.open_probability), ("min_open_ratio", self.min_open_ratio)]
        {
            if !(0.0..=1.0).contains(&value) {
                return Err(MapGenError::InvalidProbability { field, value });
            }
        }
        if self.corridor_punch_divisor == 0 {
            return Err(MapGenError::ZeroCorridorDivisor);
        }
        Ok(())
    }

    pub fn corridor_punch_attempts(&self, width: usize, height: usize) -> usize {
        (width * height) / self.corridor_punch_divisor.max(1)
    }

    /// Interior open cells required to meet `min_open_ratio`, rounded down.
    pub fn min_open_cells(&self, interior_area: usize) -> usize {
        (interior_area as f64 * self.min_open_ratio) as usize
    }
}
