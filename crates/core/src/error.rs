use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapGenError {
    #[error("map must be at least 3x3, got {width}x{height}")]
    DimensionsTooSmall { width: usize, height: usize },

    #[error("{field} must be within [0, 1], got {value}")]
    InvalidProbability { field: &'static str, value: f64 },

    #[error("corridor_punch_divisor must be non-zero")]
    ZeroCorridorDivisor,
}
