pub mod combat;
pub mod content;
pub mod error;
pub mod mapgen;
pub mod placement;
pub mod types;

pub use error::MapGenError;
pub use mapgen::{
    CaveConfig, CaveGenerator, Grid, Region, connect_regions, find_regions, generate_cave,
    generate_random_map, generate_standard_map, is_connected,
};
pub use types::*;
