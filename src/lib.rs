// src/lib.rs
//! Deterministic BSP room-and-corridor map generation.
//!
//! ```
//! use bsp_mapgen::{generate, GenerationOptions};
//!
//! let options = GenerationOptions { seed: 42, ..Default::default() };
//! let map = generate(&options).unwrap();
//! assert_eq!(map.tile_data.len(), (map.width * map.height * map.layer_count) as usize);
//! assert_eq!(map, generate(&options).unwrap());
//! ```

pub mod bsp;
pub mod error;
pub mod generator;
pub mod map;
pub mod utils;

pub use error::GenerationError;
pub use generator::{generate, generate_with_rng, GenerationOptions, GenerationStats, ProceduralGenerator};
pub use map::{Corridor, MapData, Room, TileKind};
