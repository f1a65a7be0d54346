// src/generator/mod.rs

pub mod carver;
pub mod config;
pub mod connectivity;
pub mod extensions;
pub mod features;
pub mod rooms;
pub mod stats;

pub use config::GenerationOptions;
pub use extensions::{DoorPlacer, Passthrough, TileMapper};
pub use stats::GenerationStats;

use std::time::Instant;

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::bsp::partition;
use crate::error::GenerationError;
use crate::map::{Corridor, Grid, MapData, Room};

/// Generates a map from `options`, seeding the RNG from `options.seed`.
pub fn generate(options: &GenerationOptions) -> Result<MapData, GenerationError> {
    ProceduralGenerator::new(options.clone()).generate()
}

/// Runs the full pipeline with a caller-supplied random source.
///
/// Partition, room placement, connectivity, corridor carving and feature
/// placement run in that order, each drawing from `rng`. Two runs with equal
/// options and identically seeded sources produce identical maps.
pub fn generate_with_rng<R: Rng>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<MapData, GenerationError> {
    options.validate()?;

    let mut grid = Grid::new(options.width, options.height);
    let spaces = partition(options.width, options.height, options.min_space_size(), rng);
    let mut rooms = rooms::place_rooms(
        &mut grid,
        &spaces,
        options.min_room_size,
        options.max_room_size,
        options.padding,
        rng,
    );
    if rooms.is_empty() {
        return Err(GenerationError::NoRoomsGenerated);
    }

    let edges = connectivity::connect(&mut rooms, options.connectivity_factor, rng);
    let corridors = carver::carve_all(&mut grid, &rooms, &edges, options.corridor_width, rng);
    let features = features::place_features(&mut grid, &rooms, rng)?;

    Ok(MapData::export(&grid, &rooms, &corridors, features))
}

/// Stateful generator that keeps the results and stats of its last run.
pub struct ProceduralGenerator {
    config: GenerationOptions,
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
    stats: Option<GenerationStats>,
}

impl ProceduralGenerator {
    pub fn new(config: GenerationOptions) -> Self {
        ProceduralGenerator {
            config,
            rooms: Vec::new(),
            corridors: Vec::new(),
            stats: None,
        }
    }

    pub fn config(&self) -> &GenerationOptions {
        &self.config
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    /// Stats of the last successful run, if any.
    pub fn stats(&self) -> Option<&GenerationStats> {
        self.stats.as_ref()
    }

    /// Generates a map. Every call reseeds, so repeated calls return the same map.
    pub fn generate(&mut self) -> Result<MapData, GenerationError> {
        let started = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let map = generate_with_rng(&self.config, &mut rng)?;

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let stats = GenerationStats::from_map(&map, elapsed_ms);
        info!(
            "Generated {}x{} map (seed {}): {} rooms, {} corridors ({} loops), {:.1}% floor in {:.2} ms",
            map.width,
            map.height,
            self.config.seed,
            stats.room_count,
            stats.corridor_count,
            stats.loop_edges,
            stats.floor_coverage * 100.0,
            stats.generation_time_ms
        );

        self.rooms = map.rooms.clone();
        self.corridors = map.corridors.clone();
        self.stats = Some(stats);
        Ok(map)
    }

    /// Generates a map, then runs the door and tile-mapping hooks on it.
    pub fn generate_with(
        &mut self,
        doors: &dyn DoorPlacer,
        tiles: &dyn TileMapper,
    ) -> Result<MapData, GenerationError> {
        let map = self.generate()?;
        Ok(tiles.apply_tile_mapping(doors.place_doors(map)))
    }
}
