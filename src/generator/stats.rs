// src/generator/stats.rs

use serde::Serialize;

use crate::map::{EdgeKind, MapData, TileKind};

/// Summary of the last generation run.
#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct GenerationStats {
    /// Wall-clock milliseconds; the only field that varies between identical runs.
    pub generation_time_ms: f64,
    pub room_count: usize,
    pub corridor_count: usize,
    pub mandatory_edges: usize,
    pub loop_edges: usize,
    /// Walkable ground cells (floor and stairs).
    pub floor_tiles: usize,
    /// `floor_tiles` as a fraction of the map area.
    pub floor_coverage: f64,
}

impl GenerationStats {
    pub fn from_map(map: &MapData, generation_time_ms: f64) -> Self {
        let mandatory_edges = map
            .corridors
            .iter()
            .filter(|c| c.kind == EdgeKind::Mandatory)
            .count();
        let floor_tiles = map.count_ground(TileKind::Floor)
            + map.count_ground(TileKind::StairsDown)
            + map.count_ground(TileKind::StairsUp);
        let area = map.width as f64 * map.height as f64;
        GenerationStats {
            generation_time_ms,
            room_count: map.rooms.len(),
            corridor_count: map.corridors.len(),
            mandatory_edges,
            loop_edges: map.corridors.len() - mandatory_edges,
            floor_tiles,
            floor_coverage: if area > 0.0 { floor_tiles as f64 / area } else { 0.0 },
        }
    }
}
