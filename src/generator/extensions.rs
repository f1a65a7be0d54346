// src/generator/extensions.rs
//
// Post-export hooks. Door placement and tileset mapping are owned by the
// host toolchain; the generator only defines where they plug in.

use crate::map::MapData;

/// Maps tile-category codes to engine-specific tile IDs.
pub trait TileMapper {
    fn apply_tile_mapping(&self, map: MapData) -> MapData;
}

/// Adds doors to an exported map.
pub trait DoorPlacer {
    fn place_doors(&self, map: MapData) -> MapData;
}

/// Hands the map back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl TileMapper for Passthrough {
    fn apply_tile_mapping(&self, map: MapData) -> MapData {
        map
    }
}

impl DoorPlacer for Passthrough {
    fn place_doors(&self, map: MapData) -> MapData {
        map
    }
}
