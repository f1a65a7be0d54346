// src/map/map_data.rs

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::map::grid::{Grid, GROUND_LAYER, LAYER_COUNT};
use crate::map::{Corridor, Room, TileKind};

/// Where the terminal features ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePlacement {
    /// Index into `MapData::rooms`.
    pub stairs_down_room: usize,
    pub stairs_down: (u32, u32),
    pub stairs_up_room: usize,
    pub stairs_up: (u32, u32),
}

/// The finished map handed to the host importer.
///
/// `tile_data` holds `width * height * layer_count` tile codes, indexed as
/// `layer * height * width + y * width + x` with the ground on layer 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub width: u32,
    pub height: u32,
    pub layer_count: u32,
    pub tile_data: Vec<u8>,
    pub rooms: Vec<Room>,
    pub corridors: Vec<Corridor>,
    pub features: FeaturePlacement,
}

impl MapData {
    /// Packs the generation state into the output object. Pure read of the grid.
    pub fn export(
        grid: &Grid,
        rooms: &[Room],
        corridors: &[Corridor],
        features: FeaturePlacement,
    ) -> Self {
        MapData {
            width: grid.width(),
            height: grid.height(),
            layer_count: LAYER_COUNT,
            tile_data: grid.to_bytes(),
            rooms: rooms.to_vec(),
            corridors: corridors.to_vec(),
            features,
        }
    }

    pub fn index(&self, x: u32, y: u32, layer: u32) -> Option<usize> {
        if x < self.width && y < self.height && layer < self.layer_count {
            let (w, h) = (self.width as usize, self.height as usize);
            Some(layer as usize * h * w + y as usize * w + x as usize)
        } else {
            None
        }
    }

    /// Decodes one cell. Errors if the byte is not a known tile code.
    pub fn tile_at(&self, x: u32, y: u32, layer: u32) -> Result<Option<TileKind>, GenerationError> {
        match self.index(x, y, layer) {
            Some(i) => TileKind::try_from(self.tile_data[i]).map(Some),
            None => Ok(None),
        }
    }

    pub fn ground_at(&self, x: u32, y: u32) -> Option<TileKind> {
        self.index(x, y, GROUND_LAYER)
            .and_then(|i| TileKind::try_from(self.tile_data[i]).ok())
    }

    pub fn count_ground(&self, tile: TileKind) -> usize {
        let layer_len = self.width as usize * self.height as usize;
        self.tile_data[..layer_len]
            .iter()
            .filter(|&&code| code == tile.code())
            .count()
    }

    /// Text view of the ground layer, one line per row.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.ground_at(x, y).map_or('?', TileKind::glyph));
            }
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> Result<String, GenerationError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, GenerationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
