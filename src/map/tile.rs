// src/map/tile.rs

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Tile category stored in every grid cell.
///
/// The numeric codes are what ends up in `MapData::tile_data`; a format
/// adapter on the host side maps them to engine tile IDs.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Empty = 0,
    Wall = 1,
    Floor = 2,
    StairsDown = 3,
    StairsUp = 4,
}

impl TileKind {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_stairs(self) -> bool {
        matches!(self, TileKind::StairsDown | TileKind::StairsUp)
    }

    /// Floor and stairs; the cells a corridor must never touch.
    pub fn is_walkable(self) -> bool {
        self == TileKind::Floor || self.is_stairs()
    }

    /// Glyph used by the text debug view.
    pub fn glyph(self) -> char {
        match self {
            TileKind::Empty => ' ',
            TileKind::Wall => '#',
            TileKind::Floor => '.',
            TileKind::StairsDown => '>',
            TileKind::StairsUp => '<',
        }
    }
}

impl TryFrom<u8> for TileKind {
    type Error = GenerationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TileKind::Empty),
            1 => Ok(TileKind::Wall),
            2 => Ok(TileKind::Floor),
            3 => Ok(TileKind::StairsDown),
            4 => Ok(TileKind::StairsUp),
            other => Err(GenerationError::UnknownTileCode(other)),
        }
    }
}
