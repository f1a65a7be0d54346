// src/map/grid.rs

use crate::map::TileKind;

/// Number of stacked layers in an exported map.
pub const LAYER_COUNT: u32 = 6;
/// Ground terrain layer; rooms, corridors and stairs live here.
pub const GROUND_LAYER: u32 = 0;
pub const SHADOW_LAYER: u32 = 3;
pub const REGION_LAYER: u32 = 4;
pub const EVENT_LAYER: u32 = 5;

/// Layered tile grid owned by a single generation run.
///
/// Cells are stored layer-major: `layer * height * width + y * width + x`,
/// the same order the exported `tile_data` uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<TileKind>,
}

impl Grid {
    /// Creates a grid whose ground layer is solid wall and whose other layers are empty.
    pub fn new(width: u32, height: u32) -> Self {
        let layer_len = width as usize * height as usize;
        let mut cells = vec![TileKind::Empty; layer_len * LAYER_COUNT as usize];
        cells[..layer_len].fill(TileKind::Wall);
        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    fn index(&self, x: u32, y: u32, layer: u32) -> Option<usize> {
        if x < self.width && y < self.height && layer < LAYER_COUNT {
            let (w, h) = (self.width as usize, self.height as usize);
            Some(layer as usize * h * w + y as usize * w + x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: u32, y: u32, layer: u32) -> Option<TileKind> {
        self.index(x, y, layer).map(|i| self.cells[i])
    }

    /// Writes a cell, returning `false` when the coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, layer: u32, tile: TileKind) -> bool {
        match self.index(x, y, layer) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    pub fn ground(&self, x: u32, y: u32) -> Option<TileKind> {
        self.get(x, y, GROUND_LAYER)
    }

    pub fn set_ground(&mut self, x: u32, y: u32, tile: TileKind) -> bool {
        self.set(x, y, GROUND_LAYER, tile)
    }

    /// Turns a ground wall into floor. Any other tile is left untouched.
    ///
    /// Signed coordinates so callers can pass unclipped corridor bands.
    pub fn carve_wall(&mut self, x: i64, y: i64) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let (x, y) = (x as u32, y as u32);
        if self.ground(x, y) == Some(TileKind::Wall) {
            self.set_ground(x, y, TileKind::Floor)
        } else {
            false
        }
    }

    /// Counts ground cells of the given kind.
    pub fn count_ground(&self, tile: TileKind) -> usize {
        let layer_len = self.width as usize * self.height as usize;
        self.cells[..layer_len].iter().filter(|&&t| t == tile).count()
    }

    /// Flattens every layer into host tile codes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|t| t.code()).collect()
    }
}
