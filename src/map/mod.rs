// src/map/mod.rs
pub mod corridor;
pub mod grid;
pub mod map_data;
pub mod room;
pub mod tile;

pub use corridor::{BendOrder, Corridor, Edge, EdgeKind};
pub use grid::{Grid, LAYER_COUNT};
pub use map_data::{FeaturePlacement, MapData};
pub use room::Room;
pub use tile::TileKind;
