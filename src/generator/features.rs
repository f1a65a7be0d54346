// src/generator/features.rs

use log::debug;
use rand::Rng;

use crate::error::GenerationError;
use crate::map::{FeaturePlacement, Grid, Room, TileKind};

/// Puts the down-stairs and up-stairs at the centers of two distinct rooms.
///
/// The down room is drawn uniformly; the up room is redrawn until it differs.
/// Fails instead of doubling up when fewer than two rooms exist.
pub fn place_features<R: Rng>(
    grid: &mut Grid,
    rooms: &[Room],
    rng: &mut R,
) -> Result<FeaturePlacement, GenerationError> {
    match rooms.len() {
        0 => return Err(GenerationError::NoRoomsGenerated),
        1 => return Err(GenerationError::DegenerateFeaturePlacement { rooms: 1 }),
        _ => {}
    }

    let down = rng.random_range(0..rooms.len());
    let mut up = rng.random_range(0..rooms.len());
    while up == down {
        up = rng.random_range(0..rooms.len());
    }

    let stairs_down = (rooms[down].center_x, rooms[down].center_y);
    let stairs_up = (rooms[up].center_x, rooms[up].center_y);
    grid.set_ground(stairs_down.0, stairs_down.1, TileKind::StairsDown);
    grid.set_ground(stairs_up.0, stairs_up.1, TileKind::StairsUp);
    debug!("Stairs down in room {}, stairs up in room {}", down, up);

    Ok(FeaturePlacement {
        stairs_down_room: down,
        stairs_down,
        stairs_up_room: up,
        stairs_up,
    })
}
