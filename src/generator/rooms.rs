// src/generator/rooms.rs

use log::debug;
use rand::Rng;

use crate::bsp::Space;
use crate::map::{Grid, Room, TileKind};
use crate::utils::util::clamp;

/// Sizes and positions one room inside `space`.
///
/// Each side is drawn from `[min_room, min(max_room, side - padding)]`,
/// shrunk to fit when the space is too small, then the room is centered
/// with a ±1 tile jitter and clamped back inside the space.
pub fn place_room<R: Rng>(
    space: &Space,
    min_room: u32,
    max_room: u32,
    padding: u32,
    rng: &mut R,
) -> Room {
    let width = draw_extent(space.width, min_room, max_room, padding, rng);
    let height = draw_extent(space.height, min_room, max_room, padding, rng);
    let x = jittered_origin(space.x, space.width, width, rng);
    let y = jittered_origin(space.y, space.height, height, rng);
    Room::new(x, y, width, height)
}

fn draw_extent<R: Rng>(
    available: u32,
    min_room: u32,
    max_room: u32,
    padding: u32,
    rng: &mut R,
) -> u32 {
    let hi = clamp(max_room.min(available.saturating_sub(padding)), 1, available);
    let lo = clamp(min_room, 1, hi);
    rng.random_range(lo..=hi)
}

fn jittered_origin<R: Rng>(start: u32, available: u32, size: u32, rng: &mut R) -> u32 {
    let slack = available.saturating_sub(size) as i64;
    let centered = start as i64 + slack / 2;
    let jitter: i64 = rng.random_range(-1..=1);
    clamp(centered + jitter, start as i64, start as i64 + slack) as u32
}

/// Writes floor into every ground cell the room covers.
pub fn carve_room(grid: &mut Grid, room: &Room) {
    for (x, y) in room.cells() {
        grid.set_ground(x, y, TileKind::Floor);
    }
}

/// Places and carves one room per leaf space, in leaf order.
pub fn place_rooms<R: Rng>(
    grid: &mut Grid,
    spaces: &[Space],
    min_room: u32,
    max_room: u32,
    padding: u32,
    rng: &mut R,
) -> Vec<Room> {
    let rooms: Vec<Room> = spaces
        .iter()
        .map(|space| {
            let room = place_room(space, min_room, max_room, padding, rng);
            carve_room(grid, &room);
            room
        })
        .collect();
    debug!("Placed {} rooms", rooms.len());
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsp::partition;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_room_stays_inside_space() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let space = Space::new(10, 4, 9, 7);
        for _ in 0..200 {
            let room = place_room(&space, 3, 12, 2, &mut rng);
            assert!(space.contains_rect(room.x, room.y, room.width, room.height));
            assert!(room.width >= 3 && room.width <= 7);
            assert!(room.height >= 3 && room.height <= 5);
        }
    }

    #[test]
    fn test_room_jitter_is_at_most_one_tile() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let space = Space::new(5, 7, 20, 20);
        let mut offsets = Vec::new();
        for _ in 0..300 {
            let room = place_room(&space, 4, 6, 0, &mut rng);
            let dx = room.x as i64 - (space.x + (space.width - room.width) / 2) as i64;
            let dy = room.y as i64 - (space.y + (space.height - room.height) / 2) as i64;
            assert!(dx.abs() <= 1, "x jitter {} for {:?}", dx, room);
            assert!(dy.abs() <= 1, "y jitter {} for {:?}", dy, room);
            offsets.push(dx);
        }
        for expected in [-1, 0, 1] {
            assert!(offsets.contains(&expected));
        }
    }

    #[test]
    fn test_room_shrinks_to_small_space() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let space = Space::new(0, 0, 3, 2);
        let room = place_room(&space, 6, 8, 1, &mut rng);
        assert!(space.contains_rect(room.x, room.y, room.width, room.height));
        assert_eq!((room.width, room.height), (2, 1));
    }

    #[test]
    fn test_containment_over_partitioned_map() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let spaces = partition(60, 40, 6, &mut rng);
            let mut grid = Grid::new(60, 40);
            let rooms = place_rooms(&mut grid, &spaces, 4, 9, 2, &mut rng);
            assert_eq!(rooms.len(), spaces.len());
            for (space, room) in spaces.iter().zip(&rooms) {
                assert!(space.contains_rect(room.x, room.y, room.width, room.height));
            }
            for (i, a) in rooms.iter().enumerate() {
                for b in &rooms[i + 1..] {
                    assert!(!a.intersects(b));
                }
            }
        }
    }

    #[test]
    fn test_carve_room_writes_floor() {
        let mut grid = Grid::new(8, 8);
        let room = Room::new(2, 2, 3, 4);
        carve_room(&mut grid, &room);
        assert_eq!(grid.count_ground(TileKind::Floor), 12);
        assert_eq!(grid.ground(2, 2), Some(TileKind::Floor));
        assert_eq!(grid.ground(4, 5), Some(TileKind::Floor));
        assert_eq!(grid.ground(5, 5), Some(TileKind::Wall));
    }
}
