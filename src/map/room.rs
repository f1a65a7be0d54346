// src/map/room.rs

use serde::{Deserialize, Serialize};

use crate::utils::Point;

/// A rectangular room carved out of one leaf space.
///
/// Geometry is fixed at creation; only `connected` changes afterwards, when
/// the room takes part in a corridor edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub center_x: u32,
    pub center_y: u32,
    pub connected: bool,
}

impl Room {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Room {
            x,
            y,
            width,
            height,
            center_x: x + width / 2,
            center_y: y + height / 2,
            connected: false,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    pub fn intersects(&self, other: &Room) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Manhattan distance between the two room centers.
    pub fn distance_to(&self, other: &Room) -> u32 {
        self.center().manhattan_distance(&other.center())
    }

    /// Every `(x, y)` cell the room covers, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_area() {
        let room = Room::new(2, 3, 5, 4);
        assert_eq!(room.center(), Point::new(4, 5));
        assert_eq!(room.area(), 20);
        assert_eq!(room.cells().count(), 20);
        assert!(!room.connected);
    }

    #[test]
    fn test_contains() {
        let room = Room::new(2, 3, 5, 4);
        assert!(room.contains(2, 3));
        assert!(room.contains(6, 6));
        assert!(!room.contains(7, 6));
        assert!(!room.contains(6, 7));
        assert!(!room.contains(1, 3));
    }

    #[test]
    fn test_intersects() {
        let a = Room::new(0, 0, 4, 4);
        let b = Room::new(4, 0, 4, 4);
        let c = Room::new(3, 3, 2, 2);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(b.intersects(&c));
    }
}
