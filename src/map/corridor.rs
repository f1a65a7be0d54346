// src/map/corridor.rs

use serde::{Deserialize, Serialize};

/// Why an edge exists in the connectivity graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Part of the spanning tree (or added by the safety pass).
    Mandatory,
    /// Optional cycle drawn with probability `connectivity_factor`.
    Loop,
}

/// Which leg of the L-shaped corridor is carved first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BendOrder {
    HorizontalFirst,
    VerticalFirst,
}

/// A pending connection between two rooms, indexed into the room list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub room_a: usize,
    pub room_b: usize,
    pub distance: u32,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(room_a: usize, room_b: usize, distance: u32, kind: EdgeKind) -> Self {
        let (room_a, room_b) = if room_a <= room_b {
            (room_a, room_b)
        } else {
            (room_b, room_a)
        };
        Edge {
            room_a,
            room_b,
            distance,
            kind,
        }
    }
}

/// An edge after it has been carved into the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corridor {
    pub room_a: usize,
    pub room_b: usize,
    pub start_x: u32,
    pub start_y: u32,
    pub end_x: u32,
    pub end_y: u32,
    pub bend: BendOrder,
    pub kind: EdgeKind,
}

impl Corridor {
    /// The cell where the two legs meet.
    pub fn corner(&self) -> (u32, u32) {
        match self.bend {
            BendOrder::HorizontalFirst => (self.end_x, self.start_y),
            BendOrder::VerticalFirst => (self.start_x, self.end_y),
        }
    }
}
