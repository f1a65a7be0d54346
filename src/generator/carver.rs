// src/generator/carver.rs

use std::ops::Range;

use log::debug;
use rand::Rng;

use crate::map::{BendOrder, Corridor, Edge, Grid, Room};
use crate::utils::util::span;

/// Carves an L-shaped corridor between the centers of the edge's rooms.
///
/// The bend order is a fair seeded coin flip and is recorded on the returned
/// corridor, so `carve_corridor` can replay it exactly.
pub fn carve<R: Rng>(
    grid: &mut Grid,
    rooms: &[Room],
    edge: &Edge,
    corridor_width: u32,
    rng: &mut R,
) -> Corridor {
    let bend = if rng.random_bool(0.5) {
        BendOrder::HorizontalFirst
    } else {
        BendOrder::VerticalFirst
    };
    let (from, to) = (&rooms[edge.room_a], &rooms[edge.room_b]);
    let corridor = Corridor {
        room_a: edge.room_a,
        room_b: edge.room_b,
        start_x: from.center_x,
        start_y: from.center_y,
        end_x: to.center_x,
        end_y: to.center_y,
        bend,
        kind: edge.kind,
    };
    carve_corridor(grid, &corridor, corridor_width);
    corridor
}

/// Carves a recorded corridor. Returns how many wall cells became floor.
///
/// Only walls are converted; floor and stairs are left as they are.
pub fn carve_corridor(grid: &mut Grid, corridor: &Corridor, corridor_width: u32) -> usize {
    let (sx, sy, ex, ey) = (
        corridor.start_x,
        corridor.start_y,
        corridor.end_x,
        corridor.end_y,
    );
    match corridor.bend {
        BendOrder::HorizontalFirst => {
            carve_horizontal(grid, sx, ex, sy, corridor_width)
                + carve_vertical(grid, sy, ey, ex, corridor_width)
        }
        BendOrder::VerticalFirst => {
            carve_vertical(grid, sy, ey, sx, corridor_width)
                + carve_horizontal(grid, sx, ex, ey, corridor_width)
        }
    }
}

/// Carves every edge in order.
pub fn carve_all<R: Rng>(
    grid: &mut Grid,
    rooms: &[Room],
    edges: &[Edge],
    corridor_width: u32,
    rng: &mut R,
) -> Vec<Corridor> {
    let corridors: Vec<Corridor> = edges
        .iter()
        .map(|edge| carve(grid, rooms, edge, corridor_width, rng))
        .collect();
    debug!("Carved {} corridors", corridors.len());
    corridors
}

/// Rows (or columns) covered by a band of `width` cells around `center`.
fn band(center: u32, width: u32) -> Range<i64> {
    let start = center as i64 - (width / 2) as i64;
    start..start + width as i64
}

fn carve_horizontal(grid: &mut Grid, x1: u32, x2: u32, y: u32, width: u32) -> usize {
    if x1 == x2 {
        return 0;
    }
    let mut carved = 0;
    for row in band(y, width) {
        for x in span(x1 as i64, x2 as i64) {
            if grid.carve_wall(x, row) {
                carved += 1;
            }
        }
    }
    carved
}

fn carve_vertical(grid: &mut Grid, y1: u32, y2: u32, x: u32, width: u32) -> usize {
    if y1 == y2 {
        return 0;
    }
    let mut carved = 0;
    for column in band(x, width) {
        for y in span(y1 as i64, y2 as i64) {
            if grid.carve_wall(column, y) {
                carved += 1;
            }
        }
    }
    carved
}
