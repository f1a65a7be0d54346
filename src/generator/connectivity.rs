// src/generator/connectivity.rs

use log::{debug, warn};
use rand::Rng;
use union_find::{QuickUnionUf, UnionBySize, UnionFind};

use crate::map::{Edge, EdgeKind, Room};

/// Every unordered room pair, sorted by `(distance, room_a, room_b)`.
pub fn candidate_edges(rooms: &[Room]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(rooms.len() * rooms.len().saturating_sub(1) / 2);
    for i in 0..rooms.len() {
        for j in i + 1..rooms.len() {
            edges.push(Edge::new(i, j, rooms[i].distance_to(&rooms[j]), EdgeKind::Mandatory));
        }
    }
    edges.sort_by_key(|e| (e.distance, e.room_a, e.room_b));
    edges
}

/// Decides which room pairs get a corridor.
///
/// Kruskal over Manhattan center distances yields exactly `N - 1`
/// mandatory edges. Every edge the spanning tree skipped then survives as a
/// loop edge with probability `connectivity_factor`. Rooms that take part
/// in an edge are flagged `connected`.
pub fn connect<R: Rng>(rooms: &mut [Room], connectivity_factor: f64, rng: &mut R) -> Vec<Edge> {
    let mut components: QuickUnionUf<UnionBySize> = UnionFind::new(rooms.len());
    let mut edges = Vec::new();
    let mut spare = Vec::new();

    // Create minimum spanning tree of rooms
    for edge in candidate_edges(rooms) {
        if components.find(edge.room_a) != components.find(edge.room_b) {
            components.union(edge.room_a, edge.room_b);
            edges.push(edge);
        } else {
            spare.push(edge);
        }
    }
    let mandatory = edges.len();

    // Add some extra corridors based on the connectivity factor
    let factor = if connectivity_factor.is_nan() {
        0.0
    } else {
        connectivity_factor.clamp(0.0, 1.0)
    };
    for edge in spare {
        if rng.random_bool(factor) {
            edges.push(Edge {
                kind: EdgeKind::Loop,
                ..edge
            });
        }
    }
    debug!(
        "Connectivity: {} mandatory edges, {} loop edges",
        mandatory,
        edges.len() - mandatory
    );

    for edge in &edges {
        rooms[edge.room_a].connected = true;
        rooms[edge.room_b].connected = true;
    }
    ensure_connected(rooms, &mut edges);
    edges
}

/// Joins any room still flagged unconnected to its nearest connected room.
///
/// Never fires after a correct spanning tree; single-room maps are left alone.
pub(crate) fn ensure_connected(rooms: &mut [Room], edges: &mut Vec<Edge>) {
    if rooms.len() < 2 {
        return;
    }
    for i in 0..rooms.len() {
        if rooms[i].connected {
            continue;
        }
        let target = nearest_room(rooms, i, true).or_else(|| nearest_room(rooms, i, false));
        if let Some(j) = target {
            warn!("Room {} was left unconnected; linking it to room {}", i, j);
            edges.push(Edge::new(i, j, rooms[i].distance_to(&rooms[j]), EdgeKind::Mandatory));
            rooms[i].connected = true;
            rooms[j].connected = true;
        }
    }
}

fn nearest_room(rooms: &[Room], from: usize, connected_only: bool) -> Option<usize> {
    rooms
        .iter()
        .enumerate()
        .filter(|&(j, room)| j != from && (!connected_only || room.connected))
        .min_by_key(|&(j, room)| (rooms[from].distance_to(room), j))
        .map(|(j, _)| j)
}

/// Number of connected components of the graph `edges` induce over `room_count` rooms.
pub fn count_components(room_count: usize, edges: &[Edge]) -> usize {
    let mut components: QuickUnionUf<UnionBySize> = UnionFind::new(room_count);
    let mut count = room_count;
    for edge in edges {
        if components.find(edge.room_a) != components.find(edge.room_b) {
            components.union(edge.room_a, edge.room_b);
            count -= 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn five_rooms() -> Vec<Room> {
        vec![
            Room::new(0, 0, 4, 4),
            Room::new(10, 0, 4, 4),
            Room::new(0, 10, 4, 4),
            Room::new(10, 10, 4, 4),
            Room::new(22, 5, 4, 4),
        ]
    }

    fn count_kind(edges: &[Edge], kind: EdgeKind) -> usize {
        edges.iter().filter(|e| e.kind == kind).count()
    }

    #[test]
    fn test_candidate_edges_sorted_with_ties_by_index() {
        let rooms = five_rooms();
        let edges = candidate_edges(&rooms);
        assert_eq!(edges.len(), 10);
        for pair in edges.windows(2) {
            let a = (pair[0].distance, pair[0].room_a, pair[0].room_b);
            let b = (pair[1].distance, pair[1].room_a, pair[1].room_b);
            assert!(a < b);
        }
        // Four edges of length 10 between the square's corners, lowest indices first.
        assert_eq!((edges[0].room_a, edges[0].room_b, edges[0].distance), (0, 1, 10));
        assert_eq!((edges[1].room_a, edges[1].room_b), (0, 2));
    }

    #[test]
    fn test_five_rooms_without_loops() {
        let mut rooms = five_rooms();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let edges = connect(&mut rooms, 0.0, &mut rng);
        assert_eq!(count_kind(&edges, EdgeKind::Mandatory), 4);
        assert_eq!(count_kind(&edges, EdgeKind::Loop), 0);
        assert_eq!(count_components(rooms.len(), &edges), 1);
        assert!(rooms.iter().all(|r| r.connected));
    }

    #[test]
    fn test_five_rooms_with_every_loop() {
        let mut rooms = five_rooms();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let edges = connect(&mut rooms, 1.0, &mut rng);
        assert_eq!(count_kind(&edges, EdgeKind::Mandatory), 4);
        assert_eq!(count_kind(&edges, EdgeKind::Loop), 6);
    }

    #[test]
    fn test_spanning_tree_is_minimal() {
        let mut rooms = five_rooms();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let edges = connect(&mut rooms, 0.0, &mut rng);
        let total: u32 = edges.iter().map(|e| e.distance).sum();
        // Three sides of the 10x10 square plus the hop to the far room.
        assert_eq!(total, 10 + 10 + 10 + rooms[1].distance_to(&rooms[4]).min(rooms[3].distance_to(&rooms[4])));
    }

    #[test]
    fn test_single_and_empty_room_sets() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut none: Vec<Room> = Vec::new();
        assert!(connect(&mut none, 1.0, &mut rng).is_empty());

        let mut one = vec![Room::new(1, 1, 3, 3)];
        assert!(connect(&mut one, 1.0, &mut rng).is_empty());
        assert_eq!(count_components(1, &[]), 1);
        assert!(!one[0].connected);
    }

    #[test]
    fn test_safety_pass_links_stragglers() {
        let mut rooms = five_rooms();
        let mut edges = Vec::new();
        ensure_connected(&mut rooms, &mut edges);
        assert_eq!(edges.len(), 4);
        assert!(edges.iter().all(|e| e.kind == EdgeKind::Mandatory));
        assert!(rooms.iter().all(|r| r.connected));
        assert_eq!(count_components(rooms.len(), &edges), 1);
    }

    #[test]
    fn test_connectivity_is_seed_deterministic() {
        let run = |seed| {
            let mut rooms = five_rooms();
            connect(&mut rooms, 0.5, &mut ChaCha8Rng::seed_from_u64(seed))
        };
        assert_eq!(run(17), run(17));
    }
}
