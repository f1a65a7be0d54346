// src/bsp/bsp_partition.rs

use log::debug;
use rand::Rng;

use crate::bsp::{SplitAxis, Space};

/// Recursively splits a `width` x `height` area into non-overlapping leaf spaces.
///
/// A space is split while both of its sides are at least `2 * min_size`.
/// A side of exactly `2 * min_size` forces the cut across it; otherwise the
/// axis is drawn uniformly. The cut lands in `[min_size, extent - min_size]`,
/// so every leaf keeps `min_size` on both sides unless the whole area was
/// already smaller than that. The leaves always tile the original area exactly.
///
/// `min_size == 0` is treated as 1.
pub fn partition<R: Rng>(width: u32, height: u32, min_size: u32, rng: &mut R) -> Vec<Space> {
    let min_size = min_size.max(1);
    let mut pending = vec![Space::new(0, 0, width, height)];
    let mut leaves = Vec::new();

    // Worklist: every child is strictly smaller than its parent, so this drains.
    while let Some(space) = pending.pop() {
        match choose_split(&space, min_size, rng) {
            Some((axis, offset)) => {
                let (first, second) = space.split(axis, offset);
                pending.push(second);
                pending.push(first);
            }
            None => leaves.push(space),
        }
    }

    debug!(
        "Partitioned {}x{} (min {}) into {} leaf spaces",
        width,
        height,
        min_size,
        leaves.len()
    );
    leaves
}

pub fn is_splittable(space: &Space, min_size: u32) -> bool {
    let threshold = min_size.saturating_mul(2);
    space.width >= threshold && space.height >= threshold
}

fn choose_split<R: Rng>(space: &Space, min_size: u32, rng: &mut R) -> Option<(SplitAxis, u32)> {
    if !is_splittable(space, min_size) {
        return None;
    }
    let axis = choose_axis(space, min_size, rng);
    let extent = space.extent(axis);
    let offset = rng.random_range(min_size..=extent - min_size);
    Some((axis, offset))
}

/// Picks the cut axis for a splittable space.
///
/// An axis whose extent sits exactly on `2 * min_size` has a single legal cut
/// and is forced when it is the only such axis.
fn choose_axis<R: Rng>(space: &Space, min_size: u32, rng: &mut R) -> SplitAxis {
    let threshold = min_size.saturating_mul(2);
    let on_threshold: Vec<SplitAxis> = [SplitAxis::Horizontal, SplitAxis::Vertical]
        .into_iter()
        .filter(|&axis| space.extent(axis) == threshold)
        .collect();
    if let [forced] = on_threshold.as_slice() {
        return *forced;
    }
    if rng.random_bool(0.5) {
        SplitAxis::Horizontal
    } else {
        SplitAxis::Vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn assert_tiles_area(leaves: &[Space], width: u32, height: u32) {
        let total: u64 = leaves.iter().map(Space::area).sum();
        assert_eq!(total, width as u64 * height as u64);
        for (i, a) in leaves.iter().enumerate() {
            assert!(a.right() <= width && a.bottom() <= height);
            for b in &leaves[i + 1..] {
                assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_area_conservation_across_seeds() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let leaves = partition(64, 40, 5, &mut rng);
            assert!(leaves.len() > 1);
            assert_tiles_area(&leaves, 64, 40);
            for leaf in &leaves {
                assert!(leaf.width >= 5 && leaf.height >= 5);
                assert!(!is_splittable(leaf, 5));
            }
        }
    }

    #[test]
    fn test_boundary_split_ten_by_eight() {
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let leaves = partition(10, 8, 4, &mut rng);
            assert_tiles_area(&leaves, 10, 8);
            let halves = leaves.len() == 2
                && leaves.iter().all(|leaf| leaf.width == 10 && leaf.height == 4);
            assert!(
                leaves.len() == 1 || halves,
                "seed {}: unexpected leaves {:?}",
                seed,
                leaves
            );
        }
    }

    #[test]
    fn test_threshold_side_forces_axis() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..64 {
            let tall = Space::new(0, 0, 6, 15);
            assert_eq!(choose_axis(&tall, 3, &mut rng), SplitAxis::Vertical);
            let wide = Space::new(0, 0, 15, 6);
            assert_eq!(choose_axis(&wide, 3, &mut rng), SplitAxis::Horizontal);
        }
    }

    #[test]
    fn test_open_sides_use_both_axes() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let space = Space::new(0, 0, 20, 20);
        let axes: Vec<SplitAxis> = (0..64).map(|_| choose_axis(&space, 4, &mut rng)).collect();
        assert!(axes.contains(&SplitAxis::Horizontal));
        assert!(axes.contains(&SplitAxis::Vertical));
    }

    #[test]
    fn test_oversized_min_size_returns_root() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let leaves = partition(30, 12, 7, &mut rng);
        assert_eq!(leaves, vec![Space::new(0, 0, 30, 12)]);
    }

    #[test]
    fn test_zero_min_size_still_terminates() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let leaves = partition(6, 6, 0, &mut rng);
        assert_tiles_area(&leaves, 6, 6);
        assert!(leaves.len() > 1);
    }

    #[test]
    fn test_same_seed_same_leaves() {
        let a = partition(80, 50, 6, &mut ChaCha8Rng::seed_from_u64(99));
        let b = partition(80, 50, 6, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
