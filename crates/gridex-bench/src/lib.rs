//! Benchmark profiles for the gridex spatial index.
//!
//! - [`scatter_positions`]: deterministic, collision-free placement via seed
//! - [`populated_map`]: a value-compared map filled from a scatter
//! - [`walk_script`]: a deterministic sequence of single-step moves

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridex_core::Position;
use gridex_map::SpatialMap;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Place `n` distinct positions on a `width` x `height` grid.
///
/// Draws from a ChaCha8 stream seeded with `seed` and steps linearly past any
/// collision, so the result depends only on the arguments. `n` is capped
/// at the number of cells.
pub fn scatter_positions(width: u32, height: u32, n: usize, seed: u64) -> Vec<Position> {
    let cells = width as u64 * height as u64;
    let n = n.min(cells as usize);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut taken = HashSet::with_capacity(n);
    let mut out = Vec::with_capacity(n);

    while out.len() < n {
        let mut index = rng.next_u64() % cells;
        while !taken.insert(index) {
            index = (index + 1) % cells;
        }
        let x = (index % width as u64) as i32;
        let y = (index / width as u64) as i32;
        out.push(Position::new(x, y));
    }
    out
}

/// A map holding items `0..n` at [`scatter_positions`].
pub fn populated_map(width: u32, height: u32, n: usize, seed: u64) -> SpatialMap<u32> {
    let positions = scatter_positions(width, height, n, seed);
    let mut map = SpatialMap::with_capacity(positions.len());
    for (item, position) in positions.into_iter().enumerate() {
        map.add(item as u32, position)
            .unwrap_or_else(|e| unreachable!("scatter produced a collision: {e}"));
    }
    map
}

/// `steps` pseudo-random (item, offset) pairs: each moves one of `items`
/// items a single cell in a cardinal direction.
pub fn walk_script(items: u32, steps: usize, seed: u64) -> Vec<(u32, (i32, i32))> {
    const DIRS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..steps)
        .map(|_| {
            let item = rng.next_u32() % items.max(1);
            let dir = DIRS[(rng.next_u32() % 4) as usize];
            (item, dir)
        })
        .collect()
}
