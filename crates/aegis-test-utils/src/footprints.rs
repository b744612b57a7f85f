//! Footprint builders.

use aegis_core::{Cell, CellSet, MapBounds};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A solid `w x h` block with its minimum corner at `(x0, z0)`.
pub fn block(x0: i32, z0: i32, w: i32, h: i32) -> CellSet {
    (z0..z0 + h)
        .flat_map(|z| (x0..x0 + w).map(move |x| Cell::new(x, z)))
        .collect()
}

/// A footprint from explicit coordinates.
pub fn from_cells(cells: &[(i32, i32)]) -> CellSet {
    cells.iter().map(|&c| Cell::from(c)).collect()
}

/// Up to `n` distinct on-map cells chosen by a seeded ChaCha8 stream.
///
/// The same seed always yields the same cells in the same order.
pub fn random_footprint(seed: u64, bounds: &MapBounds, n: usize) -> CellSet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = CellSet::with_capacity(n);
    for _ in 0..n {
        let x = rng.next_u32() % bounds.width();
        let z = rng.next_u32() % bounds.depth();
        out.insert(Cell::new(x as i32, z as i32));
    }
    out
}

/// A hollow rectangular ring of footprint cells (a walled compound).
pub fn ring(x0: i32, z0: i32, w: i32, h: i32) -> CellSet {
    block(x0, z0, w, h)
        .into_iter()
        .filter(|c| c.x == x0 || c.z == z0 || c.x == x0 + w - 1 || c.z == z0 + h - 1)
        .collect()
}
