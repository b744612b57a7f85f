//! Content hashing for geometry cache keys.
//!
//! Uses FNV-1a: fast, deterministic, not cryptographic. The key only has
//! to tell "same inputs" from "different inputs" between rebuilds.

use crate::batch::BatchBudget;
use crate::color::ShieldColor;
use crate::pipeline::GeometryConfig;
use crate::region::FillStrategy;
use aegis_core::{Cell, CellSet, MapBounds};

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Incremental FNV-1a 64-bit hasher.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1a(u64);

impl Default for Fnv1a {
    fn default() -> Self {
        Self(FNV_OFFSET)
    }
}

impl Fnv1a {
    /// Fresh hasher at the offset basis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte.
    #[inline]
    pub fn byte(self, b: u8) -> Self {
        Self((self.0 ^ b as u64).wrapping_mul(FNV_PRIME))
    }

    /// Feed a `u32` as little-endian bytes.
    #[inline]
    pub fn u32(self, v: u32) -> Self {
        v.to_le_bytes().iter().fold(self, |h, &b| h.byte(b))
    }

    /// Feed a `u64` as little-endian bytes.
    #[inline]
    pub fn u64(self, v: u64) -> Self {
        v.to_le_bytes().iter().fold(self, |h, &b| h.byte(b))
    }

    /// Feed an `i32`.
    #[inline]
    pub fn i32(self, v: i32) -> Self {
        self.u32(v as u32)
    }

    /// Current hash value.
    pub fn finish(self) -> u64 {
        self.0
    }
}

fn cell(h: Fnv1a, c: Cell) -> Fnv1a {
    h.i32(c.x).i32(c.z)
}

fn budget(h: Fnv1a, b: &BatchBudget) -> Fnv1a {
    h.u32(b.vertex_ceiling)
        .u32(b.vertices_per_cell)
        .u32(b.safety_margin)
}

fn fill(h: Fnv1a, f: FillStrategy) -> Fnv1a {
    match f {
        FillStrategy::Perimeter => h.byte(0),
        FillStrategy::Origin(origin) => cell(h.byte(1), origin),
    }
}

/// Hash of everything a geometry rebuild depends on.
///
/// The footprint is hashed in sorted order, so two sets holding the same
/// cells in different insertion order produce the same key. The cell
/// count is folded in first so that concatenation ambiguities cannot
/// collide.
pub fn geometry_key(
    footprint: &CellSet,
    bounds: &MapBounds,
    config: &GeometryConfig,
    color: &ShieldColor,
) -> u64 {
    let mut sorted: Vec<Cell> = footprint.iter().copied().collect();
    sorted.sort_unstable();

    let mut h = Fnv1a::new()
        .u32(bounds.width())
        .u32(bounds.depth())
        .u64(sorted.len() as u64);
    for c in sorted {
        h = cell(h, c);
    }
    h = h.byte(u8::from(config.thicken));
    h = fill(h, config.fill);
    h = budget(h, &config.batch);
    for bits in color.to_bits() {
        h = h.u32(bits);
    }
    h.finish()
}
