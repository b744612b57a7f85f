//! Benchmark profiles for the Aegis shield engine.
//!
//! - [`compact_base`]: one solid 40x40 base in the middle of a 250x250 map
//! - [`sprawling_base`]: a walled compound with scattered outbuildings
//! - [`scattered_base`]: seeded random cells, the worst case for region fill

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use aegis_core::{CellSet, MapBounds};
use aegis_test_utils::footprints::{block, random_footprint, ring};

/// Side length of every benchmark map.
pub const MAP_SIZE: u32 = 250;

/// The benchmark map.
pub fn map_bounds() -> MapBounds {
    MapBounds::new(MAP_SIZE, MAP_SIZE).expect("benchmark map size is valid")
}

/// A solid 40x40 block centred on the map.
pub fn compact_base() -> (MapBounds, CellSet) {
    (map_bounds(), block(105, 105, 40, 40))
}

/// An 80x60 compound wall with nine 5x5 buildings inside and out.
pub fn sprawling_base() -> (MapBounds, CellSet) {
    let mut footprint = ring(80, 90, 80, 60);
    for i in 0..3 {
        for j in 0..3 {
            footprint.extend(block(90 + i * 25, 100 + j * 18, 5, 5));
        }
    }
    footprint.extend(block(170, 100, 6, 6));
    (map_bounds(), footprint)
}

/// `n` seeded random cells spread across the whole map.
pub fn scattered_base(seed: u64, n: usize) -> (MapBounds, CellSet) {
    let bounds = map_bounds();
    let footprint = random_footprint(seed, &bounds, n);
    (bounds, footprint)
}
