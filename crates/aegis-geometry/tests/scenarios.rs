//! Integration test: reference footprints through the full geometry pipeline.
//!
//! Covers the square 2x2 footprint on a 4x4 map (border is the full map
//! perimeter, region is the whole map), concave and disjoint footprints,
//! and determinism across repeated and reordered rebuilds.

use aegis_core::{Cell, CellSet, MapBounds};
use aegis_geometry::{
    compute_region, exposed_edges, extract_border, merge_runs, recompute_geometry, FillStrategy,
    GeometryConfig,
};
use aegis_test_utils::footprints::{block, from_cells, random_footprint};
use proptest::prelude::*;

// ── Reference footprints ────────────────────────────────────────────

#[test]
fn square_footprint_border_is_map_perimeter() {
    let bounds = MapBounds::new(4, 4).unwrap();
    let fp = block(1, 1, 2, 2);
    let border = extract_border(&fp, &bounds);

    let expected: CellSet = bounds.rect().iter_perimeter().collect();
    assert_eq!(border.len(), 12);
    assert!(expected.iter().all(|c| border.contains(c)));
    assert!(fp.iter().all(|c| !border.contains(c)));
}

#[test]
fn square_footprint_region_is_whole_map() {
    let bounds = MapBounds::new(4, 4).unwrap();
    let fp = block(1, 1, 2, 2);
    let border = extract_border(&fp, &bounds);
    let region = compute_region(&border, &bounds, FillStrategy::Perimeter);

    let rect = region.rect().unwrap();
    assert_eq!(
        (rect.min_x(), rect.min_z(), rect.max_x(), rect.max_z()),
        (0, 0, 3, 3)
    );
    assert_eq!(region.len(), 16);
    assert_eq!(region.interior_count(), 4);
    assert!(fp.iter().all(|&c| region.contains(c)));
}

#[test]
fn concave_footprint_pipeline() {
    // L-shaped footprint in open space.
    let bounds = MapBounds::new(16, 16).unwrap();
    let fp = from_cells(&[(5, 5), (5, 6), (5, 7), (6, 5), (7, 5)]);
    let g = recompute_geometry(&fp, &bounds, &GeometryConfig::default());

    assert!(fp.iter().all(|&c| g.region.contains(c)));
    assert!(g.border.iter().all(|c| !fp.contains(c)));
    // The ring plus notch fill the 5x5 bounding box of the border.
    assert_eq!(g.region.len(), 21);
    let total_batched: usize = g.batches.iter().map(|b| b.len()).sum();
    assert_eq!(total_batched, g.region.len());
}

#[test]
fn disjoint_footprints_produce_two_islands() {
    let bounds = MapBounds::new(32, 32).unwrap();
    let mut fp = block(2, 2, 2, 2);
    fp.extend(block(20, 20, 3, 3));
    let g = recompute_geometry(&fp, &bounds, &GeometryConfig::default());
    assert_eq!(g.region.len(), 16 + 25);
    assert_eq!(g.region.interior_count(), 4 + 9);
    assert_eq!(g.outline.len(), 8);
}

// ── Determinism ─────────────────────────────────────────────────────

#[test]
fn rebuild_is_idempotent_across_insertion_order() {
    let bounds = MapBounds::new(24, 24).unwrap();
    let fp = random_footprint(7, &bounds, 40);
    let mut reversed: Vec<Cell> = fp.iter().copied().collect();
    reversed.reverse();
    let fp_rev: CellSet = reversed.into_iter().collect();

    let cfg = GeometryConfig::default();
    let a = recompute_geometry(&fp, &bounds, &cfg);
    let b = recompute_geometry(&fp_rev, &bounds, &cfg);
    let a_cells: Vec<Cell> = a.region.cells().iter().copied().collect();
    let b_cells: Vec<Cell> = b.region.cells().iter().copied().collect();
    assert_eq!(a_cells, b_cells);
    assert_eq!(a.outline, b.outline);
    assert_eq!(a.batches, b.batches);
}

// ── Properties ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn region_is_superset_of_border(seed in 0u64..500, n in 1usize..60) {
        let bounds = MapBounds::new(20, 20).unwrap();
        let fp = random_footprint(seed, &bounds, n);
        let g = recompute_geometry(&fp, &bounds, &GeometryConfig::default());
        for c in &g.border {
            prop_assert!(g.region.contains(*c));
            prop_assert!(!fp.contains(c));
            prop_assert!(bounds.contains(*c));
        }
    }

    #[test]
    fn outline_reexpands_to_exposed_edges(seed in 0u64..500, n in 1usize..60) {
        let bounds = MapBounds::new(20, 20).unwrap();
        let fp = random_footprint(seed, &bounds, n);
        let g = recompute_geometry(&fp, &bounds, &GeometryConfig::default());
        let mut edges = exposed_edges(&g.region);
        let mut expanded: Vec<_> = merge_runs(&edges).iter().flat_map(|r| r.segments().collect::<Vec<_>>()).collect();
        edges.sort();
        expanded.sort();
        prop_assert_eq!(edges, expanded);
    }

    #[test]
    fn thickened_border_never_touches_footprint(seed in 0u64..500, n in 1usize..40) {
        let bounds = MapBounds::new(20, 20).unwrap();
        let fp = random_footprint(seed, &bounds, n);
        let cfg = GeometryConfig { thicken: true, ..GeometryConfig::default() };
        let g = recompute_geometry(&fp, &bounds, &cfg);
        prop_assert!(g.border.iter().all(|c| !fp.contains(c)));
    }
}
