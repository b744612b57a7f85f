//! Border ring extraction around a footprint.
//!
//! The border is every on-map cell that is Moore-adjacent (8-neighbourhood)
//! to a footprint cell without itself being part of the footprint. This
//! handles concave and disjoint footprints identically; nothing assumes
//! convexity.

use aegis_core::{Cell, CellSet, MapBounds};
use tracing::debug;

/// Extract the one-cell-thick ring around `footprint`.
///
/// Footprint cells that lie off the map are skipped as sources (they can
/// still block a neighbour from joining the ring). The result is sorted
/// in canonical row-major order.
pub fn extract_border(footprint: &CellSet, bounds: &MapBounds) -> CellSet {
    let mut border = CellSet::new();
    let mut skipped = 0usize;

    for &cell in footprint {
        if !bounds.contains(cell) {
            skipped += 1;
            continue;
        }
        for nb in cell.moore_neighbours() {
            if bounds.contains(nb) && !footprint.contains(&nb) {
                border.insert(nb);
            }
        }
    }

    if skipped > 0 {
        debug!(skipped, "footprint cells outside map skipped during border extraction");
    }

    border.sort();
    border
}

/// Add a second ring outside `border`.
///
/// Applies the same Moore-adjacency rule to the border cells, excluding
/// footprint cells and cells already on the border, and unions the result
/// back in. Footprint cells are never re-included.
pub fn thicken(border: &CellSet, footprint: &CellSet, bounds: &MapBounds) -> CellSet {
    let mut out = border.clone();
    for &cell in border {
        for nb in cell.moore_neighbours() {
            if bounds.contains(nb) && !footprint.contains(&nb) && !border.contains(&nb) {
                out.insert(nb);
            }
        }
    }
    out.sort();
    out
}
