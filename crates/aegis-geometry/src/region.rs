//! Enclosed region computation via bounded flood fill.
//!
//! The region is the border plus every cell it encloses. Work happens on
//! a dense mask over the border's bounding rectangle (expanded by one and
//! clipped to the map), so membership never depends on hash iteration
//! order and recomputation is idempotent.

use aegis_core::{Cell, CellRect, CellSet, MapBounds};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Where the flood fill starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillStrategy {
    /// Flood from every non-border perimeter cell of the rectangle and
    /// mark what it reaches as outside; everything else is inside.
    #[default]
    Perimeter,
    /// Flood from the protected origin and mark what it reaches as inside.
    ///
    /// Falls back to [`Perimeter`](Self::Perimeter) if the origin is not
    /// fillable (off the rectangle or on the border) or if the fill leaks
    /// to the rectangle perimeter through an open ring.
    Origin(Cell),
}

/// Classification of one cell of the work rectangle.
///
/// Every cell gets exactly one class, so no cell can be both outside and
/// interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CellClass {
    /// Reachable from outside without crossing the border.
    Outside,
    /// A border (wall) cell.
    Border,
    /// Enclosed by the border.
    Interior,
}

/// The border plus its enclosed interior.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    rect: Option<CellRect>,
    cells: CellSet,
    interior_count: usize,
}

impl Region {
    /// A region with no cells.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Work rectangle the region was computed over, `None` when empty.
    pub fn rect(&self) -> Option<CellRect> {
        self.rect
    }

    /// Region cells in row-major order.
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    /// Number of region cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the region is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of enclosed (non-border) cells.
    pub fn interior_count(&self) -> usize {
        self.interior_count
    }

    /// Whether `cell` belongs to the region.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// Dense classification mask over the work rectangle.
struct Mask {
    rect: CellRect,
    classes: Vec<CellClass>,
}

impl Mask {
    /// Every cell starts as `fill`; border cells are walls.
    fn new(rect: CellRect, border: &CellSet, fill: CellClass) -> Self {
        let mut classes = vec![fill; rect.area()];
        for &cell in border {
            if let Some(i) = rect.index_of(cell) {
                classes[i] = CellClass::Border;
            }
        }
        Self { rect, classes }
    }

    /// 4-connected flood from `seeds`, relabelling `from` cells to `to`.
    /// Border cells are never entered. Returns the number of cells
    /// relabelled and whether the fill touched the rectangle perimeter.
    fn flood(
        &mut self,
        seeds: impl IntoIterator<Item = Cell>,
        from: CellClass,
        to: CellClass,
    ) -> (usize, bool) {
        let rect = self.rect;
        let classes = &mut self.classes;
        let mut queue = VecDeque::new();
        let mut filled = 0usize;
        let mut touched_perimeter = false;

        let mut visit = |cell: Cell, queue: &mut VecDeque<Cell>| {
            match rect.index_of(cell) {
                Some(i) if classes[i] == from => {
                    classes[i] = to;
                    queue.push_back(cell);
                    true
                }
                _ => false,
            }
        };

        for seed in seeds {
            if visit(seed, &mut queue) {
                filled += 1;
            }
        }

        while let Some(cell) = queue.pop_front() {
            if rect.on_perimeter(cell) {
                touched_perimeter = true;
            }
            for nb in cell.cardinal_neighbours() {
                if visit(nb, &mut queue) {
                    filled += 1;
                }
            }
        }

        (filled, touched_perimeter)
    }

    fn into_region(self) -> Region {
        let mut cells = CellSet::new();
        let mut interior_count = 0usize;
        for (i, class) in self.classes.iter().enumerate() {
            match class {
                CellClass::Border => {
                    cells.insert(self.rect.cell_at(i));
                }
                CellClass::Interior => {
                    cells.insert(self.rect.cell_at(i));
                    interior_count += 1;
                }
                CellClass::Outside => {}
            }
        }
        Region {
            rect: Some(self.rect),
            cells,
            interior_count,
        }
    }
}

/// Work rectangle: tight bounds of `border`, expanded by one cell on each
/// side and clipped to the map.
pub fn work_rect(border: &CellSet, bounds: &MapBounds) -> Option<CellRect> {
    CellRect::bounding(border.iter())?
        .expanded(1)
        .clipped_to(bounds)
}

/// Compute the region enclosed by `border`.
///
/// Border cells outside the map are ignored. An empty border yields an
/// empty region.
pub fn compute_region(border: &CellSet, bounds: &MapBounds, strategy: FillStrategy) -> Region {
    let Some(rect) = work_rect(border, bounds) else {
        return Region::empty();
    };

    match strategy {
        FillStrategy::Perimeter => fill_from_perimeter(rect, border),
        FillStrategy::Origin(origin) => match fill_from_origin(rect, border, origin) {
            Some(region) => region,
            None => {
                debug!(%origin, "origin fill not enclosed, falling back to perimeter fill");
                fill_from_perimeter(rect, border)
            }
        },
    }
}

fn fill_from_perimeter(rect: CellRect, border: &CellSet) -> Region {
    // Start with everything interior, then carve out what the outside
    // flood reaches.
    let mut mask = Mask::new(rect, border, CellClass::Interior);
    let seeds: Vec<Cell> = rect.iter_perimeter().collect();
    mask.flood(seeds, CellClass::Interior, CellClass::Outside);
    mask.into_region()
}

fn fill_from_origin(rect: CellRect, border: &CellSet, origin: Cell) -> Option<Region> {
    let mut mask = Mask::new(rect, border, CellClass::Outside);
    let (filled, leaked) = mask.flood([origin], CellClass::Outside, CellClass::Interior);
    if filled == 0 || leaked {
        return None;
    }
    Some(mask.into_region())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::extract_border;
    use aegis_test_utils::footprints::{block, from_cells};
    use proptest::prelude::*;

    fn bounds(w: u32, d: u32) -> MapBounds {
        MapBounds::new(w, d).unwrap()
    }

    #[test]
    fn empty_border_gives_empty_region() {
        let r = compute_region(&CellSet::new(), &bounds(10, 10), FillStrategy::Perimeter);
        assert!(r.is_empty());
        assert!(r.rect().is_none());
    }

    #[test]
    fn closed_ring_encloses_footprint_cells() {
        let fp = block(3, 3, 3, 2);
        let b = bounds(20, 20);
        let border = extract_border(&fp, &b);
        let region = compute_region(&border, &b, FillStrategy::Perimeter);
        // 5x4 ring block, fully filled.
        assert_eq!(region.len(), 20);
        assert_eq!(region.interior_count(), 6);
        assert!(fp.iter().all(|&c| region.contains(c)));
    }

    #[test]
    fn open_line_encloses_nothing() {
        let border = from_cells(&[(2, 2), (3, 2), (4, 2)]);
        let region = compute_region(&border, &bounds(10, 10), FillStrategy::Perimeter);
        assert_eq!(region.len(), 3);
        assert_eq!(region.interior_count(), 0);
    }

    #[test]
    fn footprint_against_map_edge_is_not_enclosed() {
        // Footprint in the corner: the ring is clipped by the map edge.
        let fp = block(0, 0, 2, 2);
        let b = bounds(10, 10);
        let border = extract_border(&fp, &b);
        assert_eq!(border.len(), 5);
        let region = compute_region(&border, &b, FillStrategy::Perimeter);
        // The footprint cells sit on the work-rect perimeter and are reachable
        // by the outside flood, so only the border remains.
        assert_eq!(region.interior_count(), 0);
        assert_eq!(region.len(), 5);
    }

    #[test]
    fn origin_fill_matches_perimeter_fill_for_closed_ring() {
        let fp = block(4, 4, 3, 3);
        let b = bounds(20, 20);
        let border = extract_border(&fp, &b);
        let by_perimeter = compute_region(&border, &b, FillStrategy::Perimeter);
        let by_origin = compute_region(&border, &b, FillStrategy::Origin(Cell::new(5, 5)));
        assert_eq!(by_perimeter, by_origin);
    }

    #[test]
    fn origin_fill_falls_back_when_ring_is_open() {
        let border = from_cells(&[(2, 2), (3, 2), (4, 2)]);
        let b = bounds(10, 10);
        let by_origin = compute_region(&border, &b, FillStrategy::Origin(Cell::new(3, 3)));
        let by_perimeter = compute_region(&border, &b, FillStrategy::Perimeter);
        assert_eq!(by_origin, by_perimeter);
    }

    #[test]
    fn origin_on_border_falls_back() {
        let fp = block(4, 4, 2, 2);
        let b = bounds(20, 20);
        let border = extract_border(&fp, &b);
        let on_wall = compute_region(&border, &b, FillStrategy::Origin(Cell::new(3, 3)));
        assert_eq!(on_wall, compute_region(&border, &b, FillStrategy::Perimeter));
    }

    #[test]
    fn origin_fill_only_takes_its_own_pocket() {
        // Two separate closed rings; origin sits in the first one.
        let mut fp = block(2, 2, 2, 2);
        fp.extend(block(12, 12, 2, 2));
        let b = bounds(20, 20);
        let border = extract_border(&fp, &b);
        let region = compute_region(&border, &b, FillStrategy::Origin(Cell::new(2, 2)));
        assert_eq!(region.interior_count(), 4);
        assert!(!region.contains(Cell::new(12, 12)));
        let full = compute_region(&border, &b, FillStrategy::Perimeter);
        assert_eq!(full.interior_count(), 8);
    }

    proptest! {
        #[test]
        fn region_contains_border_and_is_deterministic(
            cells in proptest::collection::vec((0i32..14, 0i32..14), 0..40),
        ) {
            let fp: CellSet = cells.iter().map(|&(x, z)| Cell::new(x, z)).collect();
            let b = bounds(14, 14);
            let border = extract_border(&fp, &b);
            let first = compute_region(&border, &b, FillStrategy::Perimeter);
            let second = compute_region(&border, &b, FillStrategy::Perimeter);
            for c in &border {
                prop_assert!(first.contains(*c));
            }
            prop_assert_eq!(first.len(), border.len() + first.interior_count());
            let a: Vec<Cell> = first.cells().iter().copied().collect();
            let bb: Vec<Cell> = second.cells().iter().copied().collect();
            prop_assert_eq!(a, bb);
        }
    }
}
