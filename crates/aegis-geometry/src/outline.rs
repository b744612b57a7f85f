//! Exposed-edge extraction and collinear run merging.

use crate::region::Region;
use aegis_core::{Cell, Direction};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Thickness of an outline line primitive, in cells.
pub const LINE_THICKNESS: f32 = 0.12;

/// One exposed face: `cell` is in the region, its neighbour in `facing`
/// is not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeSegment {
    /// The region cell owning the face.
    pub cell: Cell,
    /// Cardinal direction the face points.
    pub facing: Direction,
}

/// A maximal run of collinear, same-facing edge segments.
///
/// North/south-facing runs extend east from `start` to `end`;
/// east/west-facing runs extend north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRun {
    /// First cell of the run (smallest coordinate along the run axis).
    pub start: Cell,
    /// Last cell of the run, inclusive.
    pub end: Cell,
    /// Facing shared by every segment in the run.
    pub facing: Direction,
}

/// World-space placement of one outline line primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePlacement {
    /// Centre of the line on the `(x, z)` plane.
    pub center: (f32, f32),
    /// Length in cells.
    pub length: f32,
    /// Line thickness.
    pub thickness: f32,
    /// `true` when the line runs along `x` (north/south facing).
    pub horizontal: bool,
}

impl LineRun {
    /// Number of cells covered.
    pub fn len(&self) -> usize {
        let dx = (i64::from(self.end.x) - i64::from(self.start.x)).unsigned_abs();
        let dz = (i64::from(self.end.z) - i64::from(self.start.z)).unsigned_abs();
        (dx + dz) as usize + 1
    }

    /// A run always covers at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Re-expand into the individual segments the run covers.
    pub fn segments(&self) -> impl Iterator<Item = EdgeSegment> + '_ {
        let axis = run_axis(self.facing);
        let mut next = Some(self.start);
        std::iter::from_fn(move || {
            let cell = next?;
            next = if cell == self.end { None } else { cell.step(axis) };
            Some(EdgeSegment {
                cell,
                facing: self.facing,
            })
        })
    }

    /// Where to draw this run: midpoint of the end cell centres pushed
    /// half a cell out along the facing.
    pub fn placement(&self) -> LinePlacement {
        let (fx, fz) = self.facing.offset();
        let mid_x = (self.start.x as f32 + self.end.x as f32) * 0.5 + 0.5;
        let mid_z = (self.start.z as f32 + self.end.z as f32) * 0.5 + 0.5;
        LinePlacement {
            center: (mid_x + fx as f32 * 0.5, mid_z + fz as f32 * 0.5),
            length: self.len() as f32,
            thickness: LINE_THICKNESS,
            horizontal: is_horizontal_facing(self.facing),
        }
    }
}

fn is_horizontal_facing(facing: Direction) -> bool {
    matches!(facing, Direction::North | Direction::South)
}

/// Translation axis a run with `facing` extends along.
fn run_axis(facing: Direction) -> Direction {
    if is_horizontal_facing(facing) {
        Direction::East
    } else {
        Direction::North
    }
}

/// Every exposed face of `region`, in row-major cell order and
/// N, S, E, W order within a cell.
pub fn exposed_edges(region: &Region) -> Vec<EdgeSegment> {
    let mut edges = Vec::new();
    for &cell in region.cells() {
        for facing in Direction::CARDINAL {
            let exposed = match cell.step(facing) {
                Some(nb) => !region.contains(nb),
                None => true,
            };
            if exposed {
                edges.push(EdgeSegment { cell, facing });
            }
        }
    }
    edges
}

/// Merge edge segments into maximal collinear runs.
///
/// Each segment ends up in exactly one run. Runs are emitted in the order
/// their first unvisited segment appears in `edges`.
pub fn merge_runs(edges: &[EdgeSegment]) -> Vec<LineRun> {
    let present: HashSet<EdgeSegment> = edges.iter().copied().collect();
    let mut visited: HashSet<EdgeSegment> = HashSet::with_capacity(edges.len());
    let mut runs = Vec::new();

    for &seg in edges {
        if !visited.insert(seg) {
            continue;
        }
        let forward = run_axis(seg.facing);
        let backward = forward.opposite();

        let mut end = seg.cell;
        while let Some(next) = end.step(forward) {
            let cand = EdgeSegment {
                cell: next,
                facing: seg.facing,
            };
            if !present.contains(&cand) || !visited.insert(cand) {
                break;
            }
            end = next;
        }

        let mut start = seg.cell;
        while let Some(prev) = start.step(backward) {
            let cand = EdgeSegment {
                cell: prev,
                facing: seg.facing,
            };
            if !present.contains(&cand) || !visited.insert(cand) {
                break;
            }
            start = prev;
        }

        runs.push(LineRun {
            start,
            end,
            facing: seg.facing,
        });
    }

    runs
}

/// Exposed edges of `region`, merged into runs.
pub fn extract_outline(region: &Region) -> Vec<LineRun> {
    merge_runs(&exposed_edges(region))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::extract_border;
    use crate::region::{compute_region, FillStrategy};
    use aegis_core::MapBounds;
    use aegis_test_utils::footprints::{block, from_cells};
    use proptest::prelude::*;

    fn region_of(fp: &aegis_core::CellSet, w: u32, d: u32) -> Region {
        let b = MapBounds::new(w, d).unwrap();
        compute_region(&extract_border(fp, &b), &b, FillStrategy::Perimeter)
    }

    #[test]
    fn solid_square_outline_is_four_runs() {
        // Footprint 2x2 at (1,1) -> region is the full 4x4 block at origin.
        let region = region_of(&block(1, 1, 2, 2), 4, 4);
        let runs = extract_outline(&region);
        assert_eq!(runs.len(), 4);
        assert!(runs.iter().all(|r| r.len() == 4));
    }

    #[test]
    fn single_cell_region_gives_four_unit_runs() {
        let border = from_cells(&[(3, 3)]);
        let b = MapBounds::new(8, 8).unwrap();
        let region = compute_region(&border, &b, FillStrategy::Perimeter);
        let runs = extract_outline(&region);
        assert_eq!(runs.len(), 4);
        assert!(runs.iter().all(|r| r.len() == 1 && r.start == Cell::new(3, 3)));
    }

    #[test]
    fn run_extends_in_both_directions() {
        // Seed from the middle: the run must still cover the whole line.
        let edges: Vec<EdgeSegment> = [2, 0, 1]
            .iter()
            .map(|&x| EdgeSegment {
                cell: Cell::new(x, 5),
                facing: Direction::North,
            })
            .collect();
        let runs = merge_runs(&edges);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].start, Cell::new(0, 5));
        assert_eq!(runs[0].end, Cell::new(2, 5));
    }

    #[test]
    fn gap_splits_runs() {
        let edges: Vec<EdgeSegment> = [0, 1, 3]
            .iter()
            .map(|&z| EdgeSegment {
                cell: Cell::new(4, z),
                facing: Direction::East,
            })
            .collect();
        let runs = merge_runs(&edges);
        assert_eq!(runs.len(), 2);
        let lens: Vec<usize> = runs.iter().map(LineRun::len).collect();
        assert_eq!(lens, vec![2, 1]);
    }

    #[test]
    fn segments_reexpand_run() {
        let run = LineRun {
            start: Cell::new(1, 2),
            end: Cell::new(1, 5),
            facing: Direction::West,
        };
        let cells: Vec<Cell> = run.segments().map(|s| s.cell).collect();
        assert_eq!(
            cells,
            vec![Cell::new(1, 2), Cell::new(1, 3), Cell::new(1, 4), Cell::new(1, 5)]
        );
    }

    #[test]
    fn placement_pushes_outward() {
        let north = LineRun {
            start: Cell::new(0, 3),
            end: Cell::new(3, 3),
            facing: Direction::North,
        };
        let p = north.placement();
        assert_eq!(p.center, (2.0, 4.0));
        assert_eq!(p.length, 4.0);
        assert!(p.horizontal);
        assert_eq!(p.thickness, LINE_THICKNESS);

        let west = LineRun {
            start: Cell::new(0, 0),
            end: Cell::new(0, 1),
            facing: Direction::West,
        };
        let p = west.placement();
        assert_eq!(p.center, (0.0, 1.0));
        assert!(!p.horizontal);
    }

    proptest! {
        #[test]
        fn runs_reexpand_to_exact_edge_set(
            cells in proptest::collection::vec((0i32..12, 0i32..12), 1..30),
        ) {
            let fp: aegis_core::CellSet = cells.iter().map(|&(x, z)| Cell::new(x, z)).collect();
            let region = region_of(&fp, 12, 12);
            let edges = exposed_edges(&region);
            let runs = merge_runs(&edges);

            let mut expanded: Vec<EdgeSegment> = runs.iter().flat_map(|r| r.segments()).collect();
            let mut sorted_edges = edges.clone();
            expanded.sort();
            sorted_edges.sort();
            prop_assert_eq!(expanded, sorted_edges);
        }
    }
}
