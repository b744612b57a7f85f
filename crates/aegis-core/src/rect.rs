//! Map bounds and inclusive cell rectangles.

use crate::cell::Cell;
use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

/// Dimensions of the map a shield lives on.
///
/// Valid cells satisfy `0 <= x < width` and `0 <= z < depth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapBounds {
    width: u32,
    depth: u32,
}

impl MapBounds {
    /// Maximum extent per axis: coordinates are `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Returns `Err(GeometryError::EmptyMap)` if either dimension is 0, or
    /// `Err(GeometryError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, depth: u32) -> Result<Self, GeometryError> {
        if width == 0 || depth == 0 {
            return Err(GeometryError::EmptyMap);
        }
        if width > Self::MAX_DIM {
            return Err(GeometryError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if depth > Self::MAX_DIM {
            return Err(GeometryError::DimensionTooLarge {
                name: "depth",
                value: depth,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, depth })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether `cell` lies on the map.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.z >= 0 && cell.x < self.width as i32 && cell.z < self.depth as i32
    }

    /// Like [`contains`](Self::contains) but reports the offending cell.
    pub fn check(&self, cell: Cell) -> Result<Cell, GeometryError> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(GeometryError::OutOfBounds {
                cell,
                bounds: *self,
            })
        }
    }

    /// The whole map as a rectangle.
    pub fn rect(&self) -> CellRect {
        CellRect {
            min_x: 0,
            min_z: 0,
            max_x: self.width as i32 - 1,
            max_z: self.depth as i32 - 1,
        }
    }
}

/// An axis-aligned rectangle of cells, inclusive on both corners.
///
/// Always non-empty: `min_x <= max_x` and `min_z <= max_z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    min_x: i32,
    min_z: i32,
    max_x: i32,
    max_z: i32,
}

impl CellRect {
    /// Build a rectangle from inclusive limits. Returns `None` if inverted.
    pub fn from_limits(min_x: i32, min_z: i32, max_x: i32, max_z: i32) -> Option<Self> {
        if min_x > max_x || min_z > max_z {
            return None;
        }
        Some(Self {
            min_x,
            min_z,
            max_x,
            max_z,
        })
    }

    /// Tight bounding rectangle of `cells`, or `None` for an empty input.
    pub fn bounding<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Option<Self> {
        let mut iter = cells.into_iter();
        let first = iter.next()?;
        let mut rect = Self {
            min_x: first.x,
            min_z: first.z,
            max_x: first.x,
            max_z: first.z,
        };
        for c in iter {
            rect.min_x = rect.min_x.min(c.x);
            rect.min_z = rect.min_z.min(c.z);
            rect.max_x = rect.max_x.max(c.x);
            rect.max_z = rect.max_z.max(c.z);
        }
        Some(rect)
    }

    /// Grow by `by` cells on every side (saturating at `i32` limits).
    pub fn expanded(&self, by: i32) -> Self {
        Self {
            min_x: self.min_x.saturating_sub(by),
            min_z: self.min_z.saturating_sub(by),
            max_x: self.max_x.saturating_add(by),
            max_z: self.max_z.saturating_add(by),
        }
    }

    /// Intersect with the map. `None` when the rectangle lies fully off-map.
    pub fn clipped_to(&self, bounds: &MapBounds) -> Option<Self> {
        let map = bounds.rect();
        Self::from_limits(
            self.min_x.max(map.min_x),
            self.min_z.max(map.min_z),
            self.max_x.min(map.max_x),
            self.max_z.min(map.max_z),
        )
    }

    /// Inclusive minimum x.
    pub fn min_x(&self) -> i32 {
        self.min_x
    }

    /// Inclusive minimum z.
    pub fn min_z(&self) -> i32 {
        self.min_z
    }

    /// Inclusive maximum x.
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    /// Inclusive maximum z.
    pub fn max_z(&self) -> i32 {
        self.max_z
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        (i64::from(self.max_x) - i64::from(self.min_x) + 1) as usize
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        (i64::from(self.max_z) - i64::from(self.min_z) + 1) as usize
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Whether `cell` lies inside the rectangle.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min_x && cell.x <= self.max_x && cell.z >= self.min_z && cell.z <= self.max_z
    }

    /// Row-major flat index of `cell`, or `None` if outside.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let lx = (i64::from(cell.x) - i64::from(self.min_x)) as usize;
        let lz = (i64::from(cell.z) - i64::from(self.min_z)) as usize;
        Some(lz * self.width() + lx)
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn cell_at(&self, index: usize) -> Cell {
        let w = self.width();
        Cell {
            x: self.min_x + (index % w) as i32,
            z: self.min_z + (index / w) as i32,
        }
    }

    /// Whether `cell` lies on the outermost ring of the rectangle.
    pub fn on_perimeter(&self, cell: Cell) -> bool {
        self.contains(cell)
            && (cell.x == self.min_x
                || cell.x == self.max_x
                || cell.z == self.min_z
                || cell.z == self.max_z)
    }

    /// Iterate cells row by row (`z` outer, `x` inner).
    pub fn iter_row_major(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.min_z..=self.max_z)
            .flat_map(move |z| (self.min_x..=self.max_x).map(move |x| Cell { x, z }))
    }

    /// Iterate the perimeter cells, each exactly once, in row-major order.
    pub fn iter_perimeter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter_row_major().filter(move |&c| self.on_perimeter(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, z: i32) -> Cell {
        Cell::new(x, z)
    }

    #[test]
    fn bounds_rejects_zero() {
        assert!(matches!(MapBounds::new(0, 5), Err(GeometryError::EmptyMap)));
        assert!(matches!(MapBounds::new(5, 0), Err(GeometryError::EmptyMap)));
    }

    #[test]
    fn bounds_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            MapBounds::new(big, 5),
            Err(GeometryError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            MapBounds::new(5, big),
            Err(GeometryError::DimensionTooLarge { name: "depth", .. })
        ));
    }

    #[test]
    fn bounds_contains_edges() {
        let b = MapBounds::new(4, 3).unwrap();
        assert!(b.contains(c(0, 0)));
        assert!(b.contains(c(3, 2)));
        assert!(!b.contains(c(4, 2)));
        assert!(!b.contains(c(3, 3)));
        assert!(!b.contains(c(-1, 0)));
        assert!(matches!(b.check(c(-1, 0)), Err(GeometryError::OutOfBounds { .. })));
    }

    #[test]
    fn bounding_rect_of_cells() {
        let cells = [c(2, 5), c(-1, 3), c(4, 4)];
        let r = CellRect::bounding(cells.iter()).unwrap();
        assert_eq!((r.min_x(), r.min_z(), r.max_x(), r.max_z()), (-1, 3, 4, 5));
        assert_eq!(r.width(), 6);
        assert_eq!(r.height(), 3);
        assert!(CellRect::bounding(std::iter::empty()).is_none());
    }

    #[test]
    fn expand_then_clip() {
        let b = MapBounds::new(10, 10).unwrap();
        let r = CellRect::from_limits(0, 0, 3, 3).unwrap().expanded(1);
        assert_eq!(r.min_x(), -1);
        let clipped = r.clipped_to(&b).unwrap();
        assert_eq!(
            (clipped.min_x(), clipped.min_z(), clipped.max_x(), clipped.max_z()),
            (0, 0, 4, 4)
        );
        let off_map = CellRect::from_limits(20, 20, 25, 25).unwrap();
        assert!(off_map.clipped_to(&b).is_none());
    }

    #[test]
    fn index_roundtrip_row_major() {
        let r = CellRect::from_limits(2, 3, 5, 6).unwrap();
        for (i, cell) in r.iter_row_major().enumerate() {
            assert_eq!(r.index_of(cell), Some(i));
            assert_eq!(r.cell_at(i), cell);
        }
        assert_eq!(r.index_of(c(0, 0)), None);
    }

    #[test]
    fn perimeter_counts() {
        let r = CellRect::from_limits(0, 0, 3, 3).unwrap();
        assert_eq!(r.iter_perimeter().count(), 12);
        let line = CellRect::from_limits(0, 0, 4, 0).unwrap();
        assert_eq!(line.iter_perimeter().count(), 5);
        let single = CellRect::from_limits(7, 7, 7, 7).unwrap();
        assert_eq!(single.iter_perimeter().count(), 1);
    }
}
