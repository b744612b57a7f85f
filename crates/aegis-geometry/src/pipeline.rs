//! The full geometry rebuild: border, region, outline, batches.

use crate::batch::{partition, BatchBudget, RenderBatch};
use crate::border::{extract_border, thicken};
use crate::outline::{extract_outline, LineRun};
use crate::region::{compute_region, FillStrategy, Region};
use aegis_core::{CellRect, CellSet, GeometryError, MapBounds};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options of the single configurable geometry pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Run the thickening pass for a two-cell ring.
    pub thicken: bool,
    /// Where the region flood fill starts.
    pub fill: FillStrategy,
    /// Render batch limits.
    pub batch: BatchBudget,
}

/// Output of one geometry rebuild.
///
/// Cached by the host facade between rebuilds; downstream consumers only
/// ever read it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShieldGeometry {
    /// The wall ring, sorted row-major.
    pub border: CellSet,
    /// Border plus enclosed interior.
    pub region: Region,
    /// Merged outline runs.
    pub outline: Vec<LineRun>,
    /// Render batches over the region.
    pub batches: Vec<RenderBatch>,
}

impl ShieldGeometry {
    /// Geometry with no cells at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether there is nothing to protect or draw.
    pub fn is_empty(&self) -> bool {
        self.border.is_empty()
    }

    /// Work rectangle of the region, if any.
    pub fn rect(&self) -> Option<CellRect> {
        self.region.rect()
    }
}

/// Rebuild all geometry from a footprint.
///
/// Pure and total: an empty or fully off-map footprint produces
/// [`ShieldGeometry::empty`], never an error.
#[tracing::instrument(skip_all, fields(footprint = footprint.len(), thicken = config.thicken))]
pub fn recompute_geometry(
    footprint: &CellSet,
    bounds: &MapBounds,
    config: &GeometryConfig,
) -> ShieldGeometry {
    if footprint.is_empty() {
        debug!(error = %GeometryError::MissingFootprint, "geometry degraded to empty");
        return ShieldGeometry::empty();
    }

    let mut border = extract_border(footprint, bounds);
    if config.thicken && !border.is_empty() {
        border = thicken(&border, footprint, bounds);
    }
    if border.is_empty() {
        debug!("footprint produced no on-map border");
        return ShieldGeometry::empty();
    }

    let region = compute_region(&border, bounds, config.fill);
    let outline = extract_outline(&region);
    let batches = partition(&region, &config.batch);

    debug!(
        border = border.len(),
        region = region.len(),
        interior = region.interior_count(),
        runs = outline.len(),
        batches = batches.len(),
        "geometry rebuilt"
    );

    ShieldGeometry {
        border,
        region,
        outline,
        batches,
    }
}
