//! Geometry cache with content-hash invalidation.
//!
//! [`GeometryCache`] holds the last [`ShieldGeometry`] together with the
//! FNV-1a key of the inputs it was built from. [`get_or_compute`] returns
//! the cached value while the key matches and rebuilds otherwise.
//!
//! [`get_or_compute`]: GeometryCache::get_or_compute

use crate::color::ShieldColor;
use crate::hash::geometry_key;
use crate::pipeline::{recompute_geometry, GeometryConfig, ShieldGeometry};
use aegis_core::{CellSet, MapBounds};
use tracing::debug;

/// Cached shield geometry.
///
/// # Invalidation
///
/// The geometry is rebuilt when:
/// - Nothing has been built yet.
/// - The footprint, map bounds, geometry config or colour changed.
/// - [`invalidate`](Self::invalidate) was called.
#[derive(Debug, Default)]
pub struct GeometryCache {
    cached: Option<CachedGeometry>,
    hits: u64,
    misses: u64,
}

#[derive(Debug)]
struct CachedGeometry {
    key: u64,
    geometry: ShieldGeometry,
}

impl GeometryCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return geometry for these inputs, rebuilding on key mismatch.
    pub fn get_or_compute(
        &mut self,
        footprint: &CellSet,
        bounds: &MapBounds,
        config: &GeometryConfig,
        color: &ShieldColor,
    ) -> &ShieldGeometry {
        let key = geometry_key(footprint, bounds, config, color);
        let fresh = matches!(&self.cached, Some(c) if c.key == key);

        if fresh {
            self.hits += 1;
            debug!(key, "geometry cache hit");
        } else {
            self.misses += 1;
            debug!(key, "geometry cache miss");
            self.cached = None;
        }

        let cached = self.cached.get_or_insert_with(|| CachedGeometry {
            key,
            geometry: recompute_geometry(footprint, bounds, config),
        });
        &cached.geometry
    }

    /// The cached geometry, if any.
    pub fn current(&self) -> Option<&ShieldGeometry> {
        self.cached.as_ref().map(|c| &c.geometry)
    }

    /// Whether geometry is currently cached.
    pub fn is_computed(&self) -> bool {
        self.cached.is_some()
    }

    /// Drop the cached geometry, forcing a rebuild on next use.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Lookups served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that triggered a rebuild.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
