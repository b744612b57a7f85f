//! Shield geometry for the Aegis shield engine.
//!
//! Turns a footprint cell set into the wall ring (border), the enclosed
//! region, merged outline runs and render batches. Everything here is a
//! pure function of its inputs; [`GeometryCache`] memoises the last
//! rebuild under an FNV-1a content key.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod border;
pub mod cache;
pub mod color;
pub mod hash;
pub mod outline;
pub mod pipeline;
pub mod region;

pub use batch::{partition, BatchBudget, QuadMesh, RenderBatch};
pub use border::{extract_border, thicken};
pub use cache::GeometryCache;
pub use color::ShieldColor;
pub use hash::geometry_key;
pub use outline::{exposed_edges, extract_outline, merge_runs, EdgeSegment, LinePlacement, LineRun};
pub use pipeline::{recompute_geometry, GeometryConfig, ShieldGeometry};
pub use region::{compute_region, FillStrategy, Region};
