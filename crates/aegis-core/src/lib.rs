//! Core types for the Aegis shield engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid primitives every other crate builds on: cells, directions,
//! rectangles and map bounds, plus strongly-typed identifiers, the
//! collaborator traits the host implements, and the error enums shared
//! across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod rect;
pub mod traits;

pub use cell::{Cell, CellSet, Direction};
pub use error::{GeometryError, LedgerError};
pub use id::{Faction, ProjectileId, TickId};
pub use rect::{CellRect, MapBounds};
pub use traits::{FootprintSource, ProjectileField, ProjectileHandle};
