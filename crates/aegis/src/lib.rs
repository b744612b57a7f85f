//! Aegis: grid shield geometry and projectile interception.
//!
//! This is the facade crate that re-exports the public API of the Aegis
//! sub-crates. Most hosts only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use aegis::prelude::*;
//!
//! // A 2x2 building in the middle of a small map.
//! let bounds = MapBounds::new(16, 16).unwrap();
//! let building: CellSet = [(7, 7), (8, 7), (7, 8), (8, 8)]
//!     .into_iter()
//!     .map(Cell::from)
//!     .collect();
//!
//! // The anchor resolver and the projectile lookup are plain closures
//! // or host types implementing the collaborator traits.
//! struct Anchor(CellSet);
//! impl FootprintSource for Anchor {
//!     fn resolve_footprint(&self) -> Option<CellSet> {
//!         Some(self.0.clone())
//!     }
//! }
//! let incoming = |cell: Cell| {
//!     if cell == Cell::new(6, 6) {
//!         vec![ProjectileHandle::new(1, None, 8.0)]
//!     } else {
//!         Vec::new()
//!     }
//! };
//!
//! let mut emitter = ShieldEmitter::new(ShieldConfig::default(), bounds);
//! let mut battery = Battery::full(100.0);
//! let mut ledger = EnergyLedger::new().with(&mut battery);
//! let signals = TickSignals { threat_present: true, power_present: true };
//!
//! let outcome = emitter.tick(signals, &Anchor(building), &incoming, &mut ledger);
//! assert_eq!(outcome.state, ShieldState::Active);
//! assert_eq!(outcome.intercepted, vec![ProjectileId(1)]);
//! assert_eq!(ledger.total(), 90.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `aegis-core` | Cells, map bounds, IDs, errors, collaborator traits |
//! | [`geometry`] | `aegis-geometry` | Border, region, outline, batching, geometry cache |
//! | [`energy`] | `aegis-energy` | Energy sources and the atomic ledger |
//! | [`engine`] | `aegis-engine` | Interception state machine and the shield emitter |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and collaborator traits (`aegis-core`).
///
/// Contains [`types::Cell`], [`types::MapBounds`], the ID newtypes and
/// the [`types::ProjectileField`] / [`types::FootprintSource`] traits a
/// host implements.
pub use aegis_core as types;

/// Shield geometry pipeline (`aegis-geometry`).
///
/// [`geometry::recompute_geometry`] turns a footprint into border,
/// region, outline and render batches; [`geometry::GeometryCache`]
/// skips the work when nothing changed.
pub use aegis_geometry as geometry;

/// Energy sources and the all-or-nothing ledger (`aegis-energy`).
pub use aegis_energy as energy;

/// Interception engine and emitter (`aegis-engine`).
///
/// [`engine::ShieldEmitter`] is the usual entry point;
/// [`engine::InterceptionEngine`] is the bare state machine.
pub use aegis_engine as engine;

/// Common imports for typical Aegis usage.
///
/// ```rust
/// use aegis::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use aegis_core::{
        Cell, CellSet, Faction, FootprintSource, MapBounds, ProjectileField, ProjectileHandle,
        ProjectileId, TickId,
    };

    // Errors
    pub use aegis_core::{GeometryError, LedgerError};
    pub use aegis_engine::ConfigError;

    // Geometry
    pub use aegis_geometry::{GeometryCache, GeometryConfig, ShieldColor, ShieldGeometry};

    // Energy
    pub use aegis_energy::{Battery, EnergyLedger, EnergySource};

    // Engine
    pub use aegis_engine::{
        ShieldConfig, ShieldEffect, ShieldEmitter, ShieldState, StatusReport, TickOutcome,
        TickSignals,
    };
}
