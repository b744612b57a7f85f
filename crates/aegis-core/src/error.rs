//! Error types for the Aegis shield engine.
//!
//! Organized by subsystem: geometry (grid and footprint problems) and
//! the energy ledger. Configuration errors live with the configuration
//! in `aegis-engine`. None of these are fatal to the host tick loop;
//! callers recover locally.

use crate::cell::Cell;
use crate::rect::MapBounds;
use std::error::Error;
use std::fmt;

/// Errors arising from map construction or footprint handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// No anchor structure was resolved, so there is no footprint.
    /// Geometry degrades to empty output.
    MissingFootprint,
    /// A cell lies outside the map. The cell is skipped.
    OutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// The map it was checked against.
        bounds: MapBounds,
    },
    /// Attempted to construct a map with zero cells.
    EmptyMap,
    /// A map dimension does not fit the `i32` coordinate space.
    DimensionTooLarge {
        /// Which dimension ("width" or "depth").
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFootprint => write!(f, "no footprint resolved for shield"),
            Self::OutOfBounds { cell, bounds } => write!(
                f,
                "cell {cell} out of bounds: [0, {}) x [0, {})",
                bounds.width(),
                bounds.depth()
            ),
            Self::EmptyMap => write!(f, "map must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "map {name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for GeometryError {}

/// Errors from the energy ledger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LedgerError {
    /// The pooled sources cannot cover the debit. Nothing was drawn.
    InsufficientEnergy {
        /// Amount the caller asked for.
        requested: f64,
        /// Total stored across all sources at the time of the request.
        available: f64,
    },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientEnergy {
                requested,
                available,
            } => write!(
                f,
                "insufficient energy: requested {requested}, available {available}"
            ),
        }
    }
}

impl Error for LedgerError {}
