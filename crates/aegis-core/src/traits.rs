//! Collaborator traits the host implements.
//!
//! The engine never reaches into host state directly: projectiles and the
//! shield footprint are handed over through these traits each time they
//! are needed.

use crate::cell::{Cell, CellSet};
use crate::id::{Faction, ProjectileId};
use serde::{Deserialize, Serialize};

/// A projectile as reported by the host at one cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectileHandle {
    /// Host identifier.
    pub id: ProjectileId,
    /// Launching faction, `None` if the host cannot tell.
    pub owner: Option<Faction>,
    /// Damage the projectile would deal on impact.
    pub damage: f64,
    /// Already destroyed by something else this tick.
    pub destroyed: bool,
}

impl ProjectileHandle {
    /// A live projectile.
    pub fn new(id: u64, owner: Option<Faction>, damage: f64) -> Self {
        Self {
            id: ProjectileId(id),
            owner,
            damage,
            destroyed: false,
        }
    }

    /// Whether the shield should try to stop it.
    ///
    /// Anything not launched by the player counts, including projectiles
    /// with an unknown owner.
    pub fn is_hostile(&self) -> bool {
        !matches!(self.owner, Some(f) if f.is_player())
    }

    /// Hostile and still alive.
    pub fn is_interceptable(&self) -> bool {
        self.is_hostile() && !self.destroyed
    }
}

/// Enumerates the projectiles physically present at a cell.
///
/// Called once per border cell during an interception sweep, in border
/// order. Implemented for any `Fn(Cell) -> Vec<ProjectileHandle>`.
pub trait ProjectileField {
    /// Projectiles currently occupying `cell`.
    fn projectiles_at(&self, cell: Cell) -> Vec<ProjectileHandle>;
}

impl<F> ProjectileField for F
where
    F: Fn(Cell) -> Vec<ProjectileHandle>,
{
    fn projectiles_at(&self, cell: Cell) -> Vec<ProjectileHandle> {
        self(cell)
    }
}

/// Resolves the anchor structure a shield protects into its footprint.
pub trait FootprintSource {
    /// Current footprint, or `None` when no anchor can be found.
    fn resolve_footprint(&self) -> Option<CellSet>;
}
