//! Strongly-typed identifiers and projectile ownership.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a projectile entity owned by the host simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectileId(pub u64);

impl fmt::Display for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProjectileId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Monotonically increasing simulation tick counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TickId(pub u64);

impl TickId {
    /// The following tick.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// The faction that launched a projectile.
///
/// Ownership is an explicit capability of the projectile handle, decided
/// by the host when it reports projectiles; the engine never inspects
/// host internals to find it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The player's own faction. Never intercepted.
    Player,
    /// Any other faction, identified by a host-defined number.
    Other(u32),
}

impl Faction {
    /// Whether this is the player's faction.
    pub fn is_player(self) -> bool {
        matches!(self, Self::Player)
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Other(n) => write!(f, "faction#{n}"),
        }
    }
}
