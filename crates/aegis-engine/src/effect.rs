//! Effect and notification requests handed back to the host.
//!
//! These describe what happened during a tick. Playing sounds, spawning
//! visuals, or showing messages is the host's business.

use aegis_core::{Cell, ProjectileId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// The shield ran out of energy and shut down.
    Overloaded,
}

impl Notification {
    /// Message text.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Overloaded => "Shield generator overloaded and shut down!",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Something the host should render, play or display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ShieldEffect {
    /// A projectile was stopped at `cell`; the host destroys it.
    Intercepted {
        /// The stopped projectile.
        projectile: ProjectileId,
        /// Border cell where it was caught.
        cell: Cell,
    },
    /// Overload burst centred on the emitter.
    Overload {
        /// Effect radius in cells.
        radius: f64,
        /// Strength, the number of border cells.
        magnitude: usize,
    },
    /// Show a message to the player.
    Notify(Notification),
}
