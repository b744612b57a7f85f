//! Shield state and its persisted timers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the shield is doing this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShieldState {
    /// Up but not projecting; no power drawn.
    #[default]
    Idle,
    /// Projecting: drawing power and intercepting.
    Active,
    /// Down after an overload until the cooldown expires.
    Cooldown,
}

impl fmt::Display for ShieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Active => write!(f, "Active"),
            Self::Cooldown => write!(f, "Cooldown"),
        }
    }
}

/// The state machine's persisted fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterceptionState {
    /// State after the last tick.
    pub state: ShieldState,
    /// Ticks left before the shield may come back up.
    pub cooldown_remaining: u64,
    /// Consecutive threat-free ticks, capped at the activation delay.
    pub hysteresis_ticks: u64,
}

impl InterceptionState {
    /// Whether an overload cooldown is pending.
    pub fn on_cooldown(&self) -> bool {
        self.cooldown_remaining > 0
    }
}
