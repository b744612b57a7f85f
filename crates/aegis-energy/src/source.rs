//! Energy sources the ledger draws from.

use serde::{Deserialize, Serialize};

/// A store of energy owned by the host's power network.
///
/// The ledger only borrows sources for the duration of one tick and
/// reads `stored()` fresh every time, since the host may change the
/// value between ticks.
pub trait EnergySource {
    /// Energy currently held. Implementations may report garbage
    /// (negative, NaN); the ledger treats that as empty.
    fn stored(&self) -> f64;

    /// Maximum energy the source can hold.
    fn capacity(&self) -> f64;

    /// Remove up to `amount` and return what was actually removed.
    fn draw(&mut self, amount: f64) -> f64;
}

/// Usable energy in a source: non-finite or negative readings count as zero.
pub(crate) fn usable(source: &dyn EnergySource) -> f64 {
    let v = source.stored();
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// A simple capacity-bounded battery.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    stored: f64,
    capacity: f64,
}

impl Battery {
    /// A battery holding `stored`, clamped into `[0, capacity]`.
    pub fn new(stored: f64, capacity: f64) -> Self {
        let capacity = if capacity.is_finite() { capacity.max(0.0) } else { 0.0 };
        let stored = if stored.is_finite() { stored.clamp(0.0, capacity) } else { 0.0 };
        Self { stored, capacity }
    }

    /// A full battery.
    pub fn full(capacity: f64) -> Self {
        Self::new(capacity, capacity)
    }

    /// Add energy, returning the amount that did not fit.
    pub fn charge(&mut self, amount: f64) -> f64 {
        let amount = amount.max(0.0);
        let room = self.capacity - self.stored;
        let taken = amount.min(room);
        self.stored += taken;
        amount - taken
    }
}

impl EnergySource for Battery {
    fn stored(&self) -> f64 {
        self.stored
    }

    fn capacity(&self) -> f64 {
        self.capacity
    }

    fn draw(&mut self, amount: f64) -> f64 {
        let taken = amount.max(0.0).min(self.stored);
        self.stored -= taken;
        taken
    }
}
