//! The overload (failure) sequence.
//!
//! Runs when an interception cannot be paid for: the shield goes down
//! for the configured cooldown, an overload burst is requested, every
//! source loses a small feedback share, and the player is told.

use crate::config::FailureConfig;
use crate::effect::{Notification, ShieldEffect};
use crate::state::{InterceptionState, ShieldState};
use aegis_core::{CellRect, CellSet, LedgerError};
use aegis_energy::EnergyLedger;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Radius used when there is no border to measure.
pub const FALLBACK_RADIUS: f64 = 3.0;

/// What an overload did.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    /// Cost of the interception that could not be paid.
    pub requested: f64,
    /// Energy available at the time.
    pub available: f64,
    /// Cooldown imposed, in ticks.
    pub cooldown_ticks: u64,
    /// Overload effect radius.
    pub radius: f64,
    /// Overload effect strength (border cell count).
    pub magnitude: usize,
    /// Energy lost to feedback across all sources.
    pub feedback_lost: f64,
}

/// `max(width, height)` of the border's bounding box, floored at
/// `min_radius`; [`FALLBACK_RADIUS`] for an empty border.
pub fn overload_radius(border: &CellSet, min_radius: f64) -> f64 {
    match CellRect::bounding(border.iter()) {
        Some(rect) => (rect.width().max(rect.height()) as f64).max(min_radius),
        None => FALLBACK_RADIUS,
    }
}

/// Run the failure sequence.
///
/// Returns `None` (and changes nothing) when the failure path is
/// disabled by a zero cooldown.
pub(crate) fn trigger_failure(
    state: &mut InterceptionState,
    config: &FailureConfig,
    border: &CellSet,
    ledger: &mut EnergyLedger<'_>,
    shortfall: LedgerError,
    effects: &mut Vec<ShieldEffect>,
) -> Option<FailureReport> {
    if config.cooldown_ticks == 0 {
        return None;
    }
    let LedgerError::InsufficientEnergy {
        requested,
        available,
    } = shortfall;

    state.cooldown_remaining = config.cooldown_ticks;
    state.hysteresis_ticks = 0;
    state.state = ShieldState::Cooldown;

    let radius = overload_radius(border, config.min_radius);
    let magnitude = border.len();
    effects.push(ShieldEffect::Overload { radius, magnitude });

    let feedback_lost = ledger.feedback_drain(config.feedback_fraction);
    effects.push(ShieldEffect::Notify(Notification::Overloaded));

    warn!(
        requested,
        available,
        cooldown = config.cooldown_ticks,
        radius,
        feedback_lost,
        "shield overloaded: insufficient energy"
    );

    Some(FailureReport {
        requested,
        available,
        cooldown_ticks: config.cooldown_ticks,
        radius,
        magnitude,
        feedback_lost,
    })
}
