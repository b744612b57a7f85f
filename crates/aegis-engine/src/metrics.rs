//! Per-tick metrics for the interception sweep.
//!
//! [`SweepMetrics`] captures what one tick's sweep did, for host-side
//! telemetry and profiling.

use serde::{Deserialize, Serialize};

/// Counters and timing for a single tick.
///
/// All zero on ticks where no sweep ran (idle, unpowered, cooldown).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepMetrics {
    /// Border cells queried for projectiles.
    pub cells_scanned: u32,
    /// Projectile handles returned by the host, hostile or not.
    pub projectiles_seen: u32,
    /// Projectiles stopped and paid for.
    pub intercepted: u32,
    /// Handles skipped because they were already stopped this tick.
    pub duplicates_skipped: u32,
    /// Energy removed by successful debits.
    pub energy_debited: f64,
    /// Wall-clock time of the sweep, in microseconds.
    pub sweep_us: u64,
}
