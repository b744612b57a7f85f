//! Tick-driven interception engine for Aegis shields.
//!
//! [`InterceptionEngine`] runs the `Idle`/`Active`/`Cooldown` state
//! machine and the per-tick border sweep against an
//! [`EnergyLedger`](aegis_energy::EnergyLedger). [`ShieldEmitter`] wraps
//! it with everything a host needs between ticks: geometry cadence,
//! anchor re-resolution, manual override, colour, status and
//! save/restore.
//!
//! Everything runs synchronously on the caller's thread inside one tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod effect;
pub mod emitter;
pub mod failure;
pub mod intercept;
pub mod metrics;
pub mod state;
pub mod status;

pub use config::{ConfigError, FailureConfig, InterceptConfig, PowerMode, ShieldConfig};
pub use effect::{Notification, ShieldEffect};
pub use emitter::{EmitterSave, ManualOverride, ShieldEmitter, TickSignals};
pub use failure::{overload_radius, FailureReport};
pub use intercept::{InterceptionEngine, TickInput, TickOutcome};
pub use metrics::SweepMetrics;
pub use state::{InterceptionState, ShieldState};
pub use status::{StatusLine, StatusReport};
