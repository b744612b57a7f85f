//! The per-tick state machine and interception sweep.
//!
//! [`InterceptionEngine::tick`] evaluates the transition rules once,
//! then, if the shield ended up active, walks the border in its fixed
//! order and tries to stop every hostile projectile it finds. A debit
//! the ledger refuses triggers the overload sequence and ends the sweep.

use std::collections::HashSet;
use std::time::Instant;

use aegis_core::{CellSet, ProjectileField, ProjectileId};
use aegis_energy::EnergyLedger;
use tracing::{info, warn};

use crate::config::ShieldConfig;
use crate::effect::ShieldEffect;
use crate::failure::{trigger_failure, FailureReport};
use crate::metrics::SweepMetrics;
use crate::state::{InterceptionState, ShieldState};

// ── Inputs and outputs ─────────────────────────────────────────────

/// Host signals for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    /// A hostile threat is present on the map.
    pub threat_present: bool,
    /// The emitter is connected to a powered network.
    pub power_present: bool,
    /// Manual control replaces threat detection.
    pub override_enabled: bool,
    /// Desired state under manual control.
    pub override_target: bool,
}

/// Result of one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome {
    /// State after this tick.
    pub state: ShieldState,
    /// Power drawn this tick.
    pub power_draw: f64,
    /// Projectiles stopped this tick, in sweep order.
    pub intercepted: Vec<ProjectileId>,
    /// Set when this tick overloaded the shield.
    pub failure: Option<FailureReport>,
    /// Effect and notification requests, in the order they happened.
    pub effects: Vec<ShieldEffect>,
    /// Sweep counters.
    pub metrics: SweepMetrics,
}

impl TickOutcome {
    fn idle(state: ShieldState) -> Self {
        Self {
            state,
            power_draw: 0.0,
            intercepted: Vec::new(),
            failure: None,
            effects: Vec::new(),
            metrics: SweepMetrics::default(),
        }
    }

    /// Whether this tick triggered the overload sequence.
    pub fn failure_triggered(&self) -> bool {
        self.failure.is_some()
    }
}

// ── InterceptionEngine ─────────────────────────────────────────────

/// Activation/cooldown state machine plus interception sweep.
#[derive(Clone, Debug)]
pub struct InterceptionEngine {
    config: ShieldConfig,
    state: InterceptionState,
}

impl InterceptionEngine {
    /// A fresh engine in `Idle`.
    ///
    /// The config is sanitised; each correction is logged at warn level.
    pub fn new(config: ShieldConfig) -> Self {
        let (config, corrections) = config.sanitized();
        for correction in &corrections {
            warn!(%correction, "shield config value corrected");
        }
        Self {
            config,
            state: InterceptionState::default(),
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &ShieldConfig {
        &self.config
    }

    /// Persisted state.
    pub fn state(&self) -> &InterceptionState {
        &self.state
    }

    /// Replace the persisted state (load path). The hysteresis timer is
    /// capped at the activation delay.
    pub fn restore_state(&mut self, mut state: InterceptionState) {
        state.hysteresis_ticks = state.hysteresis_ticks.min(self.config.activation_delay_ticks);
        self.state = state;
    }

    /// Current shield state.
    pub fn shield_state(&self) -> ShieldState {
        self.state.state
    }

    /// Advance one tick.
    pub fn tick(
        &mut self,
        input: &TickInput,
        border: &CellSet,
        projectiles: &dyn ProjectileField,
        ledger: &mut EnergyLedger<'_>,
    ) -> TickOutcome {
        let previous = self.state.state;
        let next = self.transition(input);
        if next != previous {
            info!(from = %previous, to = %next, "shield state changed");
        }
        self.state.state = next;

        if next != ShieldState::Active {
            return TickOutcome::idle(next);
        }

        let mut outcome = TickOutcome::idle(ShieldState::Active);
        outcome.power_draw = self.config.power.draw(border.len());
        self.sweep(border, projectiles, ledger, &mut outcome);
        outcome.state = self.state.state;
        outcome
    }

    /// Transition rules, in priority order.
    fn transition(&mut self, input: &TickInput) -> ShieldState {
        // 1. Cooldown: count down, nothing else happens.
        if self.state.cooldown_remaining > 0 {
            self.state.cooldown_remaining -= 1;
            return ShieldState::Cooldown;
        }
        // 2. No power.
        if !input.power_present {
            return ShieldState::Idle;
        }
        // 3. Manual override.
        if input.override_enabled {
            return if input.override_target {
                ShieldState::Active
            } else {
                ShieldState::Idle
            };
        }
        // 4. Automatic, with hysteresis on threat loss.
        if input.threat_present {
            self.state.hysteresis_ticks = 0;
            return ShieldState::Active;
        }
        let delay = self.config.activation_delay_ticks;
        self.state.hysteresis_ticks = self.state.hysteresis_ticks.saturating_add(1).min(delay);
        if self.state.state == ShieldState::Active && self.state.hysteresis_ticks < delay {
            ShieldState::Active
        } else {
            ShieldState::Idle
        }
    }

    fn sweep(
        &mut self,
        border: &CellSet,
        projectiles: &dyn ProjectileField,
        ledger: &mut EnergyLedger<'_>,
        outcome: &mut TickOutcome,
    ) {
        let started = Instant::now();
        let mut stopped: HashSet<ProjectileId> = HashSet::new();

        'cells: for &cell in border {
            outcome.metrics.cells_scanned += 1;
            for projectile in projectiles.projectiles_at(cell) {
                outcome.metrics.projectiles_seen += 1;
                if !projectile.is_interceptable() {
                    continue;
                }
                if stopped.contains(&projectile.id) {
                    outcome.metrics.duplicates_skipped += 1;
                    continue;
                }

                let cost = self.config.intercept.cost(projectile.damage);
                match ledger.try_debit(cost) {
                    Ok(drawn) => {
                        stopped.insert(projectile.id);
                        outcome.intercepted.push(projectile.id);
                        outcome.effects.push(ShieldEffect::Intercepted {
                            projectile: projectile.id,
                            cell,
                        });
                        outcome.metrics.intercepted += 1;
                        outcome.metrics.energy_debited += drawn;
                    }
                    Err(shortfall) => {
                        let report = trigger_failure(
                            &mut self.state,
                            &self.config.failure,
                            border,
                            ledger,
                            shortfall,
                            &mut outcome.effects,
                        );
                        if report.is_some() {
                            outcome.failure = report;
                            break 'cells;
                        }
                    }
                }
            }
        }

        outcome.metrics.sweep_us = started.elapsed().as_micros() as u64;
    }
}
