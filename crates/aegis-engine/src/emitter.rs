//! Host-facing shield emitter.
//!
//! [`ShieldEmitter`] owns everything one shield needs between ticks: the
//! sanitised config, the interception state machine, the geometry cache,
//! the last resolved footprint, manual override flags and the tint. The
//! host calls [`tick`](ShieldEmitter::tick) once per simulation tick with
//! fresh signals, its anchor resolver, its projectile field and a ledger
//! built from the live power network.
//!
//! Geometry is rebuilt on a fixed cadence, right after
//! [`notify_footprint_changed`](ShieldEmitter::notify_footprint_changed),
//! and every [`ANCHOR_RETRY_TICKS`] while no anchor has been found.

use aegis_core::{CellSet, FootprintSource, GeometryError, MapBounds, ProjectileField, TickId};
use aegis_energy::EnergyLedger;
use aegis_geometry::{GeometryCache, ShieldColor, ShieldGeometry};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ShieldConfig;
use crate::intercept::{InterceptionEngine, TickInput, TickOutcome};
use crate::state::{InterceptionState, ShieldState};
use crate::status::{StatusLine, StatusReport};

/// Ticks between anchor lookups while no anchor is resolved.
pub const ANCHOR_RETRY_TICKS: u64 = 60;

/// Per-tick signals from the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSignals {
    /// A hostile threat is present on the map.
    pub threat_present: bool,
    /// The emitter is on a powered network.
    pub power_present: bool,
}

/// Manual control flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualOverride {
    /// Manual control replaces threat detection.
    pub enabled: bool,
    /// Desired state under manual control.
    pub target: bool,
}

/// Everything an emitter persists across save/load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmitterSave {
    /// State machine fields.
    pub engine: InterceptionState,
    /// Manual override flags.
    pub manual: ManualOverride,
    /// Shield tint.
    pub color: ShieldColor,
    /// Emitter tick counter.
    pub tick: TickId,
    /// Power signal from the last tick before saving.
    #[serde(default)]
    pub power_present: bool,
}

/// Why geometry is being rebuilt this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RefreshReason {
    /// Footprint, colour or manual target changed.
    Notified,
    /// The refresh interval elapsed.
    Cadence,
    /// No anchor yet; periodic lookup.
    AnchorRetry,
}

/// One shield, driven by the host's tick loop.
#[derive(Debug)]
pub struct ShieldEmitter {
    engine: InterceptionEngine,
    cache: GeometryCache,
    bounds: MapBounds,
    footprint: Option<CellSet>,
    manual: ManualOverride,
    color: ShieldColor,
    tick: TickId,
    next_refresh: TickId,
    dirty: bool,
    last_power: bool,
}

impl ShieldEmitter {
    /// A new emitter on a map of `bounds`.
    ///
    /// The config is sanitised; each correction is logged at warn level.
    /// The footprint is resolved on the first tick.
    pub fn new(config: ShieldConfig, bounds: MapBounds) -> Self {
        Self {
            engine: InterceptionEngine::new(config),
            cache: GeometryCache::new(),
            bounds,
            footprint: None,
            manual: ManualOverride::default(),
            color: ShieldColor::DEFAULT,
            tick: TickId::default(),
            next_refresh: TickId::default(),
            dirty: true,
            last_power: false,
        }
    }

    // ── Tick ───────────────────────────────────────────────────────

    /// Advance one tick.
    #[tracing::instrument(skip_all, fields(tick = self.tick.0))]
    pub fn tick(
        &mut self,
        signals: TickSignals,
        anchor: &dyn FootprintSource,
        projectiles: &dyn ProjectileField,
        ledger: &mut EnergyLedger<'_>,
    ) -> TickOutcome {
        if let Some(reason) = self.refresh_reason() {
            self.refresh(anchor, reason);
        }

        let input = TickInput {
            threat_present: signals.threat_present,
            power_present: signals.power_present,
            override_enabled: self.manual.enabled,
            override_target: self.manual.target,
        };
        self.last_power = signals.power_present;

        let empty = CellSet::new();
        let border = self.cache.current().map_or(&empty, |g| &g.border);
        let outcome = self.engine.tick(&input, border, projectiles, ledger);

        self.tick = self.tick.next();
        outcome
    }

    fn refresh_reason(&self) -> Option<RefreshReason> {
        if self.dirty {
            Some(RefreshReason::Notified)
        } else if self.tick >= self.next_refresh {
            Some(RefreshReason::Cadence)
        } else if self.footprint.is_none() && self.tick.0 % ANCHOR_RETRY_TICKS == 0 {
            Some(RefreshReason::AnchorRetry)
        } else {
            None
        }
    }

    /// Re-resolve the footprint and rebuild geometry if its inputs changed.
    fn refresh(&mut self, anchor: &dyn FootprintSource, reason: RefreshReason) {
        self.footprint = anchor.resolve_footprint();
        if self.footprint.is_none() {
            debug!(error = %GeometryError::MissingFootprint, "anchor not resolved");
        }

        let empty = CellSet::new();
        let footprint = self.footprint.as_ref().unwrap_or(&empty);
        let config = self.engine.config().geometry;
        let geometry = self
            .cache
            .get_or_compute(footprint, &self.bounds, &config, &self.color);

        match reason {
            RefreshReason::Cadence => info!(
                border = geometry.border.len(),
                region = geometry.region.len(),
                "geometry cadence refresh"
            ),
            _ => debug!(
                ?reason,
                border = geometry.border.len(),
                "geometry refresh"
            ),
        }

        let interval = self.engine.config().refresh_interval_ticks;
        self.next_refresh = TickId(self.tick.0.saturating_add(interval));
        self.dirty = false;
    }

    /// The anchor changed (rebuilt, moved, destroyed); re-resolve and
    /// rebuild geometry at the start of the next tick.
    pub fn notify_footprint_changed(&mut self) {
        self.dirty = true;
    }

    // ── Manual control ─────────────────────────────────────────────

    /// Set both override flags.
    pub fn set_manual_override(&mut self, enabled: bool, target: bool) {
        self.manual = ManualOverride { enabled, target };
        info!(enabled, shield_on = target, "manual override set");
    }

    /// Flip manual control on or off. Returns the new setting.
    pub fn toggle_override(&mut self) -> bool {
        self.manual.enabled = !self.manual.enabled;
        info!(enabled = self.manual.enabled, "manual override toggled");
        self.manual.enabled
    }

    /// Flip the manual target. Only available while manual control is
    /// on; returns the new target, or `None` if override is off.
    ///
    /// Also schedules a geometry refresh.
    pub fn toggle_manual_target(&mut self) -> Option<bool> {
        if !self.manual.enabled {
            return None;
        }
        self.manual.target = !self.manual.target;
        self.dirty = true;
        info!(shield_on = self.manual.target, "manual shield target toggled");
        Some(self.manual.target)
    }

    /// Current override flags.
    pub fn manual_override(&self) -> ManualOverride {
        self.manual
    }

    // ── Colour ─────────────────────────────────────────────────────

    /// Change the tint. Geometry is rebuilt under the new colour on the
    /// next tick.
    pub fn set_color(&mut self, color: ShieldColor) {
        self.color = color.clamped();
        self.dirty = true;
    }

    /// Current tint.
    pub fn color(&self) -> ShieldColor {
        self.color
    }

    // ── Inspection ─────────────────────────────────────────────────

    /// Geometry from the last rebuild, `None` before the first tick.
    pub fn geometry(&self) -> Option<&ShieldGeometry> {
        self.cache.current()
    }

    /// Footprint from the last anchor lookup.
    pub fn footprint(&self) -> Option<&CellSet> {
        self.footprint.as_ref()
    }

    /// Map the shield lives on.
    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    /// Sanitised configuration.
    pub fn config(&self) -> &ShieldConfig {
        self.engine.config()
    }

    /// State machine fields.
    pub fn engine_state(&self) -> &InterceptionState {
        self.engine.state()
    }

    /// Ticks advanced so far.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Geometry cache `(hits, misses)`.
    pub fn cache_stats(&self) -> (u64, u64) {
        (self.cache.hits(), self.cache.misses())
    }

    /// Status for inspection panels.
    ///
    /// Power is taken from the most recent tick (or the restored save),
    /// so a brand-new emitter reads `Offline` until it has ticked once.
    pub fn status(&self) -> StatusReport {
        let config = self.engine.config();
        let state = self.engine.state();
        let (border_cells, region_cells) = self
            .cache
            .current()
            .map_or((0, 0), |g| (g.border.len(), g.region.len()));

        let line = if state.on_cooldown() {
            StatusLine::Cooldown {
                seconds_remaining: state.cooldown_remaining as f64 / config.ticks_per_second,
            }
        } else if !self.last_power {
            StatusLine::Offline
        } else if state.state == ShieldState::Active {
            StatusLine::Active
        } else {
            StatusLine::Idle
        };

        StatusReport {
            line,
            state: state.state,
            manual: self.manual.enabled.then_some(self.manual.target),
            draw_watts: config.power.draw(border_cells),
            border_cells,
            region_cells,
        }
    }

    // ── Persistence ────────────────────────────────────────────────

    /// Capture persisted state.
    pub fn save(&self) -> EmitterSave {
        EmitterSave {
            engine: *self.engine.state(),
            manual: self.manual,
            color: self.color,
            tick: self.tick,
            power_present: self.last_power,
        }
    }

    /// Re-apply saved state. Geometry is rebuilt on the next tick.
    pub fn restore(&mut self, save: EmitterSave) {
        self.engine.restore_state(save.engine);
        self.manual = save.manual;
        self.color = save.color.clamped();
        self.tick = save.tick;
        self.last_power = save.power_present;
        self.dirty = true;
    }
}
