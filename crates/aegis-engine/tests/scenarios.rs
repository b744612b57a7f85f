//! Integration test: reference scenarios end to end.
//!
//! Geometry from a 2x2 footprint feeds the interception engine; the
//! ledger scenarios check in-order draining and refusal without side
//! effects, followed by the overload sequence that leaves geometry
//! untouched; manual override forces the shield on without a threat.

use aegis_core::{Cell, MapBounds, ProjectileId};
use aegis_energy::{EnergyLedger, EnergySource};
use aegis_engine::{
    InterceptionEngine, ShieldConfig, ShieldEffect, ShieldEmitter, ShieldState, TickInput,
    TickSignals,
};
use aegis_geometry::{recompute_geometry, GeometryConfig};
use aegis_test_utils::footprints::block;
use aegis_test_utils::{batteries, MockProjectileField, StaticFootprint};

fn powered_threat() -> TickInput {
    TickInput {
        threat_present: true,
        power_present: true,
        ..TickInput::default()
    }
}

// ── Ledger ──────────────────────────────────────────────────────────

#[test]
fn debit_of_six_from_five_and_three() {
    let mut sources = batteries(&[5.0, 3.0]);
    let mut ledger = EnergyLedger::new();
    for s in sources.iter_mut() {
        ledger.push(s);
    }
    assert!(ledger.try_debit(6.0).is_ok());
    drop(ledger);
    assert_eq!(sources[0].stored(), 0.0);
    assert_eq!(sources[1].stored(), 2.0);
}

#[test]
fn refused_debit_then_overload_keeps_geometry() {
    let bounds = MapBounds::new(4, 4).unwrap();
    let fp = block(1, 1, 2, 2);
    let geometry = recompute_geometry(&fp, &bounds, &GeometryConfig::default());
    let border_before = geometry.border.clone();

    // A projectile whose cost is exactly 9 against a pool of 8.
    let mut field = MockProjectileField::new();
    field.hostile(Cell::new(0, 0), 1, 6.0);

    let mut sources = batteries(&[5.0, 3.0]);
    let mut ledger = EnergyLedger::new();
    for s in sources.iter_mut() {
        ledger.push(s);
    }
    assert!(ledger.try_debit(9.0).is_err());
    assert_eq!(ledger.snapshot(), vec![5.0, 3.0]);

    let mut engine = InterceptionEngine::new(ShieldConfig::default());
    let out = engine.tick(&powered_threat(), &geometry.border, &field, &mut ledger);

    assert!(out.failure_triggered());
    assert!(out.intercepted.is_empty());
    assert_eq!(engine.state().cooldown_remaining, 5000);
    assert_eq!(geometry.border, border_before);
    assert!(out
        .effects
        .iter()
        .any(|e| matches!(e, ShieldEffect::Overload { magnitude: 12, .. })));
}

// ── Manual override ─────────────────────────────────────────────────

#[test]
fn manual_override_activates_without_threat() {
    let mut engine = InterceptionEngine::new(ShieldConfig::default());
    let input = TickInput {
        threat_present: false,
        power_present: true,
        override_enabled: true,
        override_target: true,
    };
    let mut sources = batteries(&[100.0]);
    let mut ledger = EnergyLedger::new();
    for s in sources.iter_mut() {
        ledger.push(s);
    }
    let border = block(0, 0, 2, 2);
    let out = engine.tick(&input, &border, &MockProjectileField::new(), &mut ledger);
    assert_eq!(out.state, ShieldState::Active);
    assert_eq!(out.power_draw, 600.0);
}

#[test]
fn manual_override_still_waits_for_cooldown() {
    let mut emitter = ShieldEmitter::new(ShieldConfig::default(), MapBounds::new(16, 16).unwrap());
    let anchor = StaticFootprint::new(block(5, 5, 2, 2));
    let mut field = MockProjectileField::new();
    field.hostile(Cell::new(4, 4), 1, 0.0);

    // Empty ledger: the first intercept overloads the shield.
    let mut ledger = EnergyLedger::new();
    let on = TickSignals {
        threat_present: true,
        power_present: true,
    };
    let out = emitter.tick(on, &anchor, &field, &mut ledger);
    assert!(out.failure_triggered());

    emitter.set_manual_override(true, true);
    let out = emitter.tick(on, &anchor, &field, &mut ledger);
    assert_eq!(out.state, ShieldState::Cooldown);
    assert_eq!(out.power_draw, 0.0);
    assert_eq!(emitter.engine_state().cooldown_remaining, 4999);
}

// ── Full loop ───────────────────────────────────────────────────────

#[test]
fn emitter_intercepts_on_border_only() {
    let mut emitter = ShieldEmitter::new(ShieldConfig::default(), MapBounds::new(16, 16).unwrap());
    let anchor = StaticFootprint::new(block(5, 5, 2, 2));
    let mut field = MockProjectileField::new();
    field.hostile(Cell::new(4, 4), 10, 4.0); // border corner
    field.hostile(Cell::new(5, 5), 11, 4.0); // inside footprint
    field.hostile(Cell::new(0, 0), 12, 4.0); // far away

    let mut sources = batteries(&[100.0]);
    let mut ledger = EnergyLedger::new();
    for s in sources.iter_mut() {
        ledger.push(s);
    }
    let out = emitter.tick(
        TickSignals {
            threat_present: true,
            power_present: true,
        },
        &anchor,
        &field,
        &mut ledger,
    );
    assert_eq!(out.intercepted, vec![ProjectileId(10)]);
    assert_eq!(out.metrics.cells_scanned, 12);
    assert_eq!(ledger.total(), 92.0);
}
