//! Mock host collaborators.
//!
//! - [`MockProjectileField`]: scripted projectiles per cell, with a
//!   query log so tests can check sweep order and early abort.
//! - [`StaticFootprint`]: an anchor resolver whose answer tests can swap.
//! - [`batteries`]: a row of batteries from stored values.

use aegis_core::{Cell, CellSet, Faction, FootprintSource, ProjectileField, ProjectileHandle};
use aegis_energy::Battery;
use indexmap::IndexMap;
use std::cell::RefCell;

/// Projectile field backed by a per-cell map.
#[derive(Debug, Default)]
pub struct MockProjectileField {
    cells: IndexMap<Cell, Vec<ProjectileHandle>>,
    queried: RefCell<Vec<Cell>>,
}

impl MockProjectileField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a projectile at `cell`.
    pub fn add(&mut self, cell: Cell, projectile: ProjectileHandle) -> &mut Self {
        self.cells.entry(cell).or_default().push(projectile);
        self
    }

    /// Place a hostile (non-player) projectile.
    pub fn hostile(&mut self, cell: Cell, id: u64, damage: f64) -> &mut Self {
        self.add(cell, ProjectileHandle::new(id, Some(Faction::Other(1)), damage))
    }

    /// Place a player-owned projectile.
    pub fn friendly(&mut self, cell: Cell, id: u64, damage: f64) -> &mut Self {
        self.add(cell, ProjectileHandle::new(id, Some(Faction::Player), damage))
    }

    /// Cells queried so far, in call order.
    pub fn queried(&self) -> Vec<Cell> {
        self.queried.borrow().clone()
    }
}

impl ProjectileField for MockProjectileField {
    fn projectiles_at(&self, cell: Cell) -> Vec<ProjectileHandle> {
        self.queried.borrow_mut().push(cell);
        self.cells.get(&cell).cloned().unwrap_or_default()
    }
}

/// Anchor resolver returning a fixed (replaceable) footprint.
#[derive(Debug, Default)]
pub struct StaticFootprint {
    footprint: RefCell<Option<CellSet>>,
    resolves: RefCell<usize>,
}

impl StaticFootprint {
    pub fn new(footprint: CellSet) -> Self {
        Self {
            footprint: RefCell::new(Some(footprint)),
            resolves: RefCell::new(0),
        }
    }

    /// A resolver that never finds its anchor.
    pub fn missing() -> Self {
        Self::default()
    }

    /// Replace the answer (e.g. the anchor was rebuilt or destroyed).
    pub fn set(&self, footprint: Option<CellSet>) {
        *self.footprint.borrow_mut() = footprint;
    }

    /// Number of times the engine asked.
    pub fn resolve_count(&self) -> usize {
        *self.resolves.borrow()
    }
}

impl FootprintSource for StaticFootprint {
    fn resolve_footprint(&self) -> Option<CellSet> {
        *self.resolves.borrow_mut() += 1;
        self.footprint.borrow().clone()
    }
}

/// One 1000-capacity battery per stored value.
pub fn batteries(stored: &[f64]) -> Vec<Battery> {
    stored.iter().map(|&s| Battery::new(s, 1000.0)).collect()
}
