//! All-or-nothing debits across an ordered list of sources.

use crate::source::{usable, EnergySource};
use aegis_core::LedgerError;
use tracing::debug;

/// The energy sources visible to one shield for one tick.
///
/// Rebuilt by the host every tick from its power network; never
/// persisted. Source order is significant: debits drain sources front
/// to back.
#[derive(Default)]
pub struct EnergyLedger<'a> {
    sources: Vec<&'a mut dyn EnergySource>,
}

impl<'a> EnergyLedger<'a> {
    /// A ledger with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source; it is drained after every source already present.
    pub fn push(&mut self, source: &'a mut dyn EnergySource) {
        self.sources.push(source);
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, source: &'a mut dyn EnergySource) -> Self {
        self.push(source);
        self
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether there are no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Total usable energy across all sources, read fresh.
    pub fn total(&self) -> f64 {
        self.sources.iter().map(|s| usable(&**s)).sum()
    }

    /// Debit `amount` from the pool.
    ///
    /// If the pool cannot cover it, no source is touched and
    /// [`LedgerError::InsufficientEnergy`] is returned. Otherwise sources
    /// are drained in order, each by `min(stored, remaining)`, and the
    /// amount drawn is returned. Negative and NaN amounts debit nothing.
    pub fn try_debit(&mut self, amount: f64) -> Result<f64, LedgerError> {
        let amount = amount.max(0.0);
        let available = self.total();
        if available < amount {
            debug!(requested = amount, available, "debit refused");
            return Err(LedgerError::InsufficientEnergy {
                requested: amount,
                available,
            });
        }

        let mut remaining = amount;
        let mut drawn = 0.0;
        for source in self.sources.iter_mut() {
            if remaining <= 0.0 {
                break;
            }
            let take = usable(&**source).min(remaining);
            if take > 0.0 {
                let got = source.draw(take);
                drawn += got;
                remaining -= got;
            }
        }
        Ok(drawn)
    }

    /// Drain `fraction` of every source's current content.
    ///
    /// Lossy and non-atomic: always succeeds for whatever is there.
    /// `fraction` is clamped into `[0, 1]`. Returns the total lost.
    pub fn feedback_drain(&mut self, fraction: f64) -> f64 {
        let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
        let mut lost = 0.0;
        for source in self.sources.iter_mut() {
            let loss = usable(&**source) * fraction;
            if loss > 0.0 {
                lost += source.draw(loss);
            }
        }
        lost
    }

    /// Current stored value of every source, in ledger order.
    pub fn snapshot(&self) -> Vec<f64> {
        self.sources.iter().map(|s| s.stored()).collect()
    }
}

impl std::fmt::Debug for EnergyLedger<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnergyLedger")
            .field("sources", &self.snapshot())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Battery;
    use proptest::prelude::*;

    #[test]
    fn debit_drains_in_order() {
        let mut a = Battery::new(5.0, 10.0);
        let mut b = Battery::new(3.0, 10.0);
        let mut ledger = EnergyLedger::new().with(&mut a).with(&mut b);
        assert_eq!(ledger.try_debit(6.0), Ok(6.0));
        assert_eq!(ledger.snapshot(), vec![0.0, 2.0]);
    }

    #[test]
    fn insufficient_debit_leaves_sources_untouched() {
        let mut a = Battery::new(5.0, 10.0);
        let mut b = Battery::new(3.0, 10.0);
        let mut ledger = EnergyLedger::new().with(&mut a).with(&mut b);
        assert_eq!(
            ledger.try_debit(9.0),
            Err(LedgerError::InsufficientEnergy {
                requested: 9.0,
                available: 8.0
            })
        );
        assert_eq!(ledger.snapshot(), vec![5.0, 3.0]);
    }

    #[test]
    fn exact_total_succeeds() {
        let mut a = Battery::new(5.0, 10.0);
        let mut b = Battery::new(3.0, 10.0);
        let mut ledger = EnergyLedger::new().with(&mut a).with(&mut b);
        assert!(ledger.try_debit(8.0).is_ok());
        assert_eq!(ledger.total(), 0.0);
    }

    #[test]
    fn empty_ledger() {
        let mut ledger = EnergyLedger::new();
        assert_eq!(ledger.try_debit(0.0), Ok(0.0));
        assert!(ledger.try_debit(1.0).is_err());
        assert_eq!(ledger.feedback_drain(0.05), 0.0);
    }

    #[test]
    fn negative_and_nan_amounts_debit_nothing() {
        let mut a = Battery::new(5.0, 10.0);
        let mut ledger = EnergyLedger::new().with(&mut a);
        assert_eq!(ledger.try_debit(-4.0), Ok(0.0));
        assert_eq!(ledger.try_debit(f64::NAN), Ok(0.0));
        assert_eq!(ledger.total(), 5.0);
    }

    #[test]
    fn feedback_drain_takes_fraction_of_each() {
        let mut a = Battery::new(100.0, 100.0);
        let mut b = Battery::new(40.0, 100.0);
        let mut ledger = EnergyLedger::new().with(&mut a).with(&mut b);
        let lost = ledger.feedback_drain(0.05);
        assert!((lost - 7.0).abs() < 1e-9);
        let s = ledger.snapshot();
        assert!((s[0] - 95.0).abs() < 1e-9);
        assert!((s[1] - 38.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn debit_is_all_or_nothing(
            stored in proptest::collection::vec(0.0f64..100.0, 0..6),
            amount in 0.0f64..300.0,
        ) {
            let mut batteries: Vec<Battery> = stored.iter().map(|&s| Battery::new(s, 100.0)).collect();
            let mut ledger = EnergyLedger::new();
            for b in batteries.iter_mut() {
                ledger.push(b);
            }
            let before = ledger.snapshot();
            let total_before = ledger.total();
            match ledger.try_debit(amount) {
                Ok(drawn) => {
                    prop_assert!((drawn - amount).abs() < 1e-9);
                    prop_assert!((total_before - ledger.total() - amount).abs() < 1e-9);
                }
                Err(_) => {
                    prop_assert!(total_before < amount);
                    prop_assert_eq!(ledger.snapshot(), before);
                }
            }
        }
    }
}
