//! Energy accounting for the Aegis shield engine.
//!
//! An [`EnergyLedger`] pools borrowed [`EnergySource`]s for one tick and
//! offers a single mutation path, [`EnergyLedger::try_debit`], which is
//! all-or-nothing. The failure path's lossy
//! [`feedback_drain`](EnergyLedger::feedback_drain) is the only other way
//! the engine touches stored energy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ledger;
pub mod source;

pub use ledger::EnergyLedger;
pub use source::{Battery, EnergySource};
