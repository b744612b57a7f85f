//! Test utilities and mock collaborators for Aegis development.
//!
//! Provides footprint builders (including seeded random footprints),
//! a scriptable [`MockProjectileField`], a [`StaticFootprint`] anchor
//! resolver, and battery fixtures for ledger-driven tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod footprints;

pub use fixtures::{batteries, MockProjectileField, StaticFootprint};
