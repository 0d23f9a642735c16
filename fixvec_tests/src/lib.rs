//! `fixvec_tests`
//!
//! Conformance tooling for `fixvec_core`:
//! - `config`: seeded run parameters loaded from JSON.
//! - `properties`: the numeric contract as reusable checks.
//! - `report`: result collection and JSON report output.

pub mod config;
pub mod properties;
pub mod report;
