//! Scenario sweep harness for the dispatch core.
//!
//! Replays synthetic request streams against randomly spawned fleets to
//! compare selection policies and surge levels across parameter grids:
//!
//! - [`parameters`]: parameter grid definition and expansion
//! - [`runner`]: single-scenario replay and rayon-parallel sweeps
//! - [`metrics`]: per-scenario result extraction
//! - [`export`]: CSV/JSON result export

pub mod export;
pub mod metrics;
pub mod parameters;
pub mod runner;
