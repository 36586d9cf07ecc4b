//! Test helpers for common fixture setup.
//!
//! Shared across unit tests and benches to avoid re-declaring the same small
//! fleet everywhere.

use crate::fleet::{DriverId, DriverPhase, NewDriver};
use crate::registry::DriverRegistry;
use crate::spatial::Point;

/// Identity helper for test fleets.
pub fn driver_id(name: &str) -> DriverId {
    DriverId::from(name)
}

/// The canonical three-driver fixture:
///
/// - alice at (0, 0), rating 4.8, available
/// - bob at (3, 4), rating 4.5, off duty
/// - charlie at (1, 1), rating 4.9, available
///
/// # Panics
///
/// Panics if the fixture fails to validate (should never happen).
pub fn sample_fleet() -> DriverRegistry {
    DriverRegistry::new([
        NewDriver::new("alice", Point::new(0.0, 0.0), 4.8),
        NewDriver::new("bob", Point::new(3.0, 4.0), 4.5).with_phase(DriverPhase::OffDuty),
        NewDriver::new("charlie", Point::new(1.0, 1.0), 4.9),
    ])
    .expect("sample fleet should validate")
}
