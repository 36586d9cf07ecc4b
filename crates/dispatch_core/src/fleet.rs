//! Driver identity, lifecycle phases, and the ECS components that make up a
//! driver record.

use std::fmt;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};
use crate::spatial::Point;

/// Lowest rating a driver can carry.
pub const MIN_RATING: f64 = 1.0;

/// Highest rating a driver can carry.
pub const MAX_RATING: f64 = 5.0;

/// Driver identity, unique within a registry.
///
/// Ordered lexicographically; the lowest id wins ties in selection, so results
/// never depend on incidental iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DriverId(String);

impl DriverId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DriverId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for DriverId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Driver lifecycle phase.
///
/// An explicit state machine instead of a boolean availability flag: a match
/// is committed in two steps (select, then `reserve`), and `Reserved` keeps
/// the race window between those steps visible and testable.
///
/// Transitions: `Available → Reserved → Busy → Available`, plus
/// `Available ↔ OffDuty` and `Reserved → Available` when an assignment falls
/// through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverPhase {
    Available,
    Reserved,
    Busy,
    OffDuty,
}

impl DriverPhase {
    /// Eligible for matching. Only `Available` qualifies; a `Reserved` driver
    /// is already promised to another request.
    pub fn is_available(self) -> bool {
        matches!(self, DriverPhase::Available)
    }
}

/// Per-driver record: identity, rating, and lifecycle phase.
#[derive(Debug, Clone, PartialEq, Component)]
pub struct Driver {
    pub id: DriverId,
    pub rating: f64,
    pub phase: DriverPhase,
}

/// Current driver location, updated in place by the external GPS feed.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Position(pub Point);

/// Onboarding record for a driver entering the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDriver {
    pub id: DriverId,
    pub location: Point,
    pub rating: f64,
    pub phase: DriverPhase,
}

impl NewDriver {
    /// New driver starting in the `Available` phase.
    pub fn new(id: impl Into<DriverId>, location: Point, rating: f64) -> Self {
        Self {
            id: id.into(),
            location,
            rating,
            phase: DriverPhase::Available,
        }
    }

    pub fn with_phase(mut self, phase: DriverPhase) -> Self {
        self.phase = phase;
        self
    }

    /// Boundary validation for fields the type system cannot constrain.
    pub fn validate(&self) -> DispatchResult<()> {
        if self.id.as_str().is_empty() {
            return Err(DispatchError::InvalidInput(
                "driver id must not be empty".to_owned(),
            ));
        }
        crate::spatial::validate_point(self.location, "driver location")?;
        if !self.rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(DispatchError::InvalidInput(format!(
                "driver {} rating must be within [{MIN_RATING}, {MAX_RATING}], got {}",
                self.id, self.rating
            )));
        }
        Ok(())
    }
}

/// Immutable status snapshot of one driver.
///
/// Exactly these four fields: callers auditing `find_best` decisions or
/// rendering driver cards rely on `rating` being present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverStatus {
    pub name: String,
    pub location: Point,
    pub rating: f64,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_lexicographically() {
        assert!(DriverId::from("alice") < DriverId::from("bob"));
        assert_eq!(DriverId::from("alice"), DriverId::new("alice"));
    }

    #[test]
    fn only_available_phase_is_matchable() {
        assert!(DriverPhase::Available.is_available());
        assert!(!DriverPhase::Reserved.is_available());
        assert!(!DriverPhase::Busy.is_available());
        assert!(!DriverPhase::OffDuty.is_available());
    }

    #[test]
    fn onboarding_validation_rejects_bad_fields() {
        let ok = NewDriver::new("alice", Point::new(0.0, 0.0), 4.8);
        assert!(ok.validate().is_ok());

        let empty_id = NewDriver::new("", Point::new(0.0, 0.0), 4.8);
        assert!(matches!(
            empty_id.validate(),
            Err(crate::error::DispatchError::InvalidInput(_))
        ));

        let bad_location = NewDriver::new("bob", Point::new(f64::NAN, 0.0), 4.8);
        assert!(bad_location.validate().is_err());

        let rating_too_high = NewDriver::new("carol", Point::new(0.0, 0.0), 5.1);
        assert!(rating_too_high.validate().is_err());

        let rating_nan = NewDriver::new("dan", Point::new(0.0, 0.0), f64::NAN);
        assert!(rating_nan.validate().is_err());
    }
}
