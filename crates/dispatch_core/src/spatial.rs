//! Planar coordinates and distance calculations.
//!
//! Locations are 2-D real-valued points on a flat plane; matching uses plain
//! Euclidean distance. Coordinates stored in the registry are always finite;
//! boundary validation lives in [`validate_point`].

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};

/// A 2-D coordinate (driver or passenger location).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both components are finite (not NaN or infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
pub fn distance_between(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Reject non-finite coordinates with `InvalidInput`.
///
/// Arity and numeric type are already guaranteed by the type system; this is
/// the remaining boundary check the types cannot express.
pub fn validate_point(point: Point, what: &str) -> DispatchResult<()> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(DispatchError::InvalidInput(format!(
            "{what} must be a finite 2-D coordinate, got ({}, {})",
            point.x, point.y
        )))
    }
}
