use crate::fleet::DriverId;
use crate::spatial::Point;

/// One available driver considered for a request, with the pickup distance
/// computed exactly once during candidate collection.
#[derive(Debug, Clone, Copy)]
pub struct MatchCandidate<'a> {
    pub id: &'a DriverId,
    pub location: Point,
    pub rating: f64,
    pub distance: f64,
}
