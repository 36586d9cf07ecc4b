//! Driver selection over the live registry.
//!
//! Both operations are pure reads: they filter the fleet to `Available`
//! drivers, compute the pickup distance exactly once per driver, and apply a
//! [`SelectionPolicy`]. Neither mutates availability — committing the match
//! is the caller's next, explicit step (`DriverRegistry::reserve`), so the
//! select-then-commit race stays visible instead of hiding inside the scan.

pub mod algorithm;
pub mod best_score;
pub mod nearest;
pub mod types;

pub use algorithm::{build_policy, SelectionPolicy, SelectionPolicyKind};
pub use best_score::{efficiency_score, BestEfficiency};
pub use nearest::NearestDriver;
pub use types::MatchCandidate;

use crate::error::{DispatchError, DispatchResult};
use crate::registry::{DriverRegistry, DriverView};
use crate::spatial::{distance_between, validate_point, Point};

/// Gather the available drivers for a request, one candidate per driver.
///
/// Fails with `InvalidInput` on a non-finite origin. Linear in fleet size;
/// the returned distances are the only ones the policies ever look at.
pub fn collect_candidates(
    registry: &DriverRegistry,
    origin: Point,
) -> DispatchResult<Vec<MatchCandidate<'_>>> {
    validate_point(origin, "request location")?;
    Ok(registry
        .drivers()
        .filter(|view| view.phase.is_available())
        .map(|view| MatchCandidate {
            id: view.id,
            location: view.location,
            rating: view.rating,
            distance: distance_between(origin, view.location),
        })
        .collect())
}

/// Run one selection pass with the given policy.
///
/// `NoAvailableDriver` iff no driver is in the `Available` phase.
pub fn select_with<'a>(
    registry: &'a DriverRegistry,
    origin: Point,
    policy: &dyn SelectionPolicy,
) -> DispatchResult<DriverView<'a>> {
    let candidates = collect_candidates(registry, origin)?;
    let id = policy
        .select(&candidates)
        .ok_or(DispatchError::NoAvailableDriver)?;
    registry.view(id)
}

/// Select the available driver closest to the passenger.
///
/// Does not mutate availability; reserve the returned driver as a separate
/// step and retry on `PhaseConflict`.
pub fn assign_nearest(
    registry: &DriverRegistry,
    passenger_location: Point,
) -> DispatchResult<DriverView<'_>> {
    select_with(registry, passenger_location, &NearestDriver)
}

/// Select the available driver with the greatest efficiency score
/// (`rating / (distance + 1)`) relative to the reference location.
pub fn find_best(
    registry: &DriverRegistry,
    reference_location: Point,
) -> DispatchResult<DriverView<'_>> {
    select_with(registry, reference_location, &BestEfficiency)
}
