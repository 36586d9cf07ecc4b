//! Error taxonomy for registry and dispatch operations.
//!
//! `InvalidInput` is an out-of-domain argument and is always surfaced to the
//! caller synchronously. `NoAvailableDriver` is a legitimate empty-result
//! state, not a defect; callers typically queue and retry above this layer.
//! The core itself never retries.

use thiserror::Error;

use crate::fleet::{DriverId, DriverPhase};

/// The error type for all `dispatch_core` operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// Malformed or out-of-domain argument (non-finite coordinate, negative
    /// distance, non-positive surge, duplicate or empty driver id, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No driver is in the `Available` phase. Distinguishable from
    /// `InvalidInput` so callers can queue the request instead of rejecting it.
    #[error("no available drivers")]
    NoAvailableDriver,

    /// The given identity is not present in the registry.
    #[error("driver {0} not found")]
    DriverNotFound(DriverId),

    /// A lifecycle transition was requested from the wrong phase. This is
    /// also how a two-phase commit reports losing the race: the driver was
    /// expected `Available` but another caller reserved it first.
    #[error("driver {id} is {actual:?}, expected {expected:?}")]
    PhaseConflict {
        id: DriverId,
        expected: DriverPhase,
        actual: DriverPhase,
    },
}

/// Shorthand result type for `dispatch_core` operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
