//! Driver-matching and fare engine for a ride-hailing dispatch service.
//!
//! The [`registry::DriverRegistry`] owns the canonical fleet state; the
//! [`matching`] and [`pricing`] modules are stateless over it. Selection and
//! the subsequent availability commit are deliberately separate calls (see
//! the registry docs for the two-phase protocol).

pub mod error;
pub mod fleet;
pub mod matching;
pub mod pricing;
pub mod registry;
pub mod spatial;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
