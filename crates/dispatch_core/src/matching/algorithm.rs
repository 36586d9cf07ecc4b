use serde::{Deserialize, Serialize};

use super::best_score::BestEfficiency;
use super::nearest::NearestDriver;
use super::types::MatchCandidate;
use crate::fleet::DriverId;

/// Strategy for picking one winner from the candidate set.
///
/// Implementations must be a single pass over the slice (linear in fleet
/// size) and deterministic: a tie on the objective resolves to the lowest
/// `DriverId`, never to scan order.
pub trait SelectionPolicy: Send + Sync {
    /// Pick the winning driver, or `None` if there are no candidates.
    fn select<'a>(&self, candidates: &[MatchCandidate<'a>]) -> Option<&'a DriverId>;
}

/// Which selection objective to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPolicyKind {
    /// Minimize pickup distance.
    Nearest,
    /// Maximize `rating / (distance + 1)`.
    BestEfficiency,
}

/// Construct the policy for a kind.
pub fn build_policy(kind: SelectionPolicyKind) -> Box<dyn SelectionPolicy> {
    match kind {
        SelectionPolicyKind::Nearest => Box::new(NearestDriver),
        SelectionPolicyKind::BestEfficiency => Box::new(BestEfficiency),
    }
}
