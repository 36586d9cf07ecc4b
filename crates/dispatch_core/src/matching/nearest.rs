use std::cmp::Ordering;

use super::algorithm::SelectionPolicy;
use super::types::MatchCandidate;
use crate::fleet::DriverId;

/// Nearest-driver selection: minimize pickup distance.
///
/// Single pass over the candidates. Equal distances resolve to the lowest
/// `DriverId`, so the result does not depend on roster order.
#[derive(Debug, Default)]
pub struct NearestDriver;

impl SelectionPolicy for NearestDriver {
    fn select<'a>(&self, candidates: &[MatchCandidate<'a>]) -> Option<&'a DriverId> {
        let mut best: Option<&MatchCandidate<'a>> = None;
        for candidate in candidates {
            best = match best {
                None => Some(candidate),
                Some(current) => match candidate.distance.partial_cmp(&current.distance) {
                    Some(Ordering::Less) => Some(candidate),
                    Some(Ordering::Equal) if candidate.id < current.id => Some(candidate),
                    _ => Some(current),
                },
            };
        }
        best.map(|candidate| candidate.id)
    }
}
