use std::cmp::Ordering;

use super::algorithm::SelectionPolicy;
use super::types::MatchCandidate;
use crate::fleet::DriverId;

/// Denominator offset in the efficiency score. Keeps the score finite for a
/// driver already at the reference point; a fixed design constant, not a
/// tunable.
pub const SCORE_DISTANCE_OFFSET: f64 = 1.0;

/// Efficiency score ranking a driver for a request:
/// `rating / (distance + 1)`.
pub fn efficiency_score(rating: f64, distance: f64) -> f64 {
    rating / (distance + SCORE_DISTANCE_OFFSET)
}

/// Best-efficiency selection: maximize [`efficiency_score`].
///
/// Single pass; the distance for each candidate was already computed once
/// during collection, so the whole operation is linear in fleet size. Equal
/// scores resolve to the lowest `DriverId`.
#[derive(Debug, Default)]
pub struct BestEfficiency;

impl SelectionPolicy for BestEfficiency {
    fn select<'a>(&self, candidates: &[MatchCandidate<'a>]) -> Option<&'a DriverId> {
        let mut best: Option<(&MatchCandidate<'a>, f64)> = None;
        for candidate in candidates {
            let score = efficiency_score(candidate.rating, candidate.distance);
            best = match best {
                None => Some((candidate, score)),
                Some((current, best_score)) => match score.partial_cmp(&best_score) {
                    Some(Ordering::Greater) => Some((candidate, score)),
                    Some(Ordering::Equal) if candidate.id < current.id => {
                        Some((candidate, score))
                    }
                    _ => Some((current, best_score)),
                },
            };
        }
        best.map(|(candidate, _)| candidate.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::Point;

    fn candidate(id: &DriverId, rating: f64, distance: f64) -> MatchCandidate<'_> {
        MatchCandidate {
            id,
            location: Point::new(0.0, 0.0),
            rating,
            distance,
        }
    }

    #[test]
    fn score_is_rating_over_distance_plus_one() {
        assert_eq!(efficiency_score(4.8, 0.0), 4.8);
        assert!((efficiency_score(4.9, 2.0_f64.sqrt()) - 4.9 / (2.0_f64.sqrt() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn higher_rating_beats_longer_distance_tradeoff() {
        let close_low = DriverId::from("close_low");
        let far_high = DriverId::from("far_high");
        // 3.0 / (0.5 + 1) = 2.0 vs 5.0 / (1.0 + 1) = 2.5
        let candidates = [
            candidate(&close_low, 3.0, 0.5),
            candidate(&far_high, 5.0, 1.0),
        ];
        assert_eq!(BestEfficiency.select(&candidates), Some(&far_high));
    }

    #[test]
    fn equal_score_resolves_to_lowest_id() {
        let zed = DriverId::from("zed");
        let alice = DriverId::from("alice");
        let candidates = [candidate(&zed, 4.0, 1.0), candidate(&alice, 4.0, 1.0)];
        assert_eq!(BestEfficiency.select(&candidates), Some(&alice));
    }
}
