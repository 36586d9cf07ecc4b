//! Trip fare calculation.

use crate::error::{DispatchError, DispatchResult};

/// Base fare in currency units (e.g., dollars).
pub const BASE_FARE: f64 = 2.50;

/// Per-mile rate in currency units.
pub const PER_MILE_RATE: f64 = 1.20;

/// Per-minute rate in currency units.
pub const PER_MINUTE_RATE: f64 = 0.25;

/// Calculate the fare for a completed trip.
///
/// Formula: `fare = (BASE_FARE + distance * PER_MILE_RATE + duration *
/// PER_MINUTE_RATE) * surge_multiplier`.
///
/// The surge multiplier applies to the whole metered fare, not just the base
/// fare: applying it additively undercharges long trips, which is exactly the
/// pricing bug this contract exists to rule out.
///
/// Domain: `distance >= 0` (miles), `duration >= 0` (minutes),
/// `surge_multiplier > 0`, all finite; anything else is `InvalidInput`.
/// Pure function of its inputs and the constants above.
pub fn calculate_fare(
    distance: f64,
    duration: f64,
    surge_multiplier: f64,
) -> DispatchResult<f64> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(DispatchError::InvalidInput(format!(
            "trip distance must be a finite non-negative number, got {distance}"
        )));
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(DispatchError::InvalidInput(format!(
            "trip duration must be a finite non-negative number, got {duration}"
        )));
    }
    if !surge_multiplier.is_finite() || surge_multiplier <= 0.0 {
        return Err(DispatchError::InvalidInput(format!(
            "surge multiplier must be a finite positive number, got {surge_multiplier}"
        )));
    }
    let metered = BASE_FARE + distance * PER_MILE_RATE + duration * PER_MINUTE_RATE;
    Ok(metered * surge_multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fare_matches_the_formula_exactly() {
        // (2.50 + 10 * 1.20 + 15 * 0.25) * 1.5 = 18.25 * 1.5
        let fare = calculate_fare(10.0, 15.0, 1.5).expect("fare");
        assert!((fare - 27.375).abs() < 1e-12);

        let base_only = calculate_fare(0.0, 0.0, 1.0).expect("fare");
        assert_eq!(base_only, BASE_FARE);
    }

    #[test]
    fn surge_multiplies_the_whole_metered_fare() {
        // Regression against the additive-surge bug: on a long trip the
        // difference between the two applications is large.
        let distance = 40.0;
        let duration = 90.0;
        let surge = 2.0;
        let metered = BASE_FARE + distance * PER_MILE_RATE + duration * PER_MINUTE_RATE;
        let additive = metered + surge;

        let fare = calculate_fare(distance, duration, surge).expect("fare");
        assert!((fare - metered * surge).abs() < 1e-12);
        assert!(fare > additive);
    }

    #[test]
    fn fare_is_monotone_in_each_argument() {
        let base = calculate_fare(10.0, 15.0, 1.5).expect("fare");
        assert!(calculate_fare(11.0, 15.0, 1.5).expect("fare") > base);
        assert!(calculate_fare(10.0, 16.0, 1.5).expect("fare") > base);
        assert!(calculate_fare(10.0, 15.0, 1.6).expect("fare") > base);
    }

    #[test]
    fn out_of_domain_inputs_are_invalid() {
        for (distance, duration, surge) in [
            (-1.0, 15.0, 1.5),
            (10.0, -0.1, 1.5),
            (10.0, 15.0, 0.0),
            (10.0, 15.0, -1.5),
            (f64::NAN, 15.0, 1.5),
            (10.0, f64::INFINITY, 1.5),
            (10.0, 15.0, f64::NAN),
        ] {
            assert!(
                matches!(
                    calculate_fare(distance, duration, surge),
                    Err(DispatchError::InvalidInput(_))
                ),
                "({distance}, {duration}, {surge}) should be rejected"
            );
        }
    }
}
