//! Property-based tests for asteroid ingestion and merging.

use proptest::prelude::*;

use super::{combine, normalize_miss_distance, Asteroid};
use crate::body::PhysicalBody;
use crate::test_utils::fixtures;
use crate::types::MIN_MISS_DISTANCE_KM;

/// Build a valid asteroid from generated parameters.
fn arb_asteroid(
    name: &str,
    min_km: f64,
    spread: f64,
    velocity_km_s: f64,
    miss_km: f64,
    hazardous: bool,
) -> Asteroid {
    let mut record = fixtures::record(
        name,
        min_km,
        min_km * spread,
        &velocity_km_s.to_string(),
        &miss_km.to_string(),
    );
    record["is_potentially_hazardous_asteroid"] = serde_json::Value::Bool(hazardous);
    Asteroid::from_record(&record).expect("generated record should be valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Normalized distance is half the raw value, never below the floor.
    #[test]
    fn prop_miss_distance_floor(raw_km in 0.0f64..1e9) {
        let d = normalize_miss_distance(raw_km, MIN_MISS_DISTANCE_KM);
        prop_assert!(d >= MIN_MISS_DISTANCE_KM);
        if raw_km / 2.0 > MIN_MISS_DISTANCE_KM {
            prop_assert_eq!(d, raw_km / 2.0);
        } else {
            prop_assert_eq!(d, MIN_MISS_DISTANCE_KM);
        }
    }

    /// Every constructed asteroid satisfies the body invariants.
    #[test]
    fn prop_constructed_asteroid_is_valid(
        min_km in 1e-3f64..50.0,
        spread in 1.0f64..3.0,
        velocity in 0.0f64..60.0,
        miss in 0.0f64..1e8,
    ) {
        let asteroid = arb_asteroid("Gen", min_km, spread, velocity, miss, false);
        prop_assert!(asteroid.diameter() > 0.0);
        prop_assert!(asteroid.mass() > 0.0);
        prop_assert_eq!(asteroid.diameter(), min_km);
    }

    /// Merging sums mass exactly and joins names.
    #[test]
    fn prop_combine_sums_fields(
        a_min in 1e-3f64..50.0,
        b_min in 1e-3f64..50.0,
        a_vel in 0.0f64..40.0,
        b_vel in 0.0f64..40.0,
    ) {
        let a = arb_asteroid("A", a_min, 2.0, a_vel, 1e6, true);
        let b = arb_asteroid("B", b_min, 1.5, b_vel, 2e6, false);
        let combined = combine(&a, &b);

        prop_assert_eq!(combined.mass(), a.mass() + b.mass());
        prop_assert_eq!(combined.name(), "A & B");
        prop_assert_eq!(combined.min_diameter_km(), a.min_diameter_km() + b.min_diameter_km());
        prop_assert_eq!(
            combined.relative_velocity_km_s(),
            a.relative_velocity_km_s() + b.relative_velocity_km_s()
        );
    }

    /// The merged hazard flag ignores both inputs' own flags.
    #[test]
    fn prop_combined_hazard_ignores_input_flags(
        a_min in 1e-3f64..200.0,
        b_min in 1e-3f64..200.0,
        a_vel in 0.0f64..6.0,
        b_vel in 0.0f64..6.0,
        a_flag in any::<bool>(),
        b_flag in any::<bool>(),
    ) {
        let a = arb_asteroid("A", a_min, 1.5, a_vel, 1e6, a_flag);
        let b = arb_asteroid("B", b_min, 1.5, b_vel, 1e6, b_flag);
        let flipped_a = arb_asteroid("A", a_min, 1.5, a_vel, 1e6, !a_flag);
        let flipped_b = arb_asteroid("B", b_min, 1.5, b_vel, 1e6, !b_flag);

        let combined = combine(&a, &b);
        prop_assert_eq!(combined.is_hazardous(), combine(&flipped_a, &flipped_b).is_hazardous());

        let expected = combined.min_diameter_km() > 280.0 || combined.relative_velocity_km_s() > 5.0;
        prop_assert_eq!(combined.is_hazardous(), expected);
    }
}
