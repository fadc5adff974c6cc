//! Property-based tests for derived physics using proptest.
//!
//! These tests verify the invariants of gravity, escape velocity, mass
//! estimation and impact energy across wide parameter ranges.

use proptest::prelude::*;

use super::{escape_velocity, impact_energy_megatons, mass_from_diameter_bounds, surface_gravity};
use crate::types::ASTEROID_DENSITY;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Gravity and escape velocity are strictly positive for valid bodies.
    #[test]
    fn prop_derived_quantities_positive(
        diameter_km in 1e-3f64..1e6,
        mass_kg in 1e3f64..1e30,
    ) {
        prop_assert!(surface_gravity(diameter_km, mass_kg) > 0.0);
        prop_assert!(escape_velocity(diameter_km, mass_kg) > 0.0);
    }

    /// Heavier body of the same size pulls harder and is harder to leave.
    #[test]
    fn prop_monotonic_in_mass(
        diameter_km in 1e-2f64..1e5,
        mass_kg in 1e10f64..1e27,
        factor in 1.01f64..10.0,
    ) {
        let heavier = mass_kg * factor;
        prop_assert!(surface_gravity(diameter_km, heavier) > surface_gravity(diameter_km, mass_kg));
        prop_assert!(escape_velocity(diameter_km, heavier) > escape_velocity(diameter_km, mass_kg));
    }

    /// Larger body of the same mass has weaker surface gravity and escape velocity.
    #[test]
    fn prop_decreasing_in_diameter(
        diameter_km in 1e-2f64..1e5,
        mass_kg in 1e10f64..1e27,
        factor in 1.01f64..10.0,
    ) {
        let wider = diameter_km * factor;
        prop_assert!(surface_gravity(wider, mass_kg) < surface_gravity(diameter_km, mass_kg));
        prop_assert!(escape_velocity(wider, mass_kg) < escape_velocity(diameter_km, mass_kg));
    }

    /// Averaging the extreme volumes does not care which bound is which.
    #[test]
    fn prop_mass_symmetric_in_bounds(
        d1 in 1e-3f64..100.0,
        d2 in 1e-3f64..100.0,
    ) {
        prop_assert_eq!(
            mass_from_diameter_bounds(d1, d2, ASTEROID_DENSITY),
            mass_from_diameter_bounds(d2, d1, ASTEROID_DENSITY)
        );
    }

    /// With equal bounds, mass scales as the cube of the diameter.
    #[test]
    fn prop_mass_scales_as_cube(
        d in 1e-3f64..100.0,
        k in 0.1f64..10.0,
    ) {
        let base = mass_from_diameter_bounds(d, d, ASTEROID_DENSITY);
        let scaled = mass_from_diameter_bounds(k * d, k * d, ASTEROID_DENSITY);
        let ratio = scaled / (base * k.powi(3));
        prop_assert!((ratio - 1.0).abs() < 1e-9, "ratio {}", ratio);
    }

    /// E = ½ m (1000 v)² / 4.184e15 megatons.
    #[test]
    fn prop_impact_energy_formula(
        mass_kg in 1e6f64..1e20,
        velocity_km_s in 0.0f64..80.0,
    ) {
        let expected = 0.5 * mass_kg * (1000.0 * velocity_km_s).powi(2) / 4.184e15;
        let energy = impact_energy_megatons(mass_kg, velocity_km_s);
        prop_assert!(energy >= 0.0);
        prop_assert!(
            (energy - expected).abs() <= expected * 1e-12,
            "energy {} vs expected {}", energy, expected
        );
    }
}
