//! Test utilities for body and asteroid tests.
//!
//! Provides builders for NeoWs-style records so tests only spell out the
//! fields they care about.

/// Fixtures for creating test records and asteroids.
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::asteroid::Asteroid;

    /// Create a record with a single close approach.
    ///
    /// Identity fields are fixed (Apophis-like metadata, flagged hazardous);
    /// velocity and miss distance are passed as the decimal strings the
    /// source uses.
    pub fn record(
        name: &str,
        min_diameter_km: f64,
        max_diameter_km: f64,
        velocity_km_s: &str,
        miss_distance_km: &str,
    ) -> Value {
        record_with_approaches(
            name,
            min_diameter_km,
            max_diameter_km,
            &[("2029-04-13", velocity_km_s, miss_distance_km)],
        )
    }

    /// Create a record with any number of `(date, velocity, miss distance)` approaches.
    pub fn record_with_approaches(
        name: &str,
        min_diameter_km: f64,
        max_diameter_km: f64,
        approaches: &[(&str, &str, &str)],
    ) -> Value {
        let approaches: Vec<Value> = approaches
            .iter()
            .map(|(date, velocity, miss)| {
                json!({
                    "close_approach_date": date,
                    "relative_velocity": { "kilometers_per_second": velocity },
                    "miss_distance": { "kilometers": miss },
                    "orbiting_body": "Earth"
                })
            })
            .collect();

        json!({
            "id": "99942",
            "neo_reference_id": "99942",
            "name": name,
            "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=99942",
            "absolute_magnitude_h": 19.09,
            "estimated_diameter": {
                "kilometers": {
                    "estimated_diameter_min": min_diameter_km,
                    "estimated_diameter_max": max_diameter_km
                }
            },
            "is_potentially_hazardous_asteroid": true,
            "close_approach_data": approaches
        })
    }

    /// Build an asteroid from [`record`], panicking on invalid input.
    pub fn asteroid(
        name: &str,
        min_diameter_km: f64,
        max_diameter_km: f64,
        velocity_km_s: &str,
        miss_distance_km: &str,
    ) -> Asteroid {
        let record = record(name, min_diameter_km, max_diameter_km, velocity_km_s, miss_distance_km);
        Asteroid::from_record(&record).expect("fixture record should be valid")
    }
}
