//! Surface gravity and escape velocity of a uniform sphere.

use crate::types::{radius_meters, G};

/// Compute surface gravity of a sphere.
///
/// g = GM / r², with r = diameter / 2 converted to meters.
///
/// # Arguments
/// * `diameter_km` - Body diameter in kilometers
/// * `mass_kg` - Body mass in kilograms
///
/// # Returns
/// Gravitational acceleration at the surface in m/s²
#[inline]
pub fn surface_gravity(diameter_km: f64, mass_kg: f64) -> f64 {
    let r = radius_meters(diameter_km);
    G * mass_kg / (r * r)
}

/// Compute escape velocity at the surface of a sphere.
///
/// v = sqrt(2GM / r)
///
/// # Arguments
/// * `diameter_km` - Body diameter in kilometers
/// * `mass_kg` - Body mass in kilograms
///
/// # Returns
/// Escape velocity in km/s
#[inline]
pub fn escape_velocity(diameter_km: f64, mass_kg: f64) -> f64 {
    let r = radius_meters(diameter_km);
    (2.0 * G * mass_kg / r).sqrt() / 1000.0
}
