//! Mass estimation and kinetic impact energy for asteroids.

use std::f64::consts::PI;

use crate::types::{km_per_s_to_m_per_s, radius_meters, JOULES_PER_MEGATON};

/// Volume of a sphere with the given diameter in kilometers, in m³.
#[inline]
pub fn sphere_volume(diameter_km: f64) -> f64 {
    let r = radius_meters(diameter_km);
    4.0 / 3.0 * PI * r.powi(3)
}

/// Estimate an asteroid's mass from its diameter bounds.
///
/// The volumes of the smallest and largest estimated spheres are averaged
/// and multiplied by the bulk density. This is the mean of the two extreme
/// volumes, not the volume of the mean diameter, so it is symmetric in its
/// two diameter arguments.
///
/// # Arguments
/// * `min_diameter_km` - Lower diameter estimate (km)
/// * `max_diameter_km` - Upper diameter estimate (km)
/// * `density_kg_m3` - Bulk density (kg/m³)
///
/// # Returns
/// Mass in kilograms
pub fn mass_from_diameter_bounds(
    min_diameter_km: f64,
    max_diameter_km: f64,
    density_kg_m3: f64,
) -> f64 {
    let avg_volume = (sphere_volume(min_diameter_km) + sphere_volume(max_diameter_km)) / 2.0;
    density_kg_m3 * avg_volume
}

/// Kinetic energy of a body in megatons of TNT.
///
/// E = ½ m v², with v given in km/s and converted to m/s.
pub fn impact_energy_megatons(mass_kg: f64, velocity_km_s: f64) -> f64 {
    let v = km_per_s_to_m_per_s(velocity_km_s);
    0.5 * mass_kg * v * v / JOULES_PER_MEGATON
}
