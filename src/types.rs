//! Physical constants and unit conversions shared by all bodies.

/// Physical constants (SI units unless noted)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers to meters
pub const KM_TO_METERS: f64 = 1000.0;

/// Joules released by one megaton of TNT
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Bulk density assumed for every asteroid (kg/m³)
pub const ASTEROID_DENSITY: f64 = 3000.0;

/// Smallest plausible miss distance for a close approach (km).
/// Normalized distances are clamped up to two Earth radii.
pub const MIN_MISS_DISTANCE_KM: f64 = 2.0 * EARTH_RADIUS_KM;

/// Combined minimum diameter above which a merged asteroid is hazardous (km)
pub const HAZARD_MIN_DIAMETER_KM: f64 = 280.0;

/// Combined reference velocity above which a merged asteroid is hazardous (km/s)
pub const HAZARD_VELOCITY_KM_S: f64 = 5.0;

/// Radius in meters of a body with the given diameter in kilometers.
#[inline]
pub fn radius_meters(diameter_km: f64) -> f64 {
    diameter_km * KM_TO_METERS / 2.0
}

/// Convert a velocity in km/s to m/s.
#[inline]
pub fn km_per_s_to_m_per_s(velocity_km_s: f64) -> f64 {
    velocity_km_s * KM_TO_METERS
}
