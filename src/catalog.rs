//! Predefined planets of the solar system.
//! Source: NASA planetary fact sheets (mean diameter, mass).

use crate::planet::Planet;

/// Identifier for the catalog planets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanetId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetId {
    /// All planets in order from the Sun
    pub const PLANETS: &'static [PlanetId] = &[
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Earth,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
            PlanetId::Uranus => "Uranus",
            PlanetId::Neptune => "Neptune",
        }
    }

    /// Look up a planet by name, ignoring case.
    pub fn from_name(name: &str) -> Option<PlanetId> {
        Self::PLANETS
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Physical data for this planet.
    pub fn data(&self) -> PlanetData {
        let (diameter_km, mass_kg) = match self {
            PlanetId::Mercury => (4879.0, 3.3011e23),
            PlanetId::Venus => (12104.0, 4.8675e24),
            PlanetId::Earth => (12742.0, 5.97237e24),
            PlanetId::Mars => (6779.0, 6.4171e23),
            PlanetId::Jupiter => (139820.0, 1.8982e27),
            PlanetId::Saturn => (116460.0, 5.6834e26),
            PlanetId::Uranus => (50724.0, 8.6810e25),
            PlanetId::Neptune => (49244.0, 1.02413e26),
        };
        PlanetData {
            id: *self,
            diameter_km,
            mass_kg,
        }
    }
}

/// Static data for a catalog planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetData {
    pub id: PlanetId,
    pub diameter_km: f64,
    pub mass_kg: f64,
}

/// Fresh planets for the whole catalog, in order from the Sun.
pub fn predefined_planets() -> Vec<Planet> {
    PlanetId::PLANETS.iter().map(|&id| Planet::from_catalog(id)).collect()
}
