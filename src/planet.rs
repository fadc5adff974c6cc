//! Planets and asteroid impacts.
//!
//! A planet is a plain [`Body`] that can absorb an impactor. Absorbing
//! removes the impactor's mass from the planet; the impactor itself is
//! only read.

use std::fmt;

use tracing::{info, warn};

use crate::asteroid::Asteroid;
use crate::body::{Body, PhysicalBody};
use crate::catalog::PlanetId;
use crate::error::BodyError;

/// A planet with validated geometry and mutable mass.
#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    body: Body,
}

impl Planet {
    /// Create a planet.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `diameter_km` - Mean diameter in kilometers
    /// * `mass_kg` - Mass in kilograms
    ///
    /// # Errors
    /// [`BodyError::InvalidArgument`] for a non-positive diameter or mass.
    pub fn new(name: impl Into<String>, diameter_km: f64, mass_kg: f64) -> Result<Self, BodyError> {
        Ok(Self {
            body: Body::new(name, diameter_km, mass_kg)?,
        })
    }

    /// Create a planet from the predefined catalog.
    pub fn from_catalog(id: PlanetId) -> Self {
        let data = id.data();
        Self {
            body: Body::from_trusted(id.name(), data.diameter_km, data.mass_kg),
        }
    }

    /// Absorb an asteroid impact.
    ///
    /// The asteroid's mass is subtracted from the planet's mass. No floor
    /// is applied: an impactor heavier than the planet leaves it with zero
    /// or negative mass.
    ///
    /// # Returns
    /// An [`ImpactEvent`] describing the impact. Callers may ignore it.
    pub fn absorb_impact(&mut self, impactor: &Asteroid) -> ImpactEvent {
        let mass_before = self.body.mass();
        self.body.remove_mass(impactor.mass());

        let event = ImpactEvent {
            planet_name: self.body.name().to_string(),
            impactor_name: impactor.name().to_string(),
            impactor_mass_kg: impactor.mass(),
            energy_megatons: impactor.impact_energy(),
            planet_mass_before_kg: mass_before,
            planet_mass_after_kg: self.body.mass(),
        };

        info!(
            "IMPACT! {} hit {} with {:.3e} Mt; new mass {:.6e} kg",
            event.impactor_name, event.planet_name, event.energy_megatons, event.planet_mass_after_kg,
        );
        if event.planet_mass_after_kg <= 0.0 {
            warn!(
                "{} mass is no longer positive after impact ({:e} kg)",
                event.planet_name, event.planet_mass_after_kg
            );
        }

        event
    }
}

impl PhysicalBody for Planet {
    fn body(&self) -> &Body {
        &self.body
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Planet Name: {}, Mass: {:e} kg, Diameter: {} km",
            self.name(),
            self.mass(),
            self.diameter()
        )?;
        writeln!(f, "Surface Gravity: {:.3} m/s^2", self.surface_gravity())?;
        write!(f, "Escape Velocity: {:.3} km/s", self.escape_velocity())
    }
}

/// Record of one asteroid impact on a planet.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactEvent {
    pub planet_name: String,
    pub impactor_name: String,
    /// Mass removed from the planet (kg)
    pub impactor_mass_kg: f64,
    /// Kinetic energy of the impactor at its reference velocity (Mt TNT)
    pub energy_megatons: f64,
    pub planet_mass_before_kg: f64,
    pub planet_mass_after_kg: f64,
}
