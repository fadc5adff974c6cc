//! Shared geometry and mass for every modeled celestial body.
//!
//! [`Body`] holds the validated name, diameter and mass. Planets and
//! asteroids each embed one and expose it through the [`PhysicalBody`]
//! capability trait, which supplies the derived surface gravity and
//! escape velocity.

use std::fmt;

use crate::error::BodyError;
use crate::physics;

/// Name, diameter and mass of a spherical body.
///
/// Construction enforces `diameter > 0` and `mass > 0`. The fields are
/// private: only the owning body type may change the mass afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    name: String,
    /// Diameter in kilometers
    diameter: f64,
    /// Mass in kilograms
    mass: f64,
}

impl Body {
    /// Create a validated body.
    ///
    /// # Errors
    /// [`BodyError::InvalidArgument`] if the diameter or mass is not a
    /// positive finite number.
    pub fn new(name: impl Into<String>, diameter_km: f64, mass_kg: f64) -> Result<Self, BodyError> {
        check_positive("diameter", diameter_km)?;
        check_positive("mass", mass_kg)?;
        Ok(Self {
            name: name.into(),
            diameter: diameter_km,
            mass: mass_kg,
        })
    }

    /// Build a body from values already known to satisfy the invariants,
    /// such as catalog constants or sums of validated bodies.
    pub(crate) fn from_trusted(name: impl Into<String>, diameter_km: f64, mass_kg: f64) -> Self {
        debug_assert!(diameter_km > 0.0 && mass_kg > 0.0);
        Self {
            name: name.into(),
            diameter: diameter_km,
            mass: mass_kg,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Diameter in kilometers
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Mass in kilograms
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Subtract mass in place. No floor is applied.
    pub(crate) fn remove_mass(&mut self, mass_kg: f64) {
        self.mass -= mass_kg;
    }
}

fn check_positive(quantity: &'static str, value: f64) -> Result<(), BodyError> {
    // NaN fails the comparison and is rejected with the rest
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(BodyError::InvalidArgument { quantity, value })
    }
}

/// Capability shared by planets and asteroids.
///
/// Implementors only provide access to their [`Body`]; the derived
/// quantities come from the default methods.
pub trait PhysicalBody {
    fn body(&self) -> &Body;

    fn name(&self) -> &str {
        self.body().name()
    }

    /// Diameter in kilometers
    fn diameter(&self) -> f64 {
        self.body().diameter()
    }

    /// Mass in kilograms
    fn mass(&self) -> f64 {
        self.body().mass()
    }

    /// Surface gravity in m/s²
    fn surface_gravity(&self) -> f64 {
        physics::surface_gravity(self.diameter(), self.mass())
    }

    /// Escape velocity in km/s
    fn escape_velocity(&self) -> f64 {
        physics::escape_velocity(self.diameter(), self.mass())
    }
}

impl PhysicalBody for Body {
    fn body(&self) -> &Body {
        self
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Diameter: {} km, Mass: {:e} kg",
            self.name, self.diameter, self.mass
        )
    }
}
