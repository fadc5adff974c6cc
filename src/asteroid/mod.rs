//! Near-Earth asteroids built from orbital-data records.
//!
//! An [`Asteroid`] is constructed from a NeoWs-style record:
//!
//! ```json
//! {
//!   "name": "154229 (2002 JN97)",
//!   "id": "2154229",
//!   "nasa_jpl_url": "https://ssd.jpl.nasa.gov/...",
//!   "absolute_magnitude_h": 16.63,
//!   "is_potentially_hazardous_asteroid": false,
//!   "estimated_diameter": { "kilometers": {
//!       "estimated_diameter_min": 1.25, "estimated_diameter_max": 2.81 } },
//!   "close_approach_data": [ {
//!       "close_approach_date": "2024-10-10",
//!       "relative_velocity": { "kilometers_per_second": "19.75" },
//!       "miss_distance": { "kilometers": "63953842.15" } } ]
//! }
//! ```
//!
//! Construction is all-or-nothing: every field is read and validated
//! before the value is assembled.
//!
//! The asteroid keeps a single reference approach (velocity and miss
//! distance). It starts as the first close approach and is the only
//! velocity used by [`Asteroid::impact_energy`] and [`combine`].

mod approach;
pub(crate) mod record;

#[cfg(test)]
mod proptest_asteroid;

use std::fmt;

use serde_json::Value;
use tracing::debug;

pub use approach::{normalize_miss_distance, CloseApproach};

use self::record::Cursor;
use crate::body::{Body, PhysicalBody};
use crate::config::{HazardPolicy, ModelConfig};
use crate::error::BodyError;
use crate::physics;

/// Velocity and miss distance used for energy and merge calculations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReferenceApproach {
    /// Relative velocity (km/s)
    pub relative_velocity_km_s: f64,
    /// Normalized miss distance (km)
    pub miss_distance_km: f64,
}

impl ReferenceApproach {
    /// First approach of the list, or zeros when there is none.
    fn first_of(approaches: &[CloseApproach]) -> Self {
        approaches
            .first()
            .map(|a| Self {
                relative_velocity_km_s: a.relative_velocity_km_s(),
                miss_distance_km: a.miss_distance_km(),
            })
            .unwrap_or_default()
    }
}

/// A near-Earth asteroid.
///
/// `Clone` is the deep copy: the clone owns its own close-approach list.
#[derive(Clone, Debug, PartialEq)]
pub struct Asteroid {
    /// Diameter is the minimum estimate; mass is derived from both bounds.
    body: Body,
    id: String,
    nasa_jpl_url: String,
    absolute_magnitude: f64,
    min_diameter_km: f64,
    max_diameter_km: f64,
    is_hazardous: bool,
    close_approaches: Vec<CloseApproach>,
    reference: ReferenceApproach,
}

impl Asteroid {
    /// Build an asteroid from a record using the default model constants.
    pub fn from_record(record: &Value) -> Result<Self, BodyError> {
        Self::from_record_with(record, &ModelConfig::default())
    }

    /// Build an asteroid from a record.
    ///
    /// The diameter bounds are read first, so a record without
    /// `estimated_diameter` fails before any other field is looked at.
    ///
    /// # Errors
    /// * [`BodyError::MissingField`] if a required key is absent
    /// * [`BodyError::WrongType`] / [`BodyError::InvalidNumber`] for malformed values
    /// * [`BodyError::InvalidArgument`] if the derived diameter or mass is not positive
    pub fn from_record_with(record: &Value, config: &ModelConfig) -> Result<Self, BodyError> {
        let root = Cursor::root(record);

        let km = root.at(&["estimated_diameter", "kilometers"])?;
        let min_diameter_km = km.get("estimated_diameter_min")?.as_f64()?;
        let max_diameter_km = km.get("estimated_diameter_max")?.as_f64()?;

        let name = root.get("name")?.as_str()?;
        let id = root.get("id")?.as_str()?;
        let nasa_jpl_url = root.get("nasa_jpl_url")?.as_str()?;
        let absolute_magnitude = root.get("absolute_magnitude_h")?.as_f64()?;
        let is_hazardous = root.get("is_potentially_hazardous_asteroid")?.as_bool()?;

        let close_approaches = root
            .get("close_approach_data")?
            .elements()?
            .iter()
            .map(|entry| CloseApproach::from_record(entry, config.miss_distance_floor_km))
            .collect::<Result<Vec<_>, _>>()?;

        let mass = physics::mass_from_diameter_bounds(
            min_diameter_km,
            max_diameter_km,
            config.density_kg_m3,
        );
        let body = Body::new(name, min_diameter_km, mass)?;

        debug!(
            "Parsed asteroid {} ({}): mass {:.3e} kg, {} close approaches",
            name,
            id,
            mass,
            close_approaches.len()
        );

        Ok(Self {
            body,
            id: id.to_string(),
            nasa_jpl_url: nasa_jpl_url.to_string(),
            absolute_magnitude,
            min_diameter_km,
            max_diameter_km,
            is_hazardous,
            reference: ReferenceApproach::first_of(&close_approaches),
            close_approaches,
        })
    }

    /// Parse JSON text and build an asteroid with the default constants.
    pub fn from_json_str(text: &str) -> Result<Self, BodyError> {
        let record: Value = serde_json::from_str(text)?;
        Self::from_record(&record)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn nasa_jpl_url(&self) -> &str {
        &self.nasa_jpl_url
    }

    /// Absolute magnitude H
    pub fn absolute_magnitude(&self) -> f64 {
        self.absolute_magnitude
    }

    pub fn min_diameter_km(&self) -> f64 {
        self.min_diameter_km
    }

    pub fn max_diameter_km(&self) -> f64 {
        self.max_diameter_km
    }

    pub fn is_hazardous(&self) -> bool {
        self.is_hazardous
    }

    /// Close approaches in source order.
    pub fn close_approaches(&self) -> &[CloseApproach] {
        &self.close_approaches
    }

    pub fn reference(&self) -> ReferenceApproach {
        self.reference
    }

    /// Reference relative velocity (km/s)
    pub fn relative_velocity_km_s(&self) -> f64 {
        self.reference.relative_velocity_km_s
    }

    /// Reference miss distance (km)
    pub fn miss_distance_km(&self) -> f64 {
        self.reference.miss_distance_km
    }

    /// Kinetic energy at the reference velocity, in megatons of TNT.
    pub fn impact_energy(&self) -> f64 {
        physics::impact_energy_megatons(self.mass(), self.reference.relative_velocity_km_s)
    }
}

impl PhysicalBody for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// Merge two asteroids with the default hazard policy.
///
/// See [`combine_with`].
pub fn combine(a: &Asteroid, b: &Asteroid) -> Asteroid {
    combine_with(a, b, &HazardPolicy::default())
}

/// Merge two asteroids into a new composite. Neither input is modified.
///
/// Summed: diameter bounds, mass, reference velocity and miss distance.
/// The name is `"<a> & <b>"`. The hazard flag is recomputed from the
/// combined minimum diameter and reference velocity, ignoring both
/// inputs' flags.
///
/// Not symmetric: `id`, `nasa_jpl_url`, `absolute_magnitude` and the
/// close-approach list come from `a` unchanged.
pub fn combine_with(a: &Asteroid, b: &Asteroid, policy: &HazardPolicy) -> Asteroid {
    let min_diameter_km = a.min_diameter_km + b.min_diameter_km;
    let max_diameter_km = a.max_diameter_km + b.max_diameter_km;
    let reference = ReferenceApproach {
        relative_velocity_km_s: a.reference.relative_velocity_km_s
            + b.reference.relative_velocity_km_s,
        miss_distance_km: a.reference.miss_distance_km + b.reference.miss_distance_km,
    };
    let is_hazardous = policy.classify(min_diameter_km, reference.relative_velocity_km_s);

    let name = format!("{} & {}", a.name(), b.name());
    debug!(
        "Combined {} (hazardous: {}, {:.3} km/s)",
        name, is_hazardous, reference.relative_velocity_km_s
    );

    Asteroid {
        body: Body::from_trusted(name, min_diameter_km, a.mass() + b.mass()),
        id: a.id.clone(),
        nasa_jpl_url: a.nasa_jpl_url.clone(),
        absolute_magnitude: a.absolute_magnitude,
        min_diameter_km,
        max_diameter_km,
        is_hazardous,
        close_approaches: a.close_approaches.clone(),
        reference,
    }
}

impl fmt::Display for Asteroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Asteroid ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name())?;
        writeln!(f, "NASA JPL URL: {}", self.nasa_jpl_url)?;
        writeln!(f, "Absolute Magnitude (H): {}", self.absolute_magnitude)?;
        writeln!(
            f,
            "Diameter (Min): {} km, Max: {} km",
            self.min_diameter_km, self.max_diameter_km
        )?;
        writeln!(
            f,
            "Is Potentially Hazardous: {}",
            if self.is_hazardous { "Yes" } else { "No" }
        )?;
        for approach in &self.close_approaches {
            writeln!(f, "{approach}")?;
        }
        writeln!(f, "Mass: {:e} kg", self.mass())?;
        writeln!(f, "Surface Gravity: {:e} m/s^2", self.surface_gravity())?;
        write!(f, "Impact Energy: {:.3} megatons of TNT", self.impact_energy())
    }
}
