//! Model configuration loaded from TOML.
//!
//! [`ModelConfig`] mirrors the tunable constants in [`crate::types`].
//! Missing keys fall back to those compile-time defaults, so a minimal
//! file can override just the values you care about:
//!
//! ```toml
//! density_kg_m3 = 2600.0
//!
//! [hazard]
//! velocity_km_s = 7.5
//! ```
//!
//! The zero-configuration constructors (`Asteroid::from_record`,
//! `asteroid::combine`) use `ModelConfig::default()`.

use std::path::Path;

use serde::Deserialize;

use crate::types::{
    ASTEROID_DENSITY, HAZARD_MIN_DIAMETER_KM, HAZARD_VELOCITY_KM_S, MIN_MISS_DISTANCE_KM,
};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config value for `{name}`: {value}")]
    InvalidValue { name: &'static str, value: f64 },
}

/// Thresholds that classify a merged asteroid as hazardous.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HazardPolicy {
    /// Combined minimum diameter threshold (km)
    pub min_diameter_km: f64,
    /// Combined reference velocity threshold (km/s)
    pub velocity_km_s: f64,
}

impl Default for HazardPolicy {
    fn default() -> Self {
        Self {
            min_diameter_km: HAZARD_MIN_DIAMETER_KM,
            velocity_km_s: HAZARD_VELOCITY_KM_S,
        }
    }
}

impl HazardPolicy {
    /// Hazardous when either threshold is strictly exceeded.
    pub fn classify(&self, min_diameter_km: f64, velocity_km_s: f64) -> bool {
        min_diameter_km > self.min_diameter_km || velocity_km_s > self.velocity_km_s
    }
}

/// Tunable constants for asteroid ingestion and merging.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Bulk density used for mass estimation (kg/m³)
    pub density_kg_m3: f64,
    /// Lower clamp for normalized close-approach miss distances (km)
    pub miss_distance_floor_km: f64,
    pub hazard: HazardPolicy,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            density_kg_m3: ASTEROID_DENSITY,
            miss_distance_floor_km: MIN_MISS_DISTANCE_KM,
            hazard: HazardPolicy::default(),
        }
    }
}

impl ModelConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ModelConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject values that would break the body invariants downstream.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require("density_kg_m3", self.density_kg_m3, |v| v > 0.0)?;
        require("miss_distance_floor_km", self.miss_distance_floor_km, |v| v >= 0.0)?;
        require("hazard.min_diameter_km", self.hazard.min_diameter_km, |v| v >= 0.0)?;
        require("hazard.velocity_km_s", self.hazard.velocity_km_s, |v| v >= 0.0)?;
        Ok(())
    }
}

fn require(name: &'static str, value: f64, ok: impl Fn(f64) -> bool) -> Result<(), ConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { name, value })
    }
}
