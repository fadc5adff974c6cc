//! Close-approach observations.

use std::fmt;

use super::record::Cursor;
use crate::error::BodyError;

/// One observed or predicted pass near Earth.
#[derive(Clone, Debug, PartialEq)]
pub struct CloseApproach {
    date: String,
    relative_velocity_km_s: f64,
    miss_distance_km: f64,
}

impl CloseApproach {
    /// Create an approach from already-normalized values.
    pub fn new(date: impl Into<String>, relative_velocity_km_s: f64, miss_distance_km: f64) -> Self {
        Self {
            date: date.into(),
            relative_velocity_km_s,
            miss_distance_km,
        }
    }

    /// Read one `close_approach_data` entry.
    ///
    /// Velocity and distance arrive as decimal strings. The raw miss
    /// distance is normalized with [`normalize_miss_distance`].
    pub(crate) fn from_record(entry: &Cursor<'_>, floor_km: f64) -> Result<Self, BodyError> {
        let date = entry.get("close_approach_date")?.as_str()?;
        let velocity = entry
            .at(&["relative_velocity", "kilometers_per_second"])?
            .parse_f64()?;
        let raw_miss = entry.at(&["miss_distance", "kilometers"])?.parse_f64()?;
        Ok(Self::new(date, velocity, normalize_miss_distance(raw_miss, floor_km)))
    }

    /// Date as given by the source, e.g. `2024-10-10`. Not parsed.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn relative_velocity_km_s(&self) -> f64 {
        self.relative_velocity_km_s
    }

    /// Normalized miss distance (km)
    pub fn miss_distance_km(&self) -> f64 {
        self.miss_distance_km
    }
}

/// Halve a raw miss distance and clamp it up to `floor_km`.
///
/// With the default floor of two Earth radii, a raw 20 000 km becomes
/// 12 742 km while a raw 63 953 842 km becomes 31 976 921 km.
#[inline]
pub fn normalize_miss_distance(raw_km: f64, floor_km: f64) -> f64 {
    (raw_km / 2.0).max(floor_km)
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Close Approach Date: {}", self.date)?;
        writeln!(f, "Relative Velocity: {} km/s", self.relative_velocity_km_s)?;
        write!(f, "Miss Distance: {} km", self.miss_distance_km)
    }
}
