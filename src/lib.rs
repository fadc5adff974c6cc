//! NEO Impact - near-Earth asteroid and planet models
//!
//! A library crate for building asteroids from NeoWs orbital-data
//! records, deriving their physical properties, merging them and
//! applying their impacts to planets.
//!
//! Fetching records and presenting results are left to the caller.

pub mod asteroid;
pub mod body;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feed;
pub mod physics;
pub mod planet;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use asteroid::{combine, combine_with, Asteroid, CloseApproach, ReferenceApproach};
pub use body::{Body, PhysicalBody};
pub use catalog::{PlanetData, PlanetId};
pub use config::{ConfigError, HazardPolicy, ModelConfig};
pub use error::BodyError;
pub use feed::{parse_feed, FeedReport, RejectedRecord};
pub use planet::{ImpactEvent, Planet};
