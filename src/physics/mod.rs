//! Static derived physics for spherical bodies.
//!
//! Everything here is a pure function of geometry, mass and velocity:
//! no state, no time evolution. Body types call into these helpers so
//! the formulas live in exactly one place.

mod gravity;
mod impact;

#[cfg(test)]
mod proptest_physics;

pub use gravity::{escape_velocity, surface_gravity};
pub use impact::{impact_energy_megatons, mass_from_diameter_bounds, sphere_volume};
