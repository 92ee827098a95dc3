//! IAU rotational elements of solar-system bodies.
//!
//! This crate provides:
//! - the 64 fundamental arguments shared by the rotation formulas
//! - a static catalog of 73 bodies with their pole and prime-meridian
//!   coefficients
//! - [`RotationCache`], which evaluates the shared arguments once per
//!   instant and serves orientation queries for any body at that instant
//! - physical and mean orbital data of the major natural satellites

pub mod arguments;
pub mod body;
pub mod cache;
pub mod constants;
pub mod error;
pub mod periodic;
pub mod physical;

pub use arguments::{ARGUMENT_COUNT, Argument, ArgumentPolynomial, TimeVariable};
pub use body::{BODY_COUNT, IauBody};
pub use cache::{Orientation, RotationCache, referenced_pairs};
pub use constants::RotationConstants;
pub use error::RotationError;
pub use periodic::{MAX_MULTIPLE, PeriodicTerm, Periodics};
pub use physical::{SATELLITES, Satellite, Shape, satellite, satellites_of};

/// One-shot orientation of a single body. Steps a fresh cache; use
/// [`RotationCache`] directly when querying several bodies at one instant.
pub fn orientation(body: IauBody, jd: f64) -> Result<Orientation, RotationError> {
    let mut cache = RotationCache::new();
    cache.step(jd);
    cache.orientation(body)
}
