//! Periodic-series evaluation and analytic body-state theories.
//!
//! This crate provides:
//! - a generic evaluator for `Σ amplitude · trig(Σ kᵢ·argᵢ)` tables
//! - the ELP2000-82B lunar series (Meeus ch.47)
//! - the Pluto perturbation series (Meeus ch.37)
//! - VSOP87 planetary theories loaded from the official files
//! - mean orbital elements of the major planets (Meeus ch.31)

pub mod elements;
pub mod error;
pub mod evaluator;
pub mod lunar;
pub mod pluto;
pub mod state;
pub mod vsop87;
pub mod vsop87_file;

pub use elements::{
    Equinox, OrbitalElements, PlanetPolynomials, orbital_elements, sun_mean_longitude,
    uranus_eccentricity,
};
pub use error::SeriesError;
pub use evaluator::{
    Arguments, CosineTerm, FundamentalArgument, PeriodicTerm, cosine_series,
    eccentricity_damping, eccentricity_damping_rate, power_series, sum_terms,
    sum_terms_with_rate,
};
pub use lunar::lunar_state;
pub use pluto::{pluto_in_range, pluto_state};
pub use state::{Body, BodyState, StateUnits};
pub use vsop87::Vsop87Theory;
pub use vsop87_file::{Vsop87File, Vsop87Version, file_extension, parse_vsop87};
