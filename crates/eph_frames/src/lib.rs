//! Nutation, obliquity and coordinate-frame conversions.
//!
//! All angles are radians unless a function name says otherwise.
//! Conversions are pure functions returning new coordinate values.

pub mod coords;
pub mod enclosing;
pub mod globe;
pub mod nutation;
pub mod obliquity;
pub mod parallactic;
pub mod separation;
pub mod sidereal;
pub mod spherical;
pub mod transform;

pub use coords::{Ecliptic, Equatorial, Galactic, Geographic, Horizontal};
pub use enclosing::smallest_circle;
pub use globe::{
    geocentric_to_geographic_latitude, geodesic_distance, geodesic_distance_fast,
    geographic_to_geocentric_latitude, meridian_curvature_radius, parallel_of_latitude_radius,
    rho_sin_cos_phi_prime,
};
pub use nutation::{Nutation, NutationModel, fast_nutation_arcsec, nutation_arcsec};
pub use obliquity::{B1950_OBLIQUITY, J2000_OBLIQUITY, ObliquityModel, mean_obliquity, true_obliquity};
pub use parallactic::{ecliptic_on_horizon, parallactic_angle};
pub use separation::{CelestialPoint, angular_separation, relative_position_angle};
pub use sidereal::{
    apparent_sidereal_time_0h, apparent_sidereal_time_degrees,
    apparent_sidereal_time_degrees_with, sidereal_time_correction, sidereal_time_correction_with,
};
pub use spherical::{
    SphericalCoords, SphericalState, body_state_to_spherical, cartesian_state_to_spherical_state,
    cartesian_to_spherical, spherical_to_cartesian,
};
pub use transform::{
    ecliptic_to_equatorial, equatorial_to_ecliptic, equatorial_to_galactic,
    equatorial_to_horizontal, equatorial_to_horizontal_gst, galactic_to_equatorial, hour_angle,
    hour_angle_from_horizontal, horizontal_from_hour_angle, horizontal_to_equatorial,
    horizontal_to_equatorial_gst, local_sidereal_time,
};
