//! Apparent sidereal time: mean sidereal time corrected by the equation
//! of the equinoxes Δψ·cos ε (Meeus ch.12).

use eph_time::{HourAngle, jd_at_0h, mean_sidereal_time_0h, mean_sidereal_time_degrees, normalize_degrees};

use crate::nutation::{Nutation, NutationModel};
use crate::obliquity::{ObliquityModel, mean_obliquity};

/// Equation of the equinoxes in seconds of time, with explicit models.
pub fn sidereal_time_correction_with(
    jd: f64,
    nutation: NutationModel,
    obliquity: ObliquityModel,
) -> f64 {
    let n = Nutation::compute(jd, nutation);
    let eps = mean_obliquity(jd, obliquity) + n.obliquity;
    n.longitude_arcsec() * eps.cos() / 15.0
}

/// Equation of the equinoxes in seconds of time (full nutation, Laskar
/// obliquity).
pub fn sidereal_time_correction(jd: f64) -> f64 {
    sidereal_time_correction_with(jd, NutationModel::Full, ObliquityModel::Laskar)
}

/// Apparent sidereal time at Greenwich at 0h UT of the date of `jd`.
pub fn apparent_sidereal_time_0h(jd: f64) -> HourAngle {
    let mean = mean_sidereal_time_0h(jd);
    HourAngle::from_seconds(mean.total_seconds() + sidereal_time_correction(jd_at_0h(jd)))
}

/// Apparent sidereal time at Greenwich in degrees, with explicit models.
pub fn apparent_sidereal_time_degrees_with(
    jd: f64,
    nutation: NutationModel,
    obliquity: ObliquityModel,
) -> f64 {
    let correction_deg = sidereal_time_correction_with(jd, nutation, obliquity) * 15.0 / 3600.0;
    normalize_degrees(mean_sidereal_time_degrees(jd) + correction_deg)
}

/// Apparent sidereal time at Greenwich in degrees.
pub fn apparent_sidereal_time_degrees(jd: f64) -> f64 {
    apparent_sidereal_time_degrees_with(jd, NutationModel::Full, ObliquityModel::Laskar)
}
