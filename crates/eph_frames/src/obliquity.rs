//! Mean and true obliquity of the ecliptic (Meeus ch.22).

use eph_time::{ARCSEC_TO_RAD, jd_to_centuries};
use serde::Deserialize;

use crate::nutation::{Nutation, NutationModel};

/// Mean obliquity at J2000.0, radians (23.4392911°).
pub const J2000_OBLIQUITY: f64 = 23.439_291_1 * std::f64::consts::PI / 180.0;

/// Mean obliquity at B1950.0, radians (23.4457889°).
pub const B1950_OBLIQUITY: f64 = 23.445_788_9 * std::f64::consts::PI / 180.0;

/// 23°26′21.448″ in arcseconds.
const EPSILON0_ARCSEC: f64 = 84_381.448;

/// Polynomial used for the mean obliquity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObliquityModel {
    /// IAU cubic (eq. 22.2). Error reaches 1″ after 2000 years.
    Classical,
    /// Laskar's 10th-degree form (eq. 22.3), valid for |T| < 100
    /// centuries.
    #[default]
    Laskar,
}

/// Classical cubic, arcseconds.
fn classical_arcsec(t: f64) -> f64 {
    EPSILON0_ARCSEC + t * (-46.815_0 + t * (-0.000_59 + t * 0.001_813))
}

/// Laskar's series, arcseconds.
fn laskar_arcsec(t: f64) -> f64 {
    const C: [f64; 10] = [
        -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
    ];
    let u = t / 100.0;
    let poly = C.iter().rev().fold(0.0, |acc, &c| (acc + c) * u);
    EPSILON0_ARCSEC + poly
}

/// Mean obliquity of the ecliptic at `jd` (TT), radians.
pub fn mean_obliquity(jd: f64, model: ObliquityModel) -> f64 {
    let t = jd_to_centuries(jd);
    let arcsec = match model {
        ObliquityModel::Classical => classical_arcsec(t),
        ObliquityModel::Laskar => laskar_arcsec(t),
    };
    arcsec * ARCSEC_TO_RAD
}

/// True obliquity ε = ε₀ + Δε, radians.
pub fn true_obliquity(jd: f64, obliquity: ObliquityModel, nutation: NutationModel) -> f64 {
    mean_obliquity(jd, obliquity) + Nutation::compute(jd, nutation).obliquity
}
