//! Mean sidereal time at Greenwich.
//!
//! All functions take a UT Julian Day. Apparent sidereal time needs the
//! nutation series and lives in `eph_frames::sidereal`.
//!
//! Source: Meeus, *Astronomical Algorithms* 2nd ed., ch.12 (eqs. 12.2–12.4),
//! IAU 1982 expression.

use crate::angle::{HourAngle, normalize_degrees};
use crate::julian::{J2000_JD, jd_to_centuries};

/// Ratio of sidereal to solar (UT) day rate.
pub const SIDEREAL_RATE: f64 = 1.002_737_909_35;

/// Julian Day of the 0h UT preceding (or equal to) `jd`.
pub fn jd_at_0h(jd: f64) -> f64 {
    (jd - 0.5).floor() + 0.5
}

/// Greenwich mean sidereal time at 0h UT of the given date (eq. 12.2).
///
/// Evaluated in seconds of time: 6h41m50.54841s + 8640184.812866·T
/// + 0.093104·T² − 0.0000062·T³.
pub fn mean_sidereal_time_0h(jd: f64) -> HourAngle {
    let t = jd_to_centuries(jd_at_0h(jd));
    let seconds = 24_110.548_41 + 8_640_184.812_866 * t + 0.093_104 * t * t
        - 0.000_006_2 * t * t * t;
    HourAngle::from_seconds(seconds)
}

/// Greenwich mean sidereal time at 0h UT in degrees (eq. 12.3).
pub fn mean_sidereal_time_0h_degrees(jd: f64) -> f64 {
    let t = jd_to_centuries(jd_at_0h(jd));
    let theta =
        100.460_618_37 + 36_000.770_053_608 * t + 0.000_387_933 * t * t - t * t * t / 38_710_000.0;
    normalize_degrees(theta)
}

/// Greenwich mean sidereal time at any instant in degrees (eq. 12.4).
pub fn mean_sidereal_time_degrees(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_degrees(theta)
}

/// Mean sidereal time from the 0h value plus the elapsed UT scaled by
/// [`SIDEREAL_RATE`]. Agrees with [`mean_sidereal_time_degrees`] to
/// well below 0.1″.
pub fn mean_sidereal_time_by_day_fraction(jd: f64) -> f64 {
    let jd0 = jd_at_0h(jd);
    let elapsed_deg = (jd - jd0) * 360.0 * SIDEREAL_RATE;
    normalize_degrees(mean_sidereal_time_0h_degrees(jd0) + elapsed_deg)
}

/// Local sidereal time from Greenwich sidereal time and a longitude
/// measured positive westward (degrees).
pub fn local_sidereal_time_degrees(gst_deg: f64, west_longitude_deg: f64) -> f64 {
    normalize_degrees(gst_deg - west_longitude_deg)
}
