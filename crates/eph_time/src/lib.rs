//! Angle normalization, Julian Day arithmetic and time-scale helpers.
//!
//! This crate provides:
//! - canonical-range normalizers and sexagesimal angle types
//! - Julian Day ↔ calendar conversions and J2000 offsets
//! - fixed-offset time-scale conversions (TAI/TT/TDB/TCG/TCB/GPS)
//! - ΔT and mean sidereal time

pub mod angle;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod scales;
pub mod sidereal;

pub use angle::{
    ARCSEC_TO_RAD, AngleOfArc, HourAngle, SECONDS_PER_DAY, degrees_to_hours, hours_to_degrees,
    normalize_degrees, normalize_degrees_signed, normalize_hours, normalize_radians,
    normalize_seconds,
};
pub use delta_t::delta_t;
pub use error::AngleError;
pub use julian::{
    DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, J2000_JD, MJD_OFFSET, calendar_to_jd, day_of_year,
    decimal_year, is_gregorian_leap_year, is_julian_leap_year, jd_to_calendar, jd_to_centuries,
    jd_to_days, jd_to_millennia, jd_to_mjd, julian_calendar_to_jd, mjd_to_jd,
};
pub use sidereal::{
    jd_at_0h, local_sidereal_time_degrees, mean_sidereal_time_0h, mean_sidereal_time_0h_degrees,
    mean_sidereal_time_by_day_fraction, mean_sidereal_time_degrees,
};

/// An instant given as a Julian Day, with its J2000 offsets precomputed.
///
/// Theories take days (`d`) and centuries (`t`) from the same instant;
/// building both once keeps them consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    jd: f64,
    days: f64,
    centuries: f64,
}

impl Instant {
    pub fn from_jd(jd: f64) -> Self {
        Self {
            jd,
            days: jd_to_days(jd),
            centuries: jd_to_centuries(jd),
        }
    }

    pub fn jd(self) -> f64 {
        self.jd
    }

    /// Days since J2000.0.
    pub fn days(self) -> f64 {
        self.days
    }

    /// Julian centuries since J2000.0.
    pub fn centuries(self) -> f64 {
        self.centuries
    }

    /// Julian millennia since J2000.0.
    pub fn millennia(self) -> f64 {
        self.centuries / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_offsets_agree() {
        let i = Instant::from_jd(J2000_JD + DAYS_PER_CENTURY);
        assert_eq!(i.days(), DAYS_PER_CENTURY);
        assert_eq!(i.centuries(), 1.0);
        assert_eq!(i.millennia(), 0.1);
    }

    #[test]
    fn instant_at_j2000_is_zero() {
        let i = Instant::from_jd(J2000_JD);
        assert_eq!(i.days(), 0.0);
        assert_eq!(i.centuries(), 0.0);
    }
}
