//! Angle normalization and sexagesimal angle types.
//!
//! All normalizers return values in a half-open canonical interval
//! (`[0, 360)`, `[0, 2π)`, `[0, 24)`, `[0, 60)`). Non-finite input is
//! passed through as NaN.
//!
//! Source: Meeus, *Astronomical Algorithms* 2nd ed., ch.1 and ch.12.

use std::f64::consts::TAU;
use std::fmt::{Display, Formatter};
use std::ops::Add;

use crate::error::AngleError;

/// Seconds of time in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Arcseconds to radians: 1″ = 2π / 1 296 000.
pub const ARCSEC_TO_RAD: f64 = TAU / 1_296_000.0;

fn wrap(value: f64, period: f64) -> f64 {
    let r = value.rem_euclid(period);
    // rem_euclid rounds up to `period` for tiny negative inputs.
    if r >= period { 0.0 } else { r }
}

/// Wrap degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    wrap(deg, 360.0)
}

/// Wrap radians into `[0, 2π)`.
pub fn normalize_radians(rad: f64) -> f64 {
    wrap(rad, TAU)
}

/// Wrap hours into `[0, 24)`.
pub fn normalize_hours(hours: f64) -> f64 {
    wrap(hours, 24.0)
}

/// Wrap seconds (of time or arc) into `[0, 60)`.
pub fn normalize_seconds(seconds: f64) -> f64 {
    wrap(seconds, 60.0)
}

/// Wrap a signed degree value into `(-180, 180]`.
pub fn normalize_degrees_signed(deg: f64) -> f64 {
    let d = normalize_degrees(deg);
    if d > 180.0 { d - 360.0 } else { d }
}

/// 15° per hour.
pub fn degrees_to_hours(deg: f64) -> f64 {
    deg / 15.0
}

pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * 15.0
}

fn check_minutes_seconds(minutes: u32, seconds: f64) -> Result<(), AngleError> {
    if !seconds.is_finite() {
        return Err(AngleError::NonFinite);
    }
    if minutes >= 60 {
        return Err(AngleError::MinutesOutOfRange(minutes as i64));
    }
    if !(0.0..60.0).contains(&seconds) {
        return Err(AngleError::SecondsOutOfRange(seconds));
    }
    Ok(())
}

/// Split a non-negative quantity (in the base unit) into whole units,
/// whole sixtieths and the remaining 1/3600ths.
fn sexagesimal(value: f64) -> (u32, u32, f64) {
    let total = value * 3600.0;
    let units = (total / 3600.0).floor();
    let rest = total - units * 3600.0;
    let minutes = (rest / 60.0).floor();
    let seconds = (rest - minutes * 60.0).max(0.0);
    (units as u32, minutes as u32, seconds)
}

/// Time-like angle in hours, minutes and seconds (right ascension,
/// sidereal time, hour angle). Always within `[0h, 24h)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourAngle {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl HourAngle {
    /// Validated constructor.
    pub fn new(hours: u32, minutes: u32, seconds: f64) -> Result<Self, AngleError> {
        if hours >= 24 {
            return Err(AngleError::HoursOutOfRange(hours as i64));
        }
        check_minutes_seconds(minutes, seconds)?;
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Build from a count of seconds of time, wrapped to one day.
    pub fn from_seconds(seconds: f64) -> Self {
        let hours = wrap(seconds, SECONDS_PER_DAY) / 3600.0;
        let (h, m, s) = sexagesimal(hours);
        Self {
            hours: h % 24,
            minutes: m,
            seconds: s,
        }
    }

    /// Build from degrees (15° = 1h), wrapped to `[0, 360)`.
    pub fn from_degrees(deg: f64) -> Self {
        Self::from_seconds(degrees_to_hours(normalize_degrees(deg)) * 3600.0)
    }

    pub fn from_radians(rad: f64) -> Self {
        Self::from_degrees(rad.to_degrees())
    }

    /// Total seconds of time since 0h.
    pub fn total_seconds(self) -> f64 {
        self.hours as f64 * 3600.0 + self.minutes as f64 * 60.0 + self.seconds
    }

    pub fn to_hours(self) -> f64 {
        self.total_seconds() / 3600.0
    }

    pub fn to_degrees(self) -> f64 {
        hours_to_degrees(self.to_hours())
    }

    pub fn to_radians(self) -> f64 {
        self.to_degrees().to_radians()
    }
}

impl Add for HourAngle {
    type Output = HourAngle;

    fn add(self, rhs: HourAngle) -> HourAngle {
        HourAngle::from_seconds(self.total_seconds() + rhs.total_seconds())
    }
}

impl Display for HourAngle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h{:02}m{:07.4}s", self.hours, self.minutes, self.seconds)
    }
}

/// Arc angle in degrees, arcminutes and arcseconds with an explicit sign,
/// so that values such as −0°37′ survive the split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleOfArc {
    pub negative: bool,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl AngleOfArc {
    /// Validated constructor; the sign is taken from `degrees`.
    ///
    /// Use [`AngleOfArc::with_sign`] for negative angles smaller than 1°.
    pub fn new(degrees: i32, minutes: u32, seconds: f64) -> Result<Self, AngleError> {
        Self::with_sign(degrees < 0, degrees.unsigned_abs(), minutes, seconds)
    }

    /// Validated constructor with an explicit sign.
    pub fn with_sign(
        negative: bool,
        degrees: u32,
        minutes: u32,
        seconds: f64,
    ) -> Result<Self, AngleError> {
        check_minutes_seconds(minutes, seconds)?;
        Ok(Self {
            negative,
            degrees,
            minutes,
            seconds,
        })
    }

    /// Split decimal degrees into sexagesimal parts.
    pub fn from_degrees(deg: f64) -> Self {
        let (d, m, s) = sexagesimal(deg.abs());
        Self {
            negative: deg < 0.0,
            degrees: d,
            minutes: m,
            seconds: s,
        }
    }

    pub fn to_degrees(self) -> f64 {
        let magnitude = self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative { -magnitude } else { magnitude }
    }

    pub fn to_radians(self) -> f64 {
        self.to_degrees().to_radians()
    }
}

impl Display for AngleOfArc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{}°{:02}′{:05.2}″",
            self.degrees, self.minutes, self.seconds
        )
    }
}
