//! Julian Day helpers.
//!
//! Calendar conversion follows Meeus ch.7 (eq. 7.1 and the inverse on
//! p.63). Dates before 1582-Oct-15 are not switched to the Julian
//! calendar automatically; use [`julian_calendar_to_jd`] for those.

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days in a Julian millennium.
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// JD − MJD.
pub const MJD_OFFSET: f64 = 2_400_000.5;

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian millennia since J2000.0 (VSOP87 time argument).
pub fn jd_to_millennia(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_MILLENNIUM
}

/// Days since J2000.0.
pub fn jd_to_days(jd: f64) -> f64 {
    jd - J2000_JD
}

pub fn jd_to_mjd(jd: f64) -> f64 {
    jd - MJD_OFFSET
}

pub fn mjd_to_jd(mjd: f64) -> f64 {
    mjd + MJD_OFFSET
}

fn shift_january_february(year: i32, month: u32) -> (f64, f64) {
    if month > 2 {
        (year as f64, month as f64)
    } else {
        (year as f64 - 1.0, month as f64 + 12.0)
    }
}

/// Gregorian calendar date to Julian Day.
///
/// `day` may carry a fraction (e.g. 4.81 = 4th, 19:26:24).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = shift_january_february(year, month);
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian calendar date to Julian Day.
pub fn julian_calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = shift_january_february(year, month);
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day - 1524.5
}

/// Julian Day to calendar `(year, month, day_with_fraction)`.
///
/// Dates before 1582-Oct-15 come out in the Julian calendar.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn is_julian_leap_year(year: i32) -> bool {
    year % 4 == 0
}

/// Ordinal day of the year (1 = Jan 1), with fraction (Meeus p.65).
pub fn day_of_year(month: u32, day: f64, leap: bool) -> f64 {
    let k = if leap { 1 } else { 2 };
    let n = (275 * month / 9) as i64 - (k * ((month as i64 + 9) / 12)) - 30;
    n as f64 + day
}

/// Decimal year for a date, e.g. mid-1990 ≈ 1990.5.
pub fn decimal_year(year: i32, month: u32, day: f64, leap: bool) -> f64 {
    let days_in_year = if leap { 366.0 } else { 365.0 };
    year as f64 + day_of_year(month, day, leap) / days_in_year
}
