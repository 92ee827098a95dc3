//! Fixed-offset and rate-scaled time-scale conversions on Julian Days.
//!
//! UTC needs a leap-second table and is not handled here.
//!
//! Sources: IAU 2006 Resolution B3 (TDB), IAU 2000 Resolution B1.9 (TT/TCG),
//! Meeus p.77 (TT − TDB periodic approximation).

use crate::angle::SECONDS_PER_DAY;
use crate::julian::J2000_JD;

/// TT − TAI in seconds.
pub const TT_MINUS_TAI_S: f64 = 32.184;

/// TAI − GPS in seconds.
pub const TAI_MINUS_GPS_S: f64 = 19.0;

/// dTT/dTCG = 1 − L_G.
pub const L_G: f64 = 6.969_290_134e-10;

/// dTDB/dTCB = 1 − L_B.
pub const L_B: f64 = 1.550_519_768e-8;

/// TDB − TCB offset at T0, seconds.
pub const TDB0_S: f64 = -6.55e-5;

/// JD (TAI) 1977-Jan-01 00:00:32.184 where TT, TCG and TCB coincide.
pub const T0_JD: f64 = 2_443_144.500_372_5;

pub fn tai_to_tt(jd_tai: f64) -> f64 {
    jd_tai + TT_MINUS_TAI_S / SECONDS_PER_DAY
}

pub fn tt_to_tai(jd_tt: f64) -> f64 {
    jd_tt - TT_MINUS_TAI_S / SECONDS_PER_DAY
}

pub fn gps_to_tai(jd_gps: f64) -> f64 {
    jd_gps + TAI_MINUS_GPS_S / SECONDS_PER_DAY
}

pub fn tai_to_gps(jd_tai: f64) -> f64 {
    jd_tai - TAI_MINUS_GPS_S / SECONDS_PER_DAY
}

pub fn tcg_to_tt(jd_tcg: f64) -> f64 {
    jd_tcg - L_G * (jd_tcg - T0_JD)
}

pub fn tt_to_tcg(jd_tt: f64) -> f64 {
    T0_JD + (jd_tt - T0_JD) / (1.0 - L_G)
}

pub fn tcb_to_tdb(jd_tcb: f64) -> f64 {
    jd_tcb - L_B * (jd_tcb - T0_JD) + TDB0_S / SECONDS_PER_DAY
}

pub fn tdb_to_tcb(jd_tdb: f64) -> f64 {
    T0_JD + (jd_tdb - T0_JD - TDB0_S / SECONDS_PER_DAY) / (1.0 - L_B)
}

/// TDB − TT in seconds, two-term periodic approximation (±30 μs).
fn tdb_minus_tt_s(jd: f64) -> f64 {
    let g = (357.53 + 0.985_600_3 * (jd - J2000_JD)).to_radians();
    0.001_658 * g.sin() + 0.000_014 * (2.0 * g).sin()
}

pub fn tt_to_tdb(jd_tt: f64) -> f64 {
    jd_tt + tdb_minus_tt_s(jd_tt) / SECONDS_PER_DAY
}

pub fn tdb_to_tt(jd_tdb: f64) -> f64 {
    jd_tdb - tdb_minus_tt_s(jd_tdb) / SECONDS_PER_DAY
}
