//! Closed-form conversions between equatorial, ecliptic, horizontal and
//! galactic coordinates (Meeus ch.13).
//!
//! Every conversion has an inverse here. Output right ascensions,
//! longitudes and azimuths are normalized to `[0, 2π)`.

use eph_time::normalize_radians;

use crate::coords::{Ecliptic, Equatorial, Galactic, Geographic, Horizontal};

/// Right ascension of the galactic north pole, B1950.0 (192.25°).
pub const GALACTIC_POLE_RA: f64 = 192.25 * std::f64::consts::PI / 180.0;
/// Declination of the galactic north pole, B1950.0 (27.4°).
pub const GALACTIC_POLE_DEC: f64 = 27.4 * std::f64::consts::PI / 180.0;
const GALACTIC_L_OFFSET: f64 = 303.0 * std::f64::consts::PI / 180.0;
const GALACTIC_NODE_L: f64 = 123.0 * std::f64::consts::PI / 180.0;
const GALACTIC_RA_OFFSET: f64 = 12.25 * std::f64::consts::PI / 180.0;

/// Equatorial to ecliptic for obliquity `eps` (eq. 13.1, 13.2).
pub fn equatorial_to_ecliptic(eq: &Equatorial, eps: f64) -> Ecliptic {
    let (sa, ca) = eq.right_ascension.sin_cos();
    let (sd, cd) = eq.declination.sin_cos();
    let (se, ce) = eps.sin_cos();
    let lambda = (sa * ce + eq.declination.tan() * se).atan2(ca);
    let beta = (sd * ce - cd * se * sa).asin();
    Ecliptic {
        longitude: normalize_radians(lambda),
        latitude: beta,
    }
}

/// Ecliptic to equatorial for obliquity `eps` (eq. 13.3, 13.4).
pub fn ecliptic_to_equatorial(ecl: &Ecliptic, eps: f64) -> Equatorial {
    let (sl, cl) = ecl.longitude.sin_cos();
    let (sb, cb) = ecl.latitude.sin_cos();
    let (se, ce) = eps.sin_cos();
    let alpha = (sl * ce - ecl.latitude.tan() * se).atan2(cl);
    let delta = (sb * ce + cb * se * sl).asin();
    Equatorial {
        right_ascension: normalize_radians(alpha),
        declination: delta,
    }
}

/// Local hour angle H = θ − α, in `[0, 2π)`.
pub fn hour_angle(local_sidereal_time: f64, right_ascension: f64) -> f64 {
    normalize_radians(local_sidereal_time - right_ascension)
}

/// Local sidereal time from Greenwich sidereal time and a west-positive
/// longitude.
pub fn local_sidereal_time(greenwich_sidereal_time: f64, west_longitude: f64) -> f64 {
    normalize_radians(greenwich_sidereal_time - west_longitude)
}

/// Horizontal position of a point at hour angle `h` and declination
/// `dec`, for observer latitude `lat` (eq. 13.5, 13.6).
pub fn horizontal_from_hour_angle(h: f64, dec: f64, lat: f64) -> Horizontal {
    let (sh, ch) = h.sin_cos();
    let (sp, cp) = lat.sin_cos();
    let azimuth = sh.atan2(ch * sp - dec.tan() * cp);
    let altitude = (sp * dec.sin() + cp * dec.cos() * ch).asin();
    Horizontal {
        azimuth: normalize_radians(azimuth),
        altitude,
    }
}

/// Equatorial to horizontal given the local sidereal time.
pub fn equatorial_to_horizontal(eq: &Equatorial, local_sidereal_time: f64, lat: f64) -> Horizontal {
    let h = hour_angle(local_sidereal_time, eq.right_ascension);
    horizontal_from_hour_angle(h, eq.declination, lat)
}

/// Equatorial to horizontal given Greenwich sidereal time and the observer.
pub fn equatorial_to_horizontal_gst(
    eq: &Equatorial,
    greenwich_sidereal_time: f64,
    observer: &Geographic,
) -> Horizontal {
    let lst = local_sidereal_time(greenwich_sidereal_time, observer.longitude);
    equatorial_to_horizontal(eq, lst, observer.latitude)
}

/// Hour angle and declination of a horizontal position (inverse of
/// [`horizontal_from_hour_angle`]).
pub fn hour_angle_from_horizontal(hor: &Horizontal, lat: f64) -> (f64, f64) {
    let (sa, ca) = hor.azimuth.sin_cos();
    let (sp, cp) = lat.sin_cos();
    let h = sa.atan2(ca * sp + hor.altitude.tan() * cp);
    let dec = (sp * hor.altitude.sin() - cp * hor.altitude.cos() * ca).asin();
    (normalize_radians(h), dec)
}

/// Horizontal to equatorial given the local sidereal time.
pub fn horizontal_to_equatorial(hor: &Horizontal, local_sidereal_time: f64, lat: f64) -> Equatorial {
    let (h, dec) = hour_angle_from_horizontal(hor, lat);
    Equatorial {
        right_ascension: normalize_radians(local_sidereal_time - h),
        declination: dec,
    }
}

/// Horizontal to equatorial given Greenwich sidereal time and the observer.
pub fn horizontal_to_equatorial_gst(
    hor: &Horizontal,
    greenwich_sidereal_time: f64,
    observer: &Geographic,
) -> Equatorial {
    let lst = local_sidereal_time(greenwich_sidereal_time, observer.longitude);
    horizontal_to_equatorial(hor, lst, observer.latitude)
}

/// B1950 equatorial to galactic (eq. 13.7, 13.8).
pub fn equatorial_to_galactic(eq: &Equatorial) -> Galactic {
    let da = GALACTIC_POLE_RA - eq.right_ascension;
    let (sp, cp) = GALACTIC_POLE_DEC.sin_cos();
    let x = da.sin().atan2(da.cos() * sp - eq.declination.tan() * cp);
    let b = (eq.declination.sin() * sp + eq.declination.cos() * cp * da.cos()).asin();
    Galactic {
        longitude: normalize_radians(GALACTIC_L_OFFSET - x),
        latitude: b,
    }
}

/// Galactic to B1950 equatorial.
pub fn galactic_to_equatorial(gal: &Galactic) -> Equatorial {
    let dl = gal.longitude - GALACTIC_NODE_L;
    let (sp, cp) = GALACTIC_POLE_DEC.sin_cos();
    let y = dl.sin().atan2(dl.cos() * sp - gal.latitude.tan() * cp);
    let dec = (gal.latitude.sin() * sp + gal.latitude.cos() * cp * dl.cos()).asin();
    Equatorial {
        right_ascension: normalize_radians(y + GALACTIC_RA_OFFSET),
        declination: dec,
    }
}
