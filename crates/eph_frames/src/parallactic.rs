//! Parallactic angle and the ecliptic's intersection with the horizon
//! (Meeus ch.14).

use eph_time::normalize_radians;

/// Parallactic angle q (eq. 14.1) for observer latitude `lat`, object
/// declination `dec` and local hour angle `h`. Radians in `(-π, π]`.
///
/// Undefined at the zenith, and zero on the meridian south of it.
pub fn parallactic_angle(lat: f64, dec: f64, h: f64) -> f64 {
    h.sin().atan2(lat.tan() * dec.cos() - dec.sin() * h.cos())
}

/// Where the ecliptic meets the horizon (eq. 14.2, 14.3).
///
/// Returns `(λ, I)`: the longitude of one intersection point (the other
/// is at λ + π) normalized to `[0, 2π)`, and the angle between the
/// ecliptic and the horizon. Radians.
pub fn ecliptic_on_horizon(obliquity: f64, lat: f64, local_sidereal_time: f64) -> (f64, f64) {
    let (se, ce) = obliquity.sin_cos();
    let (st, ct) = local_sidereal_time.sin_cos();
    let lambda = (-ct).atan2(se * lat.tan() + ce * st);
    let inclination = (ce * lat.sin() - se * lat.cos() * st).acos();
    (normalize_radians(lambda), inclination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use eph_time::{AngleOfArc, HourAngle};

    fn dms(d: i32, m: u32) -> f64 {
        AngleOfArc::new(d, m, 0.0).unwrap().to_radians()
    }

    #[test]
    fn ecliptic_angle_extremes_at_48_north() {
        let eps = dms(23, 26);
        let lat = dms(48, 0);
        let (_, i_max) = ecliptic_on_horizon(eps, lat, 90f64.to_radians());
        assert_abs_diff_eq!(i_max, dms(65, 26), epsilon = 5e-9);
        let (_, i_min) = ecliptic_on_horizon(eps, lat, 270f64.to_radians());
        assert_abs_diff_eq!(i_min, dms(18, 34), epsilon = 5e-9);
    }

    #[test]
    fn meeus_14a() {
        let eps = dms(23, 44);
        let lat = 51f64.to_radians();
        let lst = HourAngle::new(5, 0, 0.0).unwrap().to_radians();
        let (lambda, i) = ecliptic_on_horizon(eps, lat, lst);
        // 349°21′ and 62°
        assert_abs_diff_eq!(lambda.to_degrees(), 349.387_03, epsilon = 1e-4);
        assert_abs_diff_eq!(i.to_degrees(), 62.175_61, epsilon = 1e-4);
    }

    #[test]
    fn parallactic_zero_on_meridian() {
        let q = parallactic_angle(50f64.to_radians(), 10f64.to_radians(), 0.0);
        assert_abs_diff_eq!(q, 0.0, epsilon = 1e-15);
        let east = parallactic_angle(50f64.to_radians(), 10f64.to_radians(), -0.5);
        let west = parallactic_angle(50f64.to_radians(), 10f64.to_radians(), 0.5);
        assert!(east < 0.0 && west > 0.0);
        assert_abs_diff_eq!(east, -west, epsilon = 1e-15);
    }
}
