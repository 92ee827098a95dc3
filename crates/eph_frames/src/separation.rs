//! Angular separation and position angle (Meeus ch.17).

use eph_time::normalize_radians;

use crate::coords::{Ecliptic, Equatorial, Galactic};

/// A point on the celestial sphere given by a longitude-like and a
/// latitude-like angle in the same frame.
pub trait CelestialPoint {
    fn longitude(&self) -> f64;
    fn latitude(&self) -> f64;
}

impl CelestialPoint for Equatorial {
    fn longitude(&self) -> f64 {
        self.right_ascension
    }

    fn latitude(&self) -> f64 {
        self.declination
    }
}

impl CelestialPoint for Ecliptic {
    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl CelestialPoint for Galactic {
    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn latitude(&self) -> f64 {
        self.latitude
    }
}

/// Angular distance between two points in `[0, π]`.
///
/// Uses `atan2(√(x² + y²), z)` (Meeus p.116), which stays accurate for
/// both very small and near-antipodal separations where the plain
/// cosine rule loses precision.
pub fn angular_separation<P: CelestialPoint>(a: &P, b: &P) -> f64 {
    let (d1, d2) = (a.latitude(), b.latitude());
    let da = b.longitude() - a.longitude();
    let (s1, c1) = d1.sin_cos();
    let (s2, c2) = d2.sin_cos();
    let (sda, cda) = da.sin_cos();
    let x = c1 * s2 - s1 * c2 * cda;
    let y = c2 * sda;
    let z = s1 * s2 + c1 * c2 * cda;
    x.hypot(y).atan2(z)
}

/// Position angle of `a` relative to `b`, measured from north through
/// east, in `[0, 2π)`.
pub fn relative_position_angle(a: &Equatorial, b: &Equatorial) -> f64 {
    let da = a.right_ascension - b.right_ascension;
    let p = da
        .sin()
        .atan2(b.declination.cos() * a.declination.tan() - b.declination.sin() * da.cos());
    normalize_radians(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn meeus_17a_arcturus_spica() {
        let arcturus = Equatorial::from_degrees(213.9154, 19.1825);
        let spica = Equatorial::from_degrees(201.2983, -11.1614);
        let d = angular_separation(&arcturus, &spica);
        // book value 32.7930° is rounded to four decimals
        assert_abs_diff_eq!(d, 32.7930f64.to_radians(), epsilon = 5e-6);
        assert_abs_diff_eq!(d.to_degrees(), 32.793_027, epsilon = 1e-6);
    }

    #[test]
    fn tiny_separation_is_resolved() {
        let a = Equatorial::from_degrees(10.0, 20.0);
        let b = Equatorial::from_degrees(10.0, 20.0 + 1e-7);
        assert_abs_diff_eq!(angular_separation(&a, &b).to_degrees(), 1e-7, epsilon = 1e-12);
    }

    #[test]
    fn antipodal_points() {
        let a = Ecliptic::from_degrees(0.0, 0.0);
        let b = Ecliptic::from_degrees(180.0, 0.0);
        assert_abs_diff_eq!(angular_separation(&a, &b), std::f64::consts::PI, epsilon = 1e-12);
    }

    #[test]
    fn position_angle_north_and_east() {
        let base = Equatorial::from_degrees(100.0, 0.0);
        let north = Equatorial::from_degrees(100.0, 1.0);
        let east = Equatorial::from_degrees(101.0, 0.0);
        assert_abs_diff_eq!(relative_position_angle(&north, &base), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            relative_position_angle(&east, &base).to_degrees(),
            90.0,
            epsilon = 1e-9
        );
    }

    fn point() -> impl Strategy<Value = Equatorial> {
        (0.0f64..360.0, -89.0f64..89.0).prop_map(|(a, d)| Equatorial::from_degrees(a, d))
    }

    proptest! {
        #[test]
        fn separation_is_symmetric(a in point(), b in point()) {
            let ab = angular_separation(&a, &b);
            let ba = angular_separation(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-12);
            prop_assert!((0.0..=std::f64::consts::PI).contains(&ab));
        }

        #[test]
        fn separation_to_self_is_zero(a in point()) {
            prop_assert!(angular_separation(&a, &a).abs() < 1e-15);
        }
    }
}
