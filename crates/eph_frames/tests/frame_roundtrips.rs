//! Round-trip and chained-conversion properties across the frame modules.

use eph_frames::{
    Ecliptic, Equatorial, Galactic, Geographic, J2000_OBLIQUITY, NutationModel, ObliquityModel,
    angular_separation, apparent_sidereal_time_degrees, ecliptic_to_equatorial,
    equatorial_to_ecliptic, equatorial_to_galactic, equatorial_to_horizontal_gst,
    galactic_to_equatorial, horizontal_to_equatorial_gst, true_obliquity,
};
use proptest::prelude::*;

fn wrapped_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(std::f64::consts::TAU);
    d.min(std::f64::consts::TAU - d)
}

proptest! {
    #[test]
    fn equatorial_ecliptic_roundtrip(
        ra in 0.0f64..360.0,
        dec in -85.0f64..85.0,
        eps in 22.0f64..25.0,
    ) {
        let eq = Equatorial::from_degrees(ra, dec);
        let eps = eps.to_radians();
        let back = ecliptic_to_equatorial(&equatorial_to_ecliptic(&eq, eps), eps);
        prop_assert!(wrapped_diff(back.right_ascension, eq.right_ascension) < 1e-10);
        prop_assert!((back.declination - eq.declination).abs() < 1e-10);
    }

    #[test]
    fn ecliptic_equatorial_roundtrip(lon in 0.0f64..360.0, lat in -85.0f64..85.0) {
        let ecl = Ecliptic::from_degrees(lon, lat);
        let back = equatorial_to_ecliptic(&ecliptic_to_equatorial(&ecl, J2000_OBLIQUITY), J2000_OBLIQUITY);
        prop_assert!(wrapped_diff(back.longitude, ecl.longitude) < 1e-10);
        prop_assert!((back.latitude - ecl.latitude).abs() < 1e-10);
    }

    #[test]
    fn galactic_roundtrip(l in 0.0f64..360.0, b in -85.0f64..85.0) {
        let gal = Galactic::from_degrees(l, b);
        let back = equatorial_to_galactic(&galactic_to_equatorial(&gal));
        prop_assert!(wrapped_diff(back.longitude, gal.longitude) < 1e-10);
        prop_assert!((back.latitude - gal.latitude).abs() < 1e-10);
    }

    #[test]
    fn horizontal_roundtrip(
        ra in 0.0f64..360.0,
        dec in -80.0f64..80.0,
        gst in 0.0f64..360.0,
        lon in -180.0f64..180.0,
        lat in -80.0f64..80.0,
    ) {
        let eq = Equatorial::from_degrees(ra, dec);
        let observer = Geographic::from_degrees(lon, lat);
        let gst = gst.to_radians();
        let hor = equatorial_to_horizontal_gst(&eq, gst, &observer);
        prop_assume!(hor.altitude.abs() < 85f64.to_radians());
        let back = horizontal_to_equatorial_gst(&hor, gst, &observer);
        prop_assert!(angular_separation(&eq, &back) < 1e-9);
    }

    #[test]
    fn conversions_preserve_separation(
        a in (0.0f64..360.0, -80.0f64..80.0),
        b in (0.0f64..360.0, -80.0f64..80.0),
    ) {
        let p = Equatorial::from_degrees(a.0, a.1);
        let q = Equatorial::from_degrees(b.0, b.1);
        let d_eq = angular_separation(&p, &q);
        let d_ecl = angular_separation(
            &equatorial_to_ecliptic(&p, J2000_OBLIQUITY),
            &equatorial_to_ecliptic(&q, J2000_OBLIQUITY),
        );
        prop_assert!((d_eq - d_ecl).abs() < 1e-10);
    }
}

#[test]
fn true_obliquity_and_apparent_sidereal_time_chain() {
    // Meeus 12.a date: true obliquity 23°26′36.85″, sidereal time within
    // the day's range.
    let jd = 2_446_895.5;
    let eps = true_obliquity(jd, ObliquityModel::Laskar, NutationModel::Full);
    assert!((eps.to_degrees() - 23.443_569_4).abs() < 1e-6);
    let ast = apparent_sidereal_time_degrees(jd);
    assert!((0.0..360.0).contains(&ast));
}
