//! Whole-catalog checks of the rotation cache.

use approx::assert_abs_diff_eq;
use eph_rotation::{IauBody, RotationCache, RotationError, orientation};
use eph_time::{DAYS_PER_CENTURY, J2000_JD};
use proptest::prelude::*;

#[test]
fn every_body_has_finite_orientation() {
    let mut cache = RotationCache::new();
    for jd in [J2000_JD, 2_460_676.5, J2000_JD + DAYS_PER_CENTURY / 2.0] {
        cache.step(jd);
        for o in cache.orientations().unwrap() {
            assert!(o.right_ascension.is_finite(), "{} ra at {jd}", o.body);
            assert!(o.declination.abs() <= std::f64::consts::FRAC_PI_2, "{} dec", o.body);
            assert!(o.prime_meridian.is_finite(), "{} W at {jd}", o.body);
        }
    }
}

#[test]
fn one_shot_matches_shared_cache() {
    let jd = 2_458_849.5;
    let mut cache = RotationCache::new();
    cache.step(jd);
    for body in [IauBody::Moon, IauBody::Phobos, IauBody::Triton, IauBody::Jupiter] {
        assert_eq!(orientation(body, jd).unwrap(), cache.orientation(body).unwrap());
    }
}

#[test]
fn earth_prime_meridian_advances_one_sidereal_turn() {
    // 360.9856235°/day: after one day W gains 0.9856235° modulo a full turn.
    let a = orientation(IauBody::Earth, J2000_JD).unwrap();
    let b = orientation(IauBody::Earth, J2000_JD + 1.0).unwrap();
    let delta = (b.prime_meridian - a.prime_meridian).to_degrees();
    assert_abs_diff_eq!(delta, 0.9856235, epsilon = 1e-9);
}

#[test]
fn jupiter_pole_near_published_direction() {
    let o = orientation(IauBody::Jupiter, J2000_JD).unwrap();
    assert_abs_diff_eq!(o.right_ascension.to_degrees(), 268.0566, epsilon = 0.01);
    assert_abs_diff_eq!(o.declination.to_degrees(), 64.4953, epsilon = 0.01);
}

#[test]
fn stale_query_names_both_epochs() {
    let mut cache = RotationCache::new();
    cache.step(J2000_JD);
    let err = cache.orientation_at(IauBody::Titan, J2000_JD + 2.0).unwrap_err();
    assert!(matches!(err, RotationError::StaleCache { .. }));
    let msg = err.to_string();
    assert!(msg.contains("2451545") && msg.contains("2451547"), "{msg}");
}

proptest! {
    #[test]
    fn angles_stay_normalized(offset in -73_000.0f64..73_000.0, idx in 0usize..73) {
        let body = IauBody::ALL[idx];
        let o = orientation(body, J2000_JD + offset).unwrap();
        prop_assert!((0.0..std::f64::consts::TAU).contains(&o.right_ascension));
        prop_assert!((0.0..std::f64::consts::TAU).contains(&o.prime_meridian));
    }
}
