//! Worked calendar and sidereal-time examples from Meeus, plus
//! property checks over the public conversion chain.

use approx::assert_abs_diff_eq;
use eph_time::scales::{gps_to_tai, tai_to_tt, tdb_to_tt, tt_to_tdb};
use eph_time::{
    SECONDS_PER_DAY, calendar_to_jd, delta_t, jd_to_calendar, julian_calendar_to_jd,
    mean_sidereal_time_0h, mean_sidereal_time_by_day_fraction, mean_sidereal_time_degrees,
};
use proptest::prelude::*;

#[test]
fn sputnik_launch_date() {
    // Example 7.a: 1957 October 4.81
    let jd = calendar_to_jd(1957, 10, 4.81);
    assert_abs_diff_eq!(jd, 2_436_116.31, epsilon = 1e-6);

    // Example 7.c goes the other way
    let (y, m, d) = jd_to_calendar(jd);
    assert_eq!((y, m), (1957, 10));
    assert_abs_diff_eq!(d, 4.81, epsilon = 1e-6);
}

#[test]
fn julian_calendar_date() {
    // Example 7.b: 333 January 27, 12h
    assert_abs_diff_eq!(julian_calendar_to_jd(333, 1, 27.5), 1_842_713.0, epsilon = 1e-9);
    let (y, m, d) = jd_to_calendar(1_842_713.0);
    assert_eq!((y, m), (333, 1));
    assert_abs_diff_eq!(d, 27.5, epsilon = 1e-9);
}

#[test]
fn mean_sidereal_time_at_0h() {
    // Example 12.a: 1987 April 10, 0h UT -> 13h10m46.3668s
    let st = mean_sidereal_time_0h(2_446_895.5);
    assert_eq!((st.hours, st.minutes), (13, 10));
    assert_abs_diff_eq!(st.seconds, 46.3668, epsilon = 1e-3);
}

#[test]
fn mean_sidereal_time_at_instant() {
    // Example 12.b: 1987 April 10, 19h21m00s UT -> 128.7378734°
    let jd = 2_446_896.306_25;
    assert_abs_diff_eq!(mean_sidereal_time_degrees(jd), 128.737_873_4, epsilon = 1e-6);
    assert_abs_diff_eq!(
        mean_sidereal_time_by_day_fraction(jd),
        mean_sidereal_time_degrees(jd),
        epsilon = 0.1 / 3600.0
    );
}

#[test]
fn gps_to_tt_chain() {
    let jd_gps = 2_460_000.5;
    let jd_tt = tai_to_tt(gps_to_tai(jd_gps));
    assert_abs_diff_eq!((jd_tt - jd_gps) * SECONDS_PER_DAY, 51.184, epsilon = 1e-3);
}

#[test]
fn delta_t_near_j2000() {
    let dt = delta_t(2000.0);
    assert!((62.0..66.0).contains(&dt), "ΔT(2000) = {dt}");
    assert!(delta_t(1900.0) < 0.0);
}

proptest! {
    #[test]
    fn calendar_roundtrip(jd in 2_299_160.5f64..2_600_000.0) {
        let (y, m, d) = jd_to_calendar(jd);
        prop_assert!((1..=12).contains(&m));
        prop_assert!((1.0..32.0).contains(&d));
        prop_assert!((calendar_to_jd(y, m, d) - jd).abs() < 1e-6);
    }

    #[test]
    fn tdb_tt_roundtrip(jd in 2_300_000.0f64..2_600_000.0) {
        prop_assert!((tdb_to_tt(tt_to_tdb(jd)) - jd).abs() * SECONDS_PER_DAY < 1e-3);
    }
}
