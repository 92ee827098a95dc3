//! Heliocentric position of Pluto (Meeus ch.37, coefficients after
//! Goffin 2000).
//!
//! Output is heliocentric ecliptic longitude and latitude (rad, mean
//! equinox J2000.0) and radius vector (AU), with analytic rates per day.
//! The series is only valid between 1885 and 2099.

use eph_time::{DAYS_PER_CENTURY, jd_to_centuries, normalize_radians};

use crate::evaluator::{Arguments, FundamentalArgument, PeriodicTerm, sum_terms_with_rate};
use crate::state::{Body, BodyState, StateUnits};

/// First and last Julian Day of the documented validity range
/// (1885-01-01 to 2099-12-31).
pub const VALID_JD: (f64, f64) = (2_409_542.5, 2_488_068.5);

/// `[J, S, P]`: mean longitudes of Jupiter, Saturn and Pluto.
pub const ARGUMENTS: [FundamentalArgument; 3] = [
    FundamentalArgument::new([34.35, 3034.9057, 0.0, 0.0, 0.0]),
    FundamentalArgument::new([50.08, 1222.1138, 0.0, 0.0, 0.0]),
    FundamentalArgument::new([238.96, 144.96, 0.0, 0.0, 0.0]),
];

/// Row of table 37.A. Each channel is a `(sin, cos)` amplitude pair:
/// longitude and latitude in 1e-6 degrees, radius in 1e-7 AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlutoTerm {
    pub multipliers: [i8; 3],
    pub longitude: [f64; 2],
    pub latitude: [f64; 2],
    pub radius: [f64; 2],
}

impl PeriodicTerm<3> for PlutoTerm {
    fn multipliers(&self) -> &[i8; 3] {
        &self.multipliers
    }
}

#[allow(clippy::too_many_arguments)]
const fn pt(j: i8, s: i8, p: i8, la: i32, lb: i32, ba: i32, bb: i32, ra: i32, rb: i32) -> PlutoTerm {
    PlutoTerm {
        multipliers: [j, s, p],
        longitude: [la as f64, lb as f64],
        latitude: [ba as f64, bb as f64],
        radius: [ra as f64, rb as f64],
    }
}

#[rustfmt::skip]
pub static TERMS: [PlutoTerm; 43] = [
    pt(0,  0,  1, -19798886,  19848454,  -5453098, -14974876,  66867334,  68955876),
    pt(0,  0,  2,    897499,  -4955707,   3527363,   1672673, -11826086,   -333765),
    pt(0,  0,  3,    610820,   1210521,  -1050939,    327763,   1593657,  -1439953),
    pt(0,  0,  4,   -341639,   -189719,    178691,   -291925,    -18948,    482443),
    pt(0,  0,  5,    129027,    -34863,     18763,    100448,    -66634,    -85576),
    pt(0,  0,  6,    -38215,     31061,    -30594,    -25838,     30841,     -5765),
    pt(0,  1, -1,     20349,     -9886,      4965,     11263,     -6140,     22254),
    pt(0,  1,  0,     -4045,     -4904,       310,      -132,      4434,      4443),
    pt(0,  1,  1,     -5885,     -3238,      2036,      -947,     -1518,       641),
    pt(0,  1,  2,     -3812,      3011,        -2,      -674,        -5,       792),
    pt(0,  1,  3,      -601,      3468,      -329,      -563,       518,       518),
    pt(0,  2, -2,      1237,       463,       -64,        39,       -13,      -221),
    pt(0,  2, -1,      1086,      -911,       -94,       210,       837,      -494),
    pt(0,  2,  0,       595,     -1229,        -8,      -160,      -281,       616),
    pt(1, -1,  0,      2484,      -485,      -177,       259,       260,      -395),
    pt(1, -1,  1,       839,     -1414,        17,       234,      -191,      -396),
    pt(1,  0, -3,      -964,      1059,       582,      -285,     -3218,       370),
    pt(1,  0, -2,     -2303,     -1038,      -298,       692,      8019,     -7869),
    pt(1,  0, -1,      7049,       747,       157,       201,       105,     45637),
    pt(1,  0,  0,      1179,      -358,       304,       825,      8623,      8444),
    pt(1,  0,  1,       393,       -63,      -124,       -29,      -896,      -801),
    pt(1,  0,  2,       111,      -268,        15,         8,       208,      -122),
    pt(1,  0,  3,       -52,      -154,         7,        15,      -133,        65),
    pt(1,  0,  4,       -78,       -30,         2,         2,       -16,         1),
    pt(1,  1, -3,       -34,       -26,         4,         2,       -22,         7),
    pt(1,  1, -2,       -43,         1,         3,         0,        -8,        16),
    pt(1,  1, -1,       -15,        21,         1,        -1,         2,         9),
    pt(1,  1,  0,        -1,        15,         0,        -2,        12,         5),
    pt(1,  1,  1,         4,         7,         1,         0,         1,        -3),
    pt(1,  1,  3,         1,         5,         1,        -1,         1,         0),
    pt(2,  0, -6,         8,         3,        -2,        -3,         9,         5),
    pt(2,  0, -5,        -3,         6,         1,         2,         2,        -1),
    pt(2,  0, -4,         6,       -13,        -8,         2,        14,        10),
    pt(2,  0, -3,        10,        22,        10,        -7,       -65,        12),
    pt(2,  0, -2,       -57,       -32,         0,        21,       126,      -233),
    pt(2,  0, -1,       157,       -46,         8,         5,       270,      1068),
    pt(2,  0,  0,        12,       -18,        13,        16,       254,       155),
    pt(2,  0,  1,        -4,         8,        -2,        -3,       -26,        -2),
    pt(2,  0,  2,        -5,         0,         0,         0,         7,         0),
    pt(2,  0,  3,         3,         4,         0,         1,       -11,         4),
    pt(3,  0, -2,        -1,        -1,         0,         1,         4,       -14),
    pt(3,  0, -1,         6,        -3,         0,         0,        18,        35),
    pt(3,  0,  0,        -1,        -2,         0,         1,        13,         3),
];

/// Whether `jd` lies inside [`VALID_JD`].
pub fn pluto_in_range(jd: f64) -> bool {
    (VALID_JD.0..=VALID_JD.1).contains(&jd)
}

/// Heliocentric L, B, R of Pluto with analytic rates.
///
/// Outside [`VALID_JD`] the result degrades quickly; callers that care
/// should check [`pluto_in_range`] first.
pub fn pluto_state(jd: f64) -> BodyState {
    let t = jd_to_centuries(jd);
    let args = Arguments::evaluate(&ARGUMENTS, t);

    let [l, l_rate, b, b_rate, r, r_rate] = sum_terms_with_rate(&TERMS, &args, |row, phase, rate| {
        let (s, c) = phase.sin_cos();
        let channel = |[a, b]: [f64; 2]| (a * s + b * c, (a * c - b * s) * rate);
        let (l, dl) = channel(row.longitude);
        let (b, db) = channel(row.latitude);
        let (r, dr) = channel(row.radius);
        [l, dl, b, db, r, dr]
    });

    let micro_deg = 1e-6_f64.to_radians();
    let longitude = normalize_radians((238.956_785 + 144.96 * t).to_radians() + l * micro_deg);
    let latitude = -3.908_202_f64.to_radians() + b * micro_deg;
    let radius = 40.724_724_8 + r * 1e-7;

    let per_day = 1.0 / DAYS_PER_CENTURY;
    let velocity = [
        (144.96_f64.to_radians() + l_rate * micro_deg) * per_day,
        b_rate * micro_deg * per_day,
        r_rate * 1e-7 * per_day,
    ];

    BodyState {
        body: Body::Pluto,
        jd,
        position: [longitude, latitude, radius],
        velocity,
        units: StateUnits::HeliocentricSpherical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn meeus_37a() {
        let s = pluto_state(2_448_908.5);
        assert_abs_diff_eq!(s.position[0].to_degrees(), 232.740_093_0, epsilon = 1e-6);
        assert_abs_diff_eq!(s.position[1].to_degrees(), 14.587_687_3, epsilon = 1e-6);
        assert_abs_diff_eq!(s.position[2], 29.711_382_5, epsilon = 1e-7);
        assert_eq!(s.units, StateUnits::HeliocentricSpherical);
    }

    #[test]
    fn velocity_matches_finite_difference() {
        let jd = 2_448_908.5;
        let h = 0.5;
        let a = pluto_state(jd - h);
        let b = pluto_state(jd + h);
        let s = pluto_state(jd);
        for i in 0..3 {
            let numeric = (b.position[i] - a.position[i]) / (2.0 * h);
            assert!(
                (s.velocity[i] - numeric).abs() < 1e-9,
                "component {i}: {} vs {numeric}",
                s.velocity[i]
            );
        }
    }

    #[test]
    fn validity_range() {
        assert!(pluto_in_range(2_451_545.0));
        assert!(!pluto_in_range(2_300_000.0));
    }
}
