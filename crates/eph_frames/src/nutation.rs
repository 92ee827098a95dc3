//! Nutation in longitude and obliquity (Meeus ch.22, IAU 1980 theory).
//!
//! Two fidelity levels:
//! - [`Nutation::full`]: the 63-term series, good to about 0.0003″.
//! - [`Nutation::fast`]: four terms per component, good to about 0.5″ in
//!   Δψ and 0.1″ in Δε. A reduced-accuracy mode, never substituted for the
//!   full series implicitly.

use eph_series::evaluator::{Arguments, FundamentalArgument, PeriodicTerm, sum_terms};
use eph_time::{ARCSEC_TO_RAD, jd_to_centuries};
use serde::Deserialize;

/// Which nutation series to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutationModel {
    #[default]
    Full,
    Fast,
}

/// `[D, M, M′, F, Ω]` (Meeus p.144).
pub const ARGUMENTS: [FundamentalArgument; 5] = [
    FundamentalArgument::new([297.850_36, 445_267.111_480, -0.001_914_2, 1.0 / 189_474.0, 0.0]),
    FundamentalArgument::new([357.527_72, 35_999.050_340, -0.000_160_3, -1.0 / 300_000.0, 0.0]),
    FundamentalArgument::new([134.962_98, 477_198.867_398, 0.008_697_2, 1.0 / 56_250.0, 0.0]),
    FundamentalArgument::new([93.271_91, 483_202.017_538, -0.003_682_5, 1.0 / 327_270.0, 0.0]),
    FundamentalArgument::new([125.044_52, -1_934.136_261, 0.002_070_8, 1.0 / 450_000.0, 0.0]),
];

/// Row of table 22.A. Coefficients in units of 0.0001″: Δψ uses
/// `(s0 + s1·T)·sin φ`, Δε uses `(c0 + c1·T)·cos φ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutationTerm {
    pub multipliers: [i8; 5],
    pub sin: [f64; 2],
    pub cos: [f64; 2],
}

impl PeriodicTerm<5> for NutationTerm {
    fn multipliers(&self) -> &[i8; 5] {
        &self.multipliers
    }
}

#[allow(clippy::too_many_arguments)]
const fn nt(d: i8, m: i8, mp: i8, f: i8, om: i8, s0: f64, s1: f64, c0: f64, c1: f64) -> NutationTerm {
    NutationTerm {
        multipliers: [d, m, mp, f, om],
        sin: [s0, s1],
        cos: [c0, c1],
    }
}

#[rustfmt::skip]
pub static TERMS: [NutationTerm; 63] = [
    nt( 0,  0,  0,  0,  1, -171996.0, -174.2, 92025.0,   8.9),
    nt(-2,  0,  0,  2,  2, -13187.0,   -1.6,  5736.0,  -3.1),
    nt( 0,  0,  0,  2,  2,  -2274.0,   -0.2,   977.0,  -0.5),
    nt( 0,  0,  0,  0,  2,   2062.0,    0.2,  -895.0,   0.5),
    nt( 0,  1,  0,  0,  0,   1426.0,   -3.4,    45.0,  -0.1),
    nt( 0,  0,  1,  0,  0,    712.0,    0.1,    -7.0,   0.0),
    nt(-2,  1,  0,  2,  2,   -517.0,    1.2,   224.0,  -0.6),
    nt( 0,  0,  0,  2,  1,   -386.0,   -0.4,   200.0,   0.0),
    nt( 0,  0,  1,  2,  2,   -301.0,    0.0,   129.0,  -0.1),
    nt(-2, -1,  0,  2,  2,    217.0,   -0.5,   -95.0,   0.3),
    nt(-2,  0,  1,  0,  0,   -158.0,    0.0,     0.0,   0.0),
    nt(-2,  0,  0,  2,  1,    129.0,    0.1,   -70.0,   0.0),
    nt( 0,  0, -1,  2,  2,    123.0,    0.0,   -53.0,   0.0),
    nt( 2,  0,  0,  0,  0,     63.0,    0.0,     0.0,   0.0),
    nt( 0,  0,  1,  0,  1,     63.0,    0.1,   -33.0,   0.0),
    nt( 2,  0, -1,  2,  2,    -59.0,    0.0,    26.0,   0.0),
    nt( 0,  0, -1,  0,  1,    -58.0,   -0.1,    32.0,   0.0),
    nt( 0,  0,  1,  2,  1,    -51.0,    0.0,    27.0,   0.0),
    nt(-2,  0,  2,  0,  0,     48.0,    0.0,     0.0,   0.0),
    nt( 0,  0, -2,  2,  1,     46.0,    0.0,   -24.0,   0.0),
    nt( 2,  0,  0,  2,  2,    -38.0,    0.0,    16.0,   0.0),
    nt( 0,  0,  2,  2,  2,    -31.0,    0.0,    13.0,   0.0),
    nt( 0,  0,  2,  0,  0,     29.0,    0.0,     0.0,   0.0),
    nt(-2,  0,  1,  2,  2,     29.0,    0.0,   -12.0,   0.0),
    nt( 0,  0,  0,  2,  0,     26.0,    0.0,     0.0,   0.0),
    nt(-2,  0,  0,  2,  0,    -22.0,    0.0,     0.0,   0.0),
    nt( 0,  0, -1,  2,  1,     21.0,    0.0,   -10.0,   0.0),
    nt( 0,  2,  0,  0,  0,     17.0,   -0.1,     0.0,   0.0),
    nt( 2,  0, -1,  0,  1,     16.0,    0.0,    -8.0,   0.0),
    nt(-2,  2,  0,  2,  2,    -16.0,    0.1,     7.0,   0.0),
    nt( 0,  1,  0,  0,  1,    -15.0,    0.0,     9.0,   0.0),
    nt(-2,  0,  1,  0,  1,    -13.0,    0.0,     7.0,   0.0),
    nt( 0, -1,  0,  0,  1,    -12.0,    0.0,     6.0,   0.0),
    nt( 0,  0,  2, -2,  0,     11.0,    0.0,     0.0,   0.0),
    nt( 2,  0, -1,  2,  1,    -10.0,    0.0,     5.0,   0.0),
    nt( 2,  0,  1,  2,  2,     -8.0,    0.0,     3.0,   0.0),
    nt( 0,  1,  0,  2,  2,      7.0,    0.0,    -3.0,   0.0),
    nt(-2,  1,  1,  0,  0,     -7.0,    0.0,     0.0,   0.0),
    nt( 0, -1,  0,  2,  2,     -7.0,    0.0,     3.0,   0.0),
    nt( 2,  0,  0,  2,  1,     -7.0,    0.0,     3.0,   0.0),
    nt( 2,  0,  1,  0,  0,      6.0,    0.0,     0.0,   0.0),
    nt(-2,  0,  2,  2,  2,      6.0,    0.0,    -3.0,   0.0),
    nt(-2,  0,  1,  2,  1,      6.0,    0.0,    -3.0,   0.0),
    nt( 2,  0, -2,  0,  1,     -6.0,    0.0,     3.0,   0.0),
    nt( 2,  0,  0,  0,  1,     -6.0,    0.0,     3.0,   0.0),
    nt( 0, -1,  1,  0,  0,      5.0,    0.0,     0.0,   0.0),
    nt(-2, -1,  0,  2,  1,     -5.0,    0.0,     3.0,   0.0),
    nt(-2,  0,  0,  0,  1,     -5.0,    0.0,     3.0,   0.0),
    nt( 0,  0,  2,  2,  1,     -5.0,    0.0,     3.0,   0.0),
    nt(-2,  0,  2,  0,  1,      4.0,    0.0,     0.0,   0.0),
    nt(-2,  1,  0,  2,  1,      4.0,    0.0,     0.0,   0.0),
    nt( 0,  0,  1, -2,  0,      4.0,    0.0,     0.0,   0.0),
    nt(-1,  0,  1,  0,  0,     -4.0,    0.0,     0.0,   0.0),
    nt(-2,  1,  0,  0,  0,     -4.0,    0.0,     0.0,   0.0),
    nt( 1,  0,  0,  0,  0,     -4.0,    0.0,     0.0,   0.0),
    nt( 0,  0,  1,  2,  0,      3.0,    0.0,     0.0,   0.0),
    nt( 0,  0, -2,  2,  2,     -3.0,    0.0,     0.0,   0.0),
    nt(-1, -1,  1,  0,  0,     -3.0,    0.0,     0.0,   0.0),
    nt( 0,  1,  1,  0,  0,     -3.0,    0.0,     0.0,   0.0),
    nt( 0, -1,  1,  2,  2,     -3.0,    0.0,     0.0,   0.0),
    nt( 2, -1, -1,  2,  2,     -3.0,    0.0,     0.0,   0.0),
    nt( 0,  0,  3,  2,  2,     -3.0,    0.0,     0.0,   0.0),
    nt( 2, -1,  0,  2,  2,     -3.0,    0.0,     0.0,   0.0),
];

/// Full-series `(Δψ, Δε)` in arcseconds at `t` Julian centuries.
pub fn nutation_arcsec(t: f64) -> (f64, f64) {
    let args = Arguments::evaluate(&ARGUMENTS, t);
    let [dpsi, deps] = sum_terms(&TERMS, &args, |row, phase| {
        let (s, c) = phase.sin_cos();
        [
            (row.sin[0] + row.sin[1] * t) * s,
            (row.cos[0] + row.cos[1] * t) * c,
        ]
    });
    (dpsi * 1e-4, deps * 1e-4)
}

/// Two-term `(Δψ, Δε)` in arcseconds at `t` Julian centuries.
pub fn fast_nutation_arcsec(t: f64) -> (f64, f64) {
    let omega = ARGUMENTS[4].evaluate(t);
    let l = FundamentalArgument::new([280.4665, 36_000.7698, 0.0, 0.0, 0.0]).evaluate(t);
    let lp = FundamentalArgument::new([218.3165, 481_267.8813, 0.0, 0.0, 0.0]).evaluate(t);

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * l).sin() - 0.23 * (2.0 * lp).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * l).cos() + 0.10 * (2.0 * lp).cos()
        - 0.09 * (2.0 * omega).cos();
    (dpsi, deps)
}

/// Nutation in longitude (Δψ) and obliquity (Δε), radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    pub longitude: f64,
    pub obliquity: f64,
}

impl Nutation {
    fn from_arcsec((dpsi, deps): (f64, f64)) -> Self {
        Self {
            longitude: dpsi * ARCSEC_TO_RAD,
            obliquity: deps * ARCSEC_TO_RAD,
        }
    }

    /// Full 63-term series at `jd` (TT).
    pub fn full(jd: f64) -> Self {
        Self::from_arcsec(nutation_arcsec(jd_to_centuries(jd)))
    }

    /// Reduced-accuracy two-term form at `jd` (TT).
    pub fn fast(jd: f64) -> Self {
        Self::from_arcsec(fast_nutation_arcsec(jd_to_centuries(jd)))
    }

    pub fn compute(jd: f64, model: NutationModel) -> Self {
        match model {
            NutationModel::Full => Self::full(jd),
            NutationModel::Fast => Self::fast(jd),
        }
    }

    pub fn longitude_arcsec(&self) -> f64 {
        self.longitude / ARCSEC_TO_RAD
    }

    pub fn obliquity_arcsec(&self) -> f64 {
        self.obliquity / ARCSEC_TO_RAD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn meeus_22a_full() {
        let n = Nutation::full(2_446_895.5);
        assert_abs_diff_eq!(n.longitude_arcsec(), -3.788, epsilon = 5e-4);
        assert_abs_diff_eq!(n.obliquity_arcsec(), 9.443, epsilon = 5e-4);
    }

    #[test]
    fn meeus_22a_fast_is_within_half_arcsecond() {
        let n = Nutation::fast(2_446_895.5);
        assert_abs_diff_eq!(n.longitude_arcsec(), -3.788, epsilon = 0.1);
        assert_abs_diff_eq!(n.obliquity_arcsec(), 9.443, epsilon = 0.1);
    }

    #[test]
    fn fast_tracks_full_over_a_century() {
        for i in 0..100 {
            let jd = 2_451_545.0 + i as f64 * 365.25;
            let full = Nutation::full(jd);
            let fast = Nutation::fast(jd);
            assert!((full.longitude_arcsec() - fast.longitude_arcsec()).abs() < 1.0);
            assert!((full.obliquity_arcsec() - fast.obliquity_arcsec()).abs() < 0.5);
        }
    }

    #[test]
    fn compute_dispatches() {
        let jd = 2_460_000.5;
        assert_eq!(Nutation::compute(jd, NutationModel::Full), Nutation::full(jd));
        assert_eq!(Nutation::compute(jd, NutationModel::Fast), Nutation::fast(jd));
    }

    #[test]
    fn amplitude_bounds() {
        for i in 0..50 {
            let n = Nutation::full(2_440_000.5 + i as f64 * 137.0);
            assert!(n.longitude_arcsec().abs() < 20.0);
            assert!(n.obliquity_arcsec().abs() < 10.5);
        }
    }
}
