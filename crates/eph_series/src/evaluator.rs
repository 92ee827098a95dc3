//! Generic periodic-series evaluation.
//!
//! Every analytic theory in this crate is a sum of terms of the form
//! `amplitude · trig(Σ kᵢ·argᵢ)`. Tables differ only in the number of
//! fundamental arguments and in how a row turns its phase into channel
//! contributions, so one evaluator serves them all:
//!
//! - [`FundamentalArgument`] is a degree polynomial in Julian centuries.
//! - [`Arguments`] holds all arguments (and their rates) at one instant.
//! - [`sum_terms`] / [`sum_terms_with_rate`] fold a table through a
//!   per-row closure.
//! - [`cosine_series`] and [`power_series`] cover the VSOP87 layout
//!   `Σ tⁱ · Σ A·cos(B + C·t)`.
//!
//! Phases are always normalized to `[0, 2π)` before trig is applied.

use eph_time::{normalize_degrees, normalize_radians};

/// A row of a periodic-series table with `N` integer argument multipliers.
pub trait PeriodicTerm<const N: usize> {
    fn multipliers(&self) -> &[i8; N];
}

/// Polynomial angle `c0 + c1·T + c2·T² + c3·T³ + c4·T⁴` in degrees, `T` in
/// Julian centuries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArgument {
    pub coeffs: [f64; 5],
}

impl FundamentalArgument {
    pub const fn new(coeffs: [f64; 5]) -> Self {
        Self { coeffs }
    }

    /// Value in radians, normalized to `[0, 2π)`.
    pub fn evaluate(&self, t: f64) -> f64 {
        let c = &self.coeffs;
        let deg = c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])));
        normalize_radians(normalize_degrees(deg).to_radians())
    }

    /// Rate in radians per Julian century.
    pub fn rate(&self, t: f64) -> f64 {
        let c = &self.coeffs;
        let deg = c[1] + t * (2.0 * c[2] + t * (3.0 * c[3] + t * 4.0 * c[4]));
        deg.to_radians()
    }
}

/// All fundamental arguments of a theory evaluated at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arguments<const N: usize> {
    pub values: [f64; N],
    pub rates: [f64; N],
}

impl<const N: usize> Arguments<N> {
    pub fn evaluate(args: &[FundamentalArgument; N], t: f64) -> Self {
        Self {
            values: args.map(|a| a.evaluate(t)),
            rates: args.map(|a| a.rate(t)),
        }
    }

    /// `Σ kᵢ·argᵢ`, normalized to `[0, 2π)`.
    pub fn phase(&self, multipliers: &[i8; N]) -> f64 {
        let raw: f64 = multipliers
            .iter()
            .zip(&self.values)
            .map(|(&k, &v)| k as f64 * v)
            .sum();
        normalize_radians(raw)
    }

    /// `Σ kᵢ·d(argᵢ)/dT` in radians per century.
    pub fn phase_rate(&self, multipliers: &[i8; N]) -> f64 {
        multipliers
            .iter()
            .zip(&self.rates)
            .map(|(&k, &r)| k as f64 * r)
            .sum()
    }
}

/// Fold a term table into `C` channels.
///
/// `contribution` receives each row and its normalized phase and returns
/// what that row adds to every channel.
pub fn sum_terms<T, const N: usize, const C: usize>(
    terms: &[T],
    args: &Arguments<N>,
    mut contribution: impl FnMut(&T, f64) -> [f64; C],
) -> [f64; C]
where
    T: PeriodicTerm<N>,
{
    let mut acc = [0.0; C];
    for term in terms {
        let part = contribution(term, args.phase(term.multipliers()));
        for (a, p) in acc.iter_mut().zip(part) {
            *a += p;
        }
    }
    acc
}

/// Like [`sum_terms`], but the closure also receives the phase rate
/// (rad/century) so it can accumulate analytic derivatives.
pub fn sum_terms_with_rate<T, const N: usize, const C: usize>(
    terms: &[T],
    args: &Arguments<N>,
    mut contribution: impl FnMut(&T, f64, f64) -> [f64; C],
) -> [f64; C]
where
    T: PeriodicTerm<N>,
{
    let mut acc = [0.0; C];
    for term in terms {
        let m = term.multipliers();
        let part = contribution(term, args.phase(m), args.phase_rate(m));
        for (a, p) in acc.iter_mut().zip(part) {
            *a += p;
        }
    }
    acc
}

/// `E^|m|` factor for terms that depend on the Sun's mean anomaly.
pub fn eccentricity_damping(multiplier: i8, e: f64) -> f64 {
    e.powi(multiplier.unsigned_abs() as i32)
}

/// Time derivative of [`eccentricity_damping`]: `k·E^(k−1)·E'`.
pub fn eccentricity_damping_rate(multiplier: i8, e: f64, e_rate: f64) -> f64 {
    let k = multiplier.unsigned_abs() as i32;
    if k == 0 {
        0.0
    } else {
        k as f64 * e.powi(k - 1) * e_rate
    }
}

/// One `A·cos(B + C·t)` term of a VSOP87 series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosineTerm {
    pub amplitude: f64,
    pub phase: f64,
    pub frequency: f64,
}

/// `Σ A·cos(B + C·t)` and its derivative with respect to `t`.
pub fn cosine_series(terms: &[CosineTerm], t: f64) -> (f64, f64) {
    terms.iter().fold((0.0, 0.0), |(value, rate), term| {
        let phase = normalize_radians(term.phase + term.frequency * t);
        let (s, c) = phase.sin_cos();
        (
            value + term.amplitude * c,
            rate - term.amplitude * term.frequency * s,
        )
    })
}

/// `Σ xᵢ·tⁱ` and its derivative, where each part is `(xᵢ, dxᵢ/dt)`.
pub fn power_series(parts: &[(f64, f64)], t: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut rate = 0.0;
    let mut t_pow = 1.0;
    let mut t_pow_prev = 0.0;
    for (i, &(x, dx)) in parts.iter().enumerate() {
        value += x * t_pow;
        rate += dx * t_pow + i as f64 * x * t_pow_prev;
        t_pow_prev = t_pow;
        t_pow *= t;
    }
    (value, rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{PI, TAU};

    struct Row {
        k: [i8; 2],
        amp: f64,
    }

    impl PeriodicTerm<2> for Row {
        fn multipliers(&self) -> &[i8; 2] {
            &self.k
        }
    }

    const ARGS: [FundamentalArgument; 2] = [
        FundamentalArgument::new([90.0, 36_000.0, 0.0, 0.0, 0.0]),
        FundamentalArgument::new([10.0, 0.0, 0.0, 0.0, 0.0]),
    ];

    #[test]
    fn fundamental_argument_normalizes() {
        let a = FundamentalArgument::new([-30.0, 0.0, 0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(a.evaluate(0.0), 330f64.to_radians(), epsilon = 1e-12);
        let big = FundamentalArgument::new([0.0, 4.0e6, 0.0, 0.0, 0.0]);
        let v = big.evaluate(1.0);
        assert!((0.0..TAU).contains(&v));
    }

    #[test]
    fn fundamental_argument_rate_is_polynomial_derivative() {
        let a = FundamentalArgument::new([0.0, 2.0, 3.0, 4.0, 5.0]);
        let t = 0.5;
        let expected = 2.0 + 2.0 * 3.0 * t + 3.0 * 4.0 * t * t + 4.0 * 5.0 * t * t * t;
        assert_abs_diff_eq!(a.rate(t), expected.to_radians(), epsilon = 1e-12);
    }

    #[test]
    fn sum_terms_applies_multipliers() {
        let args = Arguments::evaluate(&ARGS, 0.0);
        let rows = [
            Row { k: [1, 0], amp: 2.0 },
            Row { k: [0, -1], amp: 1.0 },
        ];
        let [s, c] = sum_terms(&rows, &args, |r, phase| {
            [r.amp * phase.sin(), r.amp * phase.cos()]
        });
        assert_abs_diff_eq!(s, 2.0 - 10f64.to_radians().sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(c, 10f64.to_radians().cos(), epsilon = 1e-12);
    }

    #[test]
    fn phase_is_normalized() {
        let args = Arguments::evaluate(&ARGS, 0.0);
        let p = args.phase(&[-3, 0]);
        assert_abs_diff_eq!(p, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn rate_variant_matches_finite_difference() {
        let rows = [Row { k: [2, 1], amp: 3.0 }];
        let eval = |t: f64| {
            let args = Arguments::evaluate(&ARGS, t);
            sum_terms(&rows, &args, |r, phase| [r.amp * phase.sin()])[0]
        };
        let t = 0.013;
        let args = Arguments::evaluate(&ARGS, t);
        let [rate] = sum_terms_with_rate(&rows, &args, |r, phase, dphase| {
            [r.amp * phase.cos() * dphase]
        });
        let h = 1e-7;
        let numeric = (eval(t + h) - eval(t - h)) / (2.0 * h);
        assert!((rate - numeric).abs() < 1e-3 * rate.abs().max(1.0));
    }

    #[test]
    fn eccentricity_damping_uses_absolute_multiplier() {
        assert_eq!(eccentricity_damping(0, 0.9), 1.0);
        assert_abs_diff_eq!(eccentricity_damping(-1, 0.9), 0.9, epsilon = 1e-15);
        assert_abs_diff_eq!(eccentricity_damping(2, 0.9), 0.81, epsilon = 1e-15);
        assert_abs_diff_eq!(eccentricity_damping_rate(-2, 0.9, 0.1), 0.18, epsilon = 1e-15);
        assert_eq!(eccentricity_damping_rate(0, 0.9, 0.1), 0.0);
    }

    #[test]
    fn cosine_series_derivative() {
        let terms = [
            CosineTerm { amplitude: 1.5, phase: 0.3, frequency: 6283.0 },
            CosineTerm { amplitude: 0.02, phase: 2.0, frequency: 12566.0 },
        ];
        let t = 0.0123;
        let (v, d) = cosine_series(&terms, t);
        let expected: f64 = terms
            .iter()
            .map(|x| x.amplitude * (x.phase + x.frequency * t).cos())
            .sum();
        assert_abs_diff_eq!(v, expected, epsilon = 1e-12);
        let h = 1e-8;
        let numeric = (cosine_series(&terms, t + h).0 - cosine_series(&terms, t - h).0) / (2.0 * h);
        assert!((d - numeric).abs() < 1e-2, "{d} vs {numeric}");
    }

    #[test]
    fn power_series_product_rule() {
        // x0 = 1 (const), x1 = 2 + 0·t, x2 = t (so dx2 = 1)
        let t = 0.7;
        let parts = [(1.0, 0.0), (2.0, 0.0), (t, 1.0)];
        let (v, d) = power_series(&parts, t);
        assert_abs_diff_eq!(v, 1.0 + 2.0 * t + t * t * t, epsilon = 1e-15);
        assert_abs_diff_eq!(d, 2.0 + 1.0 * t * t + 2.0 * t * t, epsilon = 1e-15);
    }
}
