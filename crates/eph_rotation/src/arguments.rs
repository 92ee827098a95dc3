//! Fundamental arguments of the IAU rotation formulas.
//!
//! Each argument is a degree polynomial in either days (`d`) or Julian
//! centuries (`T`) since J2000.0. Letters name the system the argument
//! belongs to: `E` Earth/Moon, `M` Mars, `Me` Mercury, `J` Jupiter,
//! `S` Saturn, `U` Uranus and `N` Neptune.
//!
//! Source: IAU WGCCRE 2015 report (Archinal et al. 2018), tables 1–2.

use eph_time::{Instant, normalize_degrees};

/// Time variable an argument polynomial is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeVariable {
    Days,
    Centuries,
}

/// `c0 + c1·x + c2·T²` in degrees, where `x` is [`TimeVariable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArgumentPolynomial {
    pub variable: TimeVariable,
    pub constant: f64,
    pub rate: f64,
    pub centuries_squared: f64,
}

const fn days(constant: f64, rate: f64) -> ArgumentPolynomial {
    ArgumentPolynomial {
        variable: TimeVariable::Days,
        constant,
        rate,
        centuries_squared: 0.0,
    }
}

const fn centuries(constant: f64, rate: f64) -> ArgumentPolynomial {
    ArgumentPolynomial {
        variable: TimeVariable::Centuries,
        constant,
        rate,
        centuries_squared: 0.0,
    }
}

impl ArgumentPolynomial {
    const fn with_centuries_squared(mut self, c2: f64) -> Self {
        self.centuries_squared = c2;
        self
    }

    /// Value in degrees, not normalized.
    pub fn degrees(&self, instant: Instant) -> f64 {
        let x = match self.variable {
            TimeVariable::Days => instant.days(),
            TimeVariable::Centuries => instant.centuries(),
        };
        let t = instant.centuries();
        self.constant + self.rate * x + self.centuries_squared * t * t
    }
}

/// Number of distinct fundamental arguments.
pub const ARGUMENT_COUNT: usize = 64;

/// Fundamental argument identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Argument {
    E1,
    E2,
    E3,
    E4,
    E5,
    E6,
    E7,
    E8,
    E9,
    E10,
    E11,
    E12,
    E13,
    M1,
    M2,
    M3,
    Me1,
    Me2,
    Me3,
    Me4,
    Me5,
    Ja,
    Jb,
    Jc,
    Jd,
    Je,
    J1,
    J2,
    J3,
    J4,
    J5,
    J6,
    J7,
    J8,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    U1,
    U2,
    U3,
    U4,
    U5,
    U6,
    U7,
    U8,
    U9,
    U10,
    U11,
    U12,
    U13,
    U14,
    U15,
    U16,
    N,
    N1,
    N2,
    N3,
    N4,
    N5,
    N6,
    N7,
}

impl Argument {
    pub const ALL: [Argument; ARGUMENT_COUNT] = [
        Self::E1, Self::E2, Self::E3, Self::E4, Self::E5, Self::E6, Self::E7, Self::E8, Self::E9,
        Self::E10, Self::E11, Self::E12, Self::E13, Self::M1, Self::M2, Self::M3, Self::Me1,
        Self::Me2, Self::Me3, Self::Me4, Self::Me5, Self::Ja, Self::Jb, Self::Jc, Self::Jd,
        Self::Je, Self::J1, Self::J2, Self::J3, Self::J4, Self::J5, Self::J6, Self::J7, Self::J8,
        Self::S1, Self::S2, Self::S3, Self::S4, Self::S5, Self::S6, Self::U1, Self::U2, Self::U3,
        Self::U4, Self::U5, Self::U6, Self::U7, Self::U8, Self::U9, Self::U10, Self::U11,
        Self::U12, Self::U13, Self::U14, Self::U15, Self::U16, Self::N, Self::N1, Self::N2,
        Self::N3, Self::N4, Self::N5, Self::N6, Self::N7,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn polynomial(self) -> ArgumentPolynomial {
        match self {
            Self::E1 => days(125.045, -0.0529921),
            Self::E2 => days(250.089, -0.1059842),
            Self::E3 => days(260.008, 13.0120009),
            Self::E4 => days(176.625, 13.3407154),
            Self::E5 => days(357.529, 0.9856003),
            Self::E6 => days(311.589, 26.4057084),
            Self::E7 => days(134.963, 13.0649930),
            Self::E8 => days(276.617, 0.3287146),
            Self::E9 => days(34.226, 1.7484877),
            Self::E10 => days(15.134, -0.1589763),
            Self::E11 => days(119.743, 0.0036096),
            Self::E12 => days(239.961, 0.1643573),
            Self::E13 => days(25.053, 12.9590088),
            Self::M1 => days(169.51, -0.4357640),
            Self::M2 => days(192.93, 1128.4096700).with_centuries_squared(8.864),
            Self::M3 => days(53.47, -0.0181510),
            Self::Me1 => days(174.791086, 4.092335),
            Self::Me2 => days(349.582171, 8.184670),
            Self::Me3 => days(164.373257, 12.277005),
            Self::Me4 => days(339.164343, 16.369340),
            Self::Me5 => days(153.955429, 20.461675),
            Self::Ja => centuries(99.360714, 4850.4046),
            Self::Jb => centuries(175.895369, 1191.9605),
            Self::Jc => centuries(300.323162, 262.5475),
            Self::Jd => centuries(114.012305, 6070.2476),
            Self::Je => centuries(49.511251, 64.3000),
            Self::J1 => centuries(73.32, 91472.9),
            Self::J2 => centuries(24.62, 45137.2),
            Self::J3 => centuries(283.90, 4850.7),
            Self::J4 => centuries(355.80, 1191.3),
            Self::J5 => centuries(119.90, 262.1),
            Self::J6 => centuries(229.80, 64.3),
            Self::J7 => centuries(352.25, 2382.6),
            Self::J8 => centuries(113.35, 6070.0),
            Self::S1 => centuries(353.32, 75706.7),
            Self::S2 => centuries(28.72, 75706.7),
            Self::S3 => centuries(177.40, -36505.5),
            Self::S4 => centuries(300.00, -7225.9),
            Self::S5 => centuries(316.45, 506.2),
            Self::S6 => centuries(345.20, -1016.3),
            Self::U1 => centuries(115.75, 54991.87),
            Self::U2 => centuries(141.69, 41887.66),
            Self::U3 => centuries(135.03, 29927.35),
            Self::U4 => centuries(61.77, 25733.59),
            Self::U5 => centuries(249.32, 24471.46),
            Self::U6 => centuries(43.86, 22278.41),
            Self::U7 => centuries(77.66, 20289.42),
            Self::U8 => centuries(157.36, 16652.76),
            Self::U9 => centuries(101.81, 12872.63),
            Self::U10 => centuries(138.64, 8061.81),
            Self::U11 => centuries(102.23, -2024.22),
            Self::U12 => centuries(316.41, 2863.96),
            Self::U13 => centuries(304.01, -51.94),
            Self::U14 => centuries(308.71, -93.17),
            Self::U15 => centuries(340.82, -75.32),
            Self::U16 => centuries(259.14, -504.81),
            Self::N => centuries(357.85, 52.316),
            Self::N1 => centuries(323.92, 62606.6),
            Self::N2 => centuries(220.51, 55064.2),
            Self::N3 => centuries(354.27, 46564.5),
            Self::N4 => centuries(75.31, 26109.4),
            Self::N5 => centuries(35.36, 14325.4),
            Self::N6 => centuries(142.61, 2824.6),
            Self::N7 => centuries(177.85, 52.316),
        }
    }

    /// Value in radians, normalized to `[0, 2π)`.
    pub fn evaluate(self, instant: Instant) -> f64 {
        normalize_degrees(self.polynomial().degrees(instant)).to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use eph_time::{DAYS_PER_CENTURY, J2000_JD};

    #[test]
    fn index_matches_table_position() {
        for (i, arg) in Argument::ALL.iter().enumerate() {
            assert_eq!(arg.index(), i, "{arg:?}");
        }
    }

    #[test]
    fn values_at_epoch_are_constants() {
        let epoch = Instant::from_jd(J2000_JD);
        assert_abs_diff_eq!(
            Argument::E1.evaluate(epoch),
            125.045f64.to_radians(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            Argument::N7.evaluate(epoch),
            177.85f64.to_radians(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn day_and_century_rates() {
        let later = Instant::from_jd(J2000_JD + 10.0);
        let e3 = Argument::E3.polynomial().degrees(later);
        assert_abs_diff_eq!(e3, 260.008 + 130.120009, epsilon = 1e-9);

        let century = Instant::from_jd(J2000_JD + DAYS_PER_CENTURY);
        let n = Argument::N.polynomial().degrees(century);
        assert_abs_diff_eq!(n, 357.85 + 52.316, epsilon = 1e-9);
    }

    #[test]
    fn phobos_argument_has_quadratic_term() {
        let century = Instant::from_jd(J2000_JD + DAYS_PER_CENTURY);
        let m2 = Argument::M2.polynomial().degrees(century);
        let linear = 192.93 + 1128.40967 * DAYS_PER_CENTURY;
        assert_abs_diff_eq!(m2 - linear, 8.864, epsilon = 1e-6);
    }

    #[test]
    fn evaluated_values_are_normalized() {
        let instant = Instant::from_jd(2_460_000.5);
        for arg in Argument::ALL {
            let v = arg.evaluate(instant);
            assert!((0.0..std::f64::consts::TAU).contains(&v), "{arg:?} = {v}");
        }
    }
}
