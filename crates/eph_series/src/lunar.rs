//! Geocentric position of the Moon from the truncated ELP2000-82B series
//! (Meeus, *Astronomical Algorithms* 2nd ed., ch.47).
//!
//! Output is referred to the mean equinox of date: λ and β in radians,
//! Δ (centre of Earth to centre of Moon) in metres. Velocity components
//! are the analytic time derivatives, per day.
//!
//! Accuracy is about 10″ in longitude and 4″ in latitude.

use eph_time::{DAYS_PER_CENTURY, jd_to_centuries, normalize_radians};

use crate::evaluator::{
    Arguments, FundamentalArgument, PeriodicTerm, eccentricity_damping,
    eccentricity_damping_rate, sum_terms_with_rate,
};
use crate::state::{Body, BodyState, StateUnits};

/// Mean distance used as the base of the distance series, metres.
pub const MEAN_DISTANCE_M: f64 = 385_000_560.0;

/// Row of tables 47.A / 47.B. Multipliers are `[D, M, M′, F]`; the sine
/// amplitude is in 1e-6 degrees and the cosine amplitude in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarTerm {
    pub multipliers: [i8; 4],
    pub sine: f64,
    pub cosine: f64,
}

impl PeriodicTerm<4> for LunarTerm {
    fn multipliers(&self) -> &[i8; 4] {
        &self.multipliers
    }
}

const fn lr(d: i8, m: i8, mp: i8, f: i8, sine: i32, cosine: i32) -> LunarTerm {
    LunarTerm {
        multipliers: [d, m, mp, f],
        sine: sine as f64,
        cosine: cosine as f64,
    }
}

const fn lb(d: i8, m: i8, mp: i8, f: i8, sine: i32) -> LunarTerm {
    lr(d, m, mp, f, sine, 0)
}

/// Moon's mean longitude L′. The argument polynomials are the ELP2000-82B
/// set that reproduces example 47.a to 2e-8 rad.
pub const MEAN_LONGITUDE: FundamentalArgument = FundamentalArgument::new([
    218.316_459_1,
    481_267.881_342_36,
    -0.001_326_8,
    1.0 / 538_841.0,
    -1.0 / 65_194_000.0,
]);

/// `[D, M, M′, F]`: mean elongation, Sun's mean anomaly, Moon's mean
/// anomaly and argument of latitude.
pub const ARGUMENTS: [FundamentalArgument; 4] = [
    FundamentalArgument::new([
        297.850_204_2,
        445_267.111_516_8,
        -0.001_630_0,
        1.0 / 545_868.0,
        -1.0 / 113_065_000.0,
    ]),
    FundamentalArgument::new([357.529_109_2, 35_999.050_290_9, -0.000_153_6, 1.0 / 24_490_000.0, 0.0]),
    FundamentalArgument::new([
        134.963_411_4,
        477_198.867_631_3,
        0.008_997_0,
        1.0 / 69_699.0,
        -1.0 / 14_712_000.0,
    ]),
    FundamentalArgument::new([
        93.272_099_3,
        483_202.017_527_3,
        -0.003_402_9,
        -1.0 / 3_526_000.0,
        1.0 / 863_310_000.0,
    ]),
];

const A1: FundamentalArgument = FundamentalArgument::new([119.75, 131.849, 0.0, 0.0, 0.0]);
const A2: FundamentalArgument = FundamentalArgument::new([53.09, 479_264.290, 0.0, 0.0, 0.0]);
const A3: FundamentalArgument = FundamentalArgument::new([313.45, 481_266.484, 0.0, 0.0, 0.0]);

/// Table 47.A: Σl (sine, 1e-6°) and Σr (cosine, m).
#[rustfmt::skip]
pub static LONGITUDE_DISTANCE: [LunarTerm; 60] = [
    lr(  0,   0,   1,   0,   6288774,  -20905355),
    lr(  2,   0,  -1,   0,   1274027,   -3699111),
    lr(  2,   0,   0,   0,    658314,   -2955968),
    lr(  0,   0,   2,   0,    213618,    -569925),
    lr(  0,   1,   0,   0,   -185116,      48888),
    lr(  0,   0,   0,   2,   -114332,      -3149),
    lr(  2,   0,  -2,   0,     58793,     246158),
    lr(  2,  -1,  -1,   0,     57066,    -152138),
    lr(  2,   0,   1,   0,     53322,    -170733),
    lr(  2,  -1,   0,   0,     45758,    -204586),
    lr(  0,   1,  -1,   0,    -40923,    -129620),
    lr(  1,   0,   0,   0,    -34720,     108743),
    lr(  0,   1,   1,   0,    -30383,     104755),
    lr(  2,   0,   0,  -2,     15327,      10321),
    lr(  0,   0,   1,   2,    -12528,          0),
    lr(  0,   0,   1,  -2,     10980,      79661),
    lr(  4,   0,  -1,   0,     10675,     -34782),
    lr(  0,   0,   3,   0,     10034,     -23210),
    lr(  4,   0,  -2,   0,      8548,     -21636),
    lr(  2,   1,  -1,   0,     -7888,      24208),
    lr(  2,   1,   0,   0,     -6766,      30824),
    lr(  1,   0,  -1,   0,     -5163,      -8379),
    lr(  1,   1,   0,   0,      4987,     -16675),
    lr(  2,  -1,   1,   0,      4036,     -12831),
    lr(  2,   0,   2,   0,      3994,     -10445),
    lr(  4,   0,   0,   0,      3861,     -11650),
    lr(  2,   0,  -3,   0,      3665,      14403),
    lr(  0,   1,  -2,   0,     -2689,      -7003),
    lr(  2,   0,  -1,   2,     -2602,          0),
    lr(  2,  -1,  -2,   0,      2390,      10056),
    lr(  1,   0,   1,   0,     -2348,       6322),
    lr(  2,  -2,   0,   0,      2236,      -9884),
    lr(  0,   1,   2,   0,     -2120,       5751),
    lr(  0,   2,   0,   0,     -2069,          0),
    lr(  2,  -2,  -1,   0,      2048,      -4950),
    lr(  2,   0,   1,  -2,     -1773,       4130),
    lr(  2,   0,   0,   2,     -1595,          0),
    lr(  4,  -1,  -1,   0,      1215,      -3958),
    lr(  0,   0,   2,   2,     -1110,          0),
    lr(  3,   0,  -1,   0,      -892,       3258),
    lr(  2,   1,   1,   0,      -810,       2616),
    lr(  4,  -1,  -2,   0,       759,      -1897),
    lr(  0,   2,  -1,   0,      -713,      -2117),
    lr(  2,   2,  -1,   0,      -700,       2354),
    lr(  2,   1,  -2,   0,       691,          0),
    lr(  2,  -1,   0,  -2,       596,          0),
    lr(  4,   0,   1,   0,       549,      -1423),
    lr(  0,   0,   4,   0,       537,      -1117),
    lr(  4,  -1,   0,   0,       520,      -1571),
    lr(  1,   0,  -2,   0,      -487,      -1739),
    lr(  2,   1,   0,  -2,      -399,          0),
    lr(  0,   0,   2,  -2,      -381,      -4421),
    lr(  1,   1,   1,   0,       351,          0),
    lr(  3,   0,  -2,   0,      -340,          0),
    lr(  4,   0,  -3,   0,       330,          0),
    lr(  2,  -1,   2,   0,       327,          0),
    lr(  0,   2,   1,   0,      -323,       1165),
    lr(  1,   1,  -1,   0,       299,          0),
    lr(  2,   0,   3,   0,       294,          0),
    lr(  2,   0,  -1,  -2,         0,       8752),
];

/// Table 47.B: Σb (sine, 1e-6°).
#[rustfmt::skip]
pub static LATITUDE: [LunarTerm; 60] = [
    lb(  0,   0,   0,   1,   5128122),
    lb(  0,   0,   1,   1,    280602),
    lb(  0,   0,   1,  -1,    277693),
    lb(  2,   0,   0,  -1,    173237),
    lb(  2,   0,  -1,   1,     55413),
    lb(  2,   0,  -1,  -1,     46271),
    lb(  2,   0,   0,   1,     32573),
    lb(  0,   0,   2,   1,     17198),
    lb(  2,   0,   1,  -1,      9266),
    lb(  0,   0,   2,  -1,      8822),
    lb(  2,  -1,   0,  -1,      8216),
    lb(  2,   0,  -2,  -1,      4324),
    lb(  2,   0,   1,   1,      4200),
    lb(  2,   1,   0,  -1,     -3359),
    lb(  2,  -1,  -1,   1,      2463),
    lb(  2,  -1,   0,   1,      2211),
    lb(  2,  -1,  -1,  -1,      2065),
    lb(  0,   1,  -1,  -1,     -1870),
    lb(  4,   0,  -1,  -1,      1828),
    lb(  0,   1,   0,   1,     -1794),
    lb(  0,   0,   0,   3,     -1749),
    lb(  0,   1,  -1,   1,     -1565),
    lb(  1,   0,   0,   1,     -1491),
    lb(  0,   1,   1,   1,     -1475),
    lb(  0,   1,   1,  -1,     -1410),
    lb(  0,   1,   0,  -1,     -1344),
    lb(  1,   0,   0,  -1,     -1335),
    lb(  0,   0,   3,   1,      1107),
    lb(  4,   0,   0,  -1,      1021),
    lb(  4,   0,  -1,   1,       833),
    lb(  0,   0,   1,  -3,       777),
    lb(  4,   0,  -2,   1,       671),
    lb(  2,   0,   0,  -3,       607),
    lb(  2,   0,   2,  -1,       596),
    lb(  2,  -1,   1,  -1,       491),
    lb(  2,   0,  -2,   1,      -451),
    lb(  0,   0,   3,  -1,       439),
    lb(  2,   0,   2,   1,       422),
    lb(  2,   0,  -3,  -1,       421),
    lb(  2,   1,  -1,   1,      -366),
    lb(  2,   1,   0,   1,      -351),
    lb(  4,   0,   0,   1,       331),
    lb(  2,  -1,   1,   1,       315),
    lb(  2,  -2,   0,  -1,       302),
    lb(  0,   0,   1,   3,      -283),
    lb(  2,   1,   1,  -1,      -229),
    lb(  1,   1,   0,  -1,       223),
    lb(  1,   1,   0,   1,       223),
    lb(  0,   1,  -2,  -1,      -220),
    lb(  2,   1,  -1,  -1,      -220),
    lb(  1,   0,   1,   1,      -185),
    lb(  2,  -1,  -2,  -1,       181),
    lb(  0,   1,   2,   1,      -177),
    lb(  4,   0,  -2,  -1,       176),
    lb(  4,  -1,  -1,  -1,       166),
    lb(  1,   0,   1,  -1,      -164),
    lb(  4,   0,   1,  -1,       132),
    lb(  1,   0,  -1,  -1,      -119),
    lb(  4,  -1,   0,  -1,       115),
    lb(  2,  -2,   0,   1,       107),
];

/// `a·sin(φ)` and its rate, for the additive A1/A2/A3 terms.
fn sine_with_rate(amplitude: f64, phase: f64, phase_rate: f64) -> [f64; 2] {
    let (s, c) = phase.sin_cos();
    [amplitude * s, amplitude * c * phase_rate]
}

fn add(a: [f64; 2], b: [f64; 2]) -> [f64; 2] {
    [a[0] + b[0], a[1] + b[1]]
}

/// Geocentric λ, β, Δ of the Moon with analytic rates.
pub fn lunar_state(jd: f64) -> BodyState {
    let t = jd_to_centuries(jd);
    let args = Arguments::evaluate(&ARGUMENTS, t);
    let lp = MEAN_LONGITUDE.evaluate(t);
    let lp_rate = MEAN_LONGITUDE.rate(t);
    let f = args.values[3];
    let f_rate = args.rates[3];

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;
    let e_rate = -0.002_516 - 2.0 * 0.000_007_4 * t;

    let [sl, sl_rate, sr, sr_rate] =
        sum_terms_with_rate(&LONGITUDE_DISTANCE, &args, |row, phase, rate| {
            let m = row.multipliers[1];
            let k = eccentricity_damping(m, e);
            let k_rate = eccentricity_damping_rate(m, e, e_rate);
            let (s, c) = phase.sin_cos();
            [
                row.sine * k * s,
                row.sine * (k_rate * s + k * c * rate),
                row.cosine * k * c,
                row.cosine * (k_rate * c - k * s * rate),
            ]
        });
    let [sb, sb_rate] = sum_terms_with_rate(&LATITUDE, &args, |row, phase, rate| {
        let m = row.multipliers[1];
        let k = eccentricity_damping(m, e);
        let k_rate = eccentricity_damping_rate(m, e, e_rate);
        let (s, c) = phase.sin_cos();
        [row.sine * k * s, row.sine * (k_rate * s + k * c * rate)]
    });

    let (a1, a1_rate) = (A1.evaluate(t), A1.rate(t));
    let (a2, a2_rate) = (A2.evaluate(t), A2.rate(t));
    let (a3, a3_rate) = (A3.evaluate(t), A3.rate(t));
    let mp = args.values[2];
    let mp_rate = args.rates[2];

    let extra_l = add(
        add(
            sine_with_rate(3958.0, a1, a1_rate),
            sine_with_rate(1962.0, lp - f, lp_rate - f_rate),
        ),
        sine_with_rate(318.0, a2, a2_rate),
    );
    let extra_b = [
        sine_with_rate(-2235.0, lp, lp_rate),
        sine_with_rate(382.0, a3, a3_rate),
        sine_with_rate(175.0, a1 - f, a1_rate - f_rate),
        sine_with_rate(175.0, a1 + f, a1_rate + f_rate),
        sine_with_rate(127.0, lp - mp, lp_rate - mp_rate),
        sine_with_rate(-115.0, lp + mp, lp_rate + mp_rate),
    ]
    .into_iter()
    .fold([0.0, 0.0], add);

    let micro_deg = 1e-6_f64.to_radians();
    let longitude = normalize_radians(lp + (sl + extra_l[0]) * micro_deg);
    let latitude = (sb + extra_b[0]) * micro_deg;
    let distance = MEAN_DISTANCE_M + sr;

    let per_day = 1.0 / DAYS_PER_CENTURY;
    let velocity = [
        (lp_rate + (sl_rate + extra_l[1]) * micro_deg) * per_day,
        (sb_rate + extra_b[1]) * micro_deg * per_day,
        sr_rate * per_day,
    ];

    BodyState {
        body: Body::Moon,
        jd,
        position: [longitude, latitude, distance],
        velocity,
        units: StateUnits::LunarSpherical,
    }
}
