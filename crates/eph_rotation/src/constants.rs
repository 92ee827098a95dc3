//! Per-body rotational elements.
//!
//! `α0 = a0 + a1·T`, `δ0 = d0 + d1·T` and `W = w0 + wd·d + wd2·d² + wT2·T²`
//! (degrees; `d` in days and `T` in Julian centuries since J2000.0 TDB),
//! each plus the body's [`Periodics`].
//!
//! Source: IAU WGCCRE 2015 report (Archinal et al. 2018), tables 1–2 and
//! the small-body tables of the 2009 report.

use crate::body::{BODY_COUNT, IauBody};
use crate::periodic::{self, Periodics};

/// Coefficients of one body, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationConstants {
    /// `[a0, a1]`: pole right ascension at J2000.0 and its rate per century.
    pub pole_ra: [f64; 2],
    /// `[d0, d1]`: pole declination at J2000.0 and its rate per century.
    pub pole_dec: [f64; 2],
    /// `[w0, wd]`: prime meridian at J2000.0 and its rate per day.
    pub prime_meridian: [f64; 2],
    pub pm_days_squared: f64,
    pub pm_centuries_squared: f64,
    pub periodic: Periodics,
}

static ROTATION_CONSTANTS: [RotationConstants; BODY_COUNT] = [
    RotationConstants {
        pole_ra: [218.5, 0.0],
        pole_dec: [-12.5, 0.0],
        prime_meridian: [0.0, 390.0],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [294.0, 0.0],
        pole_dec: [73.0, 0.0],
        prime_meridian: [252.63, 212.064],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [268.05, -0.009],
        pole_dec: [64.49, 0.003],
        prime_meridian: [33.29, 1206.9986602],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [268.05, -0.009],
        pole_dec: [64.49, 0.003],
        prime_meridian: [231.67, 722.6314560],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::AMALTHEA_RA,
            dec: &periodic::AMALTHEA_DEC,
            pm_sin: &periodic::AMALTHEA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [257.43, 0.0],
        pole_dec: [-15.10, 0.0],
        prime_meridian: [156.22, -142.8356681],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::ARIEL_RA,
            dec: &periodic::ARIEL_DEC,
            pm_sin: &periodic::ARIEL_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [40.58, -0.036],
        pole_dec: [83.53, -0.004],
        prime_meridian: [137.88, 598.3060000],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [257.31, 0.0],
        pole_dec: [-15.18, 0.0],
        prime_meridian: [297.46, -577.3628170],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::BELINDA_RA,
            dec: &periodic::BELINDA_DEC,
            pm_sin: &periodic::BELINDA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [257.31, 0.0],
        pole_dec: [-15.18, 0.0],
        prime_meridian: [105.46, -828.3914760],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::BIANCA_RA,
            dec: &periodic::BIANCA_DEC,
            pm_sin: &periodic::BIANCA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [268.72, -0.009],
        pole_dec: [64.83, 0.003],
        prime_meridian: [259.51, 21.5710715],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::CALLISTO_RA,
            dec: &periodic::CALLISTO_DEC,
            pm_sin: &periodic::CALLISTO_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [36.41, -0.036],
        pole_dec: [85.04, -0.004],
        prime_meridian: [153.51, 190.6742373],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [291.0, 0.0],
        pole_dec: [59.0, 0.0],
        prime_meridian: [170.90, 952.1532],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [132.993, 0.0],
        pole_dec: [-6.163, 0.0],
        prime_meridian: [122.695, 56.3625225],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [257.31, 0.0],
        pole_dec: [-15.18, 0.0],
        prime_meridian: [127.69, -1074.5205730],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::CORDELIA_RA,
            dec: &periodic::CORDELIA_DEC,
            pm_sin: &periodic::CORDELIA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [257.31, 0.0],
        pole_dec: [-15.18, 0.0],
        prime_meridian: [59.16, -776.5816320],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::CRESSIDA_RA,
            dec: &periodic::CRESSIDA_DEC,
            pm_sin: &periodic::CRESSIDA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [297.0, 0.0],
        pole_dec: [5.0, 0.0],
        prime_meridian: [268.1, 1684.4193549],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [316.65, -0.108],
        pole_dec: [53.52, -0.061],
        prime_meridian: [79.41, 285.1618970],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::DEIMOS_RA,
            dec: &periodic::DEIMOS_DEC,
            pm_sin: &periodic::DEIMOS_PM_SIN,
            pm_cos: &periodic::DEIMOS_PM_COS,
        },
    },
    RotationConstants {
        pole_ra: [257.31, 0.0],
        pole_dec: [-15.18, 0.0],
        prime_meridian: [95.08, -760.0531690],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::DESDEMONA_RA,
            dec: &periodic::DESDEMONA_DEC,
            pm_sin: &periodic::DESDEMONA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [299.36, 0.0],
        pole_dec: [43.45, 0.0],
        prime_meridian: [306.51, 1075.7341562],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::DESPINA_RA,
            dec: &periodic::DESPINA_DEC,
            pm_sin: &periodic::DESPINA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [40.66, -0.036],
        pole_dec: [83.52, -0.004],
        prime_meridian: [357.6, 131.5349316],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [0.00, -0.641],
        pole_dec: [90.00, -0.557],
        prime_meridian: [190.147, 360.9856235],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [40.66, -0.036],
        pole_dec: [83.52, -0.004],
        prime_meridian: [6.32, 262.7318996],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [40.58, -0.036],
        pole_dec: [83.52, -0.004],
        prime_meridian: [293.87, 518.4907239],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::EPIMETHEUS_RA,
            dec: &periodic::EPIMETHEUS_DEC,
            pm_sin: &periodic::EPIMETHEUS_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [11.35, 0.0],
        pole_dec: [17.22, 0.0],
        prime_meridian: [326.07, 1639.38864745],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [268.08, -0.009],
        pole_dec: [64.51, 0.003],
        prime_meridian: [36.022, 101.3747235],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::EUROPA_RA,
            dec: &periodic::EUROPA_DEC,
            pm_sin: &periodic::EUROPA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [299.36, 0.0],
        pole_dec: [43.43, 0.0],
        prime_meridian: [258.09, 839.6597686],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::GALATEA_RA,
            dec: &periodic::GALATEA_DEC,
            pm_sin: &periodic::GALATEA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [268.20, -0.009],
        pole_dec: [64.57, 0.003],
        prime_meridian: [44.064, 50.3176081],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::GANYMEDE_RA,
            dec: &periodic::GANYMEDE_DEC,
            pm_sin: &periodic::GANYMEDE_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [9.47, 0.0],
        pole_dec: [26.70, 0.0],
        prime_meridian: [83.67, 1226.9114850],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [40.85, -0.036],
        pole_dec: [83.34, -0.004],
        prime_meridian: [245.12, 131.6174056],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [318.16, -3.949],
        pole_dec: [75.03, -1.143],
        prime_meridian: [355.2, 4.5379572],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [168.76, 0.0],
        pole_dec: [-2.88, 0.0],
        prime_meridian: [274.05, 1864.6280070],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [268.05, -0.009],
        pole_dec: [64.50, 0.003],
        prime_meridian: [200.39, 203.4889538],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::IO_RA,
            dec: &periodic::IO_DEC,
            pm_sin: &periodic::IO_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [90.53, 0.0],
        pole_dec: [-66.30, 0.0],
        prime_meridian: [0.0, 712.143],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [40.58, -0.036],
        pole_dec: [83.52, -0.004],
        prime_meridian: [58.83, 518.2359876],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::JANUS_RA,
            dec: &periodic::JANUS_DEC,
            pm_sin: &periodic::JANUS_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [257.31, 0.0],
        pole_dec: [-15.18, 0.0],
        prime_meridian: [302.56, -730.1253660],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::JULIET_RA,
            dec: &periodic::JULIET_DEC,
            pm_sin: &periodic::JULIET_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [268.056595, -0.006499],
        pole_dec: [64.495303, 0.002413],
        prime_meridian: [284.95, 870.5360000],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::JUPITER_RA,
            dec: &periodic::JUPITER_DEC,
            pm_sin: &[],
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [299.36, 0.0],
        pole_dec: [43.41, 0.0],
        prime_meridian: [179.41, 649.0534470],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::LARISSA_RA,
            dec: &periodic::LARISSA_DEC,
            pm_sin: &periodic::LARISSA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [52.0, 0.0],
        pole_dec: [12.0, 0.0],
        prime_meridian: [94.0, 1057.7515],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [317.68143, -0.1061],
        pole_dec: [52.88650, -0.0609],
        prime_meridian: [176.630, 350.89198226],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [281.0097, -0.0328],
        pole_dec: [61.4143, -0.0049],
        prime_meridian: [329.5469, 6.1385025],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &[],
            dec: &[],
            pm_sin: &periodic::MERCURY_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [268.05, -0.009],
        pole_dec: [64.49, 0.003],
        prime_meridian: [346.09, 1221.2547301],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [40.66, -0.036],
        pole_dec: [83.52, -0.004],
        prime_meridian: [333.46, 381.9945550],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::MIMAS_RA,
            dec: &periodic::MIMAS_DEC,
            pm_sin: &periodic::MIMAS_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [257.43, 0.0],
        pole_dec: [-15.08, 0.0],
        prime_meridian: [30.70, -254.6906892],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::MIRANDA_RA,
            dec: &periodic::MIRANDA_DEC,
            pm_sin: &periodic::MIRANDA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [269.9949, 0.0031],
        pole_dec: [66.5392, 0.0130],
        prime_meridian: [38.3213, 13.17635815],
        pm_days_squared: -1.4e-12,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::MOON_RA,
            dec: &periodic::MOON_DEC,
            pm_sin: &periodic::MOON_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [299.36, 0.0],
        pole_dec: [43.36, 0.0],
        prime_meridian: [254.06, 1222.8441209],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::NAIAD_RA,
            dec: &periodic::NAIAD_DEC,
            pm_sin: &periodic::NAIAD_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [299.36, 0.0],
        pole_dec: [43.46, 0.0],
        prime_meridian: [253.18, 536.3128492],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::NEPTUNE_RA,
            dec: &periodic::NEPTUNE_DEC,
            pm_sin: &periodic::NEPTUNE_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [257.43, 0.0],
        pole_dec: [-15.10, 0.0],
        prime_meridian: [6.77, -26.7394932],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::OBERON_RA,
            dec: &periodic::OBERON_DEC,
            pm_sin: &periodic::OBERON_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [257.31, 0.0],
        pole_dec: [-15.18, 0.0],
        prime_meridian: [130.35, -956.4068150],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::OPHELIA_RA,
            dec: &periodic::OPHELIA_DEC,
            pm_sin: &periodic::OPHELIA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [33.0, 0.0],
        pole_dec: [-3.0, 0.0],
        prime_meridian: [38.0, 1105.8036],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [40.6, -0.036],
        pole_dec: [83.5, -0.004],
        prime_meridian: [48.8, 626.0440000],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [40.58, -0.036],
        pole_dec: [83.53, -0.004],
        prime_meridian: [162.92, 572.7891000],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [317.68, -0.108],
        pole_dec: [52.90, -0.061],
        prime_meridian: [35.06, 1128.8445850],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::PHOBOS_RA,
            dec: &periodic::PHOBOS_DEC,
            pm_sin: &periodic::PHOBOS_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [356.90, 0.0],
        pole_dec: [77.80, 0.0],
        prime_meridian: [178.58, 931.639],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [132.993, 0.0],
        pole_dec: [-6.163, 0.0],
        prime_meridian: [302.695, 56.3625225],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [257.31, 0.0],
        pole_dec: [-15.18, 0.0],
        prime_meridian: [25.03, -701.4865870],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::PORTIA_RA,
            dec: &periodic::PORTIA_DEC,
            pm_sin: &periodic::PORTIA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [40.58, -0.036],
        pole_dec: [83.53, -0.004],
        prime_meridian: [296.14, 587.289000],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [299.27, 0.0],
        pole_dec: [42.91, 0.0],
        prime_meridian: [93.38, 320.7654228],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::PROTEUS_RA,
            dec: &periodic::PROTEUS_DEC,
            pm_sin: &periodic::PROTEUS_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [257.31, 0.0],
        pole_dec: [-15.18, 0.0],
        prime_meridian: [91.24, -472.5450690],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::PUCK_RA,
            dec: &periodic::PUCK_DEC,
            pm_sin: &periodic::PUCK_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [40.38, -0.036],
        pole_dec: [83.55, -0.004],
        prime_meridian: [235.16, 79.6900478],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::RHEA_RA,
            dec: &periodic::RHEA_DEC,
            pm_sin: &periodic::RHEA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [257.31, 0.0],
        pole_dec: [-15.18, 0.0],
        prime_meridian: [314.90, -644.6311260],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::ROSALIND_RA,
            dec: &periodic::ROSALIND_DEC,
            pm_sin: &periodic::ROSALIND_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [40.589, -0.036],
        pole_dec: [83.537, -0.004],
        prime_meridian: [38.90, 810.7939024],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [90.0, 0.0],
        pole_dec: [-62.0, 0.0],
        prime_meridian: [93.94, 1428.852332],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [286.13, 0.0],
        pole_dec: [63.87, 0.0],
        prime_meridian: [84.176, 14.1844000],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [50.51, -0.036],
        pole_dec: [84.06, -0.004],
        prime_meridian: [56.88, 190.6979332],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [40.66, -0.036],
        pole_dec: [83.52, -0.004],
        prime_meridian: [8.95, 190.6979085],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::TETHYS_RA,
            dec: &periodic::TETHYS_DEC,
            pm_sin: &periodic::TETHYS_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [299.36, 0.0],
        pole_dec: [43.45, 0.0],
        prime_meridian: [102.06, 1155.7555612],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::THALASSA_RA,
            dec: &periodic::THALASSA_DEC,
            pm_sin: &periodic::THALASSA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [268.05, -0.009],
        pole_dec: [64.49, 0.003],
        prime_meridian: [8.56, 533.7004100],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::THEBE_RA,
            dec: &periodic::THEBE_DEC,
            pm_sin: &periodic::THEBE_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [39.4827, 0.0],
        pole_dec: [83.4279, 0.0],
        prime_meridian: [186.5855, 22.5769768],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [257.43, 0.0],
        pole_dec: [-15.10, 0.0],
        prime_meridian: [77.74, -41.3514316],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::TITANIA_RA,
            dec: &periodic::TITANIA_DEC,
            pm_sin: &periodic::TITANIA_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [299.36, 0.0],
        pole_dec: [41.17, 0.0],
        prime_meridian: [296.53, -61.2572637],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::TRITON_RA,
            dec: &periodic::TRITON_DEC,
            pm_sin: &periodic::TRITON_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [257.43, 0.0],
        pole_dec: [-15.10, 0.0],
        prime_meridian: [108.05, -86.8688923],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics {
            ra: &periodic::UMBRIEL_RA,
            dec: &periodic::UMBRIEL_DEC,
            pm_sin: &periodic::UMBRIEL_PM_SIN,
            pm_cos: &[],
        },
    },
    RotationConstants {
        pole_ra: [257.311, 0.0],
        pole_dec: [-15.175, 0.0],
        prime_meridian: [203.81, -501.1600928],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [272.76, 0.0],
        pole_dec: [67.16, 0.0],
        prime_meridian: [160.20, -1.4813688],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
    RotationConstants {
        pole_ra: [305.8, 0.0],
        pole_dec: [41.4, 0.0],
        prime_meridian: [292.0, 1617.332776],
        pm_days_squared: 0.0,
        pm_centuries_squared: 0.0,
        periodic: Periodics::NONE,
    },
];

impl IauBody {
    pub fn constants(self) -> &'static RotationConstants {
        &ROTATION_CONSTANTS[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::periodic::MAX_MULTIPLE;

    #[test]
    fn earth_pole_precesses() {
        let c = IauBody::Earth.constants();
        assert_eq!(c.pole_ra, [0.0, -0.641]);
        assert_eq!(c.pole_dec, [90.0, -0.557]);
        assert_eq!(c.prime_meridian, [190.147, 360.9856235]);
        assert!(c.periodic.is_empty());
    }

    #[test]
    fn moon_has_quadratic_prime_meridian() {
        let c = IauBody::Moon.constants();
        assert_eq!(c.pm_days_squared, -1.4e-12);
        assert_eq!(c.pm_centuries_squared, 0.0);
        assert_eq!(c.periodic.ra.len(), 7);
        assert_eq!(c.periodic.pm_sin.len(), 13);
    }

    #[test]
    fn retrograde_rotators_have_negative_rate() {
        for b in [IauBody::Venus, IauBody::Uranus, IauBody::Triton, IauBody::Miranda] {
            assert!(b.constants().prime_meridian[1] < 0.0, "{b}");
        }
    }

    #[test]
    fn neptune_satellites_use_distinct_arguments() {
        use crate::arguments::Argument;
        let pm = |b: IauBody| b.constants().periodic.pm_sin[1].argument;
        assert_eq!(pm(IauBody::Galatea), Argument::N4);
        assert_eq!(pm(IauBody::Despina), Argument::N3);
        assert_eq!(pm(IauBody::Larissa), Argument::N5);
    }

    #[test]
    fn multiples_within_bounds() {
        for b in IauBody::ALL {
            for term in b.constants().periodic.terms() {
                assert!((1..=MAX_MULTIPLE).contains(&term.multiple), "{b}: {term:?}");
            }
        }
    }

    #[test]
    fn poles_are_valid_angles() {
        for b in IauBody::ALL {
            let c = b.constants();
            assert!((0.0..360.0).contains(&c.pole_ra[0]), "{b}");
            assert!((-90.0..=90.0).contains(&c.pole_dec[0]), "{b}");
        }
    }
}
