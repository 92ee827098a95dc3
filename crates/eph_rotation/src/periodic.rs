//! Periodic corrections to the pole direction and prime meridian.
//!
//! Amplitudes are in degrees. Right ascension and the sine part of `W` use
//! `sin(k·arg)`; declination and the cosine part of `W` use `cos(k·arg)`.

use crate::arguments::Argument;

/// One `amplitude · trig(multiple · argument)` term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    pub argument: Argument,
    pub multiple: u8,
    pub amplitude: f64,
}

const fn pt(argument: Argument, multiple: u8, amplitude: f64) -> PeriodicTerm {
    PeriodicTerm {
        argument,
        multiple,
        amplitude,
    }
}

/// Highest multiple used by any term.
pub const MAX_MULTIPLE: u8 = 9;

/// The four periodic channels of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Periodics {
    /// Sine terms added to the pole right ascension.
    pub ra: &'static [PeriodicTerm],
    /// Cosine terms added to the pole declination.
    pub dec: &'static [PeriodicTerm],
    pub pm_sin: &'static [PeriodicTerm],
    pub pm_cos: &'static [PeriodicTerm],
}

impl Periodics {
    pub const NONE: Periodics = Periodics {
        ra: &[],
        dec: &[],
        pm_sin: &[],
        pm_cos: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.ra.is_empty()
            && self.dec.is_empty()
            && self.pm_sin.is_empty()
            && self.pm_cos.is_empty()
    }

    /// Every term of every channel.
    pub fn terms(&self) -> impl Iterator<Item = &'static PeriodicTerm> {
        self.ra
            .iter()
            .chain(self.dec)
            .chain(self.pm_sin)
            .chain(self.pm_cos)
    }
}

pub(crate) static AMALTHEA_RA: [PeriodicTerm; 2] = [
    pt(Argument::J1, 1, -0.84),
    pt(Argument::J1, 2, 0.01),
];
pub(crate) static AMALTHEA_DEC: [PeriodicTerm; 1] = [
    pt(Argument::J1, 1, -0.36),
];
pub(crate) static AMALTHEA_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::J1, 1, 0.76),
    pt(Argument::J1, 2, -0.01),
];

pub(crate) static ARIEL_RA: [PeriodicTerm; 1] = [
    pt(Argument::U13, 1, 0.29),
];
pub(crate) static ARIEL_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U13, 1, 0.28),
];
pub(crate) static ARIEL_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::U12, 1, 0.05),
    pt(Argument::U13, 1, 0.08),
];

pub(crate) static BELINDA_RA: [PeriodicTerm; 1] = [
    pt(Argument::U9, 1, -0.03),
];
pub(crate) static BELINDA_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U9, 1, 0.03),
];
pub(crate) static BELINDA_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::U9, 1, -0.01),
];

pub(crate) static BIANCA_RA: [PeriodicTerm; 1] = [
    pt(Argument::U3, 1, -0.16),
];
pub(crate) static BIANCA_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U3, 1, 0.16),
];
pub(crate) static BIANCA_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::U3, 1, -0.04),
];

pub(crate) static CALLISTO_RA: [PeriodicTerm; 3] = [
    pt(Argument::J5, 1, -0.068),
    pt(Argument::J6, 1, 0.590),
    pt(Argument::J8, 1, 0.010),
];
pub(crate) static CALLISTO_DEC: [PeriodicTerm; 3] = [
    pt(Argument::J5, 1, -0.029),
    pt(Argument::J6, 1, 0.254),
    pt(Argument::J8, 1, -0.004),
];
pub(crate) static CALLISTO_PM_SIN: [PeriodicTerm; 3] = [
    pt(Argument::J5, 1, 0.061),
    pt(Argument::J6, 1, -0.533),
    pt(Argument::J8, 1, -0.009),
];

pub(crate) static CORDELIA_RA: [PeriodicTerm; 1] = [
    pt(Argument::U1, 1, -0.15),
];
pub(crate) static CORDELIA_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U1, 1, 0.14),
];
pub(crate) static CORDELIA_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::U1, 1, -0.04),
];

pub(crate) static CRESSIDA_RA: [PeriodicTerm; 1] = [
    pt(Argument::U4, 1, -0.04),
];
pub(crate) static CRESSIDA_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U4, 1, 0.04),
];
pub(crate) static CRESSIDA_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::U4, 1, -0.01),
];

pub(crate) static DEIMOS_RA: [PeriodicTerm; 1] = [
    pt(Argument::M3, 1, 2.98),
];
pub(crate) static DEIMOS_DEC: [PeriodicTerm; 1] = [
    pt(Argument::M3, 1, -1.78),
];
pub(crate) static DEIMOS_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::M3, 1, -2.58),
];
pub(crate) static DEIMOS_PM_COS: [PeriodicTerm; 1] = [
    pt(Argument::M3, 1, 0.19),
];

pub(crate) static DESDEMONA_RA: [PeriodicTerm; 1] = [
    pt(Argument::U5, 1, -0.17),
];
pub(crate) static DESDEMONA_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U5, 1, 0.16),
];
pub(crate) static DESDEMONA_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::U5, 1, -0.04),
];

pub(crate) static DESPINA_RA: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, 0.70),
    pt(Argument::N3, 1, -0.09),
];
pub(crate) static DESPINA_DEC: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, -0.51),
    pt(Argument::N3, 1, -0.07),
];
pub(crate) static DESPINA_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, -0.49),
    pt(Argument::N3, 1, 0.06),
];

pub(crate) static EPIMETHEUS_RA: [PeriodicTerm; 2] = [
    pt(Argument::S1, 1, -3.153),
    pt(Argument::S1, 2, 0.086),
];
pub(crate) static EPIMETHEUS_DEC: [PeriodicTerm; 2] = [
    pt(Argument::S1, 1, -0.356),
    pt(Argument::S1, 2, 0.005),
];
pub(crate) static EPIMETHEUS_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::S1, 1, 3.133),
    pt(Argument::S1, 2, -0.086),
];

pub(crate) static EUROPA_RA: [PeriodicTerm; 4] = [
    pt(Argument::J4, 1, 1.086),
    pt(Argument::J5, 1, 0.060),
    pt(Argument::J6, 1, 0.015),
    pt(Argument::J7, 1, 0.009),
];
pub(crate) static EUROPA_DEC: [PeriodicTerm; 4] = [
    pt(Argument::J4, 1, 0.468),
    pt(Argument::J5, 1, 0.026),
    pt(Argument::J6, 1, 0.007),
    pt(Argument::J7, 1, 0.002),
];
pub(crate) static EUROPA_PM_SIN: [PeriodicTerm; 4] = [
    pt(Argument::J4, 1, -0.980),
    pt(Argument::J5, 1, -0.054),
    pt(Argument::J6, 1, -0.014),
    pt(Argument::J7, 1, -0.008),
];

pub(crate) static GALATEA_RA: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, 0.70),
    pt(Argument::N4, 1, -0.07),
];
pub(crate) static GALATEA_DEC: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, -0.51),
    pt(Argument::N4, 1, -0.05),
];
pub(crate) static GALATEA_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, -0.48),
    pt(Argument::N4, 1, 0.05),
];

pub(crate) static GANYMEDE_RA: [PeriodicTerm; 3] = [
    pt(Argument::J4, 1, -0.037),
    pt(Argument::J5, 1, 0.431),
    pt(Argument::J6, 1, 0.091),
];
pub(crate) static GANYMEDE_DEC: [PeriodicTerm; 3] = [
    pt(Argument::J4, 1, -0.016),
    pt(Argument::J5, 1, 0.186),
    pt(Argument::J6, 1, 0.039),
];
pub(crate) static GANYMEDE_PM_SIN: [PeriodicTerm; 3] = [
    pt(Argument::J4, 1, 0.033),
    pt(Argument::J5, 1, -0.389),
    pt(Argument::J6, 1, -0.082),
];

pub(crate) static IO_RA: [PeriodicTerm; 2] = [
    pt(Argument::J3, 1, 0.094),
    pt(Argument::J4, 1, 0.024),
];
pub(crate) static IO_DEC: [PeriodicTerm; 2] = [
    pt(Argument::J3, 1, 0.040),
    pt(Argument::J4, 1, 0.011),
];
pub(crate) static IO_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::J3, 1, -0.085),
    pt(Argument::J4, 1, -0.022),
];

pub(crate) static JANUS_RA: [PeriodicTerm; 2] = [
    pt(Argument::S2, 1, -1.623),
    pt(Argument::S2, 2, 0.023),
];
pub(crate) static JANUS_DEC: [PeriodicTerm; 2] = [
    pt(Argument::S2, 1, -0.183),
    pt(Argument::S2, 2, 0.001),
];
pub(crate) static JANUS_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::S2, 1, 1.613),
    pt(Argument::S2, 2, -0.023),
];

pub(crate) static JULIET_RA: [PeriodicTerm; 1] = [
    pt(Argument::U6, 1, -0.06),
];
pub(crate) static JULIET_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U6, 1, 0.06),
];
pub(crate) static JULIET_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::U6, 1, -0.02),
];

pub(crate) static JUPITER_RA: [PeriodicTerm; 5] = [
    pt(Argument::Ja, 1, 0.000117),
    pt(Argument::Jb, 1, 0.000938),
    pt(Argument::Jc, 1, 0.001432),
    pt(Argument::Jd, 1, 0.000030),
    pt(Argument::Je, 1, 0.002150),
];
pub(crate) static JUPITER_DEC: [PeriodicTerm; 5] = [
    pt(Argument::Ja, 1, 0.000050),
    pt(Argument::Jb, 1, 0.000404),
    pt(Argument::Jc, 1, 0.000617),
    pt(Argument::Jd, 1, -0.000013),
    pt(Argument::Je, 1, 0.000926),
];

pub(crate) static LARISSA_RA: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, 0.70),
    pt(Argument::N5, 1, -0.27),
];
pub(crate) static LARISSA_DEC: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, -0.51),
    pt(Argument::N5, 1, -0.20),
];
pub(crate) static LARISSA_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, -0.48),
    pt(Argument::N5, 1, 0.19),
];

pub(crate) static MERCURY_PM_SIN: [PeriodicTerm; 5] = [
    pt(Argument::Me1, 1, 0.00993822),
    pt(Argument::Me2, 1, -0.00104581),
    pt(Argument::Me3, 1, -0.00010280),
    pt(Argument::Me4, 1, -0.00002364),
    pt(Argument::Me5, 1, -0.00000532),
];

pub(crate) static MIMAS_RA: [PeriodicTerm; 1] = [
    pt(Argument::S3, 1, 13.56),
];
pub(crate) static MIMAS_DEC: [PeriodicTerm; 1] = [
    pt(Argument::S3, 1, -1.53),
];
pub(crate) static MIMAS_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::S3, 1, -13.48),
    pt(Argument::S5, 1, -44.85),
];

pub(crate) static MIRANDA_RA: [PeriodicTerm; 2] = [
    pt(Argument::U11, 1, 4.41),
    pt(Argument::U11, 2, -0.04),
];
pub(crate) static MIRANDA_DEC: [PeriodicTerm; 2] = [
    pt(Argument::U11, 1, 4.25),
    pt(Argument::U11, 2, -0.02),
];
pub(crate) static MIRANDA_PM_SIN: [PeriodicTerm; 4] = [
    pt(Argument::U12, 1, -1.27),
    pt(Argument::U12, 2, 0.15),
    pt(Argument::U11, 1, 1.15),
    pt(Argument::U11, 2, -0.09),
];

pub(crate) static MOON_RA: [PeriodicTerm; 7] = [
    pt(Argument::E1, 1, -3.8787),
    pt(Argument::E2, 1, -0.1204),
    pt(Argument::E3, 1, 0.0700),
    pt(Argument::E4, 1, -0.0172),
    pt(Argument::E6, 1, 0.0072),
    pt(Argument::E10, 1, -0.0052),
    pt(Argument::E13, 1, 0.0043),
];
pub(crate) static MOON_DEC: [PeriodicTerm; 8] = [
    pt(Argument::E1, 1, 1.5419),
    pt(Argument::E2, 1, 0.0239),
    pt(Argument::E3, 1, -0.0278),
    pt(Argument::E4, 1, 0.0068),
    pt(Argument::E6, 1, -0.0029),
    pt(Argument::E7, 1, 0.0009),
    pt(Argument::E10, 1, 0.0008),
    pt(Argument::E13, 1, -0.0009),
];
pub(crate) static MOON_PM_SIN: [PeriodicTerm; 13] = [
    pt(Argument::E1, 1, 3.5610),
    pt(Argument::E2, 1, 0.1208),
    pt(Argument::E3, 1, -0.0642),
    pt(Argument::E4, 1, 0.0158),
    pt(Argument::E5, 1, 0.0252),
    pt(Argument::E6, 1, -0.0066),
    pt(Argument::E7, 1, -0.0047),
    pt(Argument::E8, 1, -0.0046),
    pt(Argument::E9, 1, 0.0028),
    pt(Argument::E10, 1, 0.0052),
    pt(Argument::E11, 1, 0.0040),
    pt(Argument::E12, 1, 0.0019),
    pt(Argument::E13, 1, -0.0044),
];

pub(crate) static NAIAD_RA: [PeriodicTerm; 3] = [
    pt(Argument::N, 1, 0.70),
    pt(Argument::N1, 1, -6.49),
    pt(Argument::N1, 2, 0.25),
];
pub(crate) static NAIAD_DEC: [PeriodicTerm; 3] = [
    pt(Argument::N, 1, -0.51),
    pt(Argument::N1, 1, -4.75),
    pt(Argument::N1, 2, 0.09),
];
pub(crate) static NAIAD_PM_SIN: [PeriodicTerm; 3] = [
    pt(Argument::N, 1, -0.48),
    pt(Argument::N1, 1, 4.40),
    pt(Argument::N1, 2, -0.27),
];

pub(crate) static NEPTUNE_RA: [PeriodicTerm; 1] = [
    pt(Argument::N, 1, 0.70),
];
pub(crate) static NEPTUNE_DEC: [PeriodicTerm; 1] = [
    pt(Argument::N, 1, -0.51),
];
pub(crate) static NEPTUNE_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::N, 1, -0.48),
];

pub(crate) static OBERON_RA: [PeriodicTerm; 1] = [
    pt(Argument::U16, 1, 0.16),
];
pub(crate) static OBERON_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U16, 1, 0.16),
];
pub(crate) static OBERON_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::U16, 1, 0.04),
];

pub(crate) static OPHELIA_RA: [PeriodicTerm; 1] = [
    pt(Argument::U2, 1, -0.09),
];
pub(crate) static OPHELIA_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U2, 1, 0.09),
];
pub(crate) static OPHELIA_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::U2, 1, -0.03),
];

pub(crate) static PHOBOS_RA: [PeriodicTerm; 1] = [
    pt(Argument::M1, 1, 1.79),
];
pub(crate) static PHOBOS_DEC: [PeriodicTerm; 1] = [
    pt(Argument::M1, 1, -1.08),
];
pub(crate) static PHOBOS_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::M1, 1, -1.42),
    pt(Argument::M2, 1, -0.78),
];

pub(crate) static PORTIA_RA: [PeriodicTerm; 1] = [
    pt(Argument::U7, 1, -0.09),
];
pub(crate) static PORTIA_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U7, 1, 0.09),
];
pub(crate) static PORTIA_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::U7, 1, -0.02),
];

pub(crate) static PROTEUS_RA: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, 0.70),
    pt(Argument::N6, 1, -0.05),
];
pub(crate) static PROTEUS_DEC: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, -0.51),
    pt(Argument::N6, 1, -0.04),
];
pub(crate) static PROTEUS_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, -0.48),
    pt(Argument::N6, 1, 0.04),
];

pub(crate) static PUCK_RA: [PeriodicTerm; 1] = [
    pt(Argument::U10, 1, -0.33),
];
pub(crate) static PUCK_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U10, 1, 0.31),
];
pub(crate) static PUCK_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::U10, 1, -0.09),
];

pub(crate) static RHEA_RA: [PeriodicTerm; 1] = [
    pt(Argument::S6, 1, 3.10),
];
pub(crate) static RHEA_DEC: [PeriodicTerm; 1] = [
    pt(Argument::S6, 1, -0.35),
];
pub(crate) static RHEA_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::S6, 1, -3.08),
];

pub(crate) static ROSALIND_RA: [PeriodicTerm; 1] = [
    pt(Argument::U8, 1, -0.29),
];
pub(crate) static ROSALIND_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U8, 1, 0.28),
];
pub(crate) static ROSALIND_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::U8, 1, -0.08),
];

pub(crate) static TETHYS_RA: [PeriodicTerm; 1] = [
    pt(Argument::S4, 1, 9.66),
];
pub(crate) static TETHYS_DEC: [PeriodicTerm; 1] = [
    pt(Argument::S4, 1, -1.09),
];
pub(crate) static TETHYS_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::S4, 1, -9.60),
    pt(Argument::S5, 1, 2.23),
];

pub(crate) static THALASSA_RA: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, 0.70),
    pt(Argument::N2, 1, -0.28),
];
pub(crate) static THALASSA_DEC: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, -0.51),
    pt(Argument::N2, 1, -0.21),
];
pub(crate) static THALASSA_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::N, 1, -0.48),
    pt(Argument::N2, 1, 0.19),
];

pub(crate) static THEBE_RA: [PeriodicTerm; 2] = [
    pt(Argument::J2, 1, -2.11),
    pt(Argument::J2, 2, 0.04),
];
pub(crate) static THEBE_DEC: [PeriodicTerm; 2] = [
    pt(Argument::J2, 1, -0.91),
    pt(Argument::J2, 2, 0.01),
];
pub(crate) static THEBE_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::J2, 1, 1.91),
    pt(Argument::J2, 2, -0.04),
];

pub(crate) static TITANIA_RA: [PeriodicTerm; 1] = [
    pt(Argument::U15, 1, 0.29),
];
pub(crate) static TITANIA_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U15, 1, 0.28),
];
pub(crate) static TITANIA_PM_SIN: [PeriodicTerm; 1] = [
    pt(Argument::U15, 1, 0.08),
];

pub(crate) static TRITON_RA: [PeriodicTerm; 9] = [
    pt(Argument::N7, 1, -32.35),
    pt(Argument::N7, 2, -6.28),
    pt(Argument::N7, 3, -2.08),
    pt(Argument::N7, 4, -0.74),
    pt(Argument::N7, 5, -0.28),
    pt(Argument::N7, 6, -0.11),
    pt(Argument::N7, 7, -0.07),
    pt(Argument::N7, 8, -0.02),
    pt(Argument::N7, 9, -0.01),
];
pub(crate) static TRITON_DEC: [PeriodicTerm; 7] = [
    pt(Argument::N7, 1, 22.55),
    pt(Argument::N7, 2, 2.10),
    pt(Argument::N7, 3, 0.55),
    pt(Argument::N7, 4, 0.16),
    pt(Argument::N7, 5, 0.05),
    pt(Argument::N7, 6, 0.02),
    pt(Argument::N7, 7, 0.01),
];
pub(crate) static TRITON_PM_SIN: [PeriodicTerm; 9] = [
    pt(Argument::N7, 1, 22.25),
    pt(Argument::N7, 2, 6.73),
    pt(Argument::N7, 3, 2.05),
    pt(Argument::N7, 4, 0.74),
    pt(Argument::N7, 5, 0.28),
    pt(Argument::N7, 6, 0.11),
    pt(Argument::N7, 7, 0.05),
    pt(Argument::N7, 8, 0.02),
    pt(Argument::N7, 9, 0.01),
];

pub(crate) static UMBRIEL_RA: [PeriodicTerm; 1] = [
    pt(Argument::U14, 1, 0.21),
];
pub(crate) static UMBRIEL_DEC: [PeriodicTerm; 1] = [
    pt(Argument::U14, 1, 0.20),
];
pub(crate) static UMBRIEL_PM_SIN: [PeriodicTerm; 2] = [
    pt(Argument::U12, 1, -0.09),
    pt(Argument::U14, 1, 0.06),
];
