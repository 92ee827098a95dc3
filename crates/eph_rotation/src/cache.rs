//! Shared argument cache and per-body orientation.
//!
//! Many satellites reference the same handful of arguments (for example
//! every Neptunian moon uses `N`). [`RotationCache::step`] evaluates every
//! fundamental argument once for an instant, then the sine or cosine of
//! each `(argument, multiple)` pair that some body actually references.
//! Orientation queries at that instant only sum precomputed values.
//!
//! A cache is plain data: it is `Send + Sync`, may be read concurrently
//! once stepped, and must be re-stepped (through `&mut`) for a new instant.

use std::f64::consts::TAU;
use std::sync::OnceLock;

use eph_time::{Instant, normalize_degrees};
use log::debug;

use crate::arguments::{ARGUMENT_COUNT, Argument};
use crate::body::IauBody;
use crate::error::RotationError;
use crate::periodic::{MAX_MULTIPLE, PeriodicTerm};

const MULTIPLE_SLOTS: usize = MAX_MULTIPLE as usize + 1;

type TrigTable = [[f64; MULTIPLE_SLOTS]; ARGUMENT_COUNT];

/// `(argument, multiple)` pairs referenced by the body catalog, split by
/// the trig function applied to them.
#[derive(Debug)]
struct TrigLayout {
    sines: Vec<(Argument, u8)>,
    cosines: Vec<(Argument, u8)>,
}

impl TrigLayout {
    fn build() -> Self {
        let mut sines = Vec::new();
        let mut cosines = Vec::new();
        for body in IauBody::ALL {
            let periodic = &body.constants().periodic;
            let key = |t: &PeriodicTerm| (t.argument, t.multiple);
            sines.extend(periodic.ra.iter().chain(periodic.pm_sin).map(key));
            cosines.extend(periodic.dec.iter().chain(periodic.pm_cos).map(key));
        }
        for pairs in [&mut sines, &mut cosines] {
            pairs.sort_unstable();
            pairs.dedup();
        }
        Self { sines, cosines }
    }
}

fn layout() -> &'static TrigLayout {
    static LAYOUT: OnceLock<TrigLayout> = OnceLock::new();
    LAYOUT.get_or_init(TrigLayout::build)
}

/// Number of distinct `(sine pairs, cosine pairs)` the catalog references.
pub fn referenced_pairs() -> (usize, usize) {
    let layout = layout();
    (layout.sines.len(), layout.cosines.len())
}

/// Pole direction and prime meridian of a body (ICRF, radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub body: IauBody,
    pub jd: f64,
    /// Pole right ascension α0 in `[0, 2π)`.
    pub right_ascension: f64,
    /// Pole declination δ0.
    pub declination: f64,
    /// Prime meridian angle W in `[0, 2π)`.
    pub prime_meridian: f64,
}

impl Orientation {
    /// Unit vector of the north pole in ICRF.
    pub fn pole_vector(&self) -> [f64; 3] {
        let (sin_a, cos_a) = self.right_ascension.sin_cos();
        let (sin_d, cos_d) = self.declination.sin_cos();
        [cos_d * cos_a, cos_d * sin_a, sin_d]
    }
}

/// Fundamental arguments and their referenced sines/cosines at one instant.
#[derive(Debug, Clone)]
pub struct RotationCache {
    instant: Option<Instant>,
    arguments: [f64; ARGUMENT_COUNT],
    sines: Box<TrigTable>,
    cosines: Box<TrigTable>,
}

impl Default for RotationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationCache {
    /// An unstepped cache. Every orientation query fails with
    /// [`RotationError::NotStepped`] until [`RotationCache::step`] is called.
    pub fn new() -> Self {
        Self {
            instant: None,
            arguments: [f64::NAN; ARGUMENT_COUNT],
            sines: Box::new([[f64::NAN; MULTIPLE_SLOTS]; ARGUMENT_COUNT]),
            cosines: Box::new([[f64::NAN; MULTIPLE_SLOTS]; ARGUMENT_COUNT]),
        }
    }

    /// Recompute the shared table for `jd` (TDB Julian Day).
    pub fn step(&mut self, jd: f64) {
        let instant = Instant::from_jd(jd);
        for arg in Argument::ALL {
            self.arguments[arg.index()] = arg.evaluate(instant);
        }

        let layout = layout();
        for &(arg, k) in &layout.sines {
            self.sines[arg.index()][k as usize] = (k as f64 * self.arguments[arg.index()]).sin();
        }
        for &(arg, k) in &layout.cosines {
            self.cosines[arg.index()][k as usize] = (k as f64 * self.arguments[arg.index()]).cos();
        }

        self.instant = Some(instant);
        debug!(
            "rotation cache stepped to JD {jd}: {} arguments, {} sines, {} cosines",
            ARGUMENT_COUNT,
            layout.sines.len(),
            layout.cosines.len()
        );
    }

    /// Julian Day of the last [`RotationCache::step`], if any.
    pub fn stepped_jd(&self) -> Option<f64> {
        self.instant.map(Instant::jd)
    }

    pub fn is_stepped(&self) -> bool {
        self.instant.is_some()
    }

    /// Value of a fundamental argument (radians, `[0, 2π)`) at the stepped
    /// instant.
    pub fn argument(&self, arg: Argument) -> Result<f64, RotationError> {
        self.stepped()?;
        Ok(self.arguments[arg.index()])
    }

    fn stepped(&self) -> Result<Instant, RotationError> {
        self.instant.ok_or(RotationError::NotStepped)
    }

    fn sine_sum(&self, terms: &[PeriodicTerm]) -> f64 {
        terms
            .iter()
            .map(|t| t.amplitude * self.sines[t.argument.index()][t.multiple as usize])
            .sum()
    }

    fn cosine_sum(&self, terms: &[PeriodicTerm]) -> f64 {
        terms
            .iter()
            .map(|t| t.amplitude * self.cosines[t.argument.index()][t.multiple as usize])
            .sum()
    }

    /// Orientation of `body` at the stepped instant.
    pub fn orientation(&self, body: IauBody) -> Result<Orientation, RotationError> {
        let instant = self.stepped()?;
        let c = body.constants();
        let d = instant.days();
        let t = instant.centuries();

        let alpha = c.pole_ra[0] + c.pole_ra[1] * t + self.sine_sum(c.periodic.ra);
        let delta = c.pole_dec[0] + c.pole_dec[1] * t + self.cosine_sum(c.periodic.dec);
        let w = c.prime_meridian[0]
            + c.prime_meridian[1] * d
            + c.pm_days_squared * d * d
            + c.pm_centuries_squared * t * t
            + self.sine_sum(c.periodic.pm_sin)
            + self.cosine_sum(c.periodic.pm_cos);

        Ok(Orientation {
            body,
            jd: instant.jd(),
            right_ascension: normalize_degrees(alpha).to_radians() % TAU,
            declination: delta.to_radians(),
            prime_meridian: normalize_degrees(w).to_radians() % TAU,
        })
    }

    /// Like [`RotationCache::orientation`], but fails if the cache was
    /// stepped at a different instant than `jd`.
    pub fn orientation_at(&self, body: IauBody, jd: f64) -> Result<Orientation, RotationError> {
        let stepped_jd = self.stepped()?.jd();
        if stepped_jd != jd {
            return Err(RotationError::StaleCache {
                stepped_jd,
                requested_jd: jd,
            });
        }
        self.orientation(body)
    }

    /// Orientations of every catalog body, in [`IauBody::ALL`] order.
    pub fn orientations(&self) -> Result<Vec<Orientation>, RotationError> {
        IauBody::ALL
            .into_iter()
            .map(|body| self.orientation(body))
            .collect()
    }
}
