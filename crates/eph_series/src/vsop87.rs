//! VSOP87 planetary theory evaluated from the official series files.
//!
//! The time argument is Julian millennia from J2000.0 (TDB). Each of the
//! three coordinates is `Σₙ tⁿ · Σ A·cos(B + C·t)` for n = 0..5; velocities
//! are the analytic derivative, converted from per-millennium to per-day.

use std::path::Path;

use eph_time::{DAYS_PER_MILLENNIUM, jd_to_millennia, normalize_radians};

use crate::error::SeriesError;
use crate::evaluator::{CosineTerm, cosine_series, power_series};
use crate::state::{Body, BodyState, StateUnits};
use crate::vsop87_file::{SeriesTable, Vsop87Version, parse_vsop87};

/// One body's VSOP87 series for one version.
#[derive(Debug, Clone)]
pub struct Vsop87Theory {
    body: Body,
    version: Vsop87Version,
    series: SeriesTable,
}

impl Vsop87Theory {
    /// Load and parse a VSOP87 file from disk.
    pub fn load(path: &Path) -> Result<Self, SeriesError> {
        let content = std::fs::read_to_string(path)?;
        let theory = Self::parse(&content)?;
        log::info!(
            "loaded VSOP87{} {} from {} ({} terms)",
            theory.version.letter(),
            theory.body,
            path.display(),
            theory.term_count()
        );
        Ok(theory)
    }

    /// Parse VSOP87 file content.
    pub fn parse(content: &str) -> Result<Self, SeriesError> {
        let file = parse_vsop87(content)?;
        Ok(Self {
            body: file.body,
            version: file.version,
            series: file.series,
        })
    }

    /// Build from already-prepared series, `series[variable][power]`.
    pub fn from_series(body: Body, version: Vsop87Version, series: SeriesTable) -> Self {
        Self {
            body,
            version,
            series,
        }
    }

    pub fn body(&self) -> Body {
        self.body
    }

    pub fn version(&self) -> Vsop87Version {
        self.version
    }

    /// True for versions B and D (L, B, R output).
    pub fn spherical(&self) -> bool {
        self.version.is_spherical()
    }

    /// Total number of periodic terms across all series.
    pub fn term_count(&self) -> usize {
        self.series.iter().flatten().map(Vec::len).sum()
    }

    fn coordinate(blocks: &[Vec<CosineTerm>; 6], t: f64) -> (f64, f64) {
        let parts = blocks.each_ref().map(|terms| cosine_series(terms, t));
        power_series(&parts, t)
    }

    /// Position and velocity at `jd`.
    ///
    /// Rectangular versions give AU and AU/day. Spherical versions give
    /// L, B (rad) and R (AU), with L normalized to `[0, 2π)`.
    pub fn state(&self, jd: f64) -> BodyState {
        let t = jd_to_millennia(jd);
        let mut position = [0.0; 3];
        let mut velocity = [0.0; 3];
        for (i, blocks) in self.series.iter().enumerate() {
            let (value, rate) = Self::coordinate(blocks, t);
            position[i] = value;
            velocity[i] = rate / DAYS_PER_MILLENNIUM;
        }

        let units = if self.spherical() {
            position[0] = normalize_radians(position[0]);
            StateUnits::HeliocentricSpherical
        } else {
            StateUnits::Rectangular
        };

        BodyState {
            body: self.body,
            jd,
            position,
            velocity,
            units,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn circular_orbit(version: Vsop87Version) -> Vsop87Theory {
        // x = cos(2π t), y = sin(2π t) as cos(B + Ct) terms.
        let w = std::f64::consts::TAU;
        let mut series: SeriesTable = Default::default();
        series[0][0].push(CosineTerm { amplitude: 1.0, phase: 0.0, frequency: w });
        series[1][0].push(CosineTerm {
            amplitude: 1.0,
            phase: -std::f64::consts::FRAC_PI_2,
            frequency: w,
        });
        series[2][1].push(CosineTerm { amplitude: 0.5, phase: 0.0, frequency: 0.0 });
        Vsop87Theory::from_series(Body::Mars, version, series)
    }

    #[test]
    fn synthetic_series_position_and_velocity() {
        let theory = circular_orbit(Vsop87Version::A);
        let jd = eph_time::J2000_JD + DAYS_PER_MILLENNIUM * 0.25;
        let s = theory.state(jd);
        assert_eq!(s.units, StateUnits::Rectangular);
        assert_abs_diff_eq!(s.position[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.position[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.position[2], 0.125, epsilon = 1e-12);
        let w = std::f64::consts::TAU / DAYS_PER_MILLENNIUM;
        assert_abs_diff_eq!(s.velocity[0], -w, epsilon = 1e-12);
        assert_abs_diff_eq!(s.velocity[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.velocity[2], 0.5 / DAYS_PER_MILLENNIUM, epsilon = 1e-15);
    }

    #[test]
    fn spherical_longitude_is_normalized() {
        let mut series: SeriesTable = Default::default();
        series[0][0].push(CosineTerm { amplitude: -1.0, phase: 0.0, frequency: 0.0 });
        let theory = Vsop87Theory::from_series(Body::Venus, Vsop87Version::D, series);
        let s = theory.state(eph_time::J2000_JD);
        assert!(theory.spherical());
        assert_eq!(s.units, StateUnits::HeliocentricSpherical);
        assert_abs_diff_eq!(s.position[0], std::f64::consts::TAU - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Vsop87Theory::load(Path::new("/nonexistent/VSOP87E.ear")).unwrap_err();
        assert!(matches!(err, SeriesError::Io(_)));
    }
}
