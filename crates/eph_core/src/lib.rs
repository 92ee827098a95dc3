//! High-level ephemeris engine.
//!
//! This crate provides the primary [`Engine`], which loads the configured
//! VSOP87 theories and answers body-state, orientation and Earth-orientation
//! queries. The lunar and Pluto theories are built in and always available.

pub mod config;
pub mod error;

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use eph_frames::{Nutation, apparent_sidereal_time_degrees_with, mean_obliquity, true_obliquity};
use eph_rotation::{IauBody, Orientation, RotationCache};
use eph_series::{Body, BodyState, Vsop87Theory, lunar_state, pluto_in_range, pluto_state};
use log::{debug, warn};

pub use config::{EngineConfig, available_bodies};
pub use error::EngineError;

/// Single body-state request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub body: Body,
    /// Julian Day (TDB for VSOP87, TT for the lunar and Pluto theories).
    pub jd: f64,
}

/// Telemetry from an orientation batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchStats {
    /// Distinct epochs, each served by one cache step.
    pub cache_steps: u32,
    pub orientations: u32,
}

/// Core query engine.
///
/// `Engine` is [`Send`] + [`Sync`]; share it across threads via `Arc`.
/// Orientation batches use their own short-lived [`RotationCache`], so
/// concurrent batches never contend.
pub struct Engine {
    config: EngineConfig,
    theories: BTreeMap<Body, Vsop87Theory>,
}

// Manual Debug impl: theories hold thousands of terms.
impl Debug for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("theories", &self.theories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Engine {
    /// Validate the config and load its VSOP87 files.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let mut theories = BTreeMap::new();
        for body in config.vsop87_bodies()? {
            let Some(path) = config.vsop87_path(body) else {
                continue;
            };
            if !path.exists() {
                if config.strict_validation {
                    return Err(EngineError::MissingTheory { body, path });
                }
                warn!("VSOP87 file for {body} not found at {}; skipping", path.display());
                continue;
            }
            let theory = Vsop87Theory::load(&path)?;
            if theory.body() != body {
                return Err(EngineError::InvalidConfig(format!(
                    "{} holds {} series, expected {body}",
                    path.display(),
                    theory.body()
                )));
            }
            theories.insert(body, theory);
        }
        Ok(Self { config, theories })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Bodies with a loaded VSOP87 theory.
    pub fn loaded_bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.theories.keys().copied()
    }

    pub fn theory(&self, body: Body) -> Option<&Vsop87Theory> {
        self.theories.get(&body)
    }

    /// State of a body in the native frame and units of its theory.
    pub fn query(&self, query: Query) -> Result<BodyState, EngineError> {
        if !query.jd.is_finite() {
            return Err(EngineError::InvalidQuery("jd must be finite"));
        }
        match query.body {
            Body::Moon => Ok(lunar_state(query.jd)),
            Body::Pluto => {
                if self.config.strict_validation && !pluto_in_range(query.jd) {
                    return Err(EngineError::EpochOutOfRange {
                        body: Body::Pluto,
                        jd: query.jd,
                    });
                }
                Ok(pluto_state(query.jd))
            }
            body => self
                .theories
                .get(&body)
                .map(|theory| theory.state(query.jd))
                .ok_or(EngineError::TheoryNotLoaded(body)),
        }
    }

    /// Evaluate several queries. Returns results in input order.
    pub fn query_batch(&self, queries: &[Query]) -> Vec<Result<BodyState, EngineError>> {
        queries.iter().map(|&q| self.query(q)).collect()
    }

    /// Orientation of one body at `jd` (TDB).
    pub fn orientation(&self, body: IauBody, jd: f64) -> Result<Orientation, EngineError> {
        Ok(self.orientation_batch(&[(body, jd)])?.0.remove(0))
    }

    /// Orientations for `(body, jd)` requests, in input order.
    ///
    /// Requests are grouped by epoch and each distinct epoch steps one
    /// [`RotationCache`], so a catalog-wide query at one instant costs a
    /// single argument evaluation.
    pub fn orientation_batch(
        &self,
        requests: &[(IauBody, f64)],
    ) -> Result<(Vec<Orientation>, BatchStats), EngineError> {
        if requests.iter().any(|(_, jd)| !jd.is_finite()) {
            return Err(EngineError::InvalidQuery("jd must be finite"));
        }

        // Sort indices by epoch bits so equal epochs are adjacent.
        let mut indexed: Vec<(u64, usize)> = requests
            .iter()
            .enumerate()
            .map(|(i, (_, jd))| (jd.to_bits(), i))
            .collect();
        indexed.sort_unstable_by_key(|(bits, _)| *bits);

        let mut results: Vec<Option<Orientation>> = vec![None; requests.len()];
        let mut stats = BatchStats::default();
        let mut cache = RotationCache::new();

        for group in indexed.chunk_by(|a, b| a.0 == b.0) {
            let jd = f64::from_bits(group[0].0);
            cache.step(jd);
            stats.cache_steps += 1;
            for &(_, idx) in group {
                let (body, _) = requests[idx];
                results[idx] = Some(cache.orientation_at(body, jd)?);
                stats.orientations += 1;
            }
        }
        debug!(
            "orientation batch: {} requests over {} epochs",
            stats.orientations, stats.cache_steps
        );

        let orientations = results.into_iter().flatten().collect();
        Ok((orientations, stats))
    }

    /// Nutation with the configured model.
    pub fn nutation(&self, jd: f64) -> Nutation {
        Nutation::compute(jd, self.config.nutation)
    }

    /// Mean obliquity of the ecliptic (radians) with the configured model.
    pub fn mean_obliquity(&self, jd: f64) -> f64 {
        mean_obliquity(jd, self.config.obliquity)
    }

    /// True obliquity (radians): mean obliquity plus nutation in obliquity.
    pub fn true_obliquity(&self, jd: f64) -> f64 {
        true_obliquity(jd, self.config.obliquity, self.config.nutation)
    }

    /// Greenwich apparent sidereal time in degrees (`jd` in UT).
    pub fn apparent_sidereal_time_degrees(&self, jd: f64) -> f64 {
        apparent_sidereal_time_degrees_with(jd, self.config.nutation, self.config.obliquity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn builtin_engine() -> Engine {
        Engine::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn builtin_theories_need_no_files() {
        let engine = builtin_engine();
        assert_eq!(engine.loaded_bodies().count(), 0);
        let moon = engine
            .query(Query {
                body: Body::Moon,
                jd: 2_448_724.5,
            })
            .unwrap();
        assert_eq!(moon.body, Body::Moon);
    }

    #[test]
    fn planet_without_theory_is_reported() {
        let engine = builtin_engine();
        let err = engine
            .query(Query {
                body: Body::Mars,
                jd: 2_451_545.0,
            })
            .unwrap_err();
        assert!(matches!(err, EngineError::TheoryNotLoaded(Body::Mars)), "{err}");
    }

    #[test]
    fn non_finite_epoch_rejected() {
        let engine = builtin_engine();
        let err = engine
            .query(Query {
                body: Body::Moon,
                jd: f64::NAN,
            })
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidQuery(_)));
        assert!(engine.orientation_batch(&[(IauBody::Mars, f64::INFINITY)]).is_err());
    }

    #[test]
    fn strict_engine_rejects_pluto_outside_range() {
        let engine = builtin_engine();
        let q = Query {
            body: Body::Pluto,
            jd: 2_300_000.5,
        };
        assert!(matches!(
            engine.query(q),
            Err(EngineError::EpochOutOfRange { body: Body::Pluto, .. })
        ));

        let lenient = Engine::new(EngineConfig {
            strict_validation: false,
            ..EngineConfig::default()
        })
        .unwrap();
        assert!(lenient.query(q).is_ok());
    }

    #[test]
    fn strict_engine_requires_files() {
        let config = EngineConfig::with_vsop87_dir(PathBuf::from("/nonexistent/vsop87"), true);
        assert!(matches!(
            Engine::new(config),
            Err(EngineError::MissingTheory { .. })
        ));
    }

    #[test]
    fn lenient_engine_skips_missing_files() {
        let config = EngineConfig::with_vsop87_dir(PathBuf::from("/nonexistent/vsop87"), false);
        let engine = Engine::new(config).unwrap();
        assert_eq!(engine.loaded_bodies().count(), 0);
    }

    #[test]
    fn batch_groups_epochs_and_keeps_order() {
        let engine = builtin_engine();
        let requests = [
            (IauBody::Mars, 2_451_545.0),
            (IauBody::Moon, 2_460_000.5),
            (IauBody::Earth, 2_451_545.0),
            (IauBody::Titan, 2_460_000.5),
            (IauBody::Io, 2_455_000.0),
        ];
        let (orientations, stats) = engine.orientation_batch(&requests).unwrap();
        assert_eq!(
            stats,
            BatchStats {
                cache_steps: 3,
                orientations: 5
            }
        );
        for (o, (body, jd)) in orientations.iter().zip(requests) {
            assert_eq!(o.body, body);
            assert_eq!(o.jd, jd);
        }
    }

    #[test]
    fn empty_batch() {
        let (orientations, stats) = builtin_engine().orientation_batch(&[]).unwrap();
        assert!(orientations.is_empty());
        assert_eq!(stats, BatchStats::default());
    }

    // Compile-time assertion: Engine must be Send + Sync.
    #[allow(dead_code)]
    const _: () = {
        fn assert_send_sync<T: Send + Sync>() {}
        fn check() {
            assert_send_sync::<Engine>();
        }
    };
}
