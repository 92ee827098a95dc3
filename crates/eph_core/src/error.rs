//! Engine error type.

use std::path::PathBuf;

use eph_rotation::RotationError;
use eph_series::{Body, SeriesError};
use thiserror::Error;

/// Errors from configuration, theory loading and queries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("theory file for {body} not found: {path}")]
    MissingTheory { body: Body, path: PathBuf },
    #[error("no theory loaded for {0}")]
    TheoryNotLoaded(Body),
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
    #[error("epoch JD {jd} outside the validity range of the {body} theory")]
    EpochOutOfRange { body: Body, jd: f64 },
    #[error(transparent)]
    Series(#[from] SeriesError),
    #[error(transparent)]
    Rotation(#[from] RotationError),
}
