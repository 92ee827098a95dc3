//! Error types for theory loading and body lookup.

use thiserror::Error;

use crate::state::Body;

/// Errors from VSOP87 file loading, body lookup or unsupported requests.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeriesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("VSOP87 parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },
    #[error("unknown body name: {0}")]
    UnknownBody(String),
    #[error("{body:?} is not covered by {theory}")]
    UnsupportedBody { body: Body, theory: &'static str },
}
