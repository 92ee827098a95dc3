//! Error types for orientation lookups.

use thiserror::Error;

/// Precondition failures of the rotation cache and body lookup.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum RotationError {
    #[error("rotation cache has not been stepped")]
    NotStepped,
    #[error("rotation cache was stepped at JD {stepped_jd}, not JD {requested_jd}")]
    StaleCache { stepped_jd: f64, requested_jd: f64 },
    #[error("unknown IAU body: {0}")]
    UnknownBody(String),
}
