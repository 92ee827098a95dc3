//! Error types for validated angle constructors.

use thiserror::Error;

/// Rejected sexagesimal angle components.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AngleError {
    /// Minutes component outside `0..60`.
    #[error("minutes out of range: {0} (expected 0..60)")]
    MinutesOutOfRange(i64),
    /// Seconds component outside `[0, 60)`.
    #[error("seconds out of range: {0} (expected 0 <= s < 60)")]
    SecondsOutOfRange(f64),
    /// Hours component outside `0..24`.
    #[error("hours out of range: {0} (expected 0..24)")]
    HoursOutOfRange(i64),
    /// A component was NaN or infinite.
    #[error("angle component is not finite")]
    NonFinite,
}
