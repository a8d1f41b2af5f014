//! Error types for curve construction, editing and loading.

use thiserror::Error;

/// Errors reported by the fallible curve operations.
///
/// Evaluation never fails; these only come out of validation, index-based
/// edits and JSON loading.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CurveError {
    /// A keyframe sits earlier than the one before it.
    #[error("keyframe {index} at time {time} precedes previous keyframe time {previous}")]
    UnsortedKeyframes { index: usize, previous: f32, time: f32 },

    /// A keyframe time is NaN or infinite.
    #[error("keyframe {index} has non-finite time {time}")]
    NonFiniteTime { index: usize, time: f32 },

    /// Keyframe index past the end of the curve.
    #[error("keyframe index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Curve JSON could not be decoded.
    #[error("curve json parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CurveError {
    fn from(err: serde_json::Error) -> Self {
        CurveError::Parse(err.to_string())
    }
}
