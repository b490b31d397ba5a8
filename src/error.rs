use thiserror::Error;

/// Errors reported when stroke points break the preprocessor contract.
///
/// Outline generation itself never fails; these are only produced by
/// [`validate_points`](crate::point::validate_points).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrokeError {
    #[error("point {index} has a non-finite {field}")]
    NonFinite { index: usize, field: &'static str },

    #[error("pressure {value} at point {index} is out of range [0, 1]")]
    PressureOutOfRange { index: usize, value: f64 },

    #[error("first point must have zero distance, got {0}")]
    NonZeroInitialDistance(f64),

    #[error("negative distance {value} at point {index}")]
    NegativeDistance { index: usize, value: f64 },

    #[error("running length decreases at point {index}: {previous} -> {current}")]
    DecreasingLength {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("running length {running_length} at point {index} does not match accumulated distance {expected}")]
    LengthMismatch {
        index: usize,
        running_length: f64,
        expected: f64,
    },
}

/// Convenience type alias for results using [`StrokeError`].
pub type Result<T> = std::result::Result<T, StrokeError>;
