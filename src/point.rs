use crate::error::{Result, StrokeError};
use crate::math::Vec2;

/// Relative tolerance when comparing running length against summed distances.
const LENGTH_TOLERANCE: f64 = 1e-6;

/// An input sample annotated by the point preprocessor.
///
/// `vector` is the unit direction from this point back toward its
/// predecessor. At index 0 it is typically copied from index 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    /// Sample position.
    pub point: Vec2,
    /// Pressure in `[0, 1]`.
    pub pressure: f64,
    /// Unit direction toward the previous point.
    pub vector: Vec2,
    /// Distance from the previous point (`0` for the first).
    pub distance: f64,
    /// Cumulative path length from the first point.
    pub running_length: f64,
}

impl StrokePoint {
    /// Creates a new stroke point.
    #[must_use]
    pub fn new(point: Vec2, pressure: f64, vector: Vec2, distance: f64, running_length: f64) -> Self {
        Self {
            point,
            pressure,
            vector,
            distance,
            running_length,
        }
    }
}

/// Checks that `points` satisfy the preprocessor contract.
///
/// Outline generation does not require this and never calls it; it is a
/// debugging aid for preprocessors and tests.
///
/// # Errors
///
/// Returns the first [`StrokeError`] found: a non-finite field, pressure
/// outside `[0, 1]`, a non-zero first distance, a negative distance, or a
/// running length that decreases or drifts from the accumulated distances.
pub fn validate_points(points: &[StrokePoint]) -> Result<()> {
    let mut expected = 0.0;
    let mut previous = 0.0;

    for (index, sp) in points.iter().enumerate() {
        check_finite(index, sp)?;

        if !(0.0..=1.0).contains(&sp.pressure) {
            return Err(StrokeError::PressureOutOfRange {
                index,
                value: sp.pressure,
            });
        }

        if index == 0 {
            if sp.distance.abs() > 0.0 {
                return Err(StrokeError::NonZeroInitialDistance(sp.distance));
            }
        } else if sp.distance < 0.0 {
            return Err(StrokeError::NegativeDistance {
                index,
                value: sp.distance,
            });
        }

        if sp.running_length < previous {
            return Err(StrokeError::DecreasingLength {
                index,
                previous,
                current: sp.running_length,
            });
        }

        expected += sp.distance;
        if (sp.running_length - expected).abs() > LENGTH_TOLERANCE * expected.max(1.0) {
            return Err(StrokeError::LengthMismatch {
                index,
                running_length: sp.running_length,
                expected,
            });
        }
        previous = sp.running_length;
    }

    Ok(())
}

fn check_finite(index: usize, sp: &StrokePoint) -> Result<()> {
    let fields = [
        ("point", sp.point.x.is_finite() && sp.point.y.is_finite()),
        ("pressure", sp.pressure.is_finite()),
        ("distance", sp.distance.is_finite()),
        ("running length", sp.running_length.is_finite()),
    ];
    // The first vector may be a placeholder.
    if index > 0 && !(sp.vector.x.is_finite() && sp.vector.y.is_finite()) {
        return Err(StrokeError::NonFinite {
            index,
            field: "vector",
        });
    }
    match fields.iter().find(|(_, ok)| !ok) {
        Some(&(field, _)) => Err(StrokeError::NonFinite { index, field }),
        None => Ok(()),
    }
}
