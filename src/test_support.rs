use crate::math::vec_2d::{dist, sub, uni};
use crate::math::Vec2;
use crate::point::StrokePoint;
use crate::pressure::DEFAULT_PRESSURE;

/// Annotates `(x, y)` samples with the default pressure.
pub fn annotate(samples: &[(f64, f64)]) -> Vec<StrokePoint> {
    let with_pressure: Vec<_> = samples
        .iter()
        .map(|&(x, y)| (x, y, DEFAULT_PRESSURE))
        .collect();
    annotate_with_pressure(&with_pressure)
}

/// Annotates `(x, y, pressure)` samples. Consecutive samples must differ.
pub fn annotate_with_pressure(samples: &[(f64, f64, f64)]) -> Vec<StrokePoint> {
    let mut points: Vec<StrokePoint> = Vec::with_capacity(samples.len());
    let mut running_length = 0.0;

    for &(x, y, pressure) in samples {
        let point = Vec2::new(x, y);
        let (vector, distance) = match points.last() {
            Some(prev) => (uni(&sub(&prev.point, &point)), dist(&prev.point, &point)),
            None => (uni(&Vec2::new(1.0, 1.0)), 0.0),
        };
        running_length += distance;
        points.push(StrokePoint::new(point, pressure, vector, distance, running_length));
    }

    if points.len() > 1 {
        points[0].vector = points[1].vector;
    }
    points
}

/// Samples a straight line from `(0, 0)` along +x every `step` up to `length`.
pub fn straight_line(length: f64, step: f64) -> Vec<StrokePoint> {
    let mut samples = Vec::new();
    let mut x = 0.0;
    while x <= length {
        samples.push((x, 0.0));
        x += step;
    }
    annotate(&samples)
}
