use crate::options::Easing;

/// Maps pressure to a stroke half-width.
///
/// Outline generation only calls this when `thinning` is non-zero and uses
/// `size / 2` otherwise, so implementations should tend to `size / 2` as
/// `thinning` approaches zero.
pub trait StrokeRadius {
    /// Returns the radius for a point of the given pressure.
    fn radius(&self, size: f64, thinning: f64, pressure: f64, easing: Easing) -> f64;
}

impl<F> StrokeRadius for F
where
    F: Fn(f64, f64, f64, Easing) -> f64,
{
    fn radius(&self, size: f64, thinning: f64, pressure: f64, easing: Easing) -> f64 {
        self(size, thinning, pressure, easing)
    }
}

/// Default mapping: `size * easing(0.5 - thinning * (0.5 - pressure))`.
///
/// Positive thinning makes light strokes thinner; negative thinning makes
/// them thicker.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressureRadius;

impl StrokeRadius for PressureRadius {
    fn radius(&self, size: f64, thinning: f64, pressure: f64, easing: Easing) -> f64 {
        let pressure = pressure.clamp(0.0, 1.0);
        size * easing.apply(0.5 - thinning * (0.5 - pressure))
    }
}
