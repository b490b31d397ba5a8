pub mod polygon_2d;
pub mod vec_2d;

use std::f64::consts::PI;

/// 2D point/vector type. Points and directions share one representation.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Half-turn sweep used for caps and elbows.
///
/// Slightly larger than π so the last rotated vertex overshoots the seam;
/// some rasterizers leave a hairline gap at exactly π.
pub const FIXED_PI: f64 = PI + 0.0001;
