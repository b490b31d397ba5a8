pub mod error;
pub mod math;
pub mod options;
pub mod outline;
pub mod point;
pub mod pressure;
pub mod radius;

#[cfg(test)]
mod test_support;

pub use error::{Result, StrokeError};
pub use math::Vec2;
pub use options::{CapOptions, Easing, StrokeOptions, Taper};
pub use outline::{outline, OutlineScratch, StrokeOutline};
pub use point::{validate_points, StrokePoint};
pub use radius::{PressureRadius, StrokeRadius};
