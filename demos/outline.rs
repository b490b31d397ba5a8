//! Outlines a synthetic spiral stroke and prints the resulting polygon.
//!
//! ```text
//! cargo run --example outline
//! RUST_LOG=freehand_outline=trace cargo run --example outline
//! ```

use std::f64::consts::PI;

use freehand_outline::math::vec_2d::{dist, sub, uni};
use freehand_outline::{
    outline, validate_points, CapOptions, StrokeError, StrokeOptions, StrokePoint, Taper, Vec2,
};

const SAMPLES: u32 = 200;

/// Samples an outward spiral with a pressure swell in the middle.
fn spiral() -> Vec<StrokePoint> {
    let mut points: Vec<StrokePoint> = Vec::new();
    let mut running_length = 0.0;
    for i in 0..SAMPLES {
        let t = f64::from(i) / f64::from(SAMPLES);
        let angle = t * PI * 4.0;
        let radius = 50.0 + t * 200.0;
        let point = Vec2::new(angle.cos() * radius, angle.sin() * radius);
        let pressure = 0.3 + (t * PI).sin() * 0.4;

        let (vector, distance) = match points.last() {
            Some(prev) => (uni(&sub(&prev.point, &point)), dist(&prev.point, &point)),
            None => (Vec2::new(1.0, 0.0), 0.0),
        };
        running_length += distance;
        points.push(StrokePoint::new(point, pressure, vector, distance, running_length));
    }
    if points.len() > 1 {
        points[0].vector = points[1].vector;
    }
    points
}

fn main() -> Result<(), StrokeError> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("freehand_outline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let points = spiral();
    validate_points(&points)?;

    let variants = [
        ("default", StrokeOptions::default()),
        (
            "tapered",
            StrokeOptions::default()
                .with_start(CapOptions::start().with_taper(Taper::Distance(60.0)))
                .with_end(CapOptions::end().with_taper(Taper::Full)),
        ),
        (
            "recorded pressure",
            StrokeOptions::default().with_simulated_pressure(false),
        ),
        ("constant width", StrokeOptions::default().with_thinning(0.0)),
    ];

    for (name, options) in &variants {
        let polygon = outline(&points, options);
        tracing::info!(variant = *name, vertices = polygon.len(), "outlined stroke");
        println!("{name}: {} vertices", polygon.len());
        for p in polygon.iter().take(4) {
            println!("  ({:.2}, {:.2})", p.x, p.y);
        }
    }
    Ok(())
}
