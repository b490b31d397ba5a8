use crate::point::StrokePoint;

/// How quickly simulated pressure moves toward its velocity-implied target.
pub const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;

/// Pressure a preprocessor should assign to samples when the device reports
/// none.
pub const DEFAULT_PRESSURE: f64 = 0.5;

/// Number of leading points averaged to seed the running pressure.
const INITIAL_PRESSURE_WINDOW: usize = 10;

/// Derives a pressure value from the distance covered since the last sample.
///
/// Fast movement (a step near `size`) pulls pressure toward zero; slow
/// movement pulls it toward one. The result is clamped to at most `1`.
#[must_use]
pub fn simulate_pressure(prev_pressure: f64, distance: f64, size: f64) -> f64 {
    let sp = (distance / size).min(1.0);
    let rp = (1.0 - sp).min(1.0);
    (prev_pressure + (rp - prev_pressure) * (sp * RATE_OF_PRESSURE_CHANGE)).min(1.0)
}

/// Seeds the running pressure by repeatedly averaging over the first few
/// points, starting from the first point's raw pressure.
///
/// Returns `0.0` for an empty slice.
#[must_use]
pub fn initial_pressure(points: &[StrokePoint], simulate: bool, size: f64) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    points
        .iter()
        .take(INITIAL_PRESSURE_WINDOW)
        .fold(first.pressure, |acc, sp| {
            let pressure = if simulate {
                simulate_pressure(acc, sp.distance, size)
            } else {
                sp.pressure
            };
            (acc + pressure) / 2.0
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::test_support::annotate_with_pressure;

    #[test]
    fn stationary_pen_keeps_pressure() {
        assert_relative_eq!(simulate_pressure(0.4, 0.0, 16.0), 0.4);
    }

    #[test]
    fn fast_step_decays_toward_zero() {
        // sp = 1, rp = 0: p + (0 - p) * 0.275
        assert_relative_eq!(simulate_pressure(0.5, 100.0, 16.0), 0.3625, epsilon = 1e-12);
    }

    #[test]
    fn slow_step_rises_toward_one() {
        // sp = 0.25, rp = 0.75
        let p = simulate_pressure(0.2, 4.0, 16.0);
        assert_relative_eq!(p, 0.2 + 0.55 * 0.25 * RATE_OF_PRESSURE_CHANGE, epsilon = 1e-12);
        assert!(p > 0.2);
    }

    #[test]
    fn result_never_exceeds_one() {
        assert!(simulate_pressure(1.0, 1.0, 16.0) <= 1.0);
        assert!(simulate_pressure(3.0, 0.5, 16.0) <= 1.0);
    }

    #[test]
    fn initial_pressure_averages_raw_values() {
        let points = annotate_with_pressure(&[(0.0, 0.0, 0.2), (10.0, 0.0, 0.6)]);
        // acc = 0.2 -> (0.2 + 0.2) / 2 = 0.2 -> (0.2 + 0.6) / 2 = 0.4
        assert_relative_eq!(initial_pressure(&points, false, 16.0), 0.4);
    }

    #[test]
    fn initial_pressure_uses_only_first_ten_points() {
        let mut samples: Vec<(f64, f64, f64)> =
            (0..10).map(|i| (f64::from(i), 0.0, 0.5)).collect();
        let base = initial_pressure(&annotate_with_pressure(&samples), false, 16.0);
        samples.push((10.0, 0.0, 1.0));
        let extended = initial_pressure(&annotate_with_pressure(&samples), false, 16.0);
        assert_relative_eq!(base, extended);
    }

    #[test]
    fn initial_pressure_simulated_damps_fast_start() {
        let points = annotate_with_pressure(&[(0.0, 0.0, 0.5), (100.0, 0.0, 0.5)]);
        // (0.5 + 0.5) / 2 = 0.5, then (0.5 + 0.3625) / 2
        assert_relative_eq!(initial_pressure(&points, true, 16.0), 0.43125, epsilon = 1e-12);
    }

    #[test]
    fn initial_pressure_of_empty_stroke() {
        assert_relative_eq!(initial_pressure(&[], true, 16.0), 0.0);
    }
}
