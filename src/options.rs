use crate::point::StrokePoint;

/// Default stroke diameter.
pub const DEFAULT_SIZE: f64 = 16.0;

/// Default simplification strength.
pub const DEFAULT_SMOOTHING: f64 = 0.5;

/// Default effect of pressure on stroke width.
pub const DEFAULT_THINNING: f64 = 0.5;

/// Reshaping curve applied to a normalized value in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub enum Easing {
    /// `t`
    #[default]
    Linear,
    /// `t(2 - t)`
    EaseOutQuad,
    /// `(t - 1)^3 + 1`
    EaseOutCubic,
    /// Caller-supplied curve.
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Applies the curve to `t`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseOutQuad => t * (2.0 - t),
            Self::EaseOutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::Custom(f) => f(t),
        }
    }
}

/// How far a stroke end narrows to a point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Taper {
    /// No taper.
    #[default]
    None,
    /// Taper over the whole stroke (at least `size`).
    Full,
    /// Taper over a fixed path distance.
    Distance(f64),
}

impl Taper {
    /// Resolves the taper into a path distance.
    #[must_use]
    pub fn distance(self, size: f64, total_length: f64) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Full => size.max(total_length),
            Self::Distance(d) => d,
        }
    }
}

/// Cap, taper and taper easing for one end of a stroke.
#[derive(Debug, Clone, Copy)]
pub struct CapOptions {
    /// Draw a rounded cap (`true`) or a flat one (`false`) when untapered.
    pub cap: bool,
    /// Taper toward this end.
    pub taper: Taper,
    /// Easing applied to the taper progress.
    pub easing: Easing,
}

impl CapOptions {
    /// Defaults for the start of a stroke.
    #[must_use]
    pub fn start() -> Self {
        Self {
            cap: true,
            taper: Taper::None,
            easing: Easing::EaseOutQuad,
        }
    }

    /// Defaults for the end of a stroke.
    #[must_use]
    pub fn end() -> Self {
        Self {
            cap: true,
            taper: Taper::None,
            easing: Easing::EaseOutCubic,
        }
    }

    /// Returns a copy with the given taper.
    #[must_use]
    pub fn with_taper(mut self, taper: Taper) -> Self {
        self.taper = taper;
        self
    }

    /// Returns a copy with the given cap style.
    #[must_use]
    pub fn with_cap(mut self, cap: bool) -> Self {
        self.cap = cap;
        self
    }
}

/// Options controlling outline generation.
#[derive(Debug, Clone, Copy)]
pub struct StrokeOptions {
    /// Stroke diameter.
    pub size: f64,
    /// Simplification strength. Boundary vertices closer than
    /// `size * smoothing` to the last kept vertex on their side are dropped.
    pub smoothing: f64,
    /// Effect of pressure on width. `0` gives a constant `size / 2` radius.
    pub thinning: f64,
    /// Derive pressure from velocity instead of the recorded value.
    pub simulate_pressure: bool,
    /// Easing applied to pressure before it scales the radius.
    pub easing: Easing,
    /// Start cap and taper.
    pub start: CapOptions,
    /// End cap and taper.
    pub end: CapOptions,
    /// The stroke is finished rather than still being drawn.
    pub last: bool,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            smoothing: DEFAULT_SMOOTHING,
            thinning: DEFAULT_THINNING,
            simulate_pressure: true,
            easing: Easing::Linear,
            start: CapOptions::start(),
            end: CapOptions::end(),
            last: false,
        }
    }
}

impl StrokeOptions {
    /// Returns a copy with the given size.
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Returns a copy with the given smoothing.
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Returns a copy with the given thinning.
    #[must_use]
    pub fn with_thinning(mut self, thinning: f64) -> Self {
        self.thinning = thinning;
        self
    }

    /// Returns a copy with pressure simulation switched on or off.
    #[must_use]
    pub fn with_simulated_pressure(mut self, simulate: bool) -> Self {
        self.simulate_pressure = simulate;
        self
    }

    /// Returns a copy with the given start options.
    #[must_use]
    pub fn with_start(mut self, start: CapOptions) -> Self {
        self.start = start;
        self
    }

    /// Returns a copy with the given end options.
    #[must_use]
    pub fn with_end(mut self, end: CapOptions) -> Self {
        self.end = end;
        self
    }

    /// Returns a copy marked as complete (or not).
    #[must_use]
    pub fn with_last(mut self, last: bool) -> Self {
        self.last = last;
        self
    }
}

/// Options resolved against a concrete stroke, computed once per call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedOptions {
    pub size: f64,
    pub thinning: f64,
    pub simulate_pressure: bool,
    pub easing: Easing,
    pub cap_start: bool,
    pub cap_end: bool,
    pub start_easing: Easing,
    pub end_easing: Easing,
    pub is_complete: bool,
    pub total_length: f64,
    pub taper_start: f64,
    pub taper_end: f64,
    /// Squared simplification threshold.
    pub min_distance: f64,
}

impl ResolvedOptions {
    /// Resolves `options` for `points`.
    pub fn resolve(options: &StrokeOptions, points: &[StrokePoint]) -> Self {
        let size = options.size;
        let total_length = points.last().map_or(0.0, |p| p.running_length);
        Self {
            size,
            thinning: options.thinning,
            simulate_pressure: options.simulate_pressure,
            easing: options.easing,
            cap_start: options.start.cap,
            cap_end: options.end.cap,
            start_easing: options.start.easing,
            end_easing: options.end.easing,
            is_complete: options.last,
            total_length,
            taper_start: options.start.taper.distance(size, total_length),
            taper_end: options.end.taper.distance(size, total_length),
            min_distance: (size * options.smoothing).powi(2),
        }
    }

    /// Taper multiplier for a point at `running_length`; the stronger of the
    /// two tapers wins.
    pub fn taper_strength(&self, running_length: f64) -> f64 {
        let start = if running_length < self.taper_start {
            self.start_easing.apply(running_length / self.taper_start)
        } else {
            1.0
        };
        let remaining = self.total_length - running_length;
        let end = if remaining < self.taper_end {
            self.end_easing.apply(remaining / self.taper_end)
        } else {
            1.0
        };
        start.min(end)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::test_support::annotate;

    #[test]
    fn easing_curves() {
        assert_relative_eq!(Easing::Linear.apply(0.3), 0.3);
        assert_relative_eq!(Easing::EaseOutQuad.apply(0.5), 0.75);
        assert_relative_eq!(Easing::EaseOutCubic.apply(0.5), 0.875);
        assert_relative_eq!(Easing::EaseOutCubic.apply(0.0), 0.0);
        assert_relative_eq!(Easing::EaseOutCubic.apply(1.0), 1.0);
        assert_relative_eq!(Easing::Custom(|t| t * t).apply(0.5), 0.25);
    }

    #[test]
    fn defaults() {
        let options = StrokeOptions::default();
        assert_relative_eq!(options.size, 16.0);
        assert_relative_eq!(options.smoothing, 0.5);
        assert_relative_eq!(options.thinning, 0.5);
        assert!(options.simulate_pressure);
        assert!(!options.last);
        assert!(options.start.cap && options.end.cap);
        assert_eq!(options.start.taper, Taper::None);
        assert_eq!(options.end.taper, Taper::None);
        assert!(matches!(options.start.easing, Easing::EaseOutQuad));
        assert!(matches!(options.end.easing, Easing::EaseOutCubic));
    }

    #[test]
    fn taper_distances() {
        assert_relative_eq!(Taper::None.distance(16.0, 200.0), 0.0);
        assert_relative_eq!(Taper::Full.distance(16.0, 200.0), 200.0);
        assert_relative_eq!(Taper::Full.distance(16.0, 4.0), 16.0);
        assert_relative_eq!(Taper::Distance(50.0).distance(16.0, 200.0), 50.0);
    }

    #[test]
    fn resolution_computes_threshold_and_length() {
        let points = annotate(&[(0.0, 0.0), (30.0, 40.0)]);
        let options = StrokeOptions::default()
            .with_size(10.0)
            .with_smoothing(0.3)
            .with_end(CapOptions::end().with_taper(Taper::Full));
        let resolved = ResolvedOptions::resolve(&options, &points);
        assert_relative_eq!(resolved.total_length, 50.0);
        assert_relative_eq!(resolved.min_distance, 9.0, epsilon = 1e-12);
        assert_relative_eq!(resolved.taper_start, 0.0);
        assert_relative_eq!(resolved.taper_end, 50.0);
    }

    #[test]
    fn smaller_taper_wins() {
        let points = annotate(&[(0.0, 0.0), (100.0, 0.0)]);
        let options = StrokeOptions::default()
            .with_start(CapOptions::start().with_taper(Taper::Distance(40.0)))
            .with_end(CapOptions::end().with_taper(Taper::Distance(40.0)));
        let resolved = ResolvedOptions::resolve(&options, &points);

        assert_relative_eq!(resolved.taper_strength(50.0), 1.0);
        // start: quad(0.25) = 0.4375
        assert_relative_eq!(resolved.taper_strength(10.0), 0.4375);
        // end: cubic(0.25) = 0.578125
        assert_relative_eq!(resolved.taper_strength(90.0), 0.578_125);
        assert_relative_eq!(resolved.taper_strength(0.0), 0.0);
    }
}
