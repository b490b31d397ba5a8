mod caps;

pub use caps::{END_CAP_SEGMENTS, START_CAP_SEGMENTS};

use tracing::{debug, trace};

use crate::math::vec_2d::{
    add, add_into, dist2, dpr, lrp_into, mul_into, neg, per, per_into, rot_around_into, sub,
    sub_into,
};
use crate::math::{Vec2, FIXED_PI};
use crate::options::{ResolvedOptions, StrokeOptions};
use crate::point::StrokePoint;
use crate::pressure::{initial_pressure, simulate_pressure};
use crate::radius::{PressureRadius, StrokeRadius};

/// Radius floor after tapering, so the outline never collapses.
pub const MIN_RADIUS: f64 = 0.01;

/// Non-final points closer than this to the end of the stroke are dropped.
pub const END_NOISE_THRESHOLD: f64 = 3.0;

/// Steps in the rounded elbow drawn at a sharp corner.
pub const CORNER_CAP_SEGMENTS: u32 = 13;

/// Reusable slots for the allocation-free arithmetic in the main pass.
///
/// Owned by one outline computation at a time. Nothing returned by
/// [`StrokeOutline::execute_with`] refers back to it.
#[derive(Debug, Clone)]
pub struct OutlineScratch {
    dir: Vec2,
    normal: Vec2,
    offset: Vec2,
    base: Vec2,
    left: Vec2,
    right: Vec2,
}

impl OutlineScratch {
    /// Creates zeroed scratch slots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: Vec2::zeros(),
            normal: Vec2::zeros(),
            offset: Vec2::zeros(),
            base: Vec2::zeros(),
            left: Vec2::zeros(),
            right: Vec2::zeros(),
        }
    }
}

impl Default for OutlineScratch {
    fn default() -> Self {
        Self::new()
    }
}

/// Left and right boundaries collected by the main pass.
struct Sides {
    left: Vec<Vec2>,
    right: Vec<Vec2>,
    first_radius: Option<f64>,
    /// Radius of the last processed point.
    radius: f64,
}

/// Generates the closed outline polygon of a freehand stroke.
///
/// The polygon runs along the left boundary, around the end cap, back along
/// the right boundary and through the start cap. No closing vertex is
/// repeated.
#[derive(Debug)]
pub struct StrokeOutline<'a, R = PressureRadius> {
    points: &'a [StrokePoint],
    options: StrokeOptions,
    radius_fn: R,
}

impl<'a> StrokeOutline<'a> {
    /// Creates a new outline operation using [`PressureRadius`].
    #[must_use]
    pub fn new(points: &'a [StrokePoint], options: &StrokeOptions) -> Self {
        Self {
            points,
            options: *options,
            radius_fn: PressureRadius,
        }
    }
}

impl<'a, R: StrokeRadius> StrokeOutline<'a, R> {
    /// Replaces the pressure-to-radius mapping.
    #[must_use]
    pub fn with_radius<S: StrokeRadius>(self, radius_fn: S) -> StrokeOutline<'a, S> {
        StrokeOutline {
            points: self.points,
            options: self.options,
            radius_fn,
        }
    }

    /// Executes the operation with call-local scratch slots.
    #[must_use]
    pub fn execute(&self) -> Vec<Vec2> {
        let mut scratch = OutlineScratch::new();
        self.execute_with(&mut scratch)
    }

    /// Executes the operation using caller-owned scratch slots.
    ///
    /// Returns an empty polygon for an empty stroke or a non-positive size.
    pub fn execute_with(&self, scratch: &mut OutlineScratch) -> Vec<Vec2> {
        let size = self.options.size;
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            debug!("empty stroke, no outline");
            return Vec::new();
        };
        if size <= 0.0 || size.is_nan() {
            debug!(size, "non-positive stroke size, no outline");
            return Vec::new();
        }

        let resolved = ResolvedOptions::resolve(&self.options, self.points);
        let Sides {
            left,
            mut right,
            first_radius,
            radius,
        } = self.trace_sides(&resolved, last, scratch);

        let is_single = self.points.len() == 1;
        let has_start_taper = resolved.taper_start > 0.0;
        let has_end_taper = resolved.taper_end > 0.0;

        if is_single && (!(has_start_taper || has_end_taper) || resolved.is_complete) {
            let dot_radius = first_radius.filter(|r| r.abs() > 0.0).unwrap_or(radius);
            trace!(radius = dot_radius, "single point stroke, drawing dot");
            return caps::dot(&first.point, dot_radius);
        }

        let first_point = first.point;
        let last_point = if is_single {
            add(&first.point, &Vec2::new(1.0, 1.0))
        } else {
            last.point
        };

        let start_cap = match (left.first(), right.first()) {
            _ if has_start_taper || (has_end_taper && is_single) => Vec::new(),
            (_, Some(first_right)) if resolved.cap_start => {
                caps::round_start_cap(&first_point, first_right)
            }
            (Some(first_left), Some(first_right)) => {
                caps::flat_start_cap(&first_point, first_left, first_right)
            }
            _ => Vec::new(),
        };

        let direction = per(&neg(&last.vector));
        let end_cap = if has_end_taper || (has_start_taper && is_single) {
            vec![last_point]
        } else if resolved.cap_end {
            caps::round_end_cap(&last_point, &direction, radius)
        } else {
            caps::flat_end_cap(&last_point, &direction, radius)
        };

        trace!(
            left = left.len(),
            right = right.len(),
            start_cap = start_cap.len(),
            end_cap = end_cap.len(),
            "assembling outline"
        );

        right.reverse();
        let mut polygon =
            Vec::with_capacity(left.len() + end_cap.len() + right.len() + start_cap.len());
        polygon.extend(left);
        polygon.extend(end_cap);
        polygon.extend(right);
        polygon.extend(start_cap);
        polygon
    }

    /// Walks the stroke once, offsetting each point to both sides.
    #[allow(clippy::too_many_lines)]
    fn trace_sides(
        &self,
        resolved: &ResolvedOptions,
        last: &StrokePoint,
        scratch: &mut OutlineScratch,
    ) -> Sides {
        let points = self.points;
        let n = points.len();
        let size = resolved.size;

        // Averaging the first few points keeps slow starts from bulging.
        let mut prev_pressure = initial_pressure(points, resolved.simulate_pressure, size);
        let mut radius =
            self.radius_fn
                .radius(size, resolved.thinning, last.pressure, resolved.easing);
        let mut first_radius = None;

        let mut prev_vector = points[0].vector;
        let mut prev_left = points[0].point;
        let mut prev_right = prev_left;
        let mut is_prev_sharp = false;

        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);

        for (i, sp) in points.iter().enumerate() {
            let is_last = i == n - 1;

            if !is_last && resolved.total_length - sp.running_length < END_NOISE_THRESHOLD {
                continue;
            }

            let mut pressure = sp.pressure;
            if resolved.thinning == 0.0 {
                radius = size / 2.0;
            } else {
                if resolved.simulate_pressure {
                    pressure = simulate_pressure(prev_pressure, sp.distance, size);
                }
                radius = self
                    .radius_fn
                    .radius(size, resolved.thinning, pressure, resolved.easing);
            }
            if first_radius.is_none() {
                first_radius = Some(radius);
            }

            radius = (radius * resolved.taper_strength(sp.running_length)).max(MIN_RADIUS);

            let next_vector = if is_last {
                sp.vector
            } else {
                points[i + 1].vector
            };
            let next_dpr = if is_last {
                1.0
            } else {
                dpr(&sp.vector, &next_vector)
            };
            let prev_dpr = dpr(&sp.vector, &prev_vector);

            let is_point_sharp = prev_dpr < 0.0 && !is_prev_sharp;
            let is_next_sharp = next_dpr < 0.0;

            if is_point_sharp || is_next_sharp {
                trace!(index = i, radius, "sharp corner, drawing elbow");
                per_into(&mut scratch.normal, &prev_vector);
                mul_into(&mut scratch.offset, &scratch.normal, radius);

                for k in 0..=CORNER_CAP_SEGMENTS {
                    let angle = FIXED_PI * f64::from(k) / f64::from(CORNER_CAP_SEGMENTS);

                    sub_into(&mut scratch.base, &sp.point, &scratch.offset);
                    rot_around_into(&mut scratch.left, &scratch.base, &sp.point, angle);
                    left.push(scratch.left);

                    add_into(&mut scratch.base, &sp.point, &scratch.offset);
                    rot_around_into(&mut scratch.right, &scratch.base, &sp.point, -angle);
                    right.push(scratch.right);
                }

                prev_left = scratch.left;
                prev_right = scratch.right;
                // The following point must not redraw this corner.
                is_prev_sharp = is_next_sharp;
                continue;
            }

            is_prev_sharp = false;

            if is_last {
                per_into(&mut scratch.normal, &sp.vector);
                mul_into(&mut scratch.offset, &scratch.normal, radius);
                left.push(sub(&sp.point, &scratch.offset));
                right.push(add(&sp.point, &scratch.offset));
                continue;
            }

            // Soften turns by leaning the direction toward the next segment.
            lrp_into(&mut scratch.dir, &next_vector, &sp.vector, next_dpr);
            per_into(&mut scratch.normal, &scratch.dir);
            mul_into(&mut scratch.offset, &scratch.normal, radius);

            sub_into(&mut scratch.left, &sp.point, &scratch.offset);
            if i <= 1 || dist2(&prev_left, &scratch.left) > resolved.min_distance {
                left.push(scratch.left);
                prev_left = scratch.left;
            }

            add_into(&mut scratch.right, &sp.point, &scratch.offset);
            if i <= 1 || dist2(&prev_right, &scratch.right) > resolved.min_distance {
                right.push(scratch.right);
                prev_right = scratch.right;
            }

            prev_pressure = pressure;
            prev_vector = sp.vector;
        }

        Sides {
            left,
            right,
            first_radius,
            radius,
        }
    }
}

/// Computes the outline polygon of `points` with the default radius mapping.
///
/// Returns an empty vector when `points` is empty or `options.size <= 0`.
#[must_use]
pub fn outline(points: &[StrokePoint], options: &StrokeOptions) -> Vec<Vec2> {
    StrokeOutline::new(points, options).execute()
}
