use crate::math::vec_2d::{add, mul, per, prj, rot_around, sub, uni};
use crate::math::{Vec2, FIXED_PI};

/// Steps in a rounded start cap and in a single-point dot.
pub const START_CAP_SEGMENTS: u32 = 13;

/// Steps in a rounded end cap. The end cap sweeps three half turns.
pub const END_CAP_SEGMENTS: u32 = 29;

/// Flat caps are drawn as two edges this far apart (as a fraction of the
/// cap width) so the cap never degenerates to a zero-area sliver.
const FLAT_CAP_INSET: f64 = 0.01;

fn fraction(k: u32, segments: u32) -> f64 {
    f64::from(k) / f64::from(segments)
}

/// A closed regular polygon around `center`, used for taps and
/// single-point strokes.
///
/// The zero step is left out: it would duplicate the closing vertex.
pub(crate) fn dot(center: &Vec2, radius: f64) -> Vec<Vec2> {
    let offset_point = add(center, &Vec2::new(1.0, 1.0));
    let start = prj(center, &uni(&per(&sub(center, &offset_point))), -radius);
    (1..START_CAP_SEGMENTS)
        .map(|k| rot_around(&start, center, FIXED_PI * 2.0 * fraction(k, START_CAP_SEGMENTS)))
        .collect()
}

/// Half-turn cap sweeping from the first right boundary vertex over to the
/// left side, around the first point.
pub(crate) fn round_start_cap(center: &Vec2, right_point: &Vec2) -> Vec<Vec2> {
    (1..START_CAP_SEGMENTS)
        .map(|k| rot_around(right_point, center, FIXED_PI * fraction(k, START_CAP_SEGMENTS)))
        .collect()
}

/// Squared-off start cap straddling the line between the first left and
/// right boundary vertices.
pub(crate) fn flat_start_cap(center: &Vec2, left_point: &Vec2, right_point: &Vec2) -> Vec<Vec2> {
    let corners = sub(left_point, right_point);
    let outer = mul(&corners, 0.5);
    let inner = mul(&corners, 0.5 + FLAT_CAP_INSET);
    vec![
        sub(center, &outer),
        sub(center, &inner),
        add(center, &inner),
        add(center, &outer),
    ]
}

/// Rounded end cap.
///
/// Sweeps one and a half turns starting from `center + direction * radius`.
/// The overshoot keeps the tip full when a stroke ends on a sharp reversal.
pub(crate) fn round_end_cap(center: &Vec2, direction: &Vec2, radius: f64) -> Vec<Vec2> {
    let start = prj(center, direction, radius);
    (1..END_CAP_SEGMENTS)
        .map(|k| rot_around(&start, center, FIXED_PI * 3.0 * fraction(k, END_CAP_SEGMENTS)))
        .collect()
}

/// Squared-off end cap, the mirror of [`flat_start_cap`].
pub(crate) fn flat_end_cap(center: &Vec2, direction: &Vec2, radius: f64) -> Vec<Vec2> {
    let outer = mul(direction, radius);
    let inner = mul(direction, radius * (1.0 - FLAT_CAP_INSET));
    vec![
        add(center, &outer),
        add(center, &inner),
        sub(center, &inner),
        sub(center, &outer),
    ]
}
