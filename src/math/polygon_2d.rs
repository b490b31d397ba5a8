use super::{Vec2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (y-up frame).
#[must_use]
pub fn signed_area(points: &[Vec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Bounded segment-segment intersection.
///
/// Returns `(t, u)`, the parameters on `a0→a1` and `b0→b1`, when the segments
/// meet. Parallel segments report no intersection.
#[must_use]
pub fn segment_intersection(a0: &Vec2, a1: &Vec2, b0: &Vec2, b1: &Vec2) -> Option<(f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Endpoints count as touching.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        Some((t.clamp(0.0, 1.0), u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Returns `true` if the segments cross at a point interior to both.
///
/// Shared endpoints, as between consecutive polygon edges, do not count.
#[must_use]
pub fn segments_cross(a0: &Vec2, a1: &Vec2, b0: &Vec2, b1: &Vec2) -> bool {
    const INTERIOR: f64 = 1e-9;
    segment_intersection(a0, a1, b0, b1).is_some_and(|(t, u)| {
        t > INTERIOR && t < 1.0 - INTERIOR && u > INTERIOR && u < 1.0 - INTERIOR
    })
}

/// Finds the first pair of non-adjacent edges of an open polyline that cross.
///
/// Returns the indices of the two edges' start vertices.
#[must_use]
pub fn first_self_crossing(points: &[Vec2]) -> Option<(usize, usize)> {
    let n = points.len();
    for i in 0..n.saturating_sub(1) {
        for j in (i + 2)..n.saturating_sub(1) {
            if segments_cross(&points[i], &points[i + 1], &points[j], &points[j + 1]) {
                return Some((i, j));
            }
        }
    }
    None
}
