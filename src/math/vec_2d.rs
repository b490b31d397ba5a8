use super::Vec2;

/// Negates a vector.
#[inline]
#[must_use]
pub fn neg(a: &Vec2) -> Vec2 {
    -a
}

/// Adds two vectors.
#[inline]
#[must_use]
pub fn add(a: &Vec2, b: &Vec2) -> Vec2 {
    a + b
}

/// Adds two vectors into `out`.
#[inline]
pub fn add_into<'a>(out: &'a mut Vec2, a: &Vec2, b: &Vec2) -> &'a mut Vec2 {
    out.x = a.x + b.x;
    out.y = a.y + b.y;
    out
}

/// Subtracts `b` from `a`.
#[inline]
#[must_use]
pub fn sub(a: &Vec2, b: &Vec2) -> Vec2 {
    a - b
}

/// Subtracts `b` from `a` into `out`.
#[inline]
pub fn sub_into<'a>(out: &'a mut Vec2, a: &Vec2, b: &Vec2) -> &'a mut Vec2 {
    out.x = a.x - b.x;
    out.y = a.y - b.y;
    out
}

/// Multiplies a vector by a scalar.
#[inline]
#[must_use]
pub fn mul(a: &Vec2, n: f64) -> Vec2 {
    a * n
}

/// Multiplies a vector by a scalar into `out`.
#[inline]
pub fn mul_into<'a>(out: &'a mut Vec2, a: &Vec2, n: f64) -> &'a mut Vec2 {
    out.x = a.x * n;
    out.y = a.y * n;
    out
}

/// Divides a vector by a scalar.
#[inline]
#[must_use]
pub fn div(a: &Vec2, n: f64) -> Vec2 {
    a / n
}

/// Perpendicular rotation: `(x, y) -> (y, -x)`.
#[inline]
#[must_use]
pub fn per(a: &Vec2) -> Vec2 {
    Vec2::new(a.y, -a.x)
}

/// Perpendicular rotation into `out`.
#[inline]
pub fn per_into<'a>(out: &'a mut Vec2, a: &Vec2) -> &'a mut Vec2 {
    out.x = a.y;
    out.y = -a.x;
    out
}

/// Dot product.
#[inline]
#[must_use]
pub fn dpr(a: &Vec2, b: &Vec2) -> f64 {
    a.dot(b)
}

/// Exact component-wise equality.
#[inline]
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_equal(a: &Vec2, b: &Vec2) -> bool {
    a.x == b.x && a.y == b.y
}

/// Length of a vector.
#[inline]
#[must_use]
pub fn len(a: &Vec2) -> f64 {
    a.x.hypot(a.y)
}

/// Squared length of a vector.
#[inline]
#[must_use]
pub fn len2(a: &Vec2) -> f64 {
    a.norm_squared()
}

/// Distance between two points.
#[inline]
#[must_use]
pub fn dist(a: &Vec2, b: &Vec2) -> f64 {
    (a.y - b.y).hypot(a.x - b.x)
}

/// Squared distance between two points.
#[inline]
#[must_use]
pub fn dist2(a: &Vec2, b: &Vec2) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Unit vector in the direction of `a`.
///
/// A zero-length input yields non-finite components. Callers are expected
/// to deduplicate coincident points before normalizing.
#[inline]
#[must_use]
pub fn uni(a: &Vec2) -> Vec2 {
    div(a, len(a))
}

/// Midpoint of two vectors.
#[inline]
#[must_use]
pub fn med(a: &Vec2, b: &Vec2) -> Vec2 {
    mul(&add(a, b), 0.5)
}

/// Rotates `a` around the pivot `c` by `r` radians (counter-clockwise in a
/// y-up frame).
#[inline]
#[must_use]
pub fn rot_around(a: &Vec2, c: &Vec2, r: f64) -> Vec2 {
    let mut out = Vec2::zeros();
    rot_around_into(&mut out, a, c, r);
    out
}

/// Rotates `a` around the pivot `c` by `r` radians into `out`.
#[inline]
pub fn rot_around_into<'a>(out: &'a mut Vec2, a: &Vec2, c: &Vec2, r: f64) -> &'a mut Vec2 {
    let (s, co) = r.sin_cos();

    let px = a.x - c.x;
    let py = a.y - c.y;

    out.x = px * co - py * s + c.x;
    out.y = px * s + py * co + c.y;
    out
}

/// Linear interpolation from `a` to `b` by an unclamped `t`.
#[inline]
#[must_use]
pub fn lrp(a: &Vec2, b: &Vec2, t: f64) -> Vec2 {
    add(a, &mul(&sub(b, a), t))
}

/// Linear interpolation from `a` to `b` into `out`.
#[inline]
pub fn lrp_into<'a>(out: &'a mut Vec2, a: &Vec2, b: &Vec2, t: f64) -> &'a mut Vec2 {
    out.x = a.x + (b.x - a.x) * t;
    out.y = a.y + (b.y - a.y) * t;
    out
}

/// Projects point `a` along direction `b` by scalar `c`.
#[inline]
#[must_use]
pub fn prj(a: &Vec2, b: &Vec2, c: f64) -> Vec2 {
    add(a, &mul(b, c))
}

/// Projects point `a` along direction `b` by scalar `c` into `out`.
#[inline]
pub fn prj_into<'a>(out: &'a mut Vec2, a: &Vec2, b: &Vec2, c: f64) -> &'a mut Vec2 {
    out.x = a.x + b.x * c;
    out.y = a.y + b.y * c;
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn perpendicular_is_clockwise_quarter_turn() {
        assert_eq!(per(&Vec2::new(1.0, 0.0)), Vec2::new(0.0, -1.0));
        assert_eq!(per(&Vec2::new(0.0, 1.0)), Vec2::new(1.0, 0.0));
        assert_abs_diff_eq!(dpr(&Vec2::new(3.0, 4.0), &per(&Vec2::new(3.0, 4.0))), 0.0);
    }

    #[test]
    fn into_variants_match_pure_variants() {
        let a = Vec2::new(1.5, -2.0);
        let b = Vec2::new(-0.25, 4.0);
        let c = Vec2::new(10.0, 10.0);
        let mut out = Vec2::zeros();

        assert_eq!(*add_into(&mut out, &a, &b), add(&a, &b));
        assert_eq!(*sub_into(&mut out, &a, &b), sub(&a, &b));
        assert_eq!(*mul_into(&mut out, &a, 3.0), mul(&a, 3.0));
        assert_eq!(*per_into(&mut out, &a), per(&a));
        assert_eq!(*lrp_into(&mut out, &a, &b, 0.3), lrp(&a, &b, 0.3));
        assert_eq!(*prj_into(&mut out, &a, &b, -2.0), prj(&a, &b, -2.0));
        assert_eq!(*rot_around_into(&mut out, &a, &c, 1.1), rot_around(&a, &c, 1.1));
    }

    #[test]
    fn lengths_and_distances() {
        let a = Vec2::new(3.0, 4.0);
        assert_relative_eq!(len(&a), 5.0);
        assert_relative_eq!(len2(&a), 25.0);
        assert_relative_eq!(dist(&a, &Vec2::new(0.0, 0.0)), 5.0);
        assert_relative_eq!(dist2(&a, &Vec2::new(1.0, 1.0)), 13.0);
        assert_relative_eq!(len(&uni(&a)), 1.0, epsilon = TOL);
    }

    #[test]
    fn normalizing_zero_vector_is_not_finite() {
        let u = uni(&Vec2::zeros());
        assert!(!u.x.is_finite());
        assert!(!u.y.is_finite());
    }

    #[test]
    fn rotation_around_pivot() {
        let c = Vec2::new(1.0, 1.0);
        let p = rot_around(&Vec2::new(2.0, 1.0), &c, FRAC_PI_2);
        assert_relative_eq!(p, Vec2::new(1.0, 2.0), epsilon = TOL);

        let q = rot_around(&Vec2::new(2.0, 1.0), &c, PI);
        assert_relative_eq!(q, Vec2::new(0.0, 1.0), epsilon = TOL);
        assert_relative_eq!(dist(&q, &c), 1.0, epsilon = TOL);
    }

    #[test]
    fn interpolation_is_unclamped() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 4.0);
        assert_eq!(lrp(&a, &b, 0.0), a);
        assert_eq!(lrp(&a, &b, 1.0), b);
        assert_eq!(lrp(&a, &b, 1.5), Vec2::new(3.0, 6.0));
        assert_eq!(lrp(&a, &b, -0.5), Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn midpoint_negation_and_equality() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -2.0);
        assert_eq!(med(&a, &b), Vec2::new(2.0, 0.0));
        assert_eq!(neg(&a), Vec2::new(-1.0, -2.0));
        assert!(is_equal(&a, &Vec2::new(1.0, 2.0)));
        assert!(!is_equal(&a, &b));
        assert_eq!(div(&b, 2.0), Vec2::new(1.5, -1.0));
    }
}
