use super::Point2;

/// Orthogonal projection of `p` onto the infinite line through `a` and `b`.
///
/// Uses the parametric form `t = (p - a)·(b - a) / |b - a|²`. A zero-length
/// segment has no direction to project onto, so `a` is returned as-is.
pub fn project_point_to_line(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq == 0.0 {
        return *a;
    }

    let t = (p - a).dot(&ab) / len_sq;
    *a + ab * t
}
