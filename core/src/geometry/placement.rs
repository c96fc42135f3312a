//! Label placement for generated dimensions.

use super::{cross_product, normalize, Point3};

#[inline]
pub fn midpoint(p1: &Point3, p2: &Point3) -> Point3 {
    nalgebra::center(p1, p2)
}

/// Place a dimension label off the annotated geometry.
///
/// Starts from the midpoint of `between` (the two dimension anchors). With a
/// non-zero `offset` the point is pushed along the direction perpendicular to
/// `edge` that lies in the plane spanned by `edge` and `between`:
/// `normalize((e × m) × e)`.
///
/// When the edge and the between segment are parallel that direction is the
/// zero vector, and the midpoint comes back unperturbed.
pub fn label_position(edge: (&Point3, &Point3), between: (&Point3, &Point3), offset: f64) -> Point3 {
    let mid = midpoint(between.0, between.1);
    if offset == 0.0 {
        return mid;
    }

    let e = edge.1 - edge.0;
    let m = between.1 - between.0;
    let direction = normalize(&cross_product(&cross_product(&e, &m), &e));

    mid + direction * offset
}
