//! Vector primitives used by the dimension resolver.
//!
//! These mirror the small helper set the drawing layer relies on: an explicit
//! cross product, zero and parallel tests against [`ZERO_TOLERANCE`], a guarded
//! normalization, and the absolute coordinate comparison used for axis alignment.

use super::{Vector3, ALIGNMENT_TOLERANCE, ZERO_TOLERANCE};

/// Standard right-handed cross product.
#[inline]
pub fn cross_product(a: &Vector3, b: &Vector3) -> Vector3 {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// True when every component is below [`ZERO_TOLERANCE`] in magnitude.
#[inline]
pub fn is_zero_vector(v: &Vector3) -> bool {
    v.x.abs() < ZERO_TOLERANCE && v.y.abs() < ZERO_TOLERANCE && v.z.abs() < ZERO_TOLERANCE
}

#[inline]
pub fn are_parallel(a: &Vector3, b: &Vector3) -> bool {
    is_zero_vector(&cross_product(a, b))
}

/// Scale to unit length. Vectors no longer than [`ZERO_TOLERANCE`] come back unchanged.
#[inline]
pub fn normalize(v: &Vector3) -> Vector3 {
    let len = v.norm();
    if len <= ZERO_TOLERANCE {
        *v
    } else {
        v / len
    }
}

/// Absolute comparison within [`ALIGNMENT_TOLERANCE`].
#[inline]
pub fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < ALIGNMENT_TOLERANCE
}
