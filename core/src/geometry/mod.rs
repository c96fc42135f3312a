use nalgebra as na;

pub type Point2 = na::Point2<f64>;
pub type Point3 = na::Point3<f64>;
pub type Vector3 = na::Vector3<f64>;

/// Components below this magnitude count as zero (zero-vector and parallel tests,
/// normalization guard).
pub const ZERO_TOLERANCE: f64 = 1e-8;

/// Absolute tolerance for "same coordinate" when deciding axis alignment.
/// Not scaled by magnitude, so very large or very small drawings compare poorly.
pub const ALIGNMENT_TOLERANCE: f64 = 0.01;

/// Distance a generated label is pushed away from the annotated edge.
pub const DEFAULT_LABEL_OFFSET: f64 = 10.0;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < ZERO_TOLERANCE
    }
}

impl ApproxEq for Point2 {
    fn approx_eq(&self, other: &Self) -> bool {
        na::distance_squared(self, other) < ZERO_TOLERANCE * ZERO_TOLERANCE
    }
}

impl ApproxEq for Point3 {
    fn approx_eq(&self, other: &Self) -> bool {
        na::distance_squared(self, other) < ZERO_TOLERANCE * ZERO_TOLERANCE
    }
}

impl ApproxEq for Vector3 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).norm_squared() < ZERO_TOLERANCE * ZERO_TOLERANCE
    }
}

pub mod vector;
pub use vector::*;

pub mod projection;
pub use projection::project_point_to_line;

pub mod placement;
pub use placement::{label_position, midpoint};

/// Drop the z component.
#[inline]
pub fn to_2d(p: &Point3) -> Point2 {
    Point2::new(p.x, p.y)
}

/// Lift onto the z = 0 plane.
#[inline]
pub fn to_3d(p: &Point2) -> Point3 {
    Point3::new(p.x, p.y, 0.0)
}
