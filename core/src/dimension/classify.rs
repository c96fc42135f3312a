//! Horizontal / vertical / aligned inference for linear dimensions.
//!
//! Rules are tried in a fixed order and the first one that applies decides:
//!
//! 1. Both references name the same curve: compare the two anchor points.
//! 2. The first reference is a line: compare that line's own endpoints.
//! 3. The second reference is a line: same, on the second line.
//! 4. Otherwise compare the anchor points.
//!
//! Any rule whose coordinate tests both fail yields [`LinearKind::Aligned`].
//!
//! The anchor rule and the line rule map axes to kinds in opposite ways
//! (equal x is vertical for anchors but horizontal for a line's endpoints).
//! Existing drawings rely on this mapping.

use super::types::LinearKind;
use crate::curve::{Curve, CurveId, CurveLookup};
use crate::geometry::{almost_equal, Point2, Point3};

/// Which rule produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyRule {
    SameCurve,
    FirstLine,
    SecondLine,
    Anchors,
}

/// Anchor rule: equal x ⇒ vertical, equal y ⇒ horizontal.
pub fn classify_by_anchors(first: &Point2, second: &Point2) -> LinearKind {
    if almost_equal(first.x, second.x) {
        LinearKind::Vertical
    } else if almost_equal(first.y, second.y) {
        LinearKind::Horizontal
    } else {
        LinearKind::Aligned
    }
}

/// Line rule: equal x ⇒ horizontal, equal y ⇒ vertical.
pub fn classify_by_line(start: &Point3, end: &Point3) -> LinearKind {
    if almost_equal(start.x, end.x) {
        LinearKind::Horizontal
    } else if almost_equal(start.y, end.y) {
        LinearKind::Vertical
    } else {
        LinearKind::Aligned
    }
}

fn as_line(curve: Option<&Curve>) -> Option<(Point3, Point3)> {
    curve.and_then(Curve::line_endpoints)
}

/// Classify using already-resolved curves. `first`/`second` are the lookups of
/// `first_id`/`second_id`.
pub fn classify_resolved(
    first_id: CurveId,
    second_id: CurveId,
    first: Option<&Curve>,
    second: Option<&Curve>,
    first_point: &Point2,
    second_point: &Point2,
) -> (LinearKind, ClassifyRule) {
    if first_id == second_id {
        return (classify_by_anchors(first_point, second_point), ClassifyRule::SameCurve);
    }
    if let Some((start, end)) = as_line(first) {
        return (classify_by_line(&start, &end), ClassifyRule::FirstLine);
    }
    if let Some((start, end)) = as_line(second) {
        return (classify_by_line(&start, &end), ClassifyRule::SecondLine);
    }
    (classify_by_anchors(first_point, second_point), ClassifyRule::Anchors)
}

pub fn classify_linear<L: CurveLookup>(
    lookup: &L,
    first_id: CurveId,
    second_id: CurveId,
    first_point: &Point2,
    second_point: &Point2,
) -> LinearKind {
    let first = lookup.lookup(first_id);
    let second = lookup.lookup(second_id);
    classify_resolved(first_id, second_id, first.as_ref(), second.as_ref(), first_point, second_point).0
}
