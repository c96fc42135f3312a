//! Anchor selection for distance dimensions between two curves.

use super::types::{CriticalPoint, OffsetKind};
use crate::curve::{CriticalPointKind, Curve, CurveId};
use crate::geometry::{project_point_to_line, to_2d, Point2};

/// One side of a distance request: the referenced id, its curve if it
/// resolved, and the point the caller picked on that side.
#[derive(Debug, Clone, Copy)]
pub struct Side<'a> {
    pub id: CurveId,
    pub curve: Option<&'a Curve>,
    pub point: Point2,
}

impl Side<'_> {
    fn line(&self) -> Option<(Point2, Point2)> {
        self.curve
            .and_then(Curve::line_endpoints)
            .map(|(s, e)| (to_2d(&s), to_2d(&e)))
    }
}

/// The two anchors of a distance dimension, in request order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetAnchors {
    pub kind: OffsetKind,
    pub first: CriticalPoint,
    pub second: CriticalPoint,
}

/// Pick the dimension kind and both anchors.
///
/// Lines always supply the projection target when paired with an arc or circle:
/// a center is well defined, a distance to a curved edge is not.
pub fn select_offset(first: &Side<'_>, second: &Side<'_>) -> OffsetAnchors {
    match (first.line(), second.line()) {
        (Some((s1, e1)), Some((s2, e2))) if first.id != second.id => OffsetAnchors {
            kind: OffsetKind::LineToLine,
            first: CriticalPoint::on(first.id, CriticalPointKind::Middle, nalgebra::center(&s1, &e1)),
            second: CriticalPoint::on(second.id, CriticalPointKind::Middle, nalgebra::center(&s2, &e2)),
        },
        (Some(_), None) | (None, Some(_)) if is_curved(first) || is_curved(second) => OffsetAnchors {
            kind: OffsetKind::PointToLine,
            first: generic_anchor(first),
            second: generic_anchor(second),
        },
        _ => OffsetAnchors {
            kind: OffsetKind::Linear,
            first: generic_anchor(first),
            second: generic_anchor(second),
        },
    }
}

fn is_curved(side: &Side<'_>) -> bool {
    side.curve.map_or(false, |c| !c.is_line())
}

/// Center for arcs and circles, the picked point projected onto a line, or the
/// picked point itself when nothing resolved.
fn generic_anchor(side: &Side<'_>) -> CriticalPoint {
    match side.curve {
        Some(Curve::Line { start, end }) => CriticalPoint::free(project_point_to_line(
            &side.point,
            &to_2d(start),
            &to_2d(end),
        )),
        Some(Curve::Arc { center, .. }) | Some(Curve::Circle { center, .. }) => {
            CriticalPoint::on(side.id, CriticalPointKind::Center, to_2d(center))
        }
        None => CriticalPoint::free(side.point),
    }
}
