//! Critical points of view geometry.
//!
//! A view dump lists every curve with the points a dimension can attach to,
//! grouped by curve type. The grouping and key names match what the command
//! layer reports for a view-geometry query.

use super::{Curve, CurveId, CurveRecord};
use crate::geometry::{midpoint, Point3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Which designated point of a curve an anchor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriticalPointKind {
    Start,
    End,
    Middle,
    Center,
    /// Not a curve point: a location chosen by the caller or derived by projection.
    Free,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoints {
    pub id: CurveId,
    pub start: Point3,
    pub end: Point3,
    pub middle: Point3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcPoints {
    pub id: CurveId,
    pub center: Point3,
    pub start: Point3,
    pub end: Point3,
    pub middle: Point3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePoints {
    pub id: CurveId,
    pub center: Point3,
    pub top: Point3,
    pub bottom: Point3,
    pub left: Point3,
    pub right: Point3,
}

/// Critical points of every curve in a view, keyed by curve type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewGeometry {
    pub line: Vec<LinePoints>,
    pub arc: Vec<ArcPoints>,
    pub circle: Vec<CirclePoints>,
}

impl ViewGeometry {
    /// Group `records` by type. Each group is ordered by ascending id.
    pub fn collect<'a>(records: impl IntoIterator<Item = &'a CurveRecord>) -> Self {
        let mut view = ViewGeometry::default();
        for record in records {
            view.push(record.id, &record.curve);
        }
        view.line.sort_by_key(|l| l.id);
        view.arc.sort_by_key(|a| a.id);
        view.circle.sort_by_key(|c| c.id);
        view
    }

    fn push(&mut self, id: CurveId, curve: &Curve) {
        match curve {
            Curve::Line { start, end } => self.line.push(LinePoints {
                id,
                start: *start,
                end: *end,
                middle: midpoint(start, end),
            }),
            Curve::Arc { center, start, end, start_angle, end_angle, radius } => {
                self.arc.push(ArcPoints {
                    id,
                    center: *center,
                    start: *start,
                    end: *end,
                    middle: arc_midpoint(center, *radius, *start_angle, *end_angle),
                })
            }
            Curve::Circle { center, radius } => self.circle.push(CirclePoints {
                id,
                center: *center,
                top: Point3::new(center.x, center.y + radius, center.z),
                bottom: Point3::new(center.x, center.y - radius, center.z),
                left: Point3::new(center.x - radius, center.y, center.z),
                right: Point3::new(center.x + radius, center.y, center.z),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.line.len() + self.arc.len() + self.circle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Point halfway along a counter-clockwise sweep from `start_angle` to `end_angle`.
/// The sweep is reduced into `[0, TAU)`.
pub fn arc_midpoint(center: &Point3, radius: f64, start_angle: f64, end_angle: f64) -> Point3 {
    let sweep = (end_angle - start_angle).rem_euclid(TAU);
    let mid = start_angle + sweep * 0.5;
    Point3::new(center.x + radius * mid.cos(), center.y + radius * mid.sin(), center.z)
}
