use crate::curve::{CriticalPointKind, CurveId};
use crate::geometry::Point2;
use serde::{Deserialize, Serialize};

/// Inputs for a horizontal/vertical/aligned dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRequest {
    pub first_id: CurveId,
    pub second_id: CurveId,
    pub first_point: Point2,
    pub second_point: Point2,
    pub text_point: Point2,
}

/// Inputs for a distance dimension between two curves (or free points).
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetRequest {
    pub first_id: CurveId,
    pub second_id: CurveId,
    pub first_point: Point2,
    pub second_point: Point2,
    /// Generated with an offset from the anchors when absent.
    pub text_point: Option<Point2>,
}

/// Inputs for a dimension bound to a single entity (radial, arc length).
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRequest {
    pub id: CurveId,
    pub text_point: Point2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoleRequest {
    pub id: CurveId,
    pub text_point: Point2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoleCalloutRequest {
    pub view: u64,
    pub holes: Vec<HoleRequest>,
}

/// A dimension attachment: an entity when the id resolved, a bare point otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<CurveId>,
    pub point: Point2,
}

impl Anchor {
    pub fn entity(id: CurveId, point: Point2) -> Self {
        Self { entity: Some(id), point }
    }

    pub fn free(point: Point2) -> Self {
        Self { entity: None, point }
    }

    pub fn is_free(&self) -> bool {
        self.entity.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<CurveId>,
    pub kind: CriticalPointKind,
    pub point: Point2,
}

impl CriticalPoint {
    pub fn on(id: CurveId, kind: CriticalPointKind, point: Point2) -> Self {
        Self { entity: Some(id), kind, point }
    }

    pub fn free(point: Point2) -> Self {
        Self { entity: None, kind: CriticalPointKind::Free, point }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinearKind {
    Horizontal,
    Vertical,
    Aligned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetKind {
    /// Between the midpoints of two distinct lines.
    LineToLine,
    /// From an arc/circle center to its projection on a line.
    PointToLine,
    /// Between centers and free points.
    Linear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearPlan {
    pub first: Anchor,
    pub second: Anchor,
    pub text: Point2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetPlan {
    pub kind: OffsetKind,
    pub first: CriticalPoint,
    pub second: CriticalPoint,
    pub text: Point2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityPlan {
    pub anchor: Anchor,
    pub text: Point2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleCalloutPlan {
    pub view: u64,
    pub holes: Vec<EntityPlan>,
}

/// What to build for one annotation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DimensionPlan {
    Horizontal(LinearPlan),
    Vertical(LinearPlan),
    Aligned(LinearPlan),
    LinearOffset(OffsetPlan),
    Radial(EntityPlan),
    ArcLength(EntityPlan),
    HoleCallout(HoleCalloutPlan),
}

impl DimensionPlan {
    pub fn linear(kind: LinearKind, plan: LinearPlan) -> Self {
        match kind {
            LinearKind::Horizontal => DimensionPlan::Horizontal(plan),
            LinearKind::Vertical => DimensionPlan::Vertical(plan),
            LinearKind::Aligned => DimensionPlan::Aligned(plan),
        }
    }

    /// The horizontal/vertical/aligned kind, for linear plans.
    pub fn linear_kind(&self) -> Option<LinearKind> {
        match self {
            DimensionPlan::Horizontal(_) => Some(LinearKind::Horizontal),
            DimensionPlan::Vertical(_) => Some(LinearKind::Vertical),
            DimensionPlan::Aligned(_) => Some(LinearKind::Aligned),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DimensionPlan::Horizontal(_) => "horizontal",
            DimensionPlan::Vertical(_) => "vertical",
            DimensionPlan::Aligned(_) => "aligned",
            DimensionPlan::LinearOffset(_) => "linear_offset",
            DimensionPlan::Radial(_) => "radial",
            DimensionPlan::ArcLength(_) => "arc_length",
            DimensionPlan::HoleCallout(_) => "hole_callout",
        }
    }
}
