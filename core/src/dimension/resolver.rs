use super::classify::classify_resolved;
use super::offset::{select_offset, Side};
use super::types::*;
use crate::curve::{CurveId, CurveLookup};
use crate::geometry::{label_position, to_2d, to_3d, Point2, DEFAULT_LABEL_OFFSET};
use tracing::debug;

/// Turns annotation requests into dimension plans.
///
/// Holds nothing but the curve lookup; every call is independent and never
/// fails. Degenerate geometry falls back to defined values, unresolved ids fall
/// back to free points, and ambiguous linear dimensions become aligned.
#[derive(Debug, Clone)]
pub struct DimensionResolver<L> {
    lookup: L,
}

impl<L: CurveLookup> DimensionResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Anchor at `id` when it resolves, otherwise at the bare `point`.
    pub fn anchor(&self, id: CurveId, point: Point2) -> Anchor {
        match self.lookup.lookup(id) {
            Some(_) => Anchor::entity(id, point),
            None => {
                if !id.is_none() {
                    debug!("Curve {} not found, anchoring to free point", id);
                }
                Anchor::free(point)
            }
        }
    }

    /// Horizontal, vertical or aligned dimension between two picks.
    pub fn linear(&self, req: &LinearRequest) -> DimensionPlan {
        let first = self.lookup.lookup(req.first_id);
        let second = self.lookup.lookup(req.second_id);
        let (kind, rule) = classify_resolved(
            req.first_id,
            req.second_id,
            first.as_ref(),
            second.as_ref(),
            &req.first_point,
            &req.second_point,
        );
        debug!("Linear dimension classified as {:?} by {:?}", kind, rule);

        let plan = LinearPlan {
            first: self.anchor(req.first_id, req.first_point),
            second: self.anchor(req.second_id, req.second_point),
            text: req.text_point,
        };
        DimensionPlan::linear(kind, plan)
    }

    /// Distance dimension between two curves, projected onto lines where needed.
    pub fn offset(&self, req: &OffsetRequest) -> DimensionPlan {
        let first_curve = self.lookup.lookup(req.first_id);
        let second_curve = self.lookup.lookup(req.second_id);
        let first = Side { id: req.first_id, curve: first_curve.as_ref(), point: req.first_point };
        let second = Side { id: req.second_id, curve: second_curve.as_ref(), point: req.second_point };

        let anchors = select_offset(&first, &second);
        debug!("Offset dimension selected as {:?}", anchors.kind);

        let text = req.text_point.unwrap_or_else(|| {
            let m1 = to_3d(&anchors.first.point);
            let m2 = to_3d(&anchors.second.point);
            // First line on either side gives the edge; otherwise the anchors
            // themselves do, which leaves the label at their midpoint.
            let edge = first_curve
                .as_ref()
                .and_then(|c| c.line_endpoints())
                .or_else(|| second_curve.as_ref().and_then(|c| c.line_endpoints()))
                .unwrap_or((m1, m2));
            to_2d(&label_position((&edge.0, &edge.1), (&m1, &m2), DEFAULT_LABEL_OFFSET))
        });

        DimensionPlan::LinearOffset(OffsetPlan {
            kind: anchors.kind,
            first: anchors.first,
            second: anchors.second,
            text,
        })
    }

    pub fn radial(&self, req: &EntityRequest) -> DimensionPlan {
        DimensionPlan::Radial(self.entity_plan(req.id, req.text_point))
    }

    pub fn arc_length(&self, req: &EntityRequest) -> DimensionPlan {
        DimensionPlan::ArcLength(self.entity_plan(req.id, req.text_point))
    }

    /// Hole callouts in one view. A hole whose id does not resolve is called
    /// out at its text point.
    pub fn hole_callout(&self, req: &HoleCalloutRequest) -> DimensionPlan {
        let holes = req
            .holes
            .iter()
            .map(|hole| self.entity_plan(hole.id, hole.text_point))
            .collect();
        DimensionPlan::HoleCallout(HoleCalloutPlan { view: req.view, holes })
    }

    fn entity_plan(&self, id: CurveId, text: Point2) -> EntityPlan {
        EntityPlan { anchor: self.anchor(id, text), text }
    }
}
