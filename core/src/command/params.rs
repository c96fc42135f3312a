//! Parameter objects accepted by the dimension commands.
//!
//! Keys follow the drawing host's spelling (`"first point"`, `"id1"`, ...).
//! Ids arrive as signed integers. An absent id or `0` means "no entity";
//! a negative id is rejected with the offending key.

use super::{CommandError, CommandResult};
use crate::curve::CurveId;
use crate::dimension::{EntityRequest, HoleCalloutRequest, HoleRequest, LinearRequest, OffsetRequest};
use crate::geometry::Point2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WirePoint {
    pub x: f64,
    pub y: f64,
}

impl From<WirePoint> for Point2 {
    fn from(p: WirePoint) -> Self {
        Point2::new(p.x, p.y)
    }
}

fn curve_id(key: &'static str, raw: i64) -> CommandResult<CurveId> {
    u64::try_from(raw)
        .map(CurveId)
        .map_err(|_| CommandError::InvalidId { key, value: raw })
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinearParams {
    #[serde(default)]
    pub id1: i64,
    #[serde(default)]
    pub id2: i64,
    #[serde(rename = "first point")]
    pub first_point: WirePoint,
    #[serde(rename = "second point")]
    pub second_point: WirePoint,
    #[serde(rename = "text point")]
    pub text_point: WirePoint,
}

impl LinearParams {
    pub fn into_request(self) -> CommandResult<LinearRequest> {
        Ok(LinearRequest {
            first_id: curve_id("id1", self.id1)?,
            second_id: curve_id("id2", self.id2)?,
            first_point: self.first_point.into(),
            second_point: self.second_point.into(),
            text_point: self.text_point.into(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OffsetParams {
    #[serde(default)]
    pub id1: i64,
    #[serde(default)]
    pub id2: i64,
    #[serde(rename = "first point")]
    pub first_point: WirePoint,
    #[serde(rename = "second point")]
    pub second_point: WirePoint,
    #[serde(rename = "text point", default)]
    pub text_point: Option<WirePoint>,
}

impl OffsetParams {
    pub fn into_request(self) -> CommandResult<OffsetRequest> {
        Ok(OffsetRequest {
            first_id: curve_id("id1", self.id1)?,
            second_id: curve_id("id2", self.id2)?,
            first_point: self.first_point.into(),
            second_point: self.second_point.into(),
            text_point: self.text_point.map(Into::into),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntityParams {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "text point")]
    pub text_point: WirePoint,
}

impl EntityParams {
    pub fn into_request(self) -> CommandResult<EntityRequest> {
        Ok(EntityRequest { id: curve_id("id", self.id)?, text_point: self.text_point.into() })
    }

    fn into_hole(self) -> CommandResult<HoleRequest> {
        Ok(HoleRequest { id: curve_id("id", self.id)?, text_point: self.text_point.into() })
    }
}

/// Either `{"view", "holes": [...]}` or the single-hole form
/// `{"view", "id", "text point"}` the host sends today. `holes` wins when
/// both are present.
#[derive(Debug, Clone, Deserialize)]
pub struct HoleCalloutParams {
    pub view: i64,
    #[serde(default)]
    pub holes: Option<Vec<EntityParams>>,
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "text point", default)]
    pub text_point: Option<WirePoint>,
}

impl HoleCalloutParams {
    pub fn into_request(self) -> CommandResult<HoleCalloutRequest> {
        let view = u64::try_from(self.view)
            .map_err(|_| CommandError::InvalidId { key: "view", value: self.view })?;

        let holes = match (self.holes, self.text_point) {
            (Some(holes), _) => holes
                .into_iter()
                .map(EntityParams::into_hole)
                .collect::<CommandResult<Vec<_>>>()?,
            (None, Some(text_point)) => vec![HoleRequest {
                id: curve_id("id", self.id)?,
                text_point: text_point.into(),
            }],
            (None, None) => return Err(CommandError::MissingHoles),
        };

        if holes.is_empty() {
            return Err(CommandError::EmptyHoleBatch(view));
        }
        Ok(HoleCalloutRequest { view, holes })
    }
}
