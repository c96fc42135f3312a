//! Read-only curve model consumed by the dimension resolver.
//!
//! Curves are owned by whatever drawing holds them. The resolver only ever
//! sees them through [`CurveLookup`], which keeps host handles out of the core
//! and lets tests feed synthetic geometry through [`CurveTable`].

use crate::geometry::Point3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub mod critical;
pub use critical::{ViewGeometry, CriticalPointKind};


/// Opaque curve identifier handed out by the drawing host.
/// `0` is reserved for "no entity".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveId(pub u64);

impl CurveId {
    pub const NONE: CurveId = CurveId(0);

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Curve {
    Line { start: Point3, end: Point3 },
    /// Angles in radians, counter-clockwise from +x.
    Arc {
        center: Point3,
        start: Point3,
        end: Point3,
        start_angle: f64,
        end_angle: f64,
        radius: f64,
    },
    Circle { center: Point3, radius: f64 },
}

impl Curve {
    pub fn line(start: Point3, end: Point3) -> Self {
        Curve::Line { start, end }
    }

    /// Build an arc from its center, radius and sweep; the endpoints are derived.
    pub fn arc(center: Point3, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        let at = |angle: f64| {
            Point3::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
                center.z,
            )
        };
        Curve::Arc {
            center,
            start: at(start_angle),
            end: at(end_angle),
            start_angle,
            end_angle,
            radius,
        }
    }

    pub fn circle(center: Point3, radius: f64) -> Self {
        Curve::Circle { center, radius }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Curve::Line { .. })
    }

    /// Start and end points of a line.
    pub fn line_endpoints(&self) -> Option<(Point3, Point3)> {
        match self {
            Curve::Line { start, end } => Some((*start, *end)),
            _ => None,
        }
    }

}

/// Read-only id → curve query against the drawing that owns the geometry.
pub trait CurveLookup {
    /// Resolve `id`. The [`CurveId::NONE`] sentinel never resolves.
    fn lookup(&self, id: CurveId) -> Option<Curve>;
}

impl<T: CurveLookup + ?Sized> CurveLookup for &T {
    fn lookup(&self, id: CurveId) -> Option<Curve> {
        (**self).lookup(id)
    }
}

/// A curve tagged with its id, as it appears in view payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    pub id: CurveId,
    #[serde(flatten)]
    pub curve: Curve,
}

/// In-memory curve store.
#[derive(Debug, Default, Clone)]
pub struct CurveTable {
    curves: HashMap<CurveId, Curve>,
}

impl CurveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a curve, replacing any previous curve with the same id.
    /// The sentinel id is rejected and `false` is returned.
    pub fn insert(&mut self, id: CurveId, curve: Curve) -> bool {
        if id.is_none() {
            return false;
        }
        self.curves.insert(id, curve);
        true
    }

    pub fn clear(&mut self) {
        self.curves.clear();
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// All curves, ordered by id.
    pub fn records(&self) -> Vec<CurveRecord> {
        let mut records: Vec<CurveRecord> = self
            .curves
            .iter()
            .map(|(id, curve)| CurveRecord { id: *id, curve: curve.clone() })
            .collect();
        records.sort_by_key(|r| r.id);
        records
    }
}

impl CurveLookup for CurveTable {
    fn lookup(&self, id: CurveId) -> Option<Curve> {
        if id.is_none() {
            return None;
        }
        self.curves.get(&id).cloned()
    }
}

impl FromIterator<CurveRecord> for CurveTable {
    fn from_iter<I: IntoIterator<Item = CurveRecord>>(iter: I) -> Self {
        let mut table = CurveTable::new();
        for record in iter {
            table.insert(record.id, record.curve);
        }
        table
    }
}
