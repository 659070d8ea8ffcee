//! Static target layouts.

use crate::geometry::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a navigation target. The engine never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(pub String);

impl TargetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        TargetId(s.to_string())
    }
}

impl From<Direction> for TargetId {
    fn from(d: Direction) -> Self {
        TargetId(d.as_str().to_string())
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    /// Clock angle: 0 = twelve o'clock, increasing clockwise.
    pub angle_degrees: f64,
}

/// Number of slots on the clock face.
pub const RADIAL_SLOTS: usize = 6;
pub const RADIAL_SPACING_DEGREES: f64 = 60.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "targets", rename_all = "snake_case")]
pub enum Topology {
    /// Four implicit targets `up`, `down`, `left`, `right`.
    Orthogonal,
    /// Six targets at 60° spacing, in configuration order.
    Radial(Vec<Target>),
}

impl Topology {
    /// Six targets clockwise from twelve o'clock, one per id.
    pub fn clock_face(ids: [&str; RADIAL_SLOTS]) -> Self {
        let targets = ids
            .iter()
            .enumerate()
            .map(|(i, id)| Target {
                id: TargetId::from(*id),
                angle_degrees: i as f64 * RADIAL_SPACING_DEGREES,
            })
            .collect();
        Topology::Radial(targets)
    }

    /// Accepts an explicit radial layout only when it has the fixed
    /// six-slot shape: unique ids, angles on the 60° grid, each slot once.
    pub fn radial(targets: Vec<Target>) -> Option<Self> {
        if targets.len() != RADIAL_SLOTS {
            return None;
        }
        let mut seen = [false; RADIAL_SLOTS];
        for (i, t) in targets.iter().enumerate() {
            let a = t.angle_degrees;
            if !a.is_finite() || !(0.0..360.0).contains(&a) {
                return None;
            }
            let slot = (a / RADIAL_SPACING_DEGREES).round();
            if (slot * RADIAL_SPACING_DEGREES - a).abs() > 1e-9 {
                return None;
            }
            let slot = slot as usize % RADIAL_SLOTS;
            if seen[slot] || targets[..i].iter().any(|o| o.id == t.id) {
                return None;
            }
            seen[slot] = true;
        }
        Some(Topology::Radial(targets))
    }

    /// No two targets share an id.
    pub fn has_unique_ids(&self) -> bool {
        let ids = self.target_ids();
        ids.iter()
            .enumerate()
            .all(|(i, id)| !ids[..i].contains(id))
    }

    pub fn is_radial(&self) -> bool {
        matches!(self, Topology::Radial(_))
    }

    /// Ids in configuration order (orthogonal: clockwise from up).
    pub fn target_ids(&self) -> Vec<TargetId> {
        match self {
            Topology::Orthogonal => Direction::ALL.iter().map(|d| TargetId::from(*d)).collect(),
            Topology::Radial(targets) => targets.iter().map(|t| t.id.clone()).collect(),
        }
    }

    /// Clock angle at which a target sits, if the id belongs to this layout.
    pub fn anchor_angle(&self, id: &TargetId) -> Option<f64> {
        match self {
            Topology::Orthogonal => Direction::ALL
                .iter()
                .find(|d| d.as_str() == id.as_str())
                .map(|d| d.clock_angle()),
            Topology::Radial(targets) => targets
                .iter()
                .find(|t| &t.id == id)
                .map(|t| t.angle_degrees),
        }
    }
}
