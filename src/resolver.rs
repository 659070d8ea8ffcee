//! Classifies a drag vector against a topology.
//!
//! Both layouts share the deadzone and progress rules; they differ only in
//! how the target is picked and how the visual offset is shaped:
//!
//! * orthogonal: dominant axis wins, offset rides a rail along that axis
//! * radial: nearest clock angle wins, offset is pulled toward that target

use crate::config::GestureConfig;
use crate::geometry::{Vec2, angular_distance, axis_direction, clock_angle, polar_offset};
use crate::topology::{Target, TargetId, Topology};

/// Share of the cross-axis delta kept on the orthogonal rail.
pub const CROSS_AXIS_DAMPING: f64 = 0.15;
/// Snap strength gained per unit of progress.
pub const SNAP_GAIN: f64 = 0.7;
/// Upper bound on snap strength; the offset never fully commits.
pub const SNAP_MAX: f64 = 0.65;

#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub target: Option<TargetId>,
    pub offset: Vec2,
    pub progress: f64,
}

pub fn resolve(dx: f64, dy: f64, config: &GestureConfig) -> Resolution {
    let raw = Vec2::new(dx, dy);
    let distance = raw.length();
    if distance < config.effective_deadzone() {
        return Resolution {
            target: None,
            // near zero for sane configs; clamp covers max_drag < deadzone
            offset: raw.clamp_length(config.max_drag),
            progress: 0.0,
        };
    }
    let progress = if distance >= config.threshold {
        1.0
    } else {
        distance / config.threshold
    };
    match &config.topology {
        Topology::Orthogonal => resolve_orthogonal(raw, progress, config.max_drag),
        Topology::Radial(targets) => {
            resolve_radial(raw, distance, progress, targets, config.max_drag)
        }
    }
}

fn resolve_orthogonal(raw: Vec2, progress: f64, max_drag: f64) -> Resolution {
    let dir = axis_direction(raw.x, raw.y);
    let rail = |v: f64| v.clamp(-max_drag, max_drag);
    let offset = if dir.is_vertical() {
        Vec2::new(raw.x * CROSS_AXIS_DAMPING, rail(raw.y))
    } else {
        Vec2::new(rail(raw.x), raw.y * CROSS_AXIS_DAMPING)
    };
    Resolution {
        target: Some(dir.into()),
        // cross-axis give can push the corner past max_drag
        offset: offset.clamp_length(max_drag),
        progress,
    }
}

fn nearest_target(angle: f64, targets: &[Target]) -> Option<&Target> {
    let mut best: Option<(&Target, f64)> = None;
    for t in targets {
        let d = angular_distance(angle, t.angle_degrees);
        // strict: on a tie the earlier target keeps its place
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((t, d));
        }
    }
    best.map(|(t, _)| t)
}

fn resolve_radial(
    raw: Vec2,
    distance: f64,
    progress: f64,
    targets: &[Target],
    max_drag: f64,
) -> Resolution {
    let angle = clock_angle(raw.x, raw.y);
    let Some(target) = nearest_target(angle, targets) else {
        return Resolution {
            target: None,
            offset: raw.clamp_length(max_drag),
            progress: 0.0,
        };
    };
    let snap = (progress * SNAP_GAIN).min(SNAP_MAX);
    let ideal = polar_offset(target.angle_degrees, distance);
    let blended = raw.lerp(ideal, snap);
    Resolution {
        target: Some(target.id.clone()),
        offset: blended.clamp_length(max_drag),
        progress,
    }
}
