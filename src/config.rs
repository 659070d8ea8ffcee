//! Engine configuration, presets and stored overrides.

use crate::topology::{RADIAL_SLOTS, RADIAL_SPACING_DEGREES, Topology};
use crate::util::{clog, cwarn, load_json};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ORTHOGONAL_THRESHOLD: f64 = 60.0;
pub const DEFAULT_ORTHOGONAL_MAX_DRAG: f64 = 120.0;
pub const DEFAULT_RADIAL_THRESHOLD: f64 = 70.0;
pub const DEFAULT_RADIAL_MAX_DRAG: f64 = 100.0;
pub const DEFAULT_RADIAL_DEADZONE: f64 = 15.0;

/// Fraction of the threshold used as the orthogonal deadzone.
pub const ORTHOGONAL_DEADZONE_RATIO: f64 = 0.4;

pub const STORAGE_KEY_ORTHOGONAL: &str = "gn_config_orthogonal";
pub const STORAGE_KEY_CLOCK: &str = "gn_config_clock";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Distance at which progress saturates to 1.
    pub threshold: f64,
    /// Clamp for the reported visual offset.
    pub max_drag: f64,
    /// Radial only; the orthogonal layout derives its own.
    #[serde(default = "default_deadzone")]
    pub deadzone: f64,
    pub topology: Topology,
}

fn default_deadzone() -> f64 {
    DEFAULT_RADIAL_DEADZONE
}

impl GestureConfig {
    pub fn orthogonal() -> Self {
        Self {
            threshold: DEFAULT_ORTHOGONAL_THRESHOLD,
            max_drag: DEFAULT_ORTHOGONAL_MAX_DRAG,
            deadzone: DEFAULT_RADIAL_DEADZONE,
            topology: Topology::Orthogonal,
        }
    }

    pub fn radial(topology: Topology) -> Self {
        Self {
            threshold: DEFAULT_RADIAL_THRESHOLD,
            max_drag: DEFAULT_RADIAL_MAX_DRAG,
            deadzone: DEFAULT_RADIAL_DEADZONE,
            topology,
        }
    }

    /// Deadzone radius actually applied for this topology.
    pub fn effective_deadzone(&self) -> f64 {
        match self.topology {
            Topology::Orthogonal => ORTHOGONAL_DEADZONE_RATIO * self.threshold,
            Topology::Radial(_) => self.deadzone,
        }
    }

    /// Replaces values the resolver cannot work with.
    pub fn sanitized(mut self) -> Self {
        let (threshold, max_drag) = match self.topology {
            Topology::Orthogonal => (DEFAULT_ORTHOGONAL_THRESHOLD, DEFAULT_ORTHOGONAL_MAX_DRAG),
            Topology::Radial(_) => (DEFAULT_RADIAL_THRESHOLD, DEFAULT_RADIAL_MAX_DRAG),
        };
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            self.threshold = threshold;
        }
        if !self.max_drag.is_finite() || self.max_drag < 0.0 {
            self.max_drag = max_drag;
        }
        if !self.deadzone.is_finite() || self.deadzone < 0.0 {
            self.deadzone = DEFAULT_RADIAL_DEADZONE;
        }
        if let Topology::Radial(targets) = &mut self.topology {
            if targets.len() == RADIAL_SLOTS && Topology::radial(targets.clone()).is_none() {
                clog("radial layout off the 60° grid; re-gridding in configuration order");
                for (i, t) in targets.iter_mut().enumerate() {
                    t.angle_degrees = i as f64 * RADIAL_SPACING_DEGREES;
                }
            }
        }
        self
    }

    /// Sanitizes, then refuses layouts whose targets cannot be told apart.
    pub fn validated(self) -> Option<Self> {
        let cfg = self.sanitized();
        if cfg.topology.has_unique_ids() {
            Some(cfg)
        } else {
            cwarn("gesture config rejected: duplicate target ids");
            None
        }
    }

    /// Parses a JSON override; invalid input yields `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str::<GestureConfig>(raw)
            .ok()
            .and_then(GestureConfig::validated)
    }

    /// Loads an override saved under `key`, falling back to `fallback`.
    /// A stored config with a different topology kind is ignored.
    pub fn load_or(key: &str, fallback: GestureConfig) -> GestureConfig {
        match load_json::<GestureConfig>(key) {
            Some(stored) if stored.topology.is_radial() == fallback.topology.is_radial() => {
                match stored.validated() {
                    Some(cfg) => {
                        clog(&format!("gesture config override loaded from {key}"));
                        cfg
                    }
                    None => fallback,
                }
            }
            Some(_) => {
                clog(&format!("ignoring {key}: topology mismatch"));
                fallback
            }
            None => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadzone_per_topology() {
        let o = GestureConfig::orthogonal();
        assert!((o.effective_deadzone() - 24.0).abs() < 1e-9);
        let r = GestureConfig::radial(Topology::clock_face(["a", "b", "c", "d", "e", "f"]));
        assert_eq!(r.effective_deadzone(), 15.0);
    }

    #[test]
    fn sanitized_restores_defaults() {
        let c = GestureConfig {
            threshold: 0.0,
            max_drag: f64::NAN,
            deadzone: -3.0,
            topology: Topology::Orthogonal,
        }
        .sanitized();
        assert_eq!(c.threshold, DEFAULT_ORTHOGONAL_THRESHOLD);
        assert_eq!(c.max_drag, DEFAULT_ORTHOGONAL_MAX_DRAG);
        assert_eq!(c.deadzone, DEFAULT_RADIAL_DEADZONE);
    }

    #[test]
    fn from_json_override() {
        let raw = r#"{
            "threshold": 90,
            "max_drag": 140,
            "topology": {"kind": "radial", "targets": [
                {"id": "home", "angle_degrees": 0},
                {"id": "garage", "angle_degrees": 60},
                {"id": "docs", "angle_degrees": 120},
                {"id": "chat", "angle_degrees": 180},
                {"id": "fuel", "angle_degrees": 240},
                {"id": "profile", "angle_degrees": 300}
            ]}
        }"#;
        let c = GestureConfig::from_json(raw).expect("valid config");
        assert_eq!(c.threshold, 90.0);
        assert_eq!(c.deadzone, DEFAULT_RADIAL_DEADZONE);
        assert_eq!(c.topology.target_ids().len(), 6);

        let o = GestureConfig::from_json(
            r#"{"threshold": 50, "max_drag": 100, "topology": {"kind": "orthogonal"}}"#,
        )
        .expect("valid config");
        assert_eq!(o.topology, Topology::Orthogonal);

        assert!(GestureConfig::from_json("{not json").is_none());
    }

    #[test]
    fn sanitized_regrids_bad_angles() {
        let raw = r#"{
            "threshold": 70, "max_drag": 100, "deadzone": 15,
            "topology": {"kind": "radial", "targets": [
                {"id": "a", "angle_degrees": 5},
                {"id": "b", "angle_degrees": 60},
                {"id": "c", "angle_degrees": 120},
                {"id": "d", "angle_degrees": 180},
                {"id": "e", "angle_degrees": 240},
                {"id": "f", "angle_degrees": 300}
            ]}
        }"#;
        let c = GestureConfig::from_json(raw).expect("valid config");
        assert_eq!(
            c.topology,
            Topology::clock_face(["a", "b", "c", "d", "e", "f"])
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"{
            "threshold": 70, "max_drag": 100,
            "topology": {"kind": "radial", "targets": [
                {"id": "a", "angle_degrees": 5},
                {"id": "b", "angle_degrees": 60},
                {"id": "a", "angle_degrees": 120},
                {"id": "d", "angle_degrees": 180},
                {"id": "e", "angle_degrees": 240},
                {"id": "f", "angle_degrees": 300}
            ]}
        }"#;
        assert!(GestureConfig::from_json(raw).is_none());
        let dup = GestureConfig::radial(Topology::clock_face(["a", "a", "c", "d", "e", "f"]));
        assert!(dup.validated().is_none());
        assert!(GestureConfig::orthogonal().validated().is_some());
    }
}
