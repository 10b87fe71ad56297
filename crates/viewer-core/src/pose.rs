use crate::error::ConfigError;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Linear interpolation, `a + (b - a) * t`. No easing.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// A complete camera configuration at one end of the scroll range.
///
/// Captured once by hand (see the `p` shortcut in the web front-end) and fed
/// back in as config. Every field is required: interpolation needs both
/// endpoints to share the same shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World-space position of the camera rig.
    pub rig_position: Vec3,
    /// Rig orientation as XYZ Euler angles, radians.
    pub rig_rotation: Vec3,
    /// Camera offset relative to the rig (dolly/zoom axis).
    pub camera_local: Vec3,
    /// World-space look-at point.
    pub target: Vec3,
    /// Vertical field of view, degrees.
    pub fov_deg: f32,
}

impl Pose {
    /// Per-field linear interpolation toward `end`.
    ///
    /// Callers wanting exact endpoints at t = 0 / t = 1 should go through
    /// [`crate::timeline::ScrollTimeline::state_at`], which early-returns
    /// the endpoint poses instead of trusting float algebra.
    pub fn lerp(&self, end: &Pose, t: f32) -> Pose {
        Pose {
            rig_position: self.rig_position + (end.rig_position - self.rig_position) * t,
            rig_rotation: self.rig_rotation + (end.rig_rotation - self.rig_rotation) * t,
            camera_local: self.camera_local + (end.camera_local - self.camera_local) * t,
            target: self.target + (end.target - self.target) * t,
            fov_deg: lerp(self.fov_deg, end.fov_deg, t),
        }
    }

    /// Check that every component is finite and the FOV is usable.
    /// `which` names the pose ("start"/"end") in the error.
    pub fn validate(&self, which: &'static str) -> Result<(), ConfigError> {
        let fields: [(&'static str, Vec3); 4] = [
            ("rig_position", self.rig_position),
            ("rig_rotation", self.rig_rotation),
            ("camera_local", self.camera_local),
            ("target", self.target),
        ];
        for (field, v) in fields {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite { which, field });
            }
        }
        if !self.fov_deg.is_finite() {
            return Err(ConfigError::NonFinite {
                which,
                field: "fov_deg",
            });
        }
        if self.fov_deg <= 0.0 || self.fov_deg >= 180.0 {
            return Err(ConfigError::FovOutOfRange {
                which,
                fov: self.fov_deg,
            });
        }
        Ok(())
    }
}

/// Explicit configuration passed to the timeline at construction.
///
/// Fields are optional so that a partially captured JSON file still parses;
/// completeness is enforced by `ScrollTimeline::new`, not here.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PoseConfig {
    pub start: Option<Pose>,
    pub end: Option<Pose>,
}

impl PoseConfig {
    pub fn new(start: Pose, end: Pose) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Parse a config from the JSON shape the capture shortcut prints.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
