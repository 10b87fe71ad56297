//! Render-facing camera and orbit-controls abstractions.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! are suitable for use on both native and web targets. The web frontend
//! consumes them to build view/projection matrices for the WebGPU renderer.

use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-4), self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Point the camera at `point` without moving the eye.
    pub fn look_at(&mut self, point: Vec3) {
        self.target = point;
    }

    /// Set the vertical FOV in degrees; the projection matrix picks the new
    /// value up on the next `projection_matrix` call.
    pub fn set_fov_deg(&mut self, fov_deg: f32) {
        self.fovy_radians = fov_deg.to_radians();
    }

    pub fn fov_deg(&self) -> f32 {
        self.fovy_radians.to_degrees()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 1.0, 4.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: crate::constants::DEFAULT_FOV_DEG.to_radians(),
            znear: crate::constants::CAMERA_ZNEAR,
            zfar: crate::constants::CAMERA_ZFAR,
        }
    }
}

/// User-driven orbit around a target point, used in free-look mode.
///
/// Holds spherical offsets (yaw/pitch/distance) so the scroll timeline can
/// keep moving the target while the user's orbit survives.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enabled: bool,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enabled: false,
            yaw: std::f32::consts::FRAC_PI_2,
            pitch: 0.3,
            distance: 4.0,
            min_distance: 0.5,
            max_distance: 30.0,
            // keep slightly off the poles so look_at stays well-defined
            min_pitch: -1.45,
            max_pitch: 1.45,
        }
    }
}

impl OrbitControls {
    /// Apply a rotation delta (radians) from a pointer drag.
    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(self.min_pitch, self.max_pitch);
    }

    /// Apply a multiplicative dolly (wheel) step.
    pub fn dolly(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Direction from the target toward the eye for the current orbit.
    #[inline]
    pub fn eye_offset(&self) -> Vec3 {
        let (sp, cp) = self.pitch.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(cy * cp, sp, sy * cp) * self.distance
    }

    /// Recompute the camera from the controls' target and orbit offsets.
    pub fn update(&self, camera: &mut Camera) {
        camera.eye = self.target + self.eye_offset();
        camera.target = self.target;
    }

    /// Adopt the camera's current placement so enabling free-look does not
    /// jump the view.
    pub fn sync_from_camera(&mut self, camera: &Camera) {
        let offset = camera.eye - camera.target;
        self.target = camera.target;
        self.distance = offset
            .length()
            .clamp(self.min_distance, self.max_distance);
        let horiz = (offset.x * offset.x + offset.z * offset.z).sqrt();
        self.pitch = offset.y.atan2(horiz).clamp(self.min_pitch, self.max_pitch);
        if horiz > 1e-6 {
            self.yaw = offset.z.atan2(offset.x);
        }
    }
}
