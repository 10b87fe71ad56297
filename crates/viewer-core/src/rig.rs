use crate::camera::{Camera, OrbitControls};
use crate::pose::Pose;
use glam::{EulerRot, Quat, Vec3};

/// Intermediate transform node that carries the camera.
///
/// Animating the rig instead of the camera keeps dolly/zoom (the camera's
/// local offset) independent from the rig's world motion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    /// XYZ Euler angles, radians.
    pub rotation: Vec3,
}

impl CameraRig {
    /// World-space camera position for a camera mounted at `local` on this rig.
    pub fn world_camera_position(&self, local: Vec3) -> Vec3 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        self.position + rot * local
    }
}

/// How an interpolated target is pushed onto the camera surface.
///
/// The toggle itself lives in the front-end; it is passed in and checked on
/// every apply. Exactly one of the two paths runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetMode {
    /// User orbit/pan enabled: write the orbit controls' target, then let
    /// the controls recompute the camera from their spherical offsets.
    FreeLook,
    /// No user interaction: place the camera from the rig transform and
    /// look at the target directly.
    Locked,
}

impl TargetMode {
    fn apply_target(self, target: Vec3, camera: &mut Camera, controls: &mut OrbitControls) {
        match self {
            TargetMode::FreeLook => {
                controls.target = target;
                controls.update(camera);
            }
            TargetMode::Locked => {
                camera.look_at(target);
            }
        }
    }
}

/// Push one interpolated camera state onto the rig/camera/controls surface.
///
/// Sets the rig transform and FOV unconditionally, then resolves the eye and
/// look-at according to `mode`. Applying the same state twice leaves the
/// camera in the same place as applying it once.
pub fn apply_camera_state(
    state: &Pose,
    mode: TargetMode,
    rig: &mut CameraRig,
    camera: &mut Camera,
    controls: &mut OrbitControls,
) {
    rig.position = state.rig_position;
    rig.rotation = state.rig_rotation;
    camera.set_fov_deg(state.fov_deg);
    if mode == TargetMode::Locked {
        camera.eye = rig.world_camera_position(state.camera_local);
    }
    mode.apply_target(state.target, camera, controls);
}
