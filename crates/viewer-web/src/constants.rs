use glam::Vec3;
use viewer_core::Pose;

// DOM ids expected in the host page
pub const CANVAS_ID: &str = "viewer-canvas";

// Vehicle asset served next to the page; a missing or broken file degrades
// to the procedural placeholder.
pub const MODEL_URL: &str = "assets/vehicle.glb";

// Pointer tuning for free-look orbiting
pub const ORBIT_ROTATE_SENSITIVITY: f32 = 0.008; // radians per CSS pixel
pub const ORBIT_DOLLY_STEP: f32 = 0.0012; // wheel delta to dolly exponent

// Hand-captured scroll endpoints (via the `p` shortcut). The start pose
// frames the whole vehicle from the front quarter; the end pose pushes in
// over the hood toward the cabin.
pub fn default_poses() -> (Pose, Pose) {
    let start = Pose {
        rig_position: Vec3::new(0.0, 0.0, 0.0),
        rig_rotation: Vec3::new(0.0, 0.0, 0.0),
        camera_local: Vec3::new(-3.4, 1.6, 4.6),
        target: Vec3::new(-0.196, 0.0001, 0.209),
        fov_deg: 30.0,
    };
    let end = Pose {
        rig_position: Vec3::new(0.35, 0.25, 0.0),
        rig_rotation: Vec3::new(0.0, -0.45, 0.0),
        camera_local: Vec3::new(-1.1, 0.9, 2.2),
        target: Vec3::new(0.049, 0.015, 0.112),
        fov_deg: 30.0,
    };
    (start, end)
}
