// Tests for the pose record and its linear interpolation.

use glam::Vec3;
use viewer_core::{lerp, ConfigError, Pose, PoseConfig};

fn start_pose() -> Pose {
    Pose {
        rig_position: Vec3::new(0.0, 0.0, 0.0),
        rig_rotation: Vec3::new(0.0, 0.0, 0.0),
        camera_local: Vec3::new(-3.4, 1.6, 4.6),
        target: Vec3::new(-0.196, 0.0001, 0.209),
        fov_deg: 30.0,
    }
}

fn end_pose() -> Pose {
    Pose {
        rig_position: Vec3::new(0.35, 0.25, 0.0),
        rig_rotation: Vec3::new(0.0, -0.45, 0.0),
        camera_local: Vec3::new(-1.1, 0.9, 2.2),
        target: Vec3::new(0.049, 0.015, 0.112),
        fov_deg: 30.0,
    }
}

fn assert_vec3_near(a: Vec3, b: Vec3, eps: f32) {
    assert!(
        (a - b).length() < eps,
        "expected {a:?} to be within {eps} of {b:?}"
    );
}

#[test]
fn scalar_lerp_matches_definition() {
    assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
    assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    assert_eq!(lerp(4.0, 2.0, 0.5), 3.0);
}

#[test]
fn pose_lerp_interpolates_every_field_independently() {
    let (s, e) = (start_pose(), end_pose());
    for step in 0..=10 {
        let t = step as f32 / 10.0;
        let p = s.lerp(&e, t);
        assert_vec3_near(p.rig_position, s.rig_position + (e.rig_position - s.rig_position) * t, 1e-6);
        assert_vec3_near(p.rig_rotation, s.rig_rotation + (e.rig_rotation - s.rig_rotation) * t, 1e-6);
        assert_vec3_near(p.camera_local, s.camera_local + (e.camera_local - s.camera_local) * t, 1e-6);
        assert_vec3_near(p.target, s.target + (e.target - s.target) * t, 1e-6);
        assert!((p.fov_deg - lerp(s.fov_deg, e.fov_deg, t)).abs() < 1e-6);
    }
}

#[test]
fn pose_lerp_has_no_overshoot_between_endpoints() {
    let (s, e) = (start_pose(), end_pose());
    for step in 0..=20 {
        let t = step as f32 / 20.0;
        let p = s.lerp(&e, t);
        for axis in 0..3 {
            let (a, b) = (s.target[axis], e.target[axis]);
            let (lo, hi) = (a.min(b), a.max(b));
            assert!(
                p.target[axis] >= lo - 1e-6 && p.target[axis] <= hi + 1e-6,
                "target[{axis}] overshot at t={t}"
            );
        }
    }
}

#[test]
fn halfway_pose_matches_worked_example() {
    let p = start_pose().lerp(&end_pose(), 0.5);
    assert_vec3_near(p.target, Vec3::new(-0.0735, 0.00755, 0.1605), 1e-6);
    assert!((p.fov_deg - 30.0).abs() < 1e-6);
}

#[test]
fn validate_accepts_a_sane_pose() {
    assert!(start_pose().validate("start").is_ok());
}

#[test]
fn validate_rejects_non_finite_components() {
    let mut p = start_pose();
    p.target.y = f32::NAN;
    match p.validate("start") {
        Err(ConfigError::NonFinite { which, field }) => {
            assert_eq!(which, "start");
            assert_eq!(field, "target");
        }
        other => panic!("expected NonFinite, got {other:?}"),
    }

    let mut p = end_pose();
    p.fov_deg = f32::INFINITY;
    assert!(matches!(
        p.validate("end"),
        Err(ConfigError::NonFinite { field: "fov_deg", .. })
    ));
}

#[test]
fn validate_rejects_degenerate_fov() {
    for fov in [0.0, -10.0, 180.0, 200.0] {
        let mut p = start_pose();
        p.fov_deg = fov;
        assert!(
            matches!(p.validate("start"), Err(ConfigError::FovOutOfRange { .. })),
            "fov {fov} should be rejected"
        );
    }
}

#[test]
fn config_json_preserves_poses_and_partial_configs_parse() {
    let config = PoseConfig::new(start_pose(), end_pose());
    let json = config.to_json().unwrap();
    let back = PoseConfig::from_json(&json).unwrap();
    assert_eq!(back.start.unwrap(), start_pose());
    assert_eq!(back.end.unwrap(), end_pose());

    // a capture file with only the start pose still parses; completeness is
    // the timeline's job
    let partial = PoseConfig {
        start: Some(start_pose()),
        end: None,
    };
    let back = PoseConfig::from_json(&partial.to_json().unwrap()).unwrap();
    assert!(back.start.is_some());
    assert!(back.end.is_none());
}
