// Tests for the scroll-to-pose mapper: construction errors, clamping and
// exact endpoint reproduction.

use glam::Vec3;
use viewer_core::{scroll_fraction, ConfigError, Pose, PoseConfig, ScrollTimeline};

fn pose(target: Vec3, fov_deg: f32) -> Pose {
    Pose {
        rig_position: Vec3::ZERO,
        rig_rotation: Vec3::ZERO,
        camera_local: Vec3::new(0.0, 1.0, 4.0),
        target,
        fov_deg,
    }
}

fn timeline() -> ScrollTimeline {
    let start = pose(Vec3::new(-0.196, 0.0001, 0.209), 30.0);
    let end = pose(Vec3::new(0.049, 0.015, 0.112), 30.0);
    ScrollTimeline::new(&PoseConfig::new(start, end)).unwrap()
}

#[test]
fn construction_fails_without_end_pose() {
    let config = PoseConfig {
        start: Some(pose(Vec3::ZERO, 30.0)),
        end: None,
    };
    match ScrollTimeline::new(&config) {
        Err(ConfigError::MissingPose(which)) => assert_eq!(which, "end"),
        other => panic!("expected MissingPose, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn construction_fails_without_start_pose() {
    let config = PoseConfig {
        start: None,
        end: Some(pose(Vec3::ZERO, 30.0)),
    };
    assert!(matches!(
        ScrollTimeline::new(&config),
        Err(ConfigError::MissingPose("start"))
    ));
}

#[test]
fn construction_fails_on_malformed_pose() {
    let mut bad = pose(Vec3::ZERO, 30.0);
    bad.camera_local.x = f32::NAN;
    let config = PoseConfig::new(pose(Vec3::ZERO, 30.0), bad);
    assert!(matches!(
        ScrollTimeline::new(&config),
        Err(ConfigError::NonFinite { which: "end", .. })
    ));
}

#[test]
fn endpoints_reproduce_poses_exactly() {
    let tl = timeline();
    assert_eq!(tl.state_at(0.0), *tl.start());
    assert_eq!(tl.state_at(1.0), *tl.end());
}

#[test]
fn out_of_range_progress_clamps_to_endpoints() {
    let mut tl = timeline();
    assert_eq!(tl.set_progress(1.5), *tl.end());
    assert_eq!(tl.progress(), 1.0);
    assert_eq!(tl.set_progress(-0.25), *tl.start());
    assert_eq!(tl.progress(), 0.0);
}

#[test]
fn nan_progress_falls_back_to_start() {
    let mut tl = timeline();
    assert_eq!(tl.set_progress(f32::NAN), *tl.start());
    assert_eq!(tl.progress(), 0.0);
}

#[test]
fn state_is_a_pure_function_of_progress() {
    let tl = timeline();
    // repeated and out-of-order queries recompute independently
    let a = tl.state_at(0.3);
    let _ = tl.state_at(0.9);
    let b = tl.state_at(0.3);
    assert_eq!(a, b);
}

#[test]
fn halfway_state_matches_worked_example() {
    let tl = timeline();
    let mid = tl.state_at(0.5);
    assert!((mid.target.x - -0.0735).abs() < 1e-6);
    assert!((mid.target.y - 0.00755).abs() < 1e-6);
    assert!((mid.target.z - 0.1605).abs() < 1e-6);
    assert!((mid.fov_deg - 30.0).abs() < 1e-6);
}

#[test]
fn interpolation_is_monotonic_per_field() {
    let tl = timeline();
    let mut prev_x = tl.state_at(0.0).target.x;
    for step in 1..=20 {
        let x = tl.state_at(step as f32 / 20.0).target.x;
        assert!(x >= prev_x - 1e-6, "target.x regressed at step {step}");
        prev_x = x;
    }
}

#[test]
fn config_parsed_from_capture_json_without_end_is_rejected() {
    let json = r#"{ "start": {
        "rig_position": [0.0, 0.0, 0.0],
        "rig_rotation": [0.0, 0.0, 0.0],
        "camera_local": [0.0, 1.0, 4.0],
        "target": [-0.196, 0.0001, 0.209],
        "fov_deg": 30.0
    } }"#;
    let config = PoseConfig::from_json(json).unwrap();
    assert!(matches!(
        ScrollTimeline::new(&config),
        Err(ConfigError::MissingPose("end"))
    ));
}

#[test]
fn scroll_fraction_clamps_and_handles_degenerate_extents() {
    assert_eq!(scroll_fraction(100.0, 0.0), 0.0);
    assert_eq!(scroll_fraction(100.0, -50.0), 0.0);
    assert_eq!(scroll_fraction(0.0, 1000.0), 0.0);
    assert!((scroll_fraction(250.0, 1000.0) - 0.25).abs() < 1e-6);
    assert_eq!(scroll_fraction(2000.0, 1000.0), 1.0);
    assert_eq!(scroll_fraction(-10.0, 1000.0), 0.0);
}
