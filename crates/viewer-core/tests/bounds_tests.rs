// Tests for bounding volumes and camera framing geometry.

use glam::Vec3;
use viewer_core::{framing_distance, Aabb};

#[test]
fn aabb_from_points_is_tight() {
    let aabb = Aabb::from_points([
        Vec3::new(1.0, -2.0, 0.5),
        Vec3::new(-1.0, 4.0, 0.0),
        Vec3::new(0.0, 0.0, -3.0),
    ])
    .unwrap();
    assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(aabb.max, Vec3::new(1.0, 4.0, 0.5));
}

#[test]
fn aabb_from_no_points_is_none() {
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}

#[test]
fn union_covers_both_boxes() {
    let a = Aabb {
        min: Vec3::splat(-1.0),
        max: Vec3::splat(1.0),
    };
    let b = Aabb {
        min: Vec3::new(0.0, 0.0, 0.0),
        max: Vec3::new(5.0, 2.0, 1.0),
    };
    let u = a.union(b);
    assert_eq!(u.min, Vec3::splat(-1.0));
    assert_eq!(u.max, Vec3::new(5.0, 2.0, 1.0));
}

#[test]
fn bounding_sphere_of_unit_cube_reaches_the_corners() {
    let aabb = Aabb {
        min: Vec3::splat(-1.0),
        max: Vec3::splat(1.0),
    };
    let (center, radius) = aabb.bounding_sphere();
    assert_eq!(center, Vec3::ZERO);
    assert!((radius - 3.0_f32.sqrt()).abs() < 1e-6);
}

#[test]
fn framing_distance_fits_the_sphere_in_the_frustum() {
    // at 90 degrees the half-angle is 45: distance = r / sin(45)
    let d = framing_distance(1.0, 90.0);
    assert!((d - std::f32::consts::SQRT_2).abs() < 1e-5);
    // the sphere is never closer than its own radius
    assert!(framing_distance(2.0, 179.0) >= 2.0);
}

#[test]
fn narrower_fov_frames_from_further_away() {
    let mut prev = framing_distance(1.0, 120.0);
    for fov in [90.0, 60.0, 45.0, 30.0, 15.0] {
        let d = framing_distance(1.0, fov);
        assert!(d > prev, "fov {fov} should need more distance");
        prev = d;
    }
}
