// Tests for model decoding errors, the placeholder vehicle and the root
// transform that grounds and centers whatever was loaded.

use glam::Vec3;
use viewer_core::{parse_glb, placeholder_vehicle, Aabb, MaterialClass, ModelError, ViewerModel};

#[test]
fn garbage_bytes_are_a_decode_error_not_a_panic() {
    match parse_glb(b"definitely not a glb") {
        Err(ModelError::Gltf(_)) => {}
        other => panic!("expected Gltf error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn placeholder_has_body_glass_and_wheels() {
    let model = placeholder_vehicle();
    assert_eq!(model.mesh_count(), 3);
    assert!(model.has_glass());
    assert!(model
        .meshes
        .iter()
        .any(|m| m.class == MaterialClass::Opaque));
}

#[test]
fn placeholder_geometry_is_consistent() {
    let model = placeholder_vehicle();
    for mesh in &model.meshes {
        assert_eq!(mesh.positions.len(), mesh.normals.len(), "{}", mesh.name);
        assert_eq!(mesh.indices.len() % 3, 0, "{}", mesh.name);
        for &i in &mesh.indices {
            assert!((i as usize) < mesh.positions.len(), "{}", mesh.name);
        }
        for n in &mesh.normals {
            let len = Vec3::from(*n).length();
            assert!((len - 1.0).abs() < 1e-4, "{} normal length {len}", mesh.name);
        }
        assert!(mesh.base_color.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
fn placeholder_rests_on_the_ground_plane() {
    let model = placeholder_vehicle();
    assert!(model.bounds.min.y.abs() < 1e-6, "wheels should touch y = 0");
    assert!(model.bounds.max.y > 1.0);
    // a road car is longer than it is tall
    let size = model.bounds.max - model.bounds.min;
    assert!(size.x > size.y);
}

#[test]
fn root_transform_centers_and_grounds_the_bounds() {
    let model = ViewerModel {
        meshes: Vec::new(),
        bounds: Aabb {
            min: Vec3::new(1.0, 2.0, 3.0),
            max: Vec3::new(3.0, 4.0, 7.0),
        },
    };
    let m = model.root_transform();
    let center = model.bounds.center();
    let moved = m.transform_point3(center);
    assert!(moved.x.abs() < 1e-6);
    assert!(moved.z.abs() < 1e-6);
    let floor = m.transform_point3(Vec3::new(center.x, model.bounds.min.y, center.z));
    assert!(floor.y.abs() < 1e-6);
}
