// Sanity checks for scene constants and their relationships.

use viewer_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn projection_constants_are_usable() {
    assert!(DEFAULT_FOV_DEG > 0.0 && DEFAULT_FOV_DEG < 180.0);
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
}

#[test]
fn light_rig_directions_are_nonzero() {
    for dir in [KEY_LIGHT_DIR, FILL_LIGHT_DIR, RIM_LIGHT_DIR] {
        let len = (dir[0] * dir[0] + dir[1] * dir[1] + dir[2] * dir[2]).sqrt();
        assert!(len > 1e-3);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn studio_rig_has_key_fill_rim_ordering() {
    // key dominates, fill softens, rim accents
    assert!(KEY_LIGHT_INTENSITY > FILL_LIGHT_INTENSITY);
    assert!(FILL_LIGHT_INTENSITY > RIM_LIGHT_INTENSITY);
    assert!(RIM_LIGHT_INTENSITY > 0.0);
}

#[test]
fn colors_are_normalized() {
    for color in [
        KEY_LIGHT_COLOR,
        FILL_LIGHT_COLOR,
        RIM_LIGHT_COLOR,
        AMBIENT_SKY_COLOR,
        AMBIENT_GROUND_COLOR,
        BACKDROP_TOP_COLOR,
        BACKDROP_BOTTOM_COLOR,
    ] {
        assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ambient_terms_read_as_sky_over_ground() {
    assert!(AMBIENT_INTENSITY > 0.0 && AMBIENT_INTENSITY <= 1.0);
    let sky_luma = AMBIENT_SKY_COLOR.iter().sum::<f32>();
    let ground_luma = AMBIENT_GROUND_COLOR.iter().sum::<f32>();
    assert!(sky_luma > ground_luma);

    let top_luma = BACKDROP_TOP_COLOR.iter().sum::<f32>();
    let bottom_luma = BACKDROP_BOTTOM_COLOR.iter().sum::<f32>();
    assert!(top_luma > bottom_luma);
}

#[test]
fn placeholder_palette_distinguishes_glass() {
    assert!(PLACEHOLDER_GLASS_COLOR[3] < 1.0, "glass must be translucent");
    assert!((PLACEHOLDER_BODY_COLOR[3] - 1.0).abs() < f32::EPSILON);
    assert!((PLACEHOLDER_WHEEL_COLOR[3] - 1.0).abs() < f32::EPSILON);
}
