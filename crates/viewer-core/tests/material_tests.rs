// Tests for the glass-detection heuristic.

use viewer_core::{classify, MaterialClass};

#[test]
fn glass_names_are_detected_case_insensitively() {
    for name in [
        "glass",
        "Windshield_outer",
        "WINDOW_rear",
        "CabinGlazing",
        "windscreen.001",
    ] {
        assert_eq!(
            classify(Some(name), false, 1.0, None),
            MaterialClass::Glass,
            "{name} should classify as glass"
        );
    }
}

#[test]
fn body_materials_stay_opaque() {
    for name in ["body_paint", "chrome_trim", "TyreRubber", "interior"] {
        assert_eq!(
            classify(Some(name), false, 1.0, None),
            MaterialClass::Opaque,
            "{name} should classify as opaque"
        );
    }
    assert_eq!(classify(None, false, 1.0, None), MaterialClass::Opaque);
}

#[test]
fn transmission_marks_glass_above_threshold() {
    assert_eq!(
        classify(Some("mystery"), false, 1.0, Some(0.9)),
        MaterialClass::Glass
    );
    // faint transmission alone is not enough
    assert_eq!(
        classify(Some("mystery"), false, 1.0, Some(0.05)),
        MaterialClass::Opaque
    );
}

#[test]
fn blend_mode_with_translucency_marks_glass() {
    assert_eq!(classify(None, true, 0.4, None), MaterialClass::Glass);
    // blend mode with near-opaque alpha is decals, not glazing
    assert_eq!(classify(None, true, 0.95, None), MaterialClass::Opaque);
    // translucent alpha without blend mode stays opaque
    assert_eq!(classify(None, false, 0.4, None), MaterialClass::Opaque);
}
