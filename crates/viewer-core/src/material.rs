/// Render class of a vehicle mesh. Glass goes into a separate blended pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialClass {
    Opaque,
    Glass,
}

/// Substrings that mark a material or mesh name as glazing.
pub const GLASS_NAME_HINTS: &[&str] = &["glass", "window", "windshield", "windscreen", "glazing"];

/// Transmission factor above which a PBR material is treated as glass.
pub const GLASS_TRANSMISSION_MIN: f32 = 0.2;

/// Alpha below which a blend-mode material is treated as glass.
pub const GLASS_BLEND_ALPHA_MAX: f32 = 0.85;

/// Heuristic glass detection for vehicle materials.
///
/// Authoring tools rarely export transmission consistently, so three signals
/// are accepted: a glass-ish name, a KHR transmission factor, or blend alpha
/// mode with noticeable translucency.
pub fn classify(
    name: Option<&str>,
    alpha_blend: bool,
    base_alpha: f32,
    transmission: Option<f32>,
) -> MaterialClass {
    if let Some(name) = name {
        let lower = name.to_ascii_lowercase();
        if GLASS_NAME_HINTS.iter().any(|hint| lower.contains(hint)) {
            return MaterialClass::Glass;
        }
    }
    if transmission.unwrap_or(0.0) > GLASS_TRANSMISSION_MIN {
        return MaterialClass::Glass;
    }
    if alpha_blend && base_alpha < GLASS_BLEND_ALPHA_MAX {
        return MaterialClass::Glass;
    }
    MaterialClass::Opaque
}
