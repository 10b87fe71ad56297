use thiserror::Error;

/// Errors raised while assembling the scroll timeline from a pose config.
///
/// These are fatal by design: a missing or malformed pose would otherwise
/// ship a frozen or degenerate camera with no diagnostic.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {0} pose in config")]
    MissingPose(&'static str),

    #[error("{which} pose has a non-finite {field}")]
    NonFinite {
        which: &'static str,
        field: &'static str,
    },

    #[error("{which} pose field of view {fov} outside (0, 180) degrees")]
    FovOutOfRange { which: &'static str, fov: f32 },

    #[error("failed to parse pose config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while decoding a vehicle model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to decode glTF: {0}")]
    Gltf(#[from] gltf::Error),

    #[error("mesh {0:?} has no position data")]
    MissingPositions(String),

    #[error("model contains no renderable meshes")]
    Empty,
}
