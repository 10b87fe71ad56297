pub mod bounds;
pub mod camera;
pub mod constants;
pub mod error;
pub mod material;
pub mod model;
pub mod pose;
pub mod rig;
pub mod timeline;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");

pub use bounds::*;
pub use camera::*;
pub use constants::*;
pub use error::*;
pub use material::*;
pub use model::*;
pub use pose::*;
pub use rig::*;
pub use timeline::*;
