#[allow(clippy::module_inception)]
pub mod engine;
pub mod projection;
pub mod raycast;
pub mod types;

pub use engine::{Engine, EngineError};
pub use raycast::{EDGE_WALL, RayCaster};
pub use types::{ProjectionConfig, RayCastConfig, RayHit};
