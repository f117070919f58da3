use glam::DVec2;

use crate::world::TileId;

/// Constants that depend on the *projection* buffer, not on the map.
///
/// The scene is rendered at `width × height` and upscaled by `scale` for
/// presentation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionConfig {
    pub width: usize,
    pub height: usize,
    pub half_h: f64, // pre-derived for speed
    pub scale: usize,
}

impl ProjectionConfig {
    pub fn new(width: usize, height: usize, scale: usize) -> Self {
        Self {
            width,
            height,
            half_h: height as f64 * 0.5,
            scale,
        }
    }
}

/// Ray-marching parameters shared by every column of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayCastConfig {
    /// marching steps per tile of travelled distance
    pub precision: u32,
    /// degrees between adjacent columns (`fov / projection width`)
    pub increment_angle: f64,
}

impl RayCastConfig {
    pub fn new(precision: u32, fov: f64, projection_width: usize) -> Self {
        Self {
            precision,
            increment_angle: fov / projection_width as f64,
        }
    }
}

/// What one column's ray found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub wall_id: TileId,
    /// fractional world position of the wall surface
    pub hit: DVec2,
    /// Euclidean player → hit distance
    pub raw_distance: f64,
    /// distance along the viewing axis; equals `raw_distance` until corrected
    pub corrected_distance: f64,
    /// absolute ray heading, degrees
    pub ray_angle: f64,
}
