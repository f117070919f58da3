use glam::DVec2;

/// Player view-point on the tile grid.
///
/// * `pos` is in tile units; `(2.5, 3.5)` is the centre of cell `(2, 3)`.
/// * `angle` is the heading in **degrees**, kept in `[0, 360)`.
///   0° points along +X, 90° along +Y (down the rows of the map).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerState {
    pub pos: DVec2,
    pub angle: f64,
    /// horizontal field of view, degrees
    pub fov: f64,
    /// collision half-size, tiles
    pub radius: f64,
}

impl PlayerState {
    pub fn new(pos: DVec2, angle: f64, fov: f64, radius: f64) -> Self {
        Self {
            pos,
            angle: normalize_angle(angle),
            fov,
            radius,
        }
    }

    /// Unit vector pointing where the player looks.
    #[inline]
    pub fn forward(&self) -> DVec2 {
        direction(self.angle)
    }

    /// Rotate by `delta` degrees (positive = clockwise on screen = turn right).
    pub fn turn(&mut self, delta: f64) {
        self.angle = normalize_angle(self.angle + delta);
    }
}

/// Unit vector for a heading given in degrees.
#[inline]
pub fn direction(degrees: f64) -> DVec2 {
    let (s, c) = degrees.to_radians().sin_cos();
    DVec2::new(c, s)
}

/// Wrap any angle into `[0, 360)`.
///
/// `%` keeps the sign of the dividend, so negative headings are shifted up by
/// a full turn before the second modulo.
pub fn normalize_angle(degrees: f64) -> f64 {
    let mut a = degrees % 360.0;
    if a < 0.0 {
        a += 360.0;
    }
    // -1e-17 + 360.0 rounds to 360.0
    if a >= 360.0 { 0.0 } else { a }
}
