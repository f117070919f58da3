//! Fisheye removal and the screen ↔ distance relations built on it.
//!
//! Every ray leaves the same point, so a flat wall seen at the edge of the
//! view is farther away along the ray than straight ahead.  Projecting the
//! ray length onto the viewing axis undoes that curvature.  Both variants
//! take the ray's *own* heading relative to the player's, never the absolute
//! ray heading.

use crate::engine::types::RayHit;

/// Smallest distance the projection divides by.
pub const MIN_DISTANCE: f64 = 1e-6;

/// Angle between a ray and the viewing axis, radians.
#[inline]
fn relative_angle(ray_angle: f64, player_angle: f64) -> f64 {
    (ray_angle - player_angle).to_radians()
}

/// Hypotenuse → adjacent side: distance measured along the viewing axis.
#[inline]
pub fn correct_wall_distance(raw: f64, ray_angle: f64, player_angle: f64) -> f64 {
    raw * relative_angle(ray_angle, player_angle).cos()
}

/// Floor distances come out of [`floor_distance`] already measured on the
/// viewing axis, so the stretch is applied the other way round.
#[inline]
pub fn correct_floor_distance(distance: f64, ray_angle: f64, player_angle: f64) -> f64 {
    distance / relative_angle(ray_angle, player_angle).cos()
}

/// Fill `corrected_distance` for every hit of a frame.
pub fn correct_hits(hits: &mut [RayHit], player_angle: f64) {
    for h in hits {
        h.corrected_distance = correct_wall_distance(h.raw_distance, h.ray_angle, player_angle);
    }
}

/// Half-height (pixels) of a wall strip at `distance`: nearer walls are taller.
#[inline]
pub fn wall_height(half_h: f64, distance: f64) -> i64 {
    (half_h / distance.max(MIN_DISTANCE)).floor() as i64
}

/// Distance to the floor seen on scan-line `y` of a `height`-pixel projection.
///
/// Defined for `height / 2 < y <= height`; it falls from large values at the
/// horizon to exactly `1` at `y == height`.  Uses the projection height, which
/// implicitly fixes the vertical field of view.
#[inline]
pub fn floor_distance(y: usize, height: usize) -> f64 {
    let h = height as f64;
    h / (2.0 * y as f64 - h)
}

/// [`floor_distance`] for pixel row `row`, whose lower edge is scan-line `row + 1`.
#[inline]
pub fn floor_row_distance(row: usize, height: usize) -> f64 {
    floor_distance(row + 1, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use glam::DVec2;

    #[test]
    fn centre_ray_is_left_untouched() {
        assert_eq!(correct_wall_distance(7.25, 123.0, 123.0), 7.25);
        assert_eq!(correct_floor_distance(3.5, 123.0, 123.0), 3.5);
    }

    #[test]
    fn correction_uses_the_relative_angle() {
        // 60° off axis halves the distance, whatever the absolute heading is.
        assert_approx_eq!(correct_wall_distance(10.0, 60.0, 0.0), 5.0, 1e-12);
        assert_approx_eq!(correct_wall_distance(10.0, 330.0, 270.0), 5.0, 1e-12);
        // using the absolute heading (cos 330°) would give 8.66
        assert!((correct_wall_distance(10.0, 330.0, 270.0) - 8.660254).abs() > 1.0);
    }

    #[test]
    fn floor_correction_divides() {
        assert_approx_eq!(correct_floor_distance(5.0, 150.0, 90.0), 10.0, 1e-12);
        assert_approx_eq!(correct_floor_distance(5.0, 30.0, 90.0), 10.0, 1e-12);
    }

    #[test]
    fn correct_hits_projects_every_column() {
        let hit = |ray_angle| RayHit {
            wall_id: 1,
            hit: DVec2::ZERO,
            raw_distance: 4.0,
            corrected_distance: 4.0,
            ray_angle,
        };
        let mut hits = [hit(30.0), hit(90.0), hit(150.0)];
        correct_hits(&mut hits, 90.0);
        assert_approx_eq!(hits[0].corrected_distance, 2.0, 1e-12);
        assert_eq!(hits[1].corrected_distance, 4.0);
        assert_approx_eq!(hits[2].corrected_distance, 2.0, 1e-12);
    }

    #[test]
    fn bottom_row_is_one_tile_away() {
        assert_eq!(floor_row_distance(119, 120), 1.0);
        assert_eq!(floor_distance(120, 120), 1.0);
        assert_eq!(floor_row_distance(61, 120), 120.0 / 4.0);
    }

    #[test]
    fn floor_distance_falls_towards_the_bottom() {
        let h = 120;
        let mut prev = f64::INFINITY;
        for row in h / 2..h {
            let d = floor_row_distance(row, h);
            assert!(d < prev && d >= 1.0);
            prev = d;
        }
    }

    #[test]
    fn wall_height_is_inverse_and_never_divides_by_zero() {
        assert_eq!(wall_height(60.0, 1.0), 60);
        assert_eq!(wall_height(60.0, 7.0), 8);
        assert_eq!(wall_height(60.0, 2.0), 30);
        assert!(wall_height(60.0, 0.0) > 0);
        assert!(wall_height(60.0, -1.0) > 0);
    }
}
