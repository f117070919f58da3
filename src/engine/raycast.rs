//! Per-column wall finder.
//!
//! Each ray is marched in fixed Euclidean steps of `1 / precision` tiles
//! until it lands in a wall tile.  No grid DDA: a larger `precision` means a
//! finer wall boundary and proportionally more iterations.

use glam::DVec2;
use log::trace;

use crate::{
    engine::{
        projection::correct_hits,
        types::{ProjectionConfig, RayCastConfig, RayHit},
    },
    world::{EMPTY, PlayerState, TileId, TileMap, direction},
};

/// Wall id reported for a ray that left the grid without hitting anything.
///
/// Only reachable on maps that are not enclosed.  It stops the march; which
/// texture it ends up drawn with is not meaningful.
pub const EDGE_WALL: TileId = 1;

#[derive(Clone, Copy, Debug)]
pub struct RayCaster {
    config: RayCastConfig,
}

impl RayCaster {
    pub fn new(config: RayCastConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &RayCastConfig {
        &self.config
    }

    /// Heading of the ray for screen column `column`.
    #[inline]
    pub fn column_angle(&self, player: &PlayerState, column: usize) -> f64 {
        player.angle - player.fov * 0.5 + column as f64 * self.config.increment_angle
    }

    /// One perspective-corrected hit per projection column, left to right.
    pub fn cast(
        &self,
        player: &PlayerState,
        projection: &ProjectionConfig,
        map: &TileMap,
    ) -> Vec<RayHit> {
        let mut hits = Vec::with_capacity(projection.width);
        self.cast_into(player, projection, map, &mut hits);
        hits
    }

    /// Like [`RayCaster::cast`] but reuses `out`'s allocation.
    pub fn cast_into(
        &self,
        player: &PlayerState,
        projection: &ProjectionConfig,
        map: &TileMap,
        out: &mut Vec<RayHit>,
    ) {
        out.clear();
        out.extend((0..projection.width).map(|col| {
            self.cast_ray(player.pos, self.column_angle(player, col), map)
        }));
        correct_hits(out, player.angle);
    }

    /// March a single ray from `origin` heading `angle` degrees.
    ///
    /// The returned hit is *uncorrected*: `corrected_distance == raw_distance`.
    pub fn cast_ray(&self, origin: DVec2, angle: f64, map: &TileMap) -> RayHit {
        let step = direction(angle) / self.config.precision.max(1) as f64;

        let mut p = origin;
        let wall_id = loop {
            p += step;
            match map.tile_at(p) {
                Some(EMPTY) => continue,
                Some(id) => break id,
                None => {
                    trace!("ray at {angle:.3}° left the map at ({:.3}, {:.3})", p.x, p.y);
                    break EDGE_WALL;
                }
            }
        };

        let raw_distance = origin.distance(p);
        RayHit {
            wall_id,
            hit: p,
            raw_distance,
            corrected_distance: raw_distance,
            ray_angle: angle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    const FOV: f64 = 60.0;
    const WIDTH: usize = 160;

    fn room() -> TileMap {
        TileMap::walled(10, 10, 2).unwrap()
    }

    fn setup() -> (PlayerState, ProjectionConfig, RayCaster) {
        let player = PlayerState::new(DVec2::new(2.0, 2.0), 90.0, FOV, 0.3);
        let projection = ProjectionConfig::new(WIDTH, 120, 4);
        let caster = RayCaster::new(RayCastConfig::new(64, FOV, WIDTH));
        (player, projection, caster)
    }

    #[test]
    fn one_hit_per_column() {
        let (player, projection, caster) = setup();
        let hits = caster.cast(&player, &projection, &room());
        assert_eq!(hits.len(), WIDTH);
        assert!(hits.iter().all(|h| h.wall_id >= 1));
        assert!(hits.iter().all(|h| h.corrected_distance > 0.0));
    }

    #[test]
    fn rays_span_the_field_of_view() {
        let (player, projection, caster) = setup();
        let hits = caster.cast(&player, &projection, &room());
        let inc = caster.config().increment_angle;
        assert_approx_eq!(hits[0].ray_angle, player.angle - FOV / 2.0, 1e-9);
        assert_approx_eq!(hits[WIDTH - 1].ray_angle, player.angle + FOV / 2.0 - inc, 1e-9);
        for pair in hits.windows(2) {
            assert_approx_eq!(pair[1].ray_angle - pair[0].ray_angle, inc, 1e-9);
        }
    }

    #[test]
    fn centre_column_looks_straight_down_the_room() {
        let (player, projection, caster) = setup();
        let hits = caster.cast(&player, &projection, &room());
        let centre = hits[WIDTH / 2];

        // (2, 2) → first sample inside row 9 is exactly 7 tiles away
        assert_eq!(centre.ray_angle, player.angle);
        assert_eq!(centre.wall_id, 2);
        assert_approx_eq!(centre.raw_distance, 7.0, 1e-6);
        assert_approx_eq!(centre.corrected_distance, 7.0, 1e-6);
        assert_eq!(centre.corrected_distance, centre.raw_distance);
    }

    #[test]
    fn edge_columns_match_the_room_geometry() {
        let (player, projection, caster) = setup();
        let hits = caster.cast(&player, &projection, &room());
        let step = 1.0 / 64.0;

        // Left edge (60°) reaches the far wall (row 9); after correction that is
        // the same 7 tiles as the centre, plus at most one marching step.
        let left = hits[0];
        assert!(left.corrected_distance >= hits[WIDTH / 2].corrected_distance);
        assert!(left.corrected_distance < 7.0 + step);
        assert!(left.hit.y >= 9.0);

        // Right edge (119.625°) crosses into column 0 after one tile along X.
        let right = hits[WIDTH - 1];
        let cos = right.ray_angle.to_radians().cos().abs();
        assert!(right.hit.x < 1.0);
        assert!(right.raw_distance >= 1.0 / cos);
        assert!(right.raw_distance < 1.0 / cos + step);
        assert_approx_eq!(
            right.corrected_distance,
            right.raw_distance * (right.ray_angle - player.angle).to_radians().cos(),
            1e-12
        );
    }

    #[test]
    fn hit_point_lies_inside_the_wall_tile() {
        let (player, projection, caster) = setup();
        let map = room();
        for h in caster.cast(&player, &projection, &map) {
            assert_eq!(map.tile_at(h.hit), Some(h.wall_id));
        }
    }

    #[test]
    fn escaping_ray_stops_at_synthetic_wall() {
        let rows: [[TileId; 3]; 3] = [[0, 0, 0], [0, 0, 0], [0, 0, 0]];
        let open = TileMap::from_rows(&rows).unwrap();
        let caster = RayCaster::new(RayCastConfig::new(16, FOV, WIDTH));
        let hit = caster.cast_ray(DVec2::new(1.5, 1.5), 0.0, &open);
        assert_eq!(hit.wall_id, EDGE_WALL);
        assert!(hit.hit.x >= 3.0);
        assert_eq!(open.tile_at(hit.hit), None);
    }

    #[test]
    fn every_position_in_an_enclosed_map_terminates() {
        let map = room();
        let caster = RayCaster::new(RayCastConfig::new(64, FOV, 32));
        let projection = ProjectionConfig::new(32, 24, 1);
        for y in 1..9 {
            for x in 1..9 {
                for angle in [0.0, 45.0, 133.0, 270.0, 359.0] {
                    let pos = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
                    let p = PlayerState::new(pos, angle, FOV, 0.3);
                    let hits = caster.cast(&p, &projection, &map);
                    assert_eq!(hits.len(), 32);
                    assert!(
                        hits.iter()
                            .all(|h| h.wall_id == 2 && h.corrected_distance > 0.0)
                    );
                }
            }
        }
    }
}
