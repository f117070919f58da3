//! Grid movement with axis-separated collision.
//!
//! The Y move and the X move are tested against the map one after the
//! other, each with a `radius` look-ahead in the direction of travel.  A
//! blocked axis does not cancel the free one, which is what lets the player
//! slide along a wall instead of stopping dead.

use glam::DVec2;

use crate::{
    sim::input::KeyState,
    world::{PlayerState, TileMap},
};

/// Turns a [`KeyState`] into one tick of player motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementController {
    /// tiles per tick
    pub movement_speed: f64,
    /// degrees per tick
    pub rotation_speed: f64,
}

impl MovementController {
    pub fn new(movement_speed: f64, rotation_speed: f64) -> Self {
        Self {
            movement_speed,
            rotation_speed,
        }
    }

    /// Advance `player` by one tick.  Keys are applied in the order
    /// forward, backward, left, right, using the heading at the start of the tick
    /// for both translations.
    pub fn update(&self, player: &mut PlayerState, keys: KeyState, map: &TileMap) {
        if keys.contains(KeyState::FORWARD) {
            self.step(player, 1.0, map);
        }
        if keys.contains(KeyState::BACKWARD) {
            self.step(player, -1.0, map);
        }
        if keys.contains(KeyState::LEFT) {
            player.turn(-self.rotation_speed);
        }
        if keys.contains(KeyState::RIGHT) {
            player.turn(self.rotation_speed);
        }
    }

    /// Move `sign` (±1) times `movement_speed` along the heading.
    fn step(&self, player: &mut PlayerState, sign: f64, map: &TileMap) {
        let dir = player.forward() * sign;
        let target = player.pos + dir * self.movement_speed;
        let probe = target + dir * player.radius;

        // Y first, probing in the player's current column ...
        if map.is_walkable(DVec2::new(player.pos.x, probe.y)) {
            player.pos.y = target.y;
        }
        // ... then X, probing in the (possibly updated) row.
        if map.is_walkable(DVec2::new(probe.x, player.pos.y)) {
            player.pos.x = target.x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn room() -> TileMap {
        TileMap::walled(10, 10, 1).unwrap()
    }

    fn player_at(x: f64, y: f64, angle: f64) -> PlayerState {
        PlayerState::new(DVec2::new(x, y), angle, 60.0, 0.3)
    }

    fn controller() -> MovementController {
        MovementController::new(0.3, 5.0)
    }

    #[test]
    fn forward_moves_along_heading() {
        let mut p = player_at(5.0, 5.0, 90.0);
        controller().update(&mut p, KeyState::FORWARD, &room());
        assert_approx_eq!(p.pos.x, 5.0, 1e-12);
        assert_approx_eq!(p.pos.y, 5.3, 1e-12);
    }

    #[test]
    fn backward_moves_against_heading() {
        let mut p = player_at(5.0, 5.0, 0.0);
        controller().update(&mut p, KeyState::BACKWARD, &room());
        assert_approx_eq!(p.pos.x, 4.7, 1e-12);
        assert_approx_eq!(p.pos.y, 5.0, 1e-12);
    }

    #[test]
    fn forward_and_backward_cancel_out() {
        let mut p = player_at(5.0, 5.0, 33.0);
        controller().update(&mut p, KeyState::FORWARD | KeyState::BACKWARD, &room());
        assert_approx_eq!(p.pos.x, 5.0, 1e-12);
        assert_approx_eq!(p.pos.y, 5.0, 1e-12);
    }

    #[test]
    fn diagonal_into_wall_slides_along_it() {
        // Wall column x = 0 is one look-ahead away; heading 135° pushes
        // towards it and down the rows at the same time.
        let start = DVec2::new(1.35, 5.5);
        let mut p = player_at(start.x, start.y, 135.0);
        controller().update(&mut p, KeyState::FORWARD, &room());

        let moved = p.pos - start;
        assert_eq!(moved.x, 0.0, "blocked axis must not move");
        assert!(moved.y > 0.2, "free axis must still move, got {moved:?}");
    }

    #[test]
    fn corner_stops_both_axes() {
        let mut p = player_at(1.35, 1.35, 225.0);
        controller().update(&mut p, KeyState::FORWARD, &room());
        assert_eq!(p.pos, DVec2::new(1.35, 1.35));
    }

    #[test]
    fn radius_look_ahead_keeps_distance_from_wall() {
        let mut p = player_at(5.0, 8.2, 90.0);
        for _ in 0..10 {
            controller().update(&mut p, KeyState::FORWARD, &room());
        }
        // target 8.5 + radius 0.3 would probe row 8 (8.8): allowed once,
        // next probe lands in row 9 (wall) and is refused.
        assert_approx_eq!(p.pos.y, 8.5, 1e-12);
    }

    #[test]
    fn turning_wraps_into_range() {
        let mut p = player_at(5.0, 5.0, 0.0);
        let c = controller();
        for _ in 0..200 {
            c.update(&mut p, KeyState::LEFT, &room());
            assert!((0.0..360.0).contains(&p.angle));
        }
        assert_approx_eq!(p.angle, (360.0 - (200.0 * 5.0) % 360.0) % 360.0, 1e-9);

        let mut p = player_at(5.0, 5.0, 358.0);
        c.update(&mut p, KeyState::RIGHT, &room());
        assert_approx_eq!(p.angle, 3.0, 1e-12);
    }

    #[test]
    fn forward_and_turn_in_the_same_tick() {
        let mut p = player_at(5.0, 5.0, 0.0);
        controller().update(&mut p, KeyState::FORWARD | KeyState::RIGHT, &room());
        // translation uses the heading before the turn
        assert_approx_eq!(p.pos.x, 5.3, 1e-12);
        assert_approx_eq!(p.pos.y, 5.0, 1e-12);
        assert_approx_eq!(p.angle, 5.0, 1e-12);
    }
}
