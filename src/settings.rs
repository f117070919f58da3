//! Start-up configuration: screen, projection, ray marching, movement.
//!
//! Everything here is fixed once the engine is built; there is no runtime
//! reconfiguration.

use glam::DVec2;

use crate::{
    engine::types::{ProjectionConfig, RayCastConfig},
    sim::MovementController,
    world::PlayerState,
};

// Screen
pub const SCREEN_WIDTH: usize = 640;
pub const SCREEN_HEIGHT: usize = 480;
pub const SCALE: usize = 4; // 640×480 presented, 160×120 rendered

// View
pub const FOV: f64 = 60.0; // degrees
pub const PRECISION: u32 = 64; // marching steps per tile

// Player
pub const MOVEMENT_SPEED: f64 = 0.3; // tiles per tick
pub const ROTATION_SPEED: f64 = 5.0; // degrees per tick
pub const PLAYER_RADIUS: f64 = 0.3; // tiles
pub const START_POS: DVec2 = DVec2::new(2.0, 2.0);
pub const START_ANGLE: f64 = 90.0;

/// Rejected configurations.  All of them are fatal at start-up.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("scale must be at least 1")]
    ZeroScale,

    #[error("screen {width}x{height} is not a non-empty multiple of scale {scale}")]
    ScaleMismatch {
        width: usize,
        height: usize,
        scale: usize,
    },

    #[error("field of view must be inside (0, 180) degrees, got {0}")]
    BadFov(f64),

    #[error("ray-march precision must be positive")]
    ZeroPrecision,

    #[error("{name} must be finite and non-negative, got {value}")]
    BadValue { name: &'static str, value: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub screen_width: usize,
    pub screen_height: usize,
    pub scale: usize,
    pub fov: f64,
    pub precision: u32,
    pub movement_speed: f64,
    pub rotation_speed: f64,
    pub player_radius: f64,
    pub start_pos: DVec2,
    pub start_angle: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            scale: SCALE,
            fov: FOV,
            precision: PRECISION,
            movement_speed: MOVEMENT_SPEED,
            rotation_speed: ROTATION_SPEED,
            player_radius: PLAYER_RADIUS,
            start_pos: START_POS,
            start_angle: START_ANGLE,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        let (w, h, s) = (self.screen_width, self.screen_height, self.scale);
        if w < s || h < s || w % s != 0 || h % s != 0 {
            return Err(ConfigError::ScaleMismatch {
                width: w,
                height: h,
                scale: s,
            });
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::BadFov(self.fov));
        }
        if self.precision == 0 {
            return Err(ConfigError::ZeroPrecision);
        }

        let values = [
            ("movement speed", self.movement_speed),
            ("rotation speed", self.rotation_speed),
            ("player radius", self.player_radius),
            ("start x", self.start_pos.x),
            ("start y", self.start_pos.y),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::BadValue { name, value });
            }
        }
        if !self.start_angle.is_finite() {
            return Err(ConfigError::BadValue {
                name: "start angle",
                value: self.start_angle,
            });
        }
        Ok(())
    }

    /// Internal render resolution (screen divided by scale).
    pub fn projection(&self) -> ProjectionConfig {
        let scale = self.scale.max(1);
        ProjectionConfig::new(
            self.screen_width / scale,
            self.screen_height / scale,
            scale,
        )
    }

    pub fn ray_cast(&self) -> RayCastConfig {
        RayCastConfig::new(self.precision, self.fov, self.projection().width)
    }

    pub fn movement(&self) -> MovementController {
        MovementController::new(self.movement_speed, self.rotation_speed)
    }

    pub fn player(&self) -> PlayerState {
        PlayerState::new(self.start_pos, self.start_angle, self.fov, self.player_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let s = Settings::default();
        assert_eq!(s.validate(), Ok(()));
        let p = s.projection();
        assert_eq!((p.width, p.height), (160, 120));
        assert_eq!(p.half_h, 60.0);
        assert_eq!(s.ray_cast().increment_angle, 60.0 / 160.0);
    }

    #[test]
    fn degenerate_values_are_rejected() {
        let base = Settings::default();

        let s = Settings { scale: 0, ..base.clone() };
        assert_eq!(s.validate(), Err(ConfigError::ZeroScale));

        let s = Settings { scale: 7, ..base.clone() };
        assert!(matches!(s.validate(), Err(ConfigError::ScaleMismatch { .. })));

        let s = Settings {
            screen_width: 0,
            ..base.clone()
        };
        assert!(matches!(s.validate(), Err(ConfigError::ScaleMismatch { .. })));

        for fov in [0.0, 180.0, -10.0, f64::NAN] {
            let s = Settings { fov, ..base.clone() };
            assert!(matches!(s.validate(), Err(ConfigError::BadFov(_))));
        }

        let s = Settings {
            precision: 0,
            ..base.clone()
        };
        assert_eq!(s.validate(), Err(ConfigError::ZeroPrecision));

        let s = Settings {
            movement_speed: f64::INFINITY,
            ..base
        };
        assert!(matches!(
            s.validate(),
            Err(ConfigError::BadValue {
                name: "movement speed",
                ..
            })
        ));
    }

    #[test]
    fn player_starts_with_normalised_heading() {
        let s = Settings {
            start_angle: -90.0,
            ..Settings::default()
        };
        let p = s.player();
        assert_eq!(p.angle, 270.0);
        assert_eq!(p.fov, s.fov);
        assert_eq!(p.pos, s.start_pos);
    }
}
