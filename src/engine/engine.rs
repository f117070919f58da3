use log::{debug, info, warn};

use crate::{
    engine::{
        raycast::{EDGE_WALL, RayCaster},
        types::{ProjectionConfig, RayHit},
    },
    renderer::{Framebuffer, Renderer, RendererExt, Scene},
    settings::{ConfigError, Settings},
    sim::{KeyState, MovementController},
    world::{EMPTY, MapError, PlayerState, TextureBank, TileId, TileMap},
};

/// Reasons an engine refuses to start.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("wall id {wall_id} has no wall texture ({available} registered)")]
    MissingWallTexture { wall_id: TileId, available: usize },

    #[error("player start ({x}, {y}) is not on an empty tile")]
    StartNotWalkable { x: f64, y: f64 },
}

/// One play session: owns the map, the player, the textures and a renderer,
/// and turns key states into finished frames.
///
/// There is no hidden timer.  Each [`Engine::tick`] runs one complete frame;
/// a tick the caller skips (window unfocused, paused) simply never happens.
pub struct Engine<R: Renderer> {
    renderer: R,
    map: TileMap,
    player: PlayerState,
    texture_bank: TextureBank,
    projection: ProjectionConfig,
    caster: RayCaster,
    movement: MovementController,
    hits: Vec<RayHit>,
}

impl<R: Renderer> Engine<R> {
    /// Validate everything that could otherwise fail mid-frame and build the
    /// session.
    pub fn new(
        renderer: R,
        settings: &Settings,
        map: TileMap,
        texture_bank: TextureBank,
    ) -> Result<Self, EngineError> {
        settings.validate()?;
        map.check_enclosed()?;

        // real walls plus the synthetic id used by rays leaving the grid
        let needed = map.max_wall_id().max(EDGE_WALL);
        if needed as usize > texture_bank.wall_count() {
            return Err(EngineError::MissingWallTexture {
                wall_id: needed,
                available: texture_bank.wall_count(),
            });
        }

        let player = settings.player();
        if !map.is_walkable(player.pos) {
            return Err(EngineError::StartNotWalkable {
                x: player.pos.x,
                y: player.pos.y,
            });
        }

        // drawable without these; the affected pixels keep the clear colour
        if texture_bank.background().is_none() {
            warn!("no background texture registered, sky will not be drawn");
        }
        if texture_bank.floor(EMPTY).is_none() {
            warn!("no floor texture for empty tiles, floor will not be drawn");
        }

        let projection = settings.projection();
        debug!(
            "projection {}x{} (scale {}), precision {}",
            projection.width, projection.height, projection.scale, settings.precision
        );
        info!(
            "engine ready: {}x{} map, {} wall textures, player at ({:.2}, {:.2}) facing {:.1}°",
            map.width(),
            map.height(),
            texture_bank.wall_count(),
            player.pos.x,
            player.pos.y,
            player.angle
        );

        Ok(Self {
            renderer,
            map,
            player,
            texture_bank,
            projection,
            caster: RayCaster::new(settings.ray_cast()),
            movement: settings.movement(),
            hits: Vec::with_capacity(projection.width),
        })
    }

    /// Apply one tick of input and render the resulting frame.
    pub fn tick(&mut self, keys: KeyState) -> &Framebuffer {
        self.movement.update(&mut self.player, keys, &self.map);
        self.render_frame()
    }

    /// Render the current state without moving.
    pub fn render_frame(&mut self) -> &Framebuffer {
        self.caster
            .cast_into(&self.player, &self.projection, &self.map, &mut self.hits);

        let scene = Scene {
            player: &self.player,
            map: &self.map,
            bank: &self.texture_bank,
        };
        self.renderer.draw_frame(&self.projection, &self.hits, &scene)
    }

    #[inline]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[inline]
    pub fn map(&self) -> &TileMap {
        &self.map
    }

    #[inline]
    pub fn projection(&self) -> &ProjectionConfig {
        &self.projection
    }

    /// Hits of the most recent frame, left to right.
    #[inline]
    pub fn last_hits(&self) -> &[RayHit] {
        &self.hits
    }

    #[inline]
    pub fn framebuffer(&self) -> &Framebuffer {
        self.renderer.framebuffer()
    }
}
