//! ---------------------------------------------------------------------------
//! Classic software (CPU) column renderer
//!
//! * Fills a [`Framebuffer`] in RGBA byte order at projection resolution.
//! * Every column is composited on its own: sky above the wall strip, the
//!   wall strip itself, then floorcasting below it.  No depth buffer.
//! ---------------------------------------------------------------------------

use glam::DVec2;

use crate::{
    engine::{
        projection::{correct_floor_distance, floor_distance, wall_height},
        types::{ProjectionConfig, RayHit},
    },
    renderer::{Framebuffer, Renderer, Scene},
    world::{Color, PlayerState, direction},
};

/// Colour every frame starts from; floor pixels that are skipped keep it.
pub const CLEAR_COLOR: Color = Color::BLACK;

/// Extra rows drawn below every wall texel run.  Fractional row heights at
/// low resolution otherwise leave one-pixel gaps between runs and at the
/// wall/floor boundary.
pub const SEAM_OVERDRAW: f64 = 2.0;

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    fb: Framebuffer,
    width: usize,
    height: usize,
    half_h: f64,
    /// first row of the lower screen half
    horizon: i64,
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, projection: &ProjectionConfig) {
        // (re)allocate if resolution changed
        if projection.width != self.width || projection.height != self.height {
            self.width = projection.width;
            self.height = projection.height;
            self.half_h = projection.half_h;
            self.horizon = (projection.height / 2) as i64;
            self.fb.resize(self.width, self.height);
        }
        self.fb.clear(CLEAR_COLOR);
    }

    fn draw_background(&mut self, column: usize, hit: &RayHit, scene: &Scene) {
        let Some(sky) = scene.bank.background() else {
            return;
        };
        let bottom = self.wall_top(hit).min(self.height as i64);
        let u = background_texel_x(scene.player.angle, column, sky.width());

        for row in 0..bottom.max(0) {
            let v = background_texel_y(row as usize, sky.height());
            self.fb.put(column as i64, row, sky.sample(u, v));
        }
    }

    fn draw_wall(&mut self, column: usize, hit: &RayHit, scene: &Scene) {
        // wall ids are checked against the table when the engine is built
        let tex = scene
            .bank
            .wall(hit.wall_id)
            .unwrap_or_else(|| scene.bank.missing());

        let wall_h = wall_height(self.half_h, hit.corrected_distance) as f64;
        let top = self.horizon as f64 - wall_h;
        let row_step = 2.0 * wall_h / tex.height() as f64;
        let u = wall_texel_x(hit.hit, tex.width());

        for i in 0..tex.height() {
            let y = top + i as f64 * row_step;
            let color = tex.sample(u, i as i64);
            self.fb.vertical_run(
                column,
                y.floor() as i64,
                (y + row_step + SEAM_OVERDRAW).floor() as i64,
                color,
            );
        }
    }

    fn draw_floor(&mut self, column: usize, hit: &RayHit, scene: &Scene) {
        let wall_h = wall_height(self.half_h, hit.corrected_distance);
        let first = self.horizon.saturating_add(wall_h).saturating_add(1);
        let last = self.height as i64;
        if first > last {
            return;
        }

        // scan-line `y` is the lower edge of pixel row `y - 1`
        for y in first..=last {
            let world = floor_point(scene.player, hit.ray_angle, y as usize, self.height);
            let Some(tile) = scene.map.tile_at(world) else {
                continue;
            };
            let Some(tex) = scene.bank.floor(tile) else {
                continue;
            };
            let u = (world.x * tex.width() as f64).floor() as i64;
            let v = (world.y * tex.height() as f64).floor() as i64;
            self.fb.put(column as i64, y - 1, tex.sample(u, v));
        }
    }

    fn end_frame(&mut self) -> &Framebuffer {
        &self.fb
    }

    fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }
}

/*──────────────────────── column geometry ────────────────────────────*/

impl Software {
    /// First row of the wall strip for `hit` (may be negative).
    #[inline]
    fn wall_top(&self, hit: &RayHit) -> i64 {
        self.horizon
            .saturating_sub(wall_height(self.half_h, hit.corrected_distance))
    }
}

/// Texture column for a wall hit.
///
/// Walls are grid aligned, so one of `hit.x` / `hit.y` is (nearly) integral at
/// the surface and their sum runs along the wall face.
#[inline]
pub fn wall_texel_x(hit: DVec2, tex_w: usize) -> i64 {
    ((tex_w as f64 * (hit.x + hit.y)).floor() as i64).rem_euclid(tex_w as i64)
}

/// Panorama column: one texel per degree of heading plus one per screen column.
#[inline]
pub fn background_texel_x(player_angle: f64, column: usize, sky_w: usize) -> i64 {
    (player_angle + column as f64).rem_euclid(sky_w as f64).floor() as i64
}

#[inline]
pub fn background_texel_y(row: usize, sky_h: usize) -> i64 {
    (row % sky_h) as i64
}

/// World point seen on floor scan-line `y` along a ray heading `ray_angle`.
///
/// Texture coordinates are taken from this absolute point rather than from
/// its offset inside the tile, so floor textures scroll continuously across
/// tile borders.
pub fn floor_point(player: &PlayerState, ray_angle: f64, y: usize, height: usize) -> DVec2 {
    let distance = correct_floor_distance(floor_distance(y, height), ray_angle, player.angle);
    player.pos + direction(ray_angle) * distance
}

/*──────────────────────────────── Tests ───────────────────────────────*/
