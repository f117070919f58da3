//! Rendering abstraction layer.
//!
//! *The engine never touches a pixel buffer directly.*
//! It casts one [`RayHit`] per column and hands each of them to a type that
//! implements [`Renderer`], layer by layer.
//!
//! * Back-ends own their [`Framebuffer`] for the duration of a frame and
//!   only lend it out read-only once the frame is finished.
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use crate::{
    engine::types::{ProjectionConfig, RayHit},
    world::{PlayerState, TextureBank, TileMap},
};

pub mod framebuffer;
pub mod software;

pub use framebuffer::Framebuffer;
pub use software::Software;

/// Read-only world state a column needs besides its own hit.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub player: &'a PlayerState,
    pub map: &'a TileMap,
    pub bank: &'a TextureBank,
}

/// A renderer that owns a framebuffer for the whole frame.
///
/// Columns are independent of each other; within a column the layers must be
/// drawn background, wall, floor.
pub trait Renderer {
    /// (Re)allocate for the requested resolution and clear to opaque black.
    fn begin_frame(&mut self, projection: &ProjectionConfig);

    /// Sky panorama above the wall strip.
    fn draw_background(&mut self, column: usize, hit: &RayHit, scene: &Scene);

    /// Vertically texture-mapped wall strip.
    fn draw_wall(&mut self, column: usize, hit: &RayHit, scene: &Scene);

    /// Per-pixel floorcasting below the wall strip.
    fn draw_floor(&mut self, column: usize, hit: &RayHit, scene: &Scene);

    /// Finish the frame and **loan** the finished buffer out.
    fn end_frame(&mut self) -> &Framebuffer;

    /// The buffer as of the last finished frame.
    fn framebuffer(&self) -> &Framebuffer;
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame(
        &mut self,
        projection: &ProjectionConfig,
        hits: &[RayHit],
        scene: &Scene,
    ) -> &Framebuffer {
        self.begin_frame(projection);
        for (column, hit) in hits.iter().enumerate() {
            self.draw_background(column, hit, scene);
            self.draw_wall(column, hit, scene);
            self.draw_floor(column, hit, scene);
        }
        self.end_frame()
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}
