//! Grid raycaster: one ray per screen column, textured walls, floorcasting
//! and a scrolling sky, composited into an RGBA buffer at projection
//! resolution.
//!
//! ```no_run
//! use yaray_rs::{
//!     assets::demo,
//!     engine::Engine,
//!     renderer::Software,
//!     settings::Settings,
//!     sim::KeyState,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let level = demo::demo_level()?;
//! let mut engine = Engine::new(
//!     Software::default(),
//!     &Settings::default(),
//!     level.map,
//!     demo::demo_bank()?,
//! )?;
//! let frame = engine.tick(KeyState::FORWARD);
//! assert_eq!(frame.as_bytes().len(), 4 * 160 * 120);
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod engine;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod world;
