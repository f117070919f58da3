//! Asset collaborators: everything that turns files (or nothing at all) into
//! maps and textures.  The engine itself never touches the filesystem.

pub mod demo;
pub mod level;
pub mod raw;

pub use level::{Level, LevelError};
pub use raw::{RawTextureError, load_texture, read_texture, save_texture, write_texture};
