pub mod map;
pub mod player;
pub mod texture;

pub use map::{EMPTY, MapError, TileId, TileMap};
pub use player::{PlayerState, direction, normalize_angle};
pub use texture::{Color, NO_TEXTURE, Texture, TextureBank, TextureError, TextureId};
