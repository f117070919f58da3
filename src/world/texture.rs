// Format-agnostic repository of textures handed over by the asset loader.
// The renderer and engine interact through `TextureId` and tile ids only.

use std::collections::HashMap;

use crate::world::map::TileId;

/// Runtime handle for a texture in this bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank.
pub type TextureId = u16;

/// `TextureId` whose pixels are the checkerboard fallback.
/// Always = 0 because `TextureBank::new()` inserts it first.
pub const NO_TEXTURE: TextureId = 0;

/// One RGBA colour, 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as `0x00RRGGBB`, the layout window back-ends such as `minifb` expect.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Things that can go wrong when building textures or using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture with an existing name.
    #[error("texture name `{0}` already present in bank")]
    Duplicate(String),

    /// Requested ID is outside `0 .. bank.len()`.
    #[error("texture id {0} out of range")]
    BadId(TextureId),

    #[error("texture must be at least 1x1, got {w}x{h}")]
    ZeroSize { w: usize, h: usize },

    #[error("texture data holds {found} entries, expected {expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("bitmap refers to palette entry {index} but the palette has {len} colours")]
    BadPaletteIndex { index: u8, len: usize },

    /// No handle left for another texture or wall slot.
    #[error("{table} table is full")]
    Full { table: &'static str },
}

/// A sampleable surface.
///
/// Small hand-made textures are palette bitmaps; anything decoded from an
/// image is a flat colour array.  Both are row-major and wrap on sampling.
#[derive(Clone, Debug, PartialEq)]
pub enum Texture {
    Procedural {
        w: usize,
        h: usize,
        bitmap: Vec<u8>,
        palette: Vec<Color>,
    },
    Image {
        w: usize,
        h: usize,
        pixels: Vec<Color>,
    },
}

/// Convenience checkerboard 8×8 (dark/light grey).
impl Default for Texture {
    fn default() -> Self {
        let mut bitmap = vec![0u8; 8 * 8];
        for y in 0..8 {
            for x in 0..8 {
                bitmap[y * 8 + x] = ((x ^ y) & 1) as u8;
            }
        }
        Texture::Procedural {
            w: 8,
            h: 8,
            bitmap,
            palette: vec![Color::rgb(0xAA, 0xAA, 0xAA), Color::rgb(0x44, 0x44, 0x44)],
        }
    }
}

impl Texture {
    /// Palette bitmap; every bitmap entry must index into `palette`.
    pub fn procedural(
        w: usize,
        h: usize,
        bitmap: Vec<u8>,
        palette: Vec<Color>,
    ) -> Result<Self, TextureError> {
        check_size(w, h, bitmap.len())?;
        if let Some(&index) = bitmap.iter().find(|&&i| i as usize >= palette.len()) {
            return Err(TextureError::BadPaletteIndex {
                index,
                len: palette.len(),
            });
        }
        Ok(Texture::Procedural {
            w,
            h,
            bitmap,
            palette,
        })
    }

    /// Flat array of `w * h` colours.
    pub fn image(w: usize, h: usize, pixels: Vec<Color>) -> Result<Self, TextureError> {
        check_size(w, h, pixels.len())?;
        Ok(Texture::Image { w, h, pixels })
    }

    /// Flat array of `w * h` RGBA quadruplets, as produced by image decoders.
    pub fn from_rgba_bytes(w: usize, h: usize, bytes: &[u8]) -> Result<Self, TextureError> {
        if bytes.len() % 4 != 0 {
            return Err(TextureError::SizeMismatch {
                expected: w * h * 4,
                found: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Color::rgba(c[0], c[1], c[2], c[3]))
            .collect();
        Self::image(w, h, pixels)
    }

    #[inline]
    pub fn width(&self) -> usize {
        match self {
            Texture::Procedural { w, .. } | Texture::Image { w, .. } => *w,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        match self {
            Texture::Procedural { h, .. } | Texture::Image { h, .. } => *h,
        }
    }

    /// Colour at texel `(u, v)`, both wrapped modulo the texture size.
    #[inline]
    pub fn sample(&self, u: i64, v: i64) -> Color {
        let (w, h) = (self.width() as i64, self.height() as i64);
        let idx = (v.rem_euclid(h) * w + u.rem_euclid(w)) as usize;
        match self {
            Texture::Procedural {
                bitmap, palette, ..
            } => palette[bitmap[idx] as usize],
            Texture::Image { pixels, .. } => pixels[idx],
        }
    }
}

fn check_size(w: usize, h: usize, found: usize) -> Result<(), TextureError> {
    if w == 0 || h == 0 {
        return Err(TextureError::ZeroSize { w, h });
    }
    if found != w * h {
        return Err(TextureError::SizeMismatch {
            expected: w * h,
            found,
        });
    }
    Ok(())
}

/// A format-agnostic cache of textures plus the three lookup tables the
/// renderer needs: walls by tile id, floors by tile id, and the sky panorama.
///
/// * Does **not** know about files or image formats; that is the loader's job.
/// * Stores exactly one copy of every name.
/// * ID **0** is always the “missing” checkerboard.
pub struct TextureBank {
    by_name: HashMap<String, TextureId>,
    data: Vec<Texture>,
    /// wall tile id `n` → `walls[n - 1]`
    walls: Vec<TextureId>,
    floors: HashMap<TileId, TextureId>,
    background: Option<TextureId>,
}

impl TextureBank {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    /// Create an empty bank with a mandatory *missing* texture used as
    /// fallback.  The texture is inserted under the fixed name `"MISSING"`
    /// and obtains the handle **0**.
    pub fn new(missing_tex: Texture) -> Self {
        let mut by_name = HashMap::new();
        by_name.insert("MISSING".into(), NO_TEXTURE);
        Self {
            by_name,
            data: vec![missing_tex],
            walls: Vec::new(),
            floors: HashMap::new(),
            background: None,
        }
    }

    pub fn default_with_checker() -> Self {
        Self::new(Texture::default())
    }

    // ---------------------------------------------------------------------
    // Query helpers
    // ---------------------------------------------------------------------

    /// Number of textures stored (including the “missing” one).
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.len() == 1
    } // only checker

    /// Obtain the id for a *loaded* texture by name.
    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Borrow a texture by id, with bounds-checking.
    pub fn texture(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.data.get(id as usize).ok_or(TextureError::BadId(id))
    }

    /// The checkerboard fallback.
    pub fn missing(&self) -> &Texture {
        &self.data[NO_TEXTURE as usize]
    }

    /// Number of entries in the wall table.
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Texture for wall tile `tile` (`tile - 1` in the wall table).
    /// `None` for the empty tile and ids past the end of the table.
    pub fn wall(&self, tile: TileId) -> Option<&Texture> {
        let slot = (tile as usize).checked_sub(1)?;
        let id = *self.walls.get(slot)?;
        self.data.get(id as usize)
    }

    /// Floor texture registered for `tile`; `None` means "draw no floor".
    pub fn floor(&self, tile: TileId) -> Option<&Texture> {
        let id = *self.floors.get(&tile)?;
        self.data.get(id as usize)
    }

    pub fn background(&self) -> Option<&Texture> {
        self.data.get(self.background? as usize)
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Insert a texture under `name`.
    ///
    /// * Returns the newly assigned `TextureId`.
    /// * Fails if the name already exists (`Duplicate`).
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        tex: Texture,
    ) -> Result<TextureId, TextureError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(TextureError::Duplicate(name));
        }
        let id = TextureId::try_from(self.data.len())
            .map_err(|_| TextureError::Full { table: "texture" })?;
        self.data.push(tex);
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Append an already-stored texture to the wall table and return the
    /// wall tile id that now draws with it.
    pub fn push_wall(&mut self, id: TextureId) -> Result<TileId, TextureError> {
        self.texture(id)?;
        let tile = TileId::try_from(self.walls.len() + 1)
            .map_err(|_| TextureError::Full { table: "wall" })?;
        self.walls.push(id);
        Ok(tile)
    }

    /// Draw tiles with id `tile` using texture `id` when floorcasting.
    pub fn set_floor(&mut self, tile: TileId, id: TextureId) -> Result<(), TextureError> {
        self.texture(id)?;
        self.floors.insert(tile, id);
        Ok(())
    }

    pub fn set_background(&mut self, id: TextureId) -> Result<(), TextureError> {
        self.texture(id)?;
        self.background = Some(id);
        Ok(())
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
