//! Raw RGBA texture container.
//!
//! ```text
//! offset  size        field
//! 0       4           magic "RTEX"
//! 4       2           width   (u16, little endian)
//! 6       2           height  (u16, little endian)
//! 8       w*h*4       RGBA pixels, row-major
//! ```
//!
//! Image decoding lives outside the engine; any converter that can dump
//! RGBA bytes can produce this format.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use byteorder::{LittleEndian as LE, ReadBytesExt, WriteBytesExt};
use log::info;
use thiserror::Error;

use crate::world::{Texture, TextureError};

pub const MAGIC: &[u8; 4] = b"RTEX";

#[derive(Error, Debug)]
pub enum RawTextureError {
    /// Underlying I/O failure (including truncated pixel data).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("not an RTEX file")]
    BadMagic,

    #[error("texture dimensions exceed {max}x{max}", max = u16::MAX)]
    TooLarge,

    #[error(transparent)]
    Texture(#[from] TextureError),
}

/// Decode one texture from `r`.
pub fn read_texture<R: Read>(r: &mut R) -> Result<Texture, RawTextureError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(RawTextureError::BadMagic);
    }

    let w = r.read_u16::<LE>()? as usize;
    let h = r.read_u16::<LE>()? as usize;

    let mut bytes = vec![0u8; w * h * 4];
    r.read_exact(&mut bytes)?;

    Ok(Texture::from_rgba_bytes(w, h, &bytes)?)
}

/// Encode `tex` (either variant) to `w`.
pub fn write_texture<W: Write>(w: &mut W, tex: &Texture) -> Result<(), RawTextureError> {
    let (tw, th) = (tex.width(), tex.height());
    if tw > u16::MAX as usize || th > u16::MAX as usize {
        return Err(RawTextureError::TooLarge);
    }

    w.write_all(MAGIC)?;
    w.write_u16::<LE>(tw as u16)?;
    w.write_u16::<LE>(th as u16)?;
    for y in 0..th as i64 {
        for x in 0..tw as i64 {
            let c = tex.sample(x, y);
            w.write_all(&[c.r, c.g, c.b, c.a])?;
        }
    }
    Ok(())
}

pub fn load_texture<P: AsRef<Path>>(path: P) -> Result<Texture, RawTextureError> {
    let mut file = BufReader::new(File::open(path.as_ref())?);
    let tex = read_texture(&mut file)?;
    info!(
        "loaded texture {} ({}x{})",
        path.as_ref().display(),
        tex.width(),
        tex.height()
    );
    Ok(tex)
}

pub fn save_texture<P: AsRef<Path>>(path: P, tex: &Texture) -> Result<(), RawTextureError> {
    let mut file = BufWriter::new(File::create(path)?);
    write_texture(&mut file, tex)?;
    file.flush()?;
    Ok(())
}
