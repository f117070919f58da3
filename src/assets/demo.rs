//! Built-in assets so the viewer runs without any files.

use crate::{
    assets::level::{Level, LevelError},
    world::{Color, EMPTY, Texture, TextureBank, TextureError},
};

pub const DEMO_LEVEL: &str = "\
# 10x10 demo room
player 2 2 90
2222222222
2000000002
2001100002
2000000002
2000000102
2000000102
2011000002
2000000002
2000000002
2222222222
";

pub fn demo_level() -> Result<Level, LevelError> {
    Level::parse(DEMO_LEVEL)
}

/// 8×8 red brick with light mortar.
pub fn brick() -> Result<Texture, TextureError> {
    #[rustfmt::skip]
    let bitmap = vec![
        1, 1, 1, 1, 1, 1, 1, 1,
        0, 0, 0, 1, 0, 0, 0, 0,
        0, 0, 0, 1, 0, 0, 0, 0,
        0, 0, 0, 1, 0, 0, 0, 0,
        1, 1, 1, 1, 1, 1, 1, 1,
        0, 0, 0, 0, 0, 0, 0, 1,
        0, 0, 0, 0, 0, 0, 0, 1,
        0, 0, 0, 0, 0, 0, 0, 1,
    ];
    let palette = vec![Color::rgb(170, 56, 44), Color::rgb(214, 206, 196)];
    Texture::procedural(8, 8, bitmap, palette)
}

/// 8×8 grey stone blocks.
pub fn stone() -> Result<Texture, TextureError> {
    #[rustfmt::skip]
    let bitmap = vec![
        0, 0, 0, 0, 2, 0, 0, 0,
        0, 1, 1, 0, 2, 0, 1, 0,
        0, 1, 0, 0, 2, 0, 0, 0,
        2, 2, 2, 2, 2, 2, 2, 2,
        0, 0, 2, 0, 0, 0, 1, 0,
        1, 0, 2, 0, 1, 1, 0, 0,
        0, 0, 2, 0, 0, 1, 0, 0,
        2, 2, 2, 2, 2, 2, 2, 2,
    ];
    let palette = vec![
        Color::rgb(128, 128, 132),
        Color::rgb(104, 104, 110),
        Color::rgb(60, 60, 64),
    ];
    Texture::procedural(8, 8, bitmap, palette)
}

/// 16×16 two-tone checker floor.
pub fn checker_floor() -> Result<Texture, TextureError> {
    let bitmap = (0..16 * 16)
        .map(|i| (((i % 16) / 8 + (i / 16) / 8) % 2) as u8)
        .collect();
    let palette = vec![Color::rgb(92, 74, 58), Color::rgb(70, 56, 44)];
    Texture::procedural(16, 16, bitmap, palette)
}

/// 360×60 sky panorama, one column per degree of heading.
pub fn sky() -> Result<Texture, TextureError> {
    const W: usize = 360;
    const H: usize = 60;
    let mut pixels = Vec::with_capacity(W * H);
    for y in 0..H {
        let t = y as f64 / H as f64;
        for x in 0..W {
            // soft horizontal bands that repeat every 90°
            let wave = ((x as f64 / W as f64) * std::f64::consts::TAU * 4.0).sin();
            let cloud = if (y as f64 - 18.0 - wave * 6.0).abs() < 3.0 { 40.0 } else { 0.0 };
            let r = (70.0 + 80.0 * t + cloud).min(255.0) as u8;
            let g = (110.0 + 80.0 * t + cloud).min(255.0) as u8;
            let b = (190.0 + 50.0 * t + cloud).min(255.0) as u8;
            pixels.push(Color::rgb(r, g, b));
        }
    }
    Texture::image(W, H, pixels)
}

/// Bank with two wall textures (ids 1 and 2), a floor for empty tiles and the
/// sky panorama.
pub fn demo_bank() -> Result<TextureBank, TextureError> {
    let mut bank = TextureBank::default_with_checker();

    let brick = bank.insert("BRICK", brick()?)?;
    let stone = bank.insert("STONE", stone()?)?;
    bank.push_wall(brick)?;
    bank.push_wall(stone)?;

    let floor = bank.insert("FLOOR", checker_floor()?)?;
    bank.set_floor(EMPTY, floor)?;

    let sky = bank.insert("SKY", sky()?)?;
    bank.set_background(sky)?;

    Ok(bank)
}
