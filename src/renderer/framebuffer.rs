//! RGBA byte buffer at projection resolution.
//!
//! Layout is row-major, 4 bytes per pixel, pixel `(x, y)` at byte
//! `4 * (x + y * width)`.  All writes are clipped, so callers may pass rows
//! computed from unclamped wall heights.

use crate::world::Color;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl Framebuffer {
    /// A `width × height` buffer cleared to opaque black.
    pub fn new(width: usize, height: usize) -> Self {
        let mut fb = Self::default();
        fb.resize(width, height);
        fb
    }

    /// (Re)allocate for a new resolution and clear to opaque black.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.bytes.resize(4 * width * height, 0);
        self.clear(Color::BLACK);
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes, ready for presentation.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        4 * (x + y * self.width)
    }

    pub fn clear(&mut self, c: Color) {
        for px in self.bytes.chunks_exact_mut(4) {
            px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    /// Write one pixel; coordinates outside the buffer are ignored.
    #[inline]
    pub fn put(&mut self, x: i64, y: i64, c: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let o = self.offset(x as usize, y as usize);
        self.bytes[o..o + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let o = self.offset(x, y);
        let p = &self.bytes[o..o + 4];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Fill rows `y0 .. y1` of column `x`, clipped to the buffer.
    pub fn vertical_run(&mut self, x: usize, y0: i64, y1: i64, c: Color) {
        if x >= self.width {
            return;
        }
        let top = y0.max(0);
        let bottom = y1.min(self.height as i64);
        for y in top..bottom {
            let o = self.offset(x, y as usize);
            self.bytes[o..o + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    /// Nearest-neighbour upscale into a `0x00RRGGBB` surface of
    /// `(width * scale) × (height * scale)` pixels.
    pub fn blit_scaled(&self, dst: &mut [u32], scale: usize) {
        let scale = scale.max(1);
        let dst_w = self.width * scale;
        debug_assert_eq!(dst.len(), dst_w * self.height * scale);

        for (dy, row) in dst.chunks_exact_mut(dst_w).enumerate() {
            let sy = dy / scale;
            for (dx, out) in row.iter_mut().enumerate() {
                let o = self.offset(dx / scale, sy);
                let p = &self.bytes[o..o + 4];
                *out = Color::rgb(p[0], p[1], p[2]).to_rgb_u32();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn new_buffer_is_opaque_black() {
        let fb = Framebuffer::new(3, 2);
        assert_eq!(fb.as_bytes().len(), 4 * 3 * 2);
        assert!(fb.as_bytes().chunks(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn pixel_addressing_is_row_major() {
        let mut fb = Framebuffer::new(4, 3);
        fb.put(1, 2, RED);
        let o = 4 * (1 + 2 * 4);
        assert_eq!(&fb.as_bytes()[o..o + 4], &[255, 0, 0, 255]);
        assert_eq!(fb.pixel(1, 2), Some(RED));
        assert_eq!(fb.pixel(4, 0), None);
    }

    #[test]
    fn writes_outside_are_clipped() {
        let mut fb = Framebuffer::new(2, 2);
        let before = fb.clone();
        fb.put(-1, 0, RED);
        fb.put(0, 2, RED);
        fb.vertical_run(5, 0, 2, RED);
        assert_eq!(fb, before);

        fb.vertical_run(1, -100, 100, RED);
        assert_eq!(fb.pixel(1, 0), Some(RED));
        assert_eq!(fb.pixel(1, 1), Some(RED));
        assert_eq!(fb.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn blit_scaled_repeats_each_pixel() {
        let mut fb = Framebuffer::new(2, 1);
        fb.put(1, 0, RED);
        let mut dst = vec![0u32; 4 * 2];
        fb.blit_scaled(&mut dst, 2);
        assert_eq!(
            dst,
            vec![0, 0, 0xFF0000, 0xFF0000, 0, 0, 0xFF0000, 0xFF0000]
        );
    }
}
