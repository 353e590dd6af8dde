//! Pixel Format

use crate::buffer::RenderingBuffer;
use crate::Color;
use crate::Pixel;

/// Pixel Format Wrapper around raw RGB component data, 3 bytes per pixel
///
///     use scanfill::{Pixel, PixfmtRgb24, Rgb8};
///
///     let mut pix = PixfmtRgb24::new(2, 2);
///     pix.fill(&Rgb8::white());
///     pix.set((0, 1), &Rgb8::black());
///     assert_eq!(pix.get((0, 1)), Rgb8::black());
///     assert_eq!(pix.get((1, 1)), Rgb8::white());
///
#[derive(Debug, Default)]
pub struct PixfmtRgb24 {
    pub rbuf: RenderingBuffer,
}

impl PixfmtRgb24 {
    /// Create a new pixel format of width x height
    ///
    /// Allocates memory of width * height * 3
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rbuf: RenderingBuffer::new(width, height, 3),
        }
    }
    /// Get the [Color] of the pixel at (`x`,`y`)
    pub fn get(&self, id: (usize, usize)) -> Rgb8 {
        let p = &self.rbuf[id];
        Rgb8::new(p[0], p[1], p[2])
    }
}

use crate::color::Rgb8;

impl Pixel for PixfmtRgb24 {
    fn width(&self) -> usize {
        self.rbuf.width
    }
    fn height(&self) -> usize {
        self.rbuf.height
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: &C) {
        let p = &mut self.rbuf[id];
        p[0] = c.red8();
        p[1] = c.green8();
        p[2] = c.blue8();
    }
    fn copy_hline<C: Color>(&mut self, x: usize, y: usize, n: usize, c: &C) {
        if y >= self.rbuf.height || x >= self.rbuf.width || n == 0 {
            return;
        }
        let n = if x + n > self.rbuf.width {
            self.rbuf.width - x
        } else {
            n
        };
        for i in 0..n {
            self.set((x + i, y), c);
        }
    }
    fn fill<C: Color>(&mut self, c: &C) {
        let (w, h) = (self.width(), self.height());
        for y in 0..h {
            self.copy_hline(0, y, w, c);
        }
    }
    fn as_bytes(&self) -> &[u8] {
        &self.rbuf.data
    }
}
