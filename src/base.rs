//! Rendering base with clipping

use crate::Color;
use crate::Pixel;

use std::cmp::max;
use std::cmp::min;

/// Clipped access to a [Pixel] region
///
/// Coordinates are signed here; anything outside the underlying buffer is
/// quietly ignored, which is what lets the rasterizer stay oblivious to the
/// canvas size.
#[derive(Debug, Default)]
pub struct RenderingBase<T> {
    pub pixf: T,
}

impl<T: Pixel> RenderingBase<T> {
    /// Create a new rendering base from a pixel format
    pub fn new(pixf: T) -> Self {
        RenderingBase { pixf }
    }
    /// Fill the image with a single color
    pub fn clear<C: Color>(&mut self, color: &C) {
        self.pixf.fill(color);
    }
    /// Inclusive limits of the drawable region, (xmin, xmax, ymin, ymax)
    pub fn limits(&self) -> (i64, i64, i64, i64) {
        let w = self.pixf.width() as i64;
        let h = self.pixf.height() as i64;
        (0, w - 1, 0, h - 1)
    }
    /// Set pixels from (`x1`,`y`) to (`x2`,`y`) inclusive, clipped
    pub fn copy_hline<C: Color>(&mut self, x1: i64, y: i64, x2: i64, c: &C) {
        let (xmin, xmax, ymin, ymax) = self.limits();
        let (x1, x2) = if x2 >= x1 { (x1, x2) } else { (x2, x1) };
        if y > ymax || y < ymin || x1 > xmax || x2 < xmin {
            return;
        }
        let x1 = max(x1, xmin);
        let x2 = min(x2, xmax);
        self.pixf
            .copy_hline(x1 as usize, y as usize, (x2 - x1 + 1) as usize, c);
    }
    /// Set a single pixel, clipped
    pub fn set_pixel<C: Color>(&mut self, x: i64, y: i64, c: &C) {
        let (xmin, xmax, ymin, ymax) = self.limits();
        if x < xmin || x > xmax || y < ymin || y > ymax {
            return;
        }
        self.pixf.set((x as usize, y as usize), c);
    }
    /// Raw component data, row-major
    pub fn as_bytes(&self) -> &[u8] {
        self.pixf.as_bytes()
    }
}
