//! Rendering buffer

use std::ops::{Index, IndexMut};

/// Rendering Buffer
///
/// Data is stored in row-major order (C-format)
#[derive(Debug, Default)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel or number of color components
    pub bpp: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, and bpp
    ///
    /// Data for the Image is allocated and set to zero
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        RenderingBuffer {
            width,
            height,
            bpp,
            data: vec![0u8; width * height * bpp],
        }
    }
    /// Size of the underlying component data in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Set every component to 255 (opaque white for RGB data)
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 255);
    }
}

impl Index<(usize, usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, (x, y): (usize, usize)) -> &[u8] {
        debug_assert!(x < self.width, "request {} >= {} width :: index", x, self.width);
        debug_assert!(y < self.height, "request {} >= {} height :: index", y, self.height);
        let i = (y * self.width + x) * self.bpp;
        &self.data[i..i + self.bpp]
    }
}
impl IndexMut<(usize, usize)> for RenderingBuffer {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut [u8] {
        debug_assert!(x < self.width, "request {} >= {} width :: index_mut", x, self.width);
        debug_assert!(y < self.height, "request {} >= {} height :: index_mut", y, self.height);
        let i = (y * self.width + x) * self.bpp;
        &mut self.data[i..i + self.bpp]
    }
}
