//! Colors

use crate::Color;

fn color_u8_to_f64(x: u8) -> f64 {
    f64::from(x) / 255.0
}

/// Color as Red, Green, Blue
///
/// Per-vertex colors in a [VertexPool](crate::VertexPool) and polygon fill
/// colors are plain opaque triples.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// Create a gray color with all components equal
    pub fn gray(g: u8) -> Self {
        Self::new(g, g, g)
    }
}

impl Color for Rgb8 {
    fn red(&self) -> f64 {
        color_u8_to_f64(self.r)
    }
    fn green(&self) -> f64 {
        color_u8_to_f64(self.g)
    }
    fn blue(&self) -> f64 {
        color_u8_to_f64(self.b)
    }
    fn red8(&self) -> u8 {
        self.r
    }
    fn green8(&self) -> u8 {
        self.g
    }
    fn blue8(&self) -> u8 {
        self.b
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(c: [u8; 3]) -> Rgb8 {
        Rgb8::new(c[0], c[1], c[2])
    }
}
