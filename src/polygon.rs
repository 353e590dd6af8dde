//! Vertex pool and indexed polygons

use crate::color::Rgb8;

/// 2D point
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Vertex { x, y }
    }
    /// y snapped to the integer scanline grid
    pub fn scan_y(&self) -> i64 {
        self.y.round() as i64
    }
}

/// Shared pool of named points with a color per point
///
/// Polygons reference points by index, so dragging one pool vertex moves
/// every polygon corner attached to it.
#[derive(Debug, Default, Clone)]
pub struct VertexPool {
    positions: Vec<Vertex>,
    colors: Vec<Rgb8>,
}

impl VertexPool {
    pub fn new() -> Self {
        Self::default()
    }
    /// Add a point, returning its pool index
    pub fn push(&mut self, x: f64, y: f64, color: Rgb8) -> usize {
        self.positions.push(Vertex::new(x, y));
        self.colors.push(color);
        self.positions.len() - 1
    }
    pub fn len(&self) -> usize {
        self.positions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
    pub fn position(&self, i: usize) -> Vertex {
        self.positions[i]
    }
    pub fn color(&self, i: usize) -> Rgb8 {
        self.colors[i]
    }
    pub fn positions(&self) -> &[Vertex] {
        &self.positions
    }
    /// Move the point `i` to (`x`,`y`)
    pub fn move_to(&mut self, i: usize, x: f64, y: f64) {
        self.positions[i] = Vertex::new(x, y);
    }
}

/// Ordered vertex indices forming an implicitly closed polygon
///
/// The last vertex connects back to the first; the fill color is the color
/// of the first referenced pool vertex.
#[derive(Debug, Default, Clone)]
pub struct Polygon {
    indices: Vec<usize>,
}

impl Polygon {
    pub fn new(indices: Vec<usize>) -> Self {
        Polygon { indices }
    }
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
    pub fn len(&self) -> usize {
        self.indices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
    /// Does this polygon have a corner at pool vertex `i`?
    pub fn contains_vertex(&self, i: usize) -> bool {
        self.indices.iter().any(|&v| v == i)
    }
    /// Fill color, taken from the first referenced vertex
    pub fn fill_color(&self, pool: &VertexPool) -> Rgb8 {
        match self.indices.first() {
            Some(&i) => pool.color(i),
            None => Rgb8::black(),
        }
    }
    /// Snapshot the corner positions out of the pool
    ///
    /// The rasterizer works on this immutable copy, so pool edits made
    /// while spans are being consumed cannot shear a fill.
    pub fn vertices(&self, pool: &VertexPool) -> Vec<Vertex> {
        self.indices.iter().map(|&i| pool.position(i)).collect()
    }
}
