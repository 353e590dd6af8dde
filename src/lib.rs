
/// How does this work
///   scene = Scene( VertexPool, Polygons )
///   ren   = SpanRenderer( RenderingBase( Pixfmt ) )
///  Rasterize one polygon
///    rasterize(vertices, color)
///      EdgeTable::from_vertices   -- bucket non-horizontal edges by
///                                    their lower endpoint
///      sweep()                    -- walk each edge down its scanlines,
///                                    push round(x) into the active list
///      emit_spans()               -- sort, pair even-odd, FillSpan out
///  Render to Image
///    scene.draw(ren)
///      render_polygon(pool, polygon, ren)
///        ren.draw_span            -- clipped hline per span
///      ren.draw_vertex_marker     -- editor overlay
///  Output
///    ppm::write_ppm(ren_base.as_bytes(), w, h, file)

pub mod buffer;
pub mod color;
pub mod pixfmt;
pub mod base;
pub mod polygon;
pub mod edge;
pub mod scan;
pub mod raster;
pub mod render;
pub mod scene;
pub mod ppm;

pub use crate::buffer::*;
pub use crate::color::*;
pub use crate::pixfmt::*;
pub use crate::base::*;
pub use crate::polygon::*;
pub use crate::edge::*;
pub use crate::scan::*;
pub use crate::raster::*;
pub use crate::render::*;
pub use crate::scene::*;
pub use crate::ppm::*;

/// Access Color properties from an opaque fill attribute
pub trait Color {
    /// Get red value [0,1]
    fn red(&self) -> f64;
    /// Get green value [0,1]
    fn green(&self) -> f64;
    /// Get blue value [0,1]
    fn blue(&self) -> f64;
    /// Get red value [0,255]
    fn red8(&self) -> u8;
    /// Get green value [0,255]
    fn green8(&self) -> u8;
    /// Get blue value [0,255]
    fn blue8(&self) -> u8;
}

/// Writable pixel region
pub trait Pixel {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Set the pixel at (`x`,`y`) to the [Color] `c`
    fn set<C: Color>(&mut self, id: (usize, usize), c: &C);
    /// Set `n` pixels starting at (`x`,`y`) along the row to `c`
    fn copy_hline<C: Color>(&mut self, x: usize, y: usize, n: usize, c: &C);
    /// Fill the entire region with `c`
    fn fill<C: Color>(&mut self, c: &C);
    /// Raw component data, row-major
    fn as_bytes(&self) -> &[u8];
}

/// Renderer collaborator consuming rasterized output
///
/// The rasterizer itself only produces [FillSpan] values; everything
/// that touches pixels goes through this trait.
pub trait Render {
    /// Draw a single filled horizontal segment
    fn draw_span(&mut self, span: &FillSpan);
    /// Mark a draggable control point, used by the editor overlay
    fn draw_vertex_marker(&mut self, x: f64, y: f64, radius: f64);
}
