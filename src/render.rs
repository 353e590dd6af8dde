//! Renderer

use std::f64::consts::PI;

use crate::base::RenderingBase;
use crate::color::Rgb8;
use crate::polygon::{Polygon, VertexPool};
use crate::raster::rasterize;
use crate::scan::FillSpan;
use crate::Pixel;
use crate::Render;

/// Fill color of a vertex marker disc
const MARKER_FILL: Rgb8 = Rgb8 { r: 255, g: 0, b: 0 };
/// Rim color of a vertex marker disc
const MARKER_RIM: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };

/// Renderer writing spans into a pixel buffer
///
/// Spans become clipped horizontal pixel runs; vertex markers become a
/// filled disc with a dark rim, the editor's draggable handle.
#[derive(Debug)]
pub struct SpanRenderer<'a, T: Pixel> {
    pub base: &'a mut RenderingBase<T>,
}

impl<'a, T: Pixel> SpanRenderer<'a, T> {
    /// Create a new renderer from a rendering base
    pub fn with_base(base: &'a mut RenderingBase<T>) -> Self {
        Self { base }
    }
}

impl<'a, T: Pixel> Render for SpanRenderer<'a, T> {
    fn draw_span(&mut self, span: &FillSpan) {
        self.base.copy_hline(span.x1, span.y, span.x2, &span.color);
    }
    fn draw_vertex_marker(&mut self, x: f64, y: f64, radius: f64) {
        let (cx, cy) = (x.round() as i64, y.round() as i64);
        let ri = radius.round() as i64;
        for dy in -ri..=ri {
            let half = (radius * radius - (dy * dy) as f64).max(0.0).sqrt().round() as i64;
            self.base
                .copy_hline(cx - half, cy + dy, cx + half, &MARKER_FILL);
        }
        // rim traced point by point; 200 steps leaves no gaps below r=30
        let steps = 200;
        for s in 0..steps {
            let alpha = 2.0 * PI * f64::from(s) / f64::from(steps);
            let rx = (x + radius * alpha.cos()).round() as i64;
            let ry = (y + radius * alpha.sin()).round() as i64;
            self.base.set_pixel(rx, ry, &MARKER_RIM);
        }
    }
}

/// Rasterize one polygon out of the pool and hand its spans to a renderer
pub fn render_polygon<R: Render>(pool: &VertexPool, poly: &Polygon, ren: &mut R) {
    let verts = poly.vertices(pool);
    for span in rasterize(&verts, poly.fill_color(pool)) {
        ren.draw_span(&span);
    }
}
