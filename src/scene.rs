//! Editor scene state
//!
//! The interactive editor keeps all of its state here, passed explicitly
//! into every call; nothing is ambient.

use crate::polygon::{Polygon, VertexPool};
use crate::render::render_polygon;
use crate::Render;

/// Default radius of the draggable vertex handles
pub const DEFAULT_MARKER_RADIUS: f64 = 10.0;

/// A vertex pool, the polygons over it, and the drag selection
#[derive(Debug, Default, Clone)]
pub struct Scene {
    pub pool: VertexPool,
    polygons: Vec<Polygon>,
    selected: Option<usize>,
    marker_radius: f64,
}

impl Scene {
    pub fn new(pool: VertexPool, polygons: Vec<Polygon>) -> Self {
        Scene {
            pool,
            polygons,
            selected: None,
            marker_radius: DEFAULT_MARKER_RADIUS,
        }
    }
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
    pub fn marker_radius(&self) -> f64 {
        self.marker_radius
    }

    /// First pool vertex whose marker box contains (`x`,`y`)
    ///
    /// A square box test, not a circle test; a click just off the rim
    /// corner still picks up the handle.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.pool.positions().iter().position(|v| {
            (x - v.x).abs() < self.marker_radius && (y - v.y).abs() < self.marker_radius
        })
    }
    /// Mouse down: select the handle under the cursor, if any
    pub fn press(&mut self, x: f64, y: f64) -> Option<usize> {
        self.selected = self.hit_test(x, y);
        self.selected
    }
    /// Mouse up: drop the selection
    pub fn release(&mut self) {
        self.selected = None;
    }
    /// Mouse move: drag the selected vertex, returns false when nothing
    /// is selected
    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        match self.selected {
            Some(i) => {
                self.pool.move_to(i, x, y);
                true
            }
            None => false,
        }
    }

    /// Repaint every polygon, then the vertex markers
    ///
    /// Polygons touching the selected vertex are drawn after the rest so
    /// the shape being dragged stays on top.
    pub fn draw<R: Render>(&self, ren: &mut R) {
        match self.selected {
            Some(sel) => {
                for poly in self.polygons.iter().filter(|p| !p.contains_vertex(sel)) {
                    render_polygon(&self.pool, poly, ren);
                }
                for poly in self.polygons.iter().filter(|p| p.contains_vertex(sel)) {
                    render_polygon(&self.pool, poly, ren);
                }
            }
            None => {
                for poly in &self.polygons {
                    render_polygon(&self.pool, poly, ren);
                }
            }
        }
        for v in self.pool.positions() {
            ren.draw_vertex_marker(v.x, v.y, self.marker_radius);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb8;

    fn two_point_scene() -> Scene {
        let mut pool = VertexPool::new();
        pool.push(50.0, 50.0, Rgb8::black());
        pool.push(100.0, 100.0, Rgb8::white());
        Scene::new(pool, vec![])
    }

    #[test]
    fn hit_test_uses_marker_box() {
        let scene = two_point_scene();
        assert_eq!(scene.hit_test(55.0, 45.0), Some(0));
        assert_eq!(scene.hit_test(100.0, 109.9), Some(1));
        // exactly on the box edge misses, the test is strict
        assert_eq!(scene.hit_test(60.0, 50.0), None);
        assert_eq!(scene.hit_test(0.0, 0.0), None);
    }

    #[test]
    fn drag_moves_only_the_selection() {
        let mut scene = two_point_scene();
        assert!(!scene.drag_to(10.0, 10.0));
        assert_eq!(scene.press(52.0, 48.0), Some(0));
        assert!(scene.drag_to(10.0, 10.0));
        assert_eq!(scene.pool.position(0).x, 10.0);
        assert_eq!(scene.pool.position(1).x, 100.0);
        scene.release();
        assert_eq!(scene.selected(), None);
        assert!(!scene.drag_to(70.0, 70.0));
    }
}
