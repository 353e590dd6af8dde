//! Edge table construction
//!
//! Every non-horizontal polygon edge is bucketed by the scanline of its
//! lower endpoint; the sweep in [raster](crate::raster) then walks each
//! bucket downwards. This is the classic new-edge-table of scanline fill.

use crate::polygon::Vertex;

/// One polygon edge prepared for the scanline sweep
#[derive(Debug, Copy, Clone)]
pub struct Edge {
    /// x of the lower endpoint, advanced by `dxdy` per scanline
    pub x: f64,
    /// Reciprocal slope dx/dy
    pub dxdy: f64,
    /// Scanline of the upper endpoint, exclusive
    ///
    /// Stopping one short of the upper endpoint keeps an edge pair meeting
    /// at a shared vertex from being counted twice on that scanline.
    pub y_end: i64,
}

/// Per-scanline buckets of edges that begin on that scanline
#[derive(Debug, Default)]
pub struct EdgeTable {
    min_y: i64,
    buckets: Vec<Vec<Edge>>,
}

impl EdgeTable {
    /// Bucket the edges of an implicitly closed vertex loop
    ///
    /// Horizontal edges contribute no scanline crossing and are skipped
    /// entirely. Fewer than 3 vertices produces an empty table.
    pub fn from_vertices(verts: &[Vertex]) -> Self {
        if verts.len() < 3 {
            return Self::default();
        }
        let min_y = verts.iter().map(|v| v.scan_y()).min().unwrap_or(0);
        let max_y = verts.iter().map(|v| v.scan_y()).max().unwrap_or(0);
        let count = (max_y - min_y + 1) as usize;
        let mut buckets = vec![Vec::new(); count];

        for i in 0..verts.len() {
            let p1 = verts[i];
            let p2 = verts[(i + 1) % verts.len()];
            let (y1, y2) = (p1.scan_y(), p2.scan_y());
            if y1 == y2 {
                continue;
            }
            let (lo, hi, y_lo, y_hi) = if y1 < y2 {
                (p1, p2, y1, y2)
            } else {
                (p2, p1, y2, y1)
            };
            let edge = Edge {
                x: lo.x,
                dxdy: (hi.x - lo.x) / (y_hi - y_lo) as f64,
                y_end: y_hi,
            };
            buckets[(y_lo - min_y) as usize].push(edge);
        }
        EdgeTable { min_y, buckets }
    }

    /// Lowest scanline touched by any vertex
    pub fn min_y(&self) -> i64 {
        self.min_y
    }
    /// Number of scanlines in the vertical extent, inclusive of both ends
    pub fn scan_count(&self) -> usize {
        self.buckets.len()
    }
    /// Total number of bucketed (non-horizontal) edges
    pub fn edge_count(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
    /// Edges whose lower endpoint sits on scanline `min_y + i`
    pub fn bucket(&self, i: usize) -> &[Edge] {
        &self.buckets[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Vec<Vertex> {
        vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(10.0, 10.0),
            Vertex::new(0.0, 10.0),
        ]
    }

    #[test]
    fn square_buckets() {
        let et = EdgeTable::from_vertices(&quad());
        assert_eq!(et.min_y(), 0);
        assert_eq!(et.scan_count(), 11);
        // top and bottom are horizontal, only the two sides survive
        assert_eq!(et.edge_count(), 2);
        assert_eq!(et.bucket(0).len(), 2);
        for e in et.bucket(0) {
            assert_eq!(e.dxdy, 0.0);
            assert_eq!(e.y_end, 10);
        }
    }

    #[test]
    fn lower_endpoint_owns_the_bucket() {
        // same edge listed downhill or uphill lands in the same bucket
        let cw = EdgeTable::from_vertices(&[
            Vertex::new(0.0, 4.0),
            Vertex::new(4.0, 0.0),
            Vertex::new(8.0, 4.0),
        ]);
        let ccw = EdgeTable::from_vertices(&[
            Vertex::new(8.0, 4.0),
            Vertex::new(4.0, 0.0),
            Vertex::new(0.0, 4.0),
        ]);
        assert_eq!(cw.edge_count(), 2);
        assert_eq!(ccw.edge_count(), 2);
        assert_eq!(cw.bucket(0).len(), ccw.bucket(0).len());
    }

    #[test]
    fn too_few_vertices_is_empty() {
        let et = EdgeTable::from_vertices(&[Vertex::new(0.0, 0.0), Vertex::new(5.0, 5.0)]);
        assert!(et.is_empty());
        assert_eq!(et.edge_count(), 0);
    }
}
