//! Scanline polygon fill
//!
//! Sweeps the [EdgeTable] top to bottom, propagating each edge's
//! x-intersection one scanline at a time, then pairs the sorted crossings
//! under the even-odd rule into [FillSpan] output.

use std::error;
use std::fmt;

use itertools::Itertools;

use crate::color::Rgb8;
use crate::edge::EdgeTable;
use crate::polygon::Vertex;
use crate::scan::{ActiveLists, FillSpan};

/// Rasterization failure, strict mode only
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// A scanline crossed the boundary an odd number of times
    ///
    /// A correctly closed simple polygon always crosses a scanline an even
    /// number of times; an odd count means the input self-intersects or
    /// rounding merged two crossings at a shared vertex.
    OddIntersections { y: i64, count: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RasterError::OddIntersections { y, count } => write!(
                f,
                "odd number of boundary crossings ({}) on scanline {}",
                count, y
            ),
        }
    }
}

impl error::Error for RasterError {}

/// Fill a simple polygon, emitting one span per pair of boundary crossings
///
/// `verts` is an ordered, implicitly closed loop of 3 or more vertices;
/// `color` is passed through unchanged to every span. Degenerate input
/// (fewer than 3 vertices, or all collinear) yields an empty vec rather
/// than an error, and a scanline with an odd crossing count silently drops
/// its trailing unpaired crossing. Self-intersecting input is filled
/// even-odd with no attempt at detection.
///
/// Pure function: identical input produces identical output, and nothing
/// is retained between calls.
///
///     use scanfill::{rasterize, Rgb8, Vertex};
///
///     let square = [
///         Vertex::new(0.0, 0.0),
///         Vertex::new(4.0, 0.0),
///         Vertex::new(4.0, 4.0),
///         Vertex::new(0.0, 4.0),
///     ];
///     let spans = rasterize(&square, Rgb8::black());
///     assert_eq!(spans.len(), 4);
///     assert_eq!((spans[0].y, spans[0].x1, spans[0].x2), (0, 0, 4));
///
pub fn rasterize(verts: &[Vertex], color: Rgb8) -> Vec<FillSpan> {
    let active = sweep(verts);
    let min_y = active.min_y();
    pair_spans(active.take_sorted(), min_y, color)
}

/// [rasterize], but reject any scanline with an odd crossing count
///
/// Useful when the caller wants truncation surfaced instead of swallowed;
/// the lenient mode remains the compatible default.
pub fn rasterize_strict(verts: &[Vertex], color: Rgb8) -> Result<Vec<FillSpan>, RasterError> {
    let active = sweep(verts);
    let min_y = active.min_y();
    let lists = active.take_sorted();
    check_even(&lists, min_y)?;
    Ok(pair_spans(lists, min_y, color))
}

/// Walk every bucketed edge down its scanlines
///
/// Each edge starts at its lower endpoint and advances `x += dxdy` once per
/// scanline until just before its upper endpoint, pushing the rounded x into
/// that scanline's active list. O(edge height) per edge; the intersection
/// formula is never re-evaluated.
fn sweep(verts: &[Vertex]) -> ActiveLists {
    let et = EdgeTable::from_vertices(verts);
    let mut active = ActiveLists::new(et.min_y(), et.scan_count());
    for i in 0..et.scan_count() {
        for edge in et.bucket(i) {
            let mut x = edge.x;
            let stop = (edge.y_end - et.min_y()) as usize;
            for k in i..stop {
                active.push(k, x.round() as i64);
                x += edge.dxdy;
            }
        }
    }
    active
}

fn check_even(lists: &[Vec<i64>], min_y: i64) -> Result<(), RasterError> {
    for (i, list) in lists.iter().enumerate() {
        if list.len() % 2 != 0 {
            return Err(RasterError::OddIntersections {
                y: min_y + i as i64,
                count: list.len(),
            });
        }
    }
    Ok(())
}

/// Pair sorted crossings even-odd into spans
///
/// A trailing unpaired crossing is dropped, and a pair that rounds to zero
/// width emits nothing, so collinear loops fill nothing at all.
fn pair_spans(lists: Vec<Vec<i64>>, min_y: i64, color: Rgb8) -> Vec<FillSpan> {
    let mut spans = Vec::new();
    for (i, list) in lists.into_iter().enumerate() {
        let y = min_y + i as i64;
        for (x1, x2) in list.into_iter().tuples() {
            if x2 > x1 {
                spans.push(FillSpan::new(y, x1, x2, color));
            }
        }
    }
    spans
}
