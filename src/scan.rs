//! Fill spans and per-scanline intersection lists

use crate::color::Rgb8;

/// A single filled horizontal segment, `x1..=x2` at row `y`
///
/// The color is carried through from the rasterize call untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FillSpan {
    pub y: i64,
    pub x1: i64,
    pub x2: i64,
    pub color: Rgb8,
}

impl FillSpan {
    pub fn new(y: i64, x1: i64, x2: i64, color: Rgb8) -> Self {
        FillSpan { y, x1, x2, color }
    }
    /// Width in pixels, both ends inclusive
    pub fn len(&self) -> i64 {
        self.x2 - self.x1 + 1
    }
    pub fn is_empty(&self) -> bool {
        self.x2 < self.x1
    }
}

/// Active intersection lists, one per scanline of a polygon's extent
///
/// The sweep pushes each edge's rounded x-crossing into the list of every
/// scanline the edge spans. Lists are unordered until
/// [take_sorted](ActiveLists::take_sorted).
#[derive(Debug, Default)]
pub struct ActiveLists {
    min_y: i64,
    lists: Vec<Vec<i64>>,
}

impl ActiveLists {
    pub fn new(min_y: i64, scan_count: usize) -> Self {
        ActiveLists {
            min_y,
            lists: vec![Vec::new(); scan_count],
        }
    }
    pub fn min_y(&self) -> i64 {
        self.min_y
    }
    pub fn scan_count(&self) -> usize {
        self.lists.len()
    }
    /// Record a boundary crossing at `x` on scanline `min_y + i`
    pub fn push(&mut self, i: usize, x: i64) {
        self.lists[i].push(x);
    }
    /// Sort each list ascending and hand the lot over for pairing
    pub fn take_sorted(mut self) -> Vec<Vec<i64>> {
        for list in &mut self.lists {
            list.sort_unstable();
        }
        self.lists
    }
}
