//! Toroidal rectangles on the 4×4 map.
//!
//! A [`Group`] is identified by its anchor `(row, col)` and its shape
//! `(height, width)`. The map wraps around on both axes, so a group anchored at
//! row 3 with height 2 covers rows 3 and 0.
//!
//! Only power-of-two sides are valid (`1`, `2` or `4`), and a side spanning the
//! whole axis has a single anchor position (`0`).
//!
//! ```
//! use kmap_rs::group::Group;
//!
//! // The four corners of the map form a single 2×2 group.
//! let corners = Group::new(3, 3, 2, 2);
//! assert!(corners.is_covered(0, 0));
//! assert!(corners.is_covered(3, 0));
//! assert!(!corners.is_covered(1, 1));
//! ```

use std::fmt;

use crate::bitset::CellSet;
use crate::types::SIZE;

/// All group shapes `(height, width)`, in enumeration order.
///
/// Larger groups come first; the order is relied upon for tie-breaking.
pub const SHAPES: [(usize, usize); 9] = [
    (4, 4),
    (2, 4),
    (4, 2),
    (1, 4),
    (4, 1),
    (2, 2),
    (1, 2),
    (2, 1),
    (1, 1),
];

fn is_valid_side(side: usize) -> bool {
    matches!(side, 1 | 2 | 4)
}

/// Number of anchor positions for a side of the given length.
pub fn anchor_count(side: usize) -> usize {
    if side == SIZE {
        1
    } else {
        SIZE
    }
}

/// An axis-aligned rectangle on the toroidal map.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Group {
    row: usize,
    col: usize,
    height: usize,
    width: usize,
}

impl Group {
    /// Creates a new group.
    ///
    /// # Panics
    ///
    /// Panics if a side is not 1, 2 or 4, or if the anchor is outside the
    /// valid range for that side.
    pub fn new(row: usize, col: usize, height: usize, width: usize) -> Self {
        assert!(
            is_valid_side(height) && is_valid_side(width),
            "Group sides must be 1, 2 or 4, got {}x{}",
            height,
            width
        );
        assert!(
            row < anchor_count(height) && col < anchor_count(width),
            "Anchor ({}, {}) is invalid for a {}x{} group",
            row,
            col,
            height,
            width
        );
        Self { row, col, height, width }
    }

    /// The group spanning the whole map.
    pub fn full() -> Self {
        Self::new(0, 0, SIZE, SIZE)
    }

    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells in the group.
    pub fn size(&self) -> usize {
        self.height * self.width
    }

    pub fn is_full(&self) -> bool {
        self.height == SIZE && self.width == SIZE
    }

    /// Returns true if `(row, col)` lies in the group's footprint.
    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        let dr = (row + SIZE - self.row) % SIZE;
        let dc = (col + SIZE - self.col) % SIZE;
        dr < self.height && dc < self.width
    }

    /// Returns true if every cell of `self` is also covered by `other`.
    pub fn is_subset_of(&self, other: &Group) -> bool {
        self.cells().all(|(r, c)| other.is_covered(r, c))
    }

    /// Rows spanned by the group, starting at the anchor and wrapping around.
    pub fn rows(&self) -> impl Iterator<Item = usize> {
        let start = self.row;
        (0..self.height).map(move |i| (start + i) % SIZE)
    }

    /// Columns spanned by the group, starting at the anchor and wrapping around.
    pub fn cols(&self) -> impl Iterator<Item = usize> {
        let start = self.col;
        (0..self.width).map(move |j| (start + j) % SIZE)
    }

    /// Returns an iterator over the footprint, row by row from the anchor.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = *self;
        self.rows().flat_map(move |r| cols.cols().map(move |c| (r, c)))
    }

    pub fn footprint(&self) -> CellSet {
        self.cells().collect()
    }

    /// Splits the group into the non-wrapping rectangles it occupies on screen.
    ///
    /// Each rectangle is `(row, col, height, width)`. A group that wraps on one
    /// axis yields two rectangles, one that wraps on both axes yields four.
    pub fn segments(&self) -> Vec<(usize, usize, usize, usize)> {
        let split = |start: usize, len: usize| -> Vec<(usize, usize)> {
            if start + len <= SIZE {
                vec![(start, len)]
            } else {
                vec![(start, SIZE - start), (0, len - (SIZE - start))]
            }
        };

        let mut result = Vec::new();
        for (r, h) in split(self.row, self.height) {
            for (c, w) in split(self.col, self.width) {
                result.push((r, c, h, w));
            }
        }
        result
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@({},{})", self.height, self.width, self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_shapes_are_valid() {
        for (h, w) in SHAPES {
            let g = Group::new(0, 0, h, w);
            assert_eq!(g.size(), h * w);
            assert_eq!(g.cells().count(), h * w);
        }
    }

    #[test]
    #[should_panic(expected = "Group sides must be 1, 2 or 4")]
    fn test_invalid_side() {
        Group::new(0, 0, 3, 1);
    }

    #[test]
    #[should_panic(expected = "is invalid for a 4x1 group")]
    fn test_invalid_anchor_for_full_axis() {
        Group::new(1, 0, 4, 1);
    }

    #[test]
    fn test_is_covered_wraps() {
        let g = Group::new(3, 0, 2, 4);
        for c in 0..4 {
            assert!(g.is_covered(3, c));
            assert!(g.is_covered(0, c));
            assert!(!g.is_covered(1, c));
            assert!(!g.is_covered(2, c));
        }

        let g = Group::new(1, 3, 1, 2);
        assert!(g.is_covered(1, 3));
        assert!(g.is_covered(1, 0));
        assert!(!g.is_covered(1, 1));
        assert!(!g.is_covered(0, 3));
    }

    #[test]
    fn test_cells_order() {
        let g = Group::new(3, 3, 2, 2);
        let cells: Vec<_> = g.cells().collect();
        assert_eq!(cells, vec![(3, 3), (3, 0), (0, 3), (0, 0)]);
    }

    #[test]
    fn test_subset() {
        let small = Group::new(0, 3, 1, 2);
        let big = Group::new(0, 3, 2, 2);
        let full = Group::full();
        assert!(small.is_subset_of(&big));
        assert!(!big.is_subset_of(&small));
        assert!(big.is_subset_of(&full));
        assert!(small.is_subset_of(&small));

        let row = Group::new(2, 0, 1, 4);
        let col = Group::new(0, 1, 4, 1);
        assert!(!row.is_subset_of(&col));
        assert!(!col.is_subset_of(&row));
    }

    #[test]
    fn test_footprint_matches_is_covered() {
        let g = Group::new(0, 3, 4, 2);
        let footprint = g.footprint();
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(footprint.contains(r, c), g.is_covered(r, c));
            }
        }
    }

    #[test]
    fn test_segments() {
        assert_eq!(Group::new(1, 1, 2, 2).segments(), vec![(1, 1, 2, 2)]);
        assert_eq!(Group::new(0, 3, 1, 2).segments(), vec![(0, 3, 1, 1), (0, 0, 1, 1)]);
        assert_eq!(
            Group::new(3, 3, 2, 2).segments(),
            vec![(3, 3, 1, 1), (3, 0, 1, 1), (0, 3, 1, 1), (0, 0, 1, 1)]
        );
        assert_eq!(Group::full().segments(), vec![(0, 0, 4, 4)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Group::new(3, 0, 2, 4).to_string(), "2x4@(3,0)");
    }
}
