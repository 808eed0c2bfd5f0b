//! Compact set of K-map cells.
//!
//! All 16 cells of the map fit in a single `u16`: cell `(row, col)` is stored
//! at bit `row * 4 + col`. Used for group footprints and coverage tracking.

use std::fmt;

use crate::types::SIZE;

/// A set of `(row, col)` cells of a 4×4 map.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct CellSet(u16);

impl CellSet {
    /// The empty set.
    pub const EMPTY: CellSet = CellSet(0);
    /// The set of all 16 cells.
    pub const FULL: CellSet = CellSet(u16::MAX);

    /// Creates a set from its raw bit representation.
    pub const fn from_bits(bits: u16) -> Self {
        CellSet(bits)
    }

    /// Returns the raw bit representation.
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    fn mask(row: usize, col: usize) -> u16 {
        assert!(row < SIZE && col < SIZE, "Cell ({}, {}) is outside the map", row, col);
        1u16 << (row * SIZE + col)
    }

    /// Returns the number of cells in the set.
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, row: usize, col: usize) -> bool {
        self.0 & Self::mask(row, col) != 0
    }

    /// Adds a cell. Returns true if it was not already present.
    #[inline]
    pub fn insert(&mut self, row: usize, col: usize) -> bool {
        let mask = Self::mask(row, col);
        let was_clear = self.0 & mask == 0;
        self.0 |= mask;
        was_clear
    }

    /// Removes a cell. Returns true if it was present.
    #[inline]
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        let mask = Self::mask(row, col);
        let was_set = self.0 & mask != 0;
        self.0 &= !mask;
        was_set
    }

    pub fn is_subset(self, other: CellSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn union(self, other: CellSet) -> CellSet {
        CellSet(self.0 | other.0)
    }

    pub fn intersection(self, other: CellSet) -> CellSet {
        CellSet(self.0 & other.0)
    }

    pub fn difference(self, other: CellSet) -> CellSet {
        CellSet(self.0 & !other.0)
    }

    /// Returns an iterator over the cells in row-major order.
    pub fn iter(self) -> CellSetIter {
        CellSetIter { bits: self.0 }
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<(usize, usize)> for CellSet {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut set = CellSet::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<(usize, usize)> for CellSet {
    fn extend<I: IntoIterator<Item = (usize, usize)>>(&mut self, iter: I) {
        for (row, col) in iter {
            self.insert(row, col);
        }
    }
}

impl IntoIterator for CellSet {
    type Item = (usize, usize);
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`CellSet`].
pub struct CellSetIter {
    bits: u16,
}

impl Iterator for CellSetIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1; // Clear lowest set bit
        Some((index / SIZE, index % SIZE))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CellSetIter {}
