//! The 4×4 truth table of a K-map.
//!
//! A [`Grid`] is a plain value: copying it is how the session takes undo
//! snapshots, and the solver only ever reads it.
//!
//! # Text form
//!
//! Grids parse from 16 cell characters in row-major order. Cells are `0`, `1`,
//! or `X`/`x`/`-` for a don't-care. Whitespace, `/`, `|` and `,` are ignored,
//! so both `"1100/0110/0000/X001"` and a four-line block are accepted.
//!
//! ```
//! use kmap_rs::grid::Grid;
//! use kmap_rs::types::Cell;
//!
//! let grid: Grid = "1100/0110/0000/X001".parse().unwrap();
//! assert_eq!(grid.get(0, 1), Cell::On);
//! assert_eq!(grid.get(3, 0), Cell::DontCare);
//! assert_eq!(grid.count(Cell::On), 5);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::bitset::CellSet;
use crate::types::{gray, Cell, GRAY_CODES, SIZE};

/// Errors produced when building a grid from text or minterm lists.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GridError {
    /// A character that is neither a cell value nor a separator.
    InvalidChar { ch: char, position: usize },
    /// The input did not contain exactly 16 cells.
    WrongCellCount(usize),
    /// A minterm index outside `0..16`.
    MintermOutOfRange(u8),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidChar { ch, position } => {
                write!(f, "invalid cell character {:?} at position {}", ch, position)
            }
            GridError::WrongCellCount(n) => write!(f, "expected 16 cells, found {}", n),
            GridError::MintermOutOfRange(m) => write!(f, "minterm {} is outside 0..16", m),
        }
    }
}

impl std::error::Error for GridError {}

/// Returns the grid index whose Gray code is `code`.
fn gray_position(code: u8) -> usize {
    GRAY_CODES
        .iter()
        .position(|&g| g == code)
        .unwrap_or_else(|| panic!("{} is not a 2-bit Gray code", code))
}

/// A 4×4 table of cell values, indexed by `(row, col)`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Grid {
    cells: [[Cell; SIZE]; SIZE],
}

impl Grid {
    /// Creates a grid with every cell `Off`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid with every cell set to `value`.
    pub fn filled(value: Cell) -> Self {
        Self {
            cells: [[value; SIZE]; SIZE],
        }
    }

    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..4`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < SIZE && col < SIZE, "Cell ({}, {}) is outside the map", row, col);
        self.cells[row][col]
    }

    /// Sets the value at `(row, col)`, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..4`.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Cell {
        assert!(row < SIZE && col < SIZE, "Cell ({}, {}) is outside the map", row, col);
        std::mem::replace(&mut self.cells[row][col], value)
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: Cell) {
        self.cells = [[value; SIZE]; SIZE];
    }

    /// Swaps `On` and `Off` in every cell. Don't-cares are kept.
    pub fn invert(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = cell.inverted();
            }
        }
    }

    /// Returns an iterator over `(row, col, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &v)| (r, c, v)))
    }

    /// Returns the number of cells holding `value`.
    pub fn count(&self, value: Cell) -> usize {
        self.cells().filter(|&(_, _, v)| v == value).count()
    }

    /// Returns the set of cells holding `value`.
    pub fn cells_with(&self, value: Cell) -> CellSet {
        self.cells()
            .filter(|&(_, _, v)| v == value)
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    /// Minterm index `ABCD` of the cell at `(row, col)`.
    pub fn minterm(row: usize, col: usize) -> u8 {
        gray(row) * 4 + gray(col)
    }

    /// Grid position of minterm `m`.
    ///
    /// # Panics
    ///
    /// Panics if `m >= 16`.
    pub fn position_of(m: u8) -> (usize, usize) {
        assert!(m < 16, "Minterm {} is outside 0..16", m);
        (gray_position(m >> 2), gray_position(m & 0b11))
    }

    /// Returns the sorted minterm indices of the cells holding `value`.
    pub fn minterms(&self, value: Cell) -> Vec<u8> {
        let mut result: Vec<u8> = self
            .cells()
            .filter(|&(_, _, v)| v == value)
            .map(|(r, c, _)| Self::minterm(r, c))
            .collect();
        result.sort_unstable();
        result
    }

    /// Value of the function for minterm `m`.
    pub fn value_of(&self, m: u8) -> Cell {
        let (row, col) = Self::position_of(m);
        self.cells[row][col]
    }

    /// Builds a grid from the minterms where the function is 1 and the minterms
    /// that are don't-cares. Every other cell is `Off`. A minterm listed in both
    /// is a don't-care.
    pub fn from_minterms(ones: &[u8], dont_cares: &[u8]) -> Result<Self, GridError> {
        let mut grid = Grid::new();
        for (list, value) in [(ones, Cell::On), (dont_cares, Cell::DontCare)] {
            for &m in list {
                if m >= 16 {
                    return Err(GridError::MintermOutOfRange(m));
                }
                let (row, col) = Self::position_of(m);
                grid.cells[row][col] = value;
            }
        }
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::with_capacity(SIZE * SIZE);
        for (position, ch) in s.chars().enumerate() {
            if ch.is_whitespace() || matches!(ch, '/' | '|' | ',') {
                continue;
            }
            let value = Cell::from_char(ch).ok_or(GridError::InvalidChar { ch, position })?;
            values.push(value);
        }
        if values.len() != SIZE * SIZE {
            return Err(GridError::WrongCellCount(values.len()));
        }

        let mut grid = Grid::new();
        for (i, value) in values.into_iter().enumerate() {
            grid.cells[i / SIZE][i % SIZE] = value;
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
