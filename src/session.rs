//! Interactive editing state around the solver.
//!
//! A [`Session`] owns the grid, the formula mode, the undo history and the
//! most recent solution. Every mutating call snapshots the grid first and
//! re-solves afterwards, so [`Session::solution`] always matches the grid.
//!
//! ```
//! use kmap_rs::session::Session;
//! use kmap_rs::types::Cell;
//!
//! let mut session = Session::new();
//! session.toggle(0, 0);
//! session.toggle(0, 1);
//! assert_eq!(session.formula(), "F = A'B'C'");
//!
//! assert!(session.undo());
//! assert_eq!(session.grid().get(0, 1), Cell::Off);
//! assert_eq!(session.formula(), "F = A'B'C'D'");
//! ```

use log::debug;

use crate::grid::Grid;
use crate::history::{History, DEFAULT_CAPACITY};
use crate::solution::Solution;
use crate::solver::minimize;
use crate::types::{Cell, Mode};

/// Configuration of a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum number of undo snapshots (default: 50)
    pub history_capacity: usize,
    /// Initial formula mode (default: SOP)
    pub mode: Mode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            mode: Mode::Sop,
        }
    }
}

/// Application state: grid, mode, history and the cached solution.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    mode: Mode,
    history: History,
    solution: Solution,
    paint_start: Option<(usize, usize)>,
}

impl Session {
    /// Creates a session with an all-`Off` grid and the default configuration.
    pub fn new() -> Self {
        Self::with_config(&SessionConfig::default())
    }

    pub fn with_config(config: &SessionConfig) -> Self {
        Self::with_grid(Grid::new(), config)
    }

    /// Creates a session starting from `grid`.
    pub fn with_grid(grid: Grid, config: &SessionConfig) -> Self {
        Self {
            grid,
            mode: config.mode,
            history: History::new(config.history_capacity),
            solution: minimize(&grid, config.mode),
            paint_start: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// The formula text for export.
    pub fn formula(&self) -> String {
        self.solution.formula()
    }

    fn save(&mut self) {
        if self.history.push(self.grid).is_some() {
            debug!("history full, evicted oldest snapshot");
        }
    }

    fn resolve(&mut self) {
        self.solution = minimize(&self.grid, self.mode);
    }

    /// Sets a single cell.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        debug!("set({}, {}, {:?})", row, col, value);
        self.save();
        self.grid.set(row, col, value);
        self.resolve();
    }

    /// Plain click: `On` becomes `Off`, anything else becomes `On`.
    /// Returns the new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Cell {
        let value = match self.grid.get(row, col) {
            Cell::On => Cell::Off,
            Cell::Off | Cell::DontCare => Cell::On,
        };
        self.set(row, col, value);
        value
    }

    /// Don't-care click: a don't-care becomes `Off`, anything else becomes a
    /// don't-care. Returns the new value.
    pub fn toggle_dont_care(&mut self, row: usize, col: usize) -> Cell {
        let value = match self.grid.get(row, col) {
            Cell::DontCare => Cell::Off,
            Cell::On | Cell::Off => Cell::DontCare,
        };
        self.set(row, col, value);
        value
    }

    /// Starts a paint stroke at `(row, col)`. The whole stroke is one undo step.
    pub fn begin_paint(&mut self, row: usize, col: usize) {
        debug!("begin_paint({}, {})", row, col);
        assert!(row < 4 && col < 4, "Cell ({}, {}) is outside the map", row, col);
        self.save();
        self.paint_start = Some((row, col));
    }

    /// Paints `(row, col)` and the stroke's start cell with `value`.
    ///
    /// Returns true if the grid changed. Does nothing outside a stroke.
    pub fn paint(&mut self, row: usize, col: usize, value: Cell) -> bool {
        let Some((start_row, start_col)) = self.paint_start else {
            return false;
        };
        let mut changed = self.grid.set(row, col, value) != value;
        changed |= self.grid.set(start_row, start_col, value) != value;
        if changed {
            self.resolve();
        }
        changed
    }

    /// Ends the current paint stroke.
    pub fn end_paint(&mut self) {
        self.paint_start = None;
    }

    pub fn is_painting(&self) -> bool {
        self.paint_start.is_some()
    }

    /// Fills the grid with the value that is not the current target.
    pub fn clear(&mut self) {
        debug!("clear(mode = {})", self.mode);
        self.save();
        self.grid.fill(self.mode.target().inverted());
        self.resolve();
    }

    /// Flips between SOP and POS, inverting the grid so the same cells stay
    /// highlighted as targets.
    pub fn switch_mode(&mut self) {
        self.save();
        self.mode = self.mode.toggled();
        self.grid.invert();
        debug!("switch_mode -> {}", self.mode);
        self.resolve();
    }

    /// Restores the most recent snapshot. Returns false if there is none.
    ///
    /// Only the grid is restored; the mode is left as it is.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(grid) => {
                debug!("undo: {} snapshots left", self.history.len());
                self.grid = grid;
                self.paint_start = None;
                self.resolve();
                true
            }
            None => {
                debug!("undo: history is empty");
                false
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
