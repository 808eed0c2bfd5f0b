//! Plain-text K-map tables.
//!
//! Renders a grid as the familiar K-map layout with Gray-code row and column
//! labels. Optionally each cell is annotated with the (1-based) numbers of the
//! solution groups covering it.
//!
//! ```text
//! AB\CD      00    01    11    10
//! 00       1[1]     0     0  1[1]
//! 01          0     0     0     0
//! 11          0     0     0     0
//! 10       1[1]     0     0  1[1]
//! ```
//!
//! # Examples
//!
//! ```
//! use kmap_rs::grid::Grid;
//! use kmap_rs::solver::minimize;
//! use kmap_rs::types::Mode;
//!
//! let grid: Grid = "1001/0000/0000/1001".parse().unwrap();
//! let solution = minimize(&grid, Mode::Sop);
//! let table = grid.to_table_string(Some(&solution)).unwrap();
//! assert!(table.starts_with("AB\\CD"));
//! assert!(table.contains("1[1]"));
//! ```

use std::fmt::Write;

use crate::grid::Grid;
use crate::solution::Solution;
use crate::types::{GRAY_CODES, SIZE};

/// Configuration options for text tables.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Show minterm indices instead of cell values (default: false)
    pub show_indices: bool,
    /// Append the numbers of the covering groups to each cell (default: true)
    pub mark_groups: bool,
    /// Width of each cell column (default: 6)
    pub cell_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            show_indices: false,
            mark_groups: true,
            cell_width: 6,
        }
    }
}

const CORNER: &str = "AB\\CD";
const LABEL_WIDTH: usize = 7;

fn axis_label(index: usize) -> String {
    format!("{:02b}", GRAY_CODES[index])
}

impl Grid {
    /// Renders the grid as a text table using the default configuration.
    pub fn to_table_string(&self, solution: Option<&Solution>) -> Result<String, std::fmt::Error> {
        self.to_table_string_with_config(solution, &TableConfig::default())
    }

    /// Renders the grid as a text table.
    ///
    /// Group marks are only added when `solution` is given and
    /// `config.mark_groups` is set.
    pub fn to_table_string_with_config(
        &self,
        solution: Option<&Solution>,
        config: &TableConfig,
    ) -> Result<String, std::fmt::Error> {
        let width = config.cell_width;
        let mut out = String::new();

        write!(out, "{:<w$}", CORNER, w = LABEL_WIDTH)?;
        for c in 0..SIZE {
            write!(out, "{:>w$}", axis_label(c), w = width)?;
        }
        writeln!(out)?;

        for r in 0..SIZE {
            write!(out, "{:<w$}", axis_label(r), w = LABEL_WIDTH)?;
            for c in 0..SIZE {
                let mut text = if config.show_indices {
                    Grid::minterm(r, c).to_string()
                } else {
                    self.get(r, c).to_string()
                };
                if let (true, Some(solution)) = (config.mark_groups, solution) {
                    let covering = solution.groups_covering(r, c);
                    if !covering.is_empty() {
                        let ids: Vec<String> = covering.iter().map(|i| (i + 1).to_string()).collect();
                        write!(text, "[{}]", ids.join(","))?;
                    }
                }
                write!(out, "{:>w$}", text, w = width)?;
            }
            writeln!(out)?;
        }

        Ok(out)
    }
}
