//! Result of a minimization call.
//!
//! A [`Solution`] is what the rendering and export layers consume: the ordered
//! groups with their display colors and terms, and the final formula text.

use std::fmt;

use crate::grid::Grid;
use crate::group::Group;
use crate::palette::{group_color, Color};
use crate::term::{generate_formula, Term};
use crate::types::{Cell, Mode};

/// A group selected into a solution, with its display color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SolutionGroup {
    group: Group,
    color: Color,
}

impl SolutionGroup {
    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Term of this group in the given mode.
    pub fn term(&self, mode: Mode) -> Term {
        Term::from_group(&self.group, mode)
    }
}

/// Ordered cover of a grid's target cells.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Solution {
    mode: Mode,
    groups: Vec<SolutionGroup>,
}

impl Solution {
    /// Wraps the selected groups, assigning palette colors in order.
    pub fn new(mode: Mode, groups: Vec<Group>) -> Self {
        let groups = groups
            .into_iter()
            .enumerate()
            .map(|(i, group)| SolutionGroup {
                group,
                color: group_color(i),
            })
            .collect();
        Self { mode, groups }
    }

    /// An empty solution: the constant formula of the given mode.
    pub fn empty(mode: Mode) -> Self {
        Self { mode, groups: Vec::new() }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn groups(&self) -> &[SolutionGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The bare groups, without colors.
    pub fn to_groups(&self) -> Vec<Group> {
        self.groups.iter().map(|sg| sg.group).collect()
    }

    pub fn terms(&self) -> Vec<Term> {
        self.groups.iter().map(|sg| sg.term(self.mode)).collect()
    }

    /// The formula text, as exported to the clipboard.
    pub fn formula(&self) -> String {
        generate_formula(&self.to_groups(), self.mode)
    }

    /// Indices of the groups covering `(row, col)`.
    pub fn groups_covering(&self, row: usize, col: usize) -> Vec<usize> {
        self.groups
            .iter()
            .enumerate()
            .filter(|(_, sg)| sg.group.is_covered(row, col))
            .map(|(i, _)| i)
            .collect()
    }

    /// Evaluates the synthesized formula for minterm `m`.
    pub fn eval(&self, m: u8) -> bool {
        let terms = self.terms();
        match self.mode {
            Mode::Sop => terms.iter().any(|t| t.eval(m)),
            Mode::Pos => terms.iter().all(|t| t.eval(m)),
        }
    }

    /// Returns true if the formula agrees with every cell of `grid` that is not
    /// a don't-care.
    pub fn covers_grid(&self, grid: &Grid) -> bool {
        grid.cells().all(|(r, c, value)| {
            let m = Grid::minterm(r, c);
            match value {
                Cell::On => self.eval(m),
                Cell::Off => !self.eval(m),
                Cell::DontCare => true,
            }
        })
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formula())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::palette::PALETTE;

    #[test]
    fn test_colors_cycle() {
        let groups: Vec<Group> = (0..4)
            .map(|c| Group::new(0, c, 1, 1))
            .chain((0..4).map(|c| Group::new(2, c, 1, 1)))
            .collect();
        let solution = Solution::new(Mode::Sop, groups);
        assert_eq!(solution.len(), 8);
        assert_eq!(solution.groups()[0].color(), PALETTE[0]);
        assert_eq!(solution.groups()[5].color(), PALETTE[5]);
        assert_eq!(solution.groups()[6].color(), PALETTE[0]);
        assert_eq!(solution.groups()[7].color(), PALETTE[1]);
    }

    #[test]
    fn test_empty_solution() {
        let sop = Solution::empty(Mode::Sop);
        let pos = Solution::empty(Mode::Pos);
        assert_eq!(sop.formula(), "F = 0");
        assert_eq!(pos.formula(), "F = 1");
        assert!(!sop.eval(3));
        assert!(pos.eval(3));
        assert!(sop.covers_grid(&Grid::filled(Cell::Off)));
        assert!(pos.covers_grid(&Grid::filled(Cell::On)));
        assert!(!sop.covers_grid(&Grid::filled(Cell::On)));
    }

    #[test]
    fn test_terms_and_display() {
        let solution = Solution::new(Mode::Sop, vec![Group::new(3, 3, 2, 2), Group::new(1, 1, 1, 1)]);
        let terms: Vec<String> = solution.terms().iter().map(|t| t.to_string()).collect();
        assert_eq!(terms, vec!["B'D'", "A'BC'D"]);
        assert_eq!(solution.to_string(), "F = B'D' + A'BC'D");
    }

    #[test]
    fn test_groups_covering() {
        let solution = Solution::new(Mode::Sop, vec![Group::new(0, 0, 1, 4), Group::new(0, 0, 4, 1)]);
        assert_eq!(solution.groups_covering(0, 0), vec![0, 1]);
        assert_eq!(solution.groups_covering(0, 2), vec![0]);
        assert_eq!(solution.groups_covering(3, 0), vec![1]);
        assert!(solution.groups_covering(2, 2).is_empty());
    }

    #[test]
    fn test_covers_grid_detects_mismatch() {
        let grid: Grid = "1100/0000/0000/0000".parse().unwrap();
        let partial = Solution::new(Mode::Sop, vec![Group::new(0, 0, 1, 1)]);
        let exact = Solution::new(Mode::Sop, vec![Group::new(0, 0, 1, 2)]);
        let overreaching = Solution::new(Mode::Sop, vec![Group::new(0, 0, 2, 2)]);
        assert!(!partial.covers_grid(&grid));
        assert!(exact.covers_grid(&grid));
        assert!(!overreaching.covers_grid(&grid));
    }
}
