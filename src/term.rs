//! Synthesis of Boolean terms and formulas from K-map groups.
//!
//! A group spans a contiguous (wrapping) run of rows and columns. A variable
//! contributes a literal to the group's term exactly when its bit is constant
//! across the run: the AND of the spanned Gray codes tells which bits are
//! constantly 1, the OR tells which bits are constantly 0.
//!
//! In SOP mode a group of `On` cells becomes a product term; in POS mode a
//! group of `Off` cells becomes a sum term with every literal complemented.
//!
//! ```
//! use kmap_rs::group::Group;
//! use kmap_rs::term::{generate_formula, get_term};
//! use kmap_rs::types::Mode;
//!
//! let corner = Group::new(0, 0, 1, 1);
//! assert_eq!(get_term(&corner, Mode::Sop), "A'B'C'D'");
//! assert_eq!(get_term(&corner, Mode::Pos), "(A+B+C+D)");
//!
//! let left_column = Group::new(0, 0, 4, 1);
//! assert_eq!(generate_formula(&[corner, left_column], Mode::Sop), "F = A'B'C'D' + C'D'");
//! ```

use std::fmt;

use crate::group::Group;
use crate::types::{gray, Axis, Mode, Variable};

/// A variable or its complement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Literal {
    var: Variable,
    negated: bool,
}

impl Literal {
    pub fn new(var: Variable, negated: bool) -> Self {
        Self { var, negated }
    }

    pub fn positive(var: Variable) -> Self {
        Self::new(var, false)
    }

    pub fn negative(var: Variable) -> Self {
        Self::new(var, true)
    }

    pub fn var(self) -> Variable {
        self.var
    }

    pub fn is_negated(self) -> bool {
        self.negated
    }

    /// Evaluates the literal for the input assignment encoded by minterm `m`.
    pub fn eval(self, m: u8) -> bool {
        let bit = m & self.var.minterm_mask() != 0;
        bit != self.negated
    }
}

impl std::ops::Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(self.var, !self.negated)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.var, if self.negated { "'" } else { "" })
    }
}

/// AND and OR of the Gray codes of the rows (or columns) in a span.
fn span_bits(indices: impl Iterator<Item = usize>) -> (u8, u8) {
    indices.fold((0b11, 0b00), |(and, or), i| {
        let code = gray(i);
        (and & code, or | code)
    })
}

/// A product term (SOP) or sum term (POS) synthesized from a group.
///
/// A term without literals is the constant produced by the group spanning the
/// whole map: `1` in SOP mode, `0` in POS mode.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Term {
    mode: Mode,
    literals: Vec<Literal>,
}

impl Term {
    /// Builds the term of `group` in the given mode.
    pub fn from_group(group: &Group, mode: Mode) -> Self {
        if group.is_full() {
            return Self { mode, literals: Vec::new() };
        }

        let (row_and, row_or) = span_bits(group.rows());
        let (col_and, col_or) = span_bits(group.cols());

        let mut literals = Vec::with_capacity(4);
        for var in Variable::ALL {
            let (and, or) = match var.axis() {
                Axis::Row => (row_and, row_or),
                Axis::Col => (col_and, col_or),
            };
            let mask = var.mask();
            let value = if and & mask != 0 {
                true
            } else if or & mask == 0 {
                false
            } else {
                continue;
            };
            // POS terms describe where the function is 0, hence the complement.
            let negated = match mode {
                Mode::Sop => !value,
                Mode::Pos => value,
            };
            literals.push(Literal::new(var, negated));
        }

        Self { mode, literals }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn is_constant(&self) -> bool {
        self.literals.is_empty()
    }

    /// Evaluates the term for the input assignment encoded by minterm `m`.
    pub fn eval(&self, m: u8) -> bool {
        match self.mode {
            Mode::Sop => self.literals.iter().all(|lit| lit.eval(m)),
            Mode::Pos => self.literals.iter().any(|lit| lit.eval(m)),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_constant() {
            return write!(f, "{}", if self.mode.is_pos() { "0" } else { "1" });
        }
        match self.mode {
            Mode::Sop => {
                for lit in &self.literals {
                    write!(f, "{}", lit)?;
                }
                Ok(())
            }
            Mode::Pos => {
                write!(f, "(")?;
                for (i, lit) in self.literals.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "{}", lit)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Returns the textual term of a single group.
pub fn get_term(group: &Group, mode: Mode) -> String {
    Term::from_group(group, mode).to_string()
}

/// Joins the terms of `groups` into the final `F = ...` formula.
///
/// An empty group list is the constant function opposite to the target:
/// `F = 0` in SOP mode (no `On` cells), `F = 1` in POS mode (no `Off` cells).
pub fn generate_formula(groups: &[Group], mode: Mode) -> String {
    if groups.is_empty() {
        return if mode.is_pos() { "F = 1" } else { "F = 0" }.to_string();
    }
    let separator = match mode {
        Mode::Sop => " + ",
        Mode::Pos => "",
    };
    let terms: Vec<String> = groups.iter().map(|g| get_term(g, mode)).collect();
    format!("F = {}", terms.join(separator))
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_literal_display_and_eval() {
        let a = Literal::positive(Variable::A);
        let not_d = Literal::negative(Variable::D);
        assert_eq!(a.to_string(), "A");
        assert_eq!(not_d.to_string(), "D'");
        assert_eq!(-a, Literal::negative(Variable::A));
        assert!(a.eval(0b1000));
        assert!(!a.eval(0b0111));
        assert!(not_d.eval(0b1110));
        assert!(!not_d.eval(0b0001));
    }

    #[test]
    fn test_single_cell_terms() {
        // Row 2 is AB = 11, column 3 is CD = 10.
        let g = Group::new(2, 3, 1, 1);
        assert_eq!(get_term(&g, Mode::Sop), "ABCD'");
        assert_eq!(get_term(&g, Mode::Pos), "(A'+B'+C'+D)");
    }

    #[test]
    fn test_wrapping_terms() {
        // Rows 3 and 0 (AB = 10, 00) share B = 0.
        let g = Group::new(3, 0, 2, 4);
        assert_eq!(get_term(&g, Mode::Sop), "B'");
        assert_eq!(get_term(&g, Mode::Pos), "(B)");

        // The four corners: B = 0 and D = 0.
        let corners = Group::new(3, 3, 2, 2);
        assert_eq!(get_term(&corners, Mode::Sop), "B'D'");
        assert_eq!(get_term(&corners, Mode::Pos), "(B+D)");
    }

    #[test]
    fn test_middle_span_terms() {
        // Rows 1 and 2 (AB = 01, 11) share B = 1; columns 1 and 2 share D = 1.
        let g = Group::new(1, 1, 2, 2);
        assert_eq!(get_term(&g, Mode::Sop), "BD");

        // Columns 2 and 3 (CD = 11, 10) share C = 1.
        let g = Group::new(0, 2, 4, 2);
        assert_eq!(get_term(&g, Mode::Sop), "C");
        assert_eq!(get_term(&g, Mode::Pos), "(C')");
    }

    #[test]
    fn test_full_group_is_constant() {
        let full = Group::full();
        let term = Term::from_group(&full, Mode::Sop);
        assert!(term.is_constant());
        assert_eq!(term.to_string(), "1");
        assert_eq!(get_term(&full, Mode::Pos), "0");
        assert!(term.eval(7));
        assert!(!Term::from_group(&full, Mode::Pos).eval(7));
    }

    #[test]
    fn test_term_true_exactly_on_footprint() {
        let g = Group::new(3, 1, 2, 2);
        let sop = Term::from_group(&g, Mode::Sop);
        let pos = Term::from_group(&g, Mode::Pos);
        for r in 0..4 {
            for c in 0..4 {
                let m = crate::grid::Grid::minterm(r, c);
                assert_eq!(sop.eval(m), g.is_covered(r, c), "SOP at ({}, {})", r, c);
                assert_eq!(pos.eval(m), !g.is_covered(r, c), "POS at ({}, {})", r, c);
            }
        }
    }

    #[test]
    fn test_generate_formula() {
        let a = Group::new(0, 0, 1, 1);
        let b = Group::new(2, 0, 1, 4);
        assert_eq!(generate_formula(&[], Mode::Sop), "F = 0");
        assert_eq!(generate_formula(&[], Mode::Pos), "F = 1");
        assert_eq!(generate_formula(&[a, b], Mode::Sop), "F = A'B'C'D' + AB");
        assert_eq!(generate_formula(&[a, b], Mode::Pos), "F = (A+B+C+D)(A'+B')");
        assert_eq!(generate_formula(&[Group::full()], Mode::Pos), "F = 0");
    }
}
