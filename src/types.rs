//! Cell values, formula modes, and the variables of a 4-variable K-map.
//!
//! Rows of the map encode the variables `A` and `B`, columns encode `C` and `D`.
//! Both axes use the same Gray-code ordering, so neighbouring cells (including
//! the wraparound neighbours) differ in exactly one input bit.
use std::fmt;

/// Number of rows (and columns) in the map.
pub const SIZE: usize = 4;

/// Gray-code sequence mapping a grid index to its 2-bit variable pattern.
pub const GRAY_CODES: [u8; SIZE] = [0, 1, 3, 2];

/// Returns the 2-bit variable pattern of the row or column at `index`.
///
/// # Panics
///
/// Panics if `index >= 4`.
pub fn gray(index: usize) -> u8 {
    assert!(index < SIZE, "Grid index must be in 0..4, got {}", index);
    GRAY_CODES[index]
}

/// Value stored in a single K-map cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Cell {
    /// The function is 0 for this input.
    #[default]
    Off,
    /// The function is 1 for this input.
    On,
    /// The output is unconstrained.
    DontCare,
}

impl Cell {
    pub const ALL: [Cell; 3] = [Cell::Off, Cell::On, Cell::DontCare];

    pub fn is_dont_care(self) -> bool {
        self == Cell::DontCare
    }

    /// Swaps `On` and `Off`, keeping `DontCare` as is.
    pub fn inverted(self) -> Self {
        match self {
            Cell::Off => Cell::On,
            Cell::On => Cell::Off,
            Cell::DontCare => Cell::DontCare,
        }
    }

    /// Whether a group looking for `target` may absorb this cell.
    pub fn is_compatible(self, target: Cell) -> bool {
        self == target || self == Cell::DontCare
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Off => '0',
            Cell::On => '1',
            Cell::DontCare => 'X',
        }
    }

    /// Parses `0`, `1`, or one of `X`, `x`, `-` for a don't-care.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Cell::Off),
            '1' => Some(Cell::On),
            'X' | 'x' | '-' => Some(Cell::DontCare),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Form of the synthesized formula.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Mode {
    /// Sum of products: groups cover the `On` cells.
    #[default]
    Sop,
    /// Product of sums: groups cover the `Off` cells.
    Pos,
}

impl Mode {
    pub fn is_pos(self) -> bool {
        self == Mode::Pos
    }

    /// The cell value that groups have to cover in this mode.
    pub fn target(self) -> Cell {
        match self {
            Mode::Sop => Cell::On,
            Mode::Pos => Cell::Off,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Sop => Mode::Pos,
            Mode::Pos => Mode::Sop,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Sop => write!(f, "SOP"),
            Mode::Pos => write!(f, "POS"),
        }
    }
}

/// Which grid axis a variable is encoded on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    Row,
    Col,
}

/// One of the four input variables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Variable {
    A,
    B,
    C,
    D,
}

impl Variable {
    /// All variables in literal order.
    pub const ALL: [Variable; 4] = [Variable::A, Variable::B, Variable::C, Variable::D];

    pub fn axis(self) -> Axis {
        match self {
            Variable::A | Variable::B => Axis::Row,
            Variable::C | Variable::D => Axis::Col,
        }
    }

    /// Mask of this variable's bit within the Gray code of its axis.
    pub fn mask(self) -> u8 {
        match self {
            Variable::A | Variable::C => 0b10,
            Variable::B | Variable::D => 0b01,
        }
    }

    /// Mask of this variable's bit within a 4-bit minterm index `ABCD`.
    pub fn minterm_mask(self) -> u8 {
        match self {
            Variable::A => 0b1000,
            Variable::B => 0b0100,
            Variable::C => 0b0010,
            Variable::D => 0b0001,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variable::A => "A",
            Variable::B => "B",
            Variable::C => "C",
            Variable::D => "D",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_gray_codes_are_adjacent() {
        for i in 0..SIZE {
            let a = gray(i);
            let b = gray((i + 1) % SIZE);
            assert_eq!((a ^ b).count_ones(), 1, "{} and {} differ in more than one bit", a, b);
        }
    }

    #[test]
    #[should_panic(expected = "Grid index must be in 0..4")]
    fn test_gray_out_of_range() {
        gray(4);
    }

    #[test]
    fn test_cell_chars() {
        for cell in Cell::ALL {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('x'), Some(Cell::DontCare));
        assert_eq!(Cell::from_char('-'), Some(Cell::DontCare));
        assert_eq!(Cell::from_char('2'), None);
    }

    #[test]
    fn test_cell_inverted() {
        assert_eq!(Cell::On.inverted(), Cell::Off);
        assert_eq!(Cell::Off.inverted(), Cell::On);
        assert_eq!(Cell::DontCare.inverted(), Cell::DontCare);
    }

    #[test]
    fn test_cell_compatible() {
        assert!(Cell::On.is_compatible(Cell::On));
        assert!(Cell::DontCare.is_compatible(Cell::On));
        assert!(Cell::DontCare.is_compatible(Cell::Off));
        assert!(!Cell::Off.is_compatible(Cell::On));
    }

    #[test]
    fn test_mode_target() {
        assert_eq!(Mode::Sop.target(), Cell::On);
        assert_eq!(Mode::Pos.target(), Cell::Off);
        assert_eq!(Mode::Sop.toggled(), Mode::Pos);
        assert_eq!(Mode::default(), Mode::Sop);
    }

    #[test]
    fn test_variable_bits() {
        assert_eq!(Variable::A.axis(), Axis::Row);
        assert_eq!(Variable::D.axis(), Axis::Col);
        assert_eq!(Variable::A.mask(), 2);
        assert_eq!(Variable::B.mask(), 1);
        assert_eq!(Variable::C.minterm_mask(), 2);
        assert_eq!(Variable::A.to_string(), "A");
    }
}
