//! Display colors assigned to solution groups.

use std::fmt;

/// An RGBA color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colors cycled through by solution groups, in assignment order.
pub const PALETTE: [Color; 6] = [
    Color::rgb(255, 0, 127),
    Color::rgb(0, 255, 255),
    Color::rgb(255, 255, 0),
    Color::rgb(155, 89, 182),
    Color::rgb(255, 128, 0),
    Color::rgb(0, 255, 128),
];

/// Color of the `index`-th solution group.
pub fn group_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
