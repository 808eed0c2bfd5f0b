//! # kmap-rs: Karnaugh map minimization in Rust
//!
//! **`kmap-rs`** minimizes 4-variable Boolean functions laid out as a 4×4 **Karnaugh map**
//! into a two-level formula, either a sum of products (SOP) or a product of sums (POS).
//!
//! ## What is a K-map?
//!
//! A Karnaugh map arranges the 16 rows of a 4-variable truth table in a grid whose rows encode
//! `AB` and whose columns encode `CD`, both in Gray-code order `00 01 11 10`.
//! Neighbouring cells (including the ones that wrap around the edges) differ in exactly one
//! input bit, so every rectangle of 1, 2, 4, 8 or 16 cells with power-of-two sides is a single
//! product term.
//!
//! ## Key Features
//!
//! - **Deterministic Minimization**: Candidate groups are enumerated in a fixed order, prime implicants
//!   are extracted, essential ones are selected, and a greedy pass completes the cover.
//!   The same grid always yields the same solution.
//! - **Don't-Cares**: Cells marked `X` may be absorbed into groups but never need covering.
//! - **SOP and POS**: Groups of `1` cells become product terms, groups of `0` cells become sum terms.
//! - **Interactive State**: [`Session`][crate::session::Session] bundles the grid, mode, bounded undo
//!   history and the current solution.
//!
//! ## Basic Usage
//!
//! ```rust
//! use kmap_rs::grid::Grid;
//! use kmap_rs::solver::minimize;
//! use kmap_rs::types::Mode;
//!
//! // 1. Describe the map row by row (rows AB = 00, 01, 11, 10).
//! let grid: Grid = "0110/0110/0000/0000".parse().unwrap();
//!
//! // 2. Minimize.
//! let solution = minimize(&grid, Mode::Sop);
//!
//! // 3. Inspect the result.
//! assert_eq!(solution.len(), 1);
//! assert_eq!(solution.formula(), "F = A'D");
//! assert!(solution.covers_grid(&grid));
//! ```
//!
//! ## Core Components
//!
//! - **[`grid`]**: The 4×4 table of cell values and its text form.
//! - **[`group`]**: Toroidal rectangles and their geometry.
//! - **[`solver`]**: Candidate enumeration, prime implicants, and cover selection.
//! - **[`term`]**: Synthesis of terms and the final formula.
//! - **[`session`]**: Editing state with undo history.

pub mod bitset;
pub mod grid;
pub mod group;
pub mod history;
pub mod palette;
pub mod session;
pub mod solution;
pub mod solver;
pub mod table;
pub mod term;
pub mod types;
