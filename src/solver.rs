//! K-map minimization.
//!
//! The solver turns a [`Grid`] and a target cell value into an ordered list of
//! groups covering every target cell. It runs in four stages:
//!
//! 1. **Candidates** ([`enumerate_candidates`]): every toroidal rectangle of a
//!    valid shape whose cells are all target or don't-care, with at least one
//!    target cell. Shapes are tried from largest to smallest, anchors in
//!    row-major order.
//! 2. **Prime implicants** ([`prime_implicants`]): candidates not strictly
//!    contained in another candidate. Of two candidates with the same footprint
//!    only the first enumerated survives.
//! 3. **Essential implicants**: a prime implicant that is the only one covering
//!    some target cell is always selected.
//! 4. **Greedy completion**: while target cells remain uncovered, the prime
//!    implicant covering the most of them is added. Ties go to the earliest
//!    enumerated one.
//!
//! Stages 3 and 4 live in [`select_cover`]. The completion step is a heuristic:
//! the cover always consists of prime implicants and always covers every target
//! cell, but it is not guaranteed to use the fewest possible groups.
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
//! assert_eq!(solution.len(), 1);
//! assert_eq!(solution.formula(), "F = B'D'");
//! ```

use log::debug;

use crate::bitset::CellSet;
use crate::grid::Grid;
use crate::group::{anchor_count, Group, SHAPES};
use crate::solution::Solution;
use crate::types::{Cell, Mode};

/// Returns true if every cell of `group` is `target` or don't-care and at least
/// one cell is exactly `target`.
pub fn is_valid_group(grid: &Grid, group: &Group, target: Cell) -> bool {
    let mut has_target = false;
    for (r, c) in group.cells() {
        let value = grid.get(r, c);
        if !value.is_compatible(target) {
            return false;
        }
        if value == target {
            has_target = true;
        }
    }
    has_target
}

/// Enumerates all valid groups for `target`, in deterministic order.
pub fn enumerate_candidates(grid: &Grid, target: Cell) -> Vec<Group> {
    let mut candidates = Vec::new();
    for (height, width) in SHAPES {
        for row in 0..anchor_count(height) {
            for col in 0..anchor_count(width) {
                let group = Group::new(row, col, height, width);
                if is_valid_group(grid, &group, target) {
                    candidates.push(group);
                }
            }
        }
    }
    debug!("enumerate_candidates(target = {:?}) -> {} candidates", target, candidates.len());
    candidates
}

/// Removes candidates contained in another candidate, keeping relative order.
pub fn prime_implicants(candidates: &[Group]) -> Vec<Group> {
    let is_dominated = |i: usize, group: &Group| {
        candidates.iter().enumerate().any(|(j, other)| {
            if i == j || !group.is_subset_of(other) {
                return false;
            }
            // Equal footprints: keep the earliest enumerated.
            !other.is_subset_of(group) || j < i
        })
    };

    let primes: Vec<Group> = candidates
        .iter()
        .enumerate()
        .filter(|&(i, group)| !is_dominated(i, group))
        .map(|(_, group)| *group)
        .collect();
    debug!("prime_implicants: {} of {} candidates are prime", primes.len(), candidates.len());
    primes
}

/// Selects a cover of the `target` cells from the prime implicants.
///
/// Returns the selected groups in selection order: essential prime implicants
/// first (in the row-major order of the cells that make them essential), then
/// the greedy picks.
pub fn select_cover(primes: &[Group], grid: &Grid, target: Cell) -> Vec<Group> {
    let targets = grid.cells_with(target);
    if targets.is_empty() {
        debug!("select_cover: no {:?} cells, empty cover", target);
        return Vec::new();
    }

    let footprints: Vec<CellSet> = primes.iter().map(Group::footprint).collect();
    let mut selected: Vec<usize> = Vec::new();

    // Essential prime implicants.
    for (r, c) in targets.iter() {
        let mut count = 0;
        let mut last = 0;
        for (i, footprint) in footprints.iter().enumerate() {
            if footprint.contains(r, c) {
                count += 1;
                last = i;
            }
        }
        if count == 1 && !selected.contains(&last) {
            debug!("select_cover: {} is essential for ({}, {})", primes[last], r, c);
            selected.push(last);
        }
    }

    let mut uncovered = targets;
    for &i in &selected {
        uncovered = uncovered.difference(footprints[i]);
    }

    // Greedy completion.
    while !uncovered.is_empty() {
        let mut best: Option<(usize, usize)> = None;
        for (i, footprint) in footprints.iter().enumerate() {
            if selected.contains(&i) {
                continue;
            }
            let gain = footprint.intersection(uncovered).len();
            if gain > best.map_or(0, |(_, g)| g) {
                best = Some((i, gain));
            }
        }
        match best {
            Some((i, gain)) => {
                debug!("select_cover: greedy pick {} covers {} new cells", primes[i], gain);
                selected.push(i);
                uncovered = uncovered.difference(footprints[i]);
            }
            None => break,
        }
    }

    selected.into_iter().map(|i| primes[i]).collect()
}

/// Minimizes `grid` into a sum of products or a product of sums.
pub fn minimize(grid: &Grid, mode: Mode) -> Solution {
    let target = mode.target();
    let candidates = enumerate_candidates(grid, target);
    let primes = prime_implicants(&candidates);
    let cover = select_cover(&primes, grid, target);
    debug!("minimize(mode = {}) -> {} groups", mode, cover.len());
    Solution::new(mode, cover)
}
