//! Bounded undo history of grid snapshots.
//!
//! Snapshots are pushed before every mutating action and popped on undo. When
//! the history is full, pushing evicts the oldest snapshot.

use std::collections::VecDeque;

use crate::grid::Grid;

/// Default number of snapshots kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// A bounded stack of [`Grid`] snapshots with FIFO eviction.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Grid>,
    capacity: usize,
}

impl History {
    /// Creates an empty history holding at most `capacity` snapshots.
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Saves a snapshot. Returns the evicted oldest snapshot, if any.
    pub fn push(&mut self, grid: Grid) -> Option<Grid> {
        if self.capacity == 0 {
            return Some(grid);
        }
        let evicted = if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front()
        } else {
            None
        };
        self.snapshots.push_back(grid);
        evicted
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<Grid> {
        self.snapshots.pop_back()
    }

    /// Returns the most recent snapshot without removing it.
    pub fn peek(&self) -> Option<&Grid> {
        self.snapshots.back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        History::new(DEFAULT_CAPACITY)
    }
}
