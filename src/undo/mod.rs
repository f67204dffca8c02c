//! Snapshot history for undo support
//!
//! The canvas is small, so undo keeps whole-grid snapshots rather than
//! inverse edit commands: push the pre-edit grid before applying a change,
//! pop to restore it. Callers only commit when an edit actually changed the
//! grid, so every snapshot on the stack is undoable.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::models::core::Grid;

/// Default maximum number of snapshots retained.
pub const HISTORY_CAP: usize = 100;

/// Stack of prior grid states, most recent on top
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct History {
    snapshots: VecDeque<Grid>,
    max_size: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_CAP)
    }
}

impl History {
    /// Create a history capped at `max_size` snapshots
    pub fn new(max_size: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            max_size,
        }
    }

    /// Push the pre-edit grid. When the cap is reached the oldest snapshot
    /// is dropped, so the most recent edits stay undoable.
    pub fn commit(&mut self, grid: Grid) {
        self.snapshots.push_back(grid);
        if self.snapshots.len() > self.max_size {
            self.snapshots.pop_front();
        }
    }

    /// Pop the most recent snapshot. `None` on empty history: the caller
    /// keeps the current grid, so undo past the beginning is an idempotent
    /// no-op rather than an error.
    pub fn undo(&mut self) -> Option<Grid> {
        self.snapshots.pop_back()
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Number of available undo steps
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Drop all snapshots
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
