//! Editor state management
//!
//! This module contains the EditorState struct which represents the complete
//! state of one editing session: the canvas grid, the brush toolbox, and the
//! undo history.
//!
//! This is the WASM-owned source of truth. The JS render layer only ever
//! sees snapshots of it and feeds intents back through the API.

use serde::{Deserialize, Serialize};

use crate::models::core::{Grid, BLANK_GLYPH};
use crate::models::toolbox::{Tool, Toolbox};
use crate::undo::History;

/// Complete editor state (WASM-owned source of truth)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EditorState {
    /// The canvas being painted
    pub grid: Grid,

    /// Brush / tool selection
    pub toolbox: Toolbox,

    /// Undo snapshots of the canvas
    pub history: History,
}

impl EditorState {
    /// Create a session around an initial grid
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            toolbox: Toolbox::default(),
            history: History::default(),
        }
    }

    /// Paint cell `(row, col)` with the active tool's glyph.
    ///
    /// Commits the pre-edit grid to history iff the paint changed the cell;
    /// out-of-bounds clicks and repaints with the cell's current glyph leave
    /// both grid and history untouched. Returns whether anything changed.
    pub fn paint_cell(&mut self, row: usize, col: usize) -> bool {
        let glyph = self.toolbox.active_glyph().to_string();
        match self.grid.painted(row, col, &glyph) {
            Some(next) => {
                self.history.commit(self.grid.clone());
                self.grid = next;
                true
            }
            None => false,
        }
    }

    /// Blank out the whole canvas. No-op (no snapshot) when every cell is
    /// already blank. Returns whether anything changed.
    pub fn clear_grid(&mut self) -> bool {
        match self.grid.cleared(BLANK_GLYPH) {
            Some(next) => {
                self.history.commit(self.grid.clone());
                self.grid = next;
                true
            }
            None => false,
        }
    }

    /// Restore the most recent snapshot. Returns whether a snapshot was
    /// applied; undo on empty history keeps the current grid.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.grid = previous;
                true
            }
            None => false,
        }
    }

    /// Select a brush glyph (switches to the paint tool)
    pub fn pick_brush(&mut self, glyph: &str) -> bool {
        self.toolbox.pick_brush(glyph)
    }

    /// Switch the active tool
    pub fn activate_tool(&mut self, tool: Tool) -> bool {
        self.toolbox.activate_tool(tool)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}
