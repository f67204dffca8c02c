//! Shared types for the WASM API
//!
//! This module contains the result types returned across the JS boundary.

use serde::{Deserialize, Serialize};

use crate::models::core::Grid;
use crate::models::toolbox::Toolbox;
use crate::models::EditorState;

/// Result of an edit command: a full state snapshot for the render layer
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EditResult {
    /// Whether the command changed any state (false = no-op, nothing to redraw)
    pub changed: bool,
    /// Latest canvas snapshot
    pub grid: Grid,
    /// Latest toolbox snapshot
    pub toolbox: Toolbox,
    /// Whether undo is currently available
    pub can_undo: bool,
}

impl EditResult {
    /// Snapshot the session state after a command reported `changed`
    pub fn snapshot(changed: bool, state: &EditorState) -> Self {
        Self {
            changed,
            grid: state.grid.clone(),
            toolbox: state.toolbox.clone(),
            can_undo: state.history.can_undo(),
        }
    }
}

/// Result of a clipboard export
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExportResult {
    /// Plain text for the external clipboard collaborator
    pub text: String,
    /// Grid dimensions, for the host's copy feedback
    pub rows: usize,
    pub cols: usize,
}
