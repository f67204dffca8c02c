//! Session lifecycle and edit commands for the Mojistack editor
//!
//! The JS render layer calls these functions with cell coordinates and
//! toolbox intents, then redraws from the returned snapshots. The editor
//! state itself never leaves the WASM side.

use lazy_static::lazy_static;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use crate::api::error::EditorError;
use crate::api::helpers::{deserialize, serialize};
use crate::api::types::EditResult;
use crate::models::core::Grid;
use crate::models::toolbox::Tool;
use crate::models::EditorState;
use crate::{wasm_info, wasm_log};

// WASM-owned editor state (canonical source of truth)
lazy_static! {
    static ref EDITOR: Mutex<Option<EditorState>> = Mutex::new(None);
}

/// Run a closure against the live editor session
pub(crate) fn with_editor<T>(f: impl FnOnce(&mut EditorState) -> T) -> Result<T, JsValue> {
    let mut guard = EDITOR.lock().unwrap();
    let state = guard.as_mut().ok_or(EditorError::NotInitialized)?;
    Ok(f(state))
}

/// Install a fresh session and return its first snapshot
fn install_session(state: EditorState) -> Result<JsValue, JsValue> {
    let snapshot = EditResult::snapshot(true, &state);
    *EDITOR.lock().unwrap() = Some(state);
    serialize(&snapshot, "Failed to serialize session snapshot")
}

/// Start a new session from the default canvas pattern.
///
/// # Returns
/// An `EditResult` snapshot the render layer draws the initial canvas from.
#[wasm_bindgen(js_name = newSession)]
pub fn new_session() -> Result<JsValue, JsValue> {
    wasm_info!("newSession called");
    install_session(EditorState::default())
}

/// Start a new session from caller-supplied canvas text (newline-separated
/// rows, one grapheme cluster per cell).
///
/// # Returns
/// An `EditResult` snapshot, or an error when the text contains no cells.
#[wasm_bindgen(js_name = newSessionFromText)]
pub fn new_session_from_text(text: &str) -> Result<JsValue, JsValue> {
    wasm_info!("newSessionFromText called: {} bytes", text.len());

    let grid = Grid::from_text(text);
    if grid.row_count() == 0 || grid.col_count() == 0 {
        return Err(EditorError::EmptyGrid.into());
    }

    install_session(EditorState::new(grid))
}

/// Start a new session from a caller-supplied grid snapshot, for example
/// one previously returned by `getGrid`.
///
/// # Returns
/// An `EditResult` snapshot, or an error when the snapshot is empty or
/// violates the grid invariants (ragged rows, multi-cluster cells).
#[wasm_bindgen(js_name = newSessionFromGrid)]
pub fn new_session_from_grid(grid_js: JsValue) -> Result<JsValue, JsValue> {
    let grid: Grid = deserialize(grid_js, "Failed to deserialize grid snapshot")?;
    wasm_info!("newSessionFromGrid called: {} x {}", grid.row_count(), grid.col_count());

    if grid.row_count() == 0 || grid.col_count() == 0 {
        return Err(EditorError::EmptyGrid.into());
    }
    grid.validate().map_err(EditorError::InvalidGrid)?;

    install_session(EditorState::new(grid))
}

/// Paint the clicked cell with the active tool's glyph.
///
/// Out-of-bounds coordinates and repaints with the glyph the cell already
/// holds are no-ops: the snapshot comes back with `changed: false` and no
/// undo step is recorded.
#[wasm_bindgen(js_name = paintCell)]
pub fn paint_cell(row: usize, col: usize) -> Result<JsValue, JsValue> {
    let result = with_editor(|state| {
        let changed = state.paint_cell(row, col);
        EditResult::snapshot(changed, state)
    })?;

    wasm_log!("paintCell ({}, {}): changed={}", row, col, result.changed);
    serialize(&result, "Failed to serialize paint result")
}

/// Blank out the whole canvas (no-op when already blank)
#[wasm_bindgen(js_name = clearGrid)]
pub fn clear_grid() -> Result<JsValue, JsValue> {
    let result = with_editor(|state| {
        let changed = state.clear_grid();
        EditResult::snapshot(changed, state)
    })?;

    wasm_info!("clearGrid: changed={}", result.changed);
    serialize(&result, "Failed to serialize clear result")
}

/// Restore the canvas to its state before the most recent edit.
///
/// Undo with no history is an idempotent no-op (`changed: false`), never an
/// error.
#[wasm_bindgen(js_name = undo)]
pub fn undo() -> Result<JsValue, JsValue> {
    let result = with_editor(|state| {
        let changed = state.undo();
        EditResult::snapshot(changed, state)
    })?;

    wasm_info!("undo: changed={}", result.changed);
    serialize(&result, "Failed to serialize undo result")
}

/// Select a brush glyph and switch to the paint tool.
///
/// Only the first grapheme cluster of the trimmed input is kept; empty
/// input is a no-op.
#[wasm_bindgen(js_name = pickBrush)]
pub fn pick_brush(glyph: &str) -> Result<JsValue, JsValue> {
    let result = with_editor(|state| {
        let changed = state.pick_brush(glyph);
        EditResult::snapshot(changed, state)
    })?;

    wasm_log!("pickBrush {:?}: changed={}", glyph, result.changed);
    serialize(&result, "Failed to serialize brush result")
}

/// Switch between the paint and eraser tools ("paint" / "eraser")
#[wasm_bindgen(js_name = activateTool)]
pub fn activate_tool(tool: &str) -> Result<JsValue, JsValue> {
    let tool = Tool::from_name(tool).ok_or_else(|| EditorError::UnknownTool(tool.to_string()))?;

    let result = with_editor(|state| {
        let changed = state.activate_tool(tool);
        EditResult::snapshot(changed, state)
    })?;

    wasm_log!("activateTool {:?}: changed={}", tool, result.changed);
    serialize(&result, "Failed to serialize tool result")
}

/// Latest canvas snapshot for the render layer
#[wasm_bindgen(js_name = getGrid)]
pub fn get_grid() -> Result<JsValue, JsValue> {
    let grid = with_editor(|state| state.grid.clone())?;
    serialize(&grid, "Failed to serialize grid")
}

/// Latest toolbox snapshot for the controls bar
#[wasm_bindgen(js_name = getToolbox)]
pub fn get_toolbox() -> Result<JsValue, JsValue> {
    let toolbox = with_editor(|state| state.toolbox.clone())?;
    serialize(&toolbox, "Failed to serialize toolbox")
}

/// Whether the undo button should be enabled
#[wasm_bindgen(js_name = canUndo)]
pub fn can_undo() -> Result<bool, JsValue> {
    with_editor(|state| state.history.can_undo())
}

/// Number of undo steps currently available
#[wasm_bindgen(js_name = undoDepth)]
pub fn undo_depth() -> Result<usize, JsValue> {
    with_editor(|state| state.history.depth())
}
