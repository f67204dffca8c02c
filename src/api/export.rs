//! Clipboard export for the Mojistack editor
//!
//! Serializes the canvas for the JS clipboard collaborator. The clipboard
//! write itself (and the "copied!" indicator) stays on the JS side; a failed
//! copy never feeds back into editor state.

use wasm_bindgen::prelude::*;

use crate::api::core::with_editor;
use crate::api::helpers::serialize;
use crate::api::types::ExportResult;
use crate::wasm_info;

/// Serialize the canvas as plain text: rows joined by newline, cells
/// concatenated with no separator. Re-splitting by grapheme boundaries
/// reconstructs the same grid.
#[wasm_bindgen(js_name = exportText)]
pub fn export_text() -> Result<JsValue, JsValue> {
    let result = with_editor(|state| ExportResult {
        text: state.grid.to_text(),
        rows: state.grid.row_count(),
        cols: state.grid.col_count(),
    })?;

    wasm_info!("exportText: {} x {} canvas", result.rows, result.cols);
    serialize(&result, "Failed to serialize export result")
}

/// Pretty-printed JSON dump of the canvas, for host tooling and debugging
#[wasm_bindgen(js_name = exportJson)]
pub fn export_json() -> Result<String, JsValue> {
    let grid = with_editor(|state| state.grid.clone())?;

    serde_json::to_string_pretty(&grid)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize grid JSON: {}", e)))
}
