//! Error types for the WASM API boundary
//!
//! Edit-level misses never surface here: out-of-bounds paints, repaints with
//! the cell's current glyph, and undo on empty history all come back as
//! `changed: false` results. These variants cover host-page misuse and
//! malformed input only.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// API-boundary errors reported to the JS side
#[derive(Debug, Clone, Error)]
pub enum EditorError {
    /// An API call arrived before any session was created
    #[error("No editor session (call newSession first)")]
    NotInitialized,

    /// Caller-supplied initial grid text contained no cells
    #[error("Initial grid text is empty")]
    EmptyGrid,

    /// Caller-supplied grid snapshot violated a model invariant
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Tool name from the JS controls did not match a known tool
    #[error("Unknown tool: {0:?} (expected \"paint\" or \"eraser\")")]
    UnknownTool(String),
}

impl From<EditorError> for JsValue {
    fn from(err: EditorError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
