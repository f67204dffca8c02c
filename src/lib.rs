//! Mojistack Editor WASM Module
//!
//! This is the WASM module for the Mojistack emoji-art editor. It owns the
//! editing model: a rectangular grid of grapheme-cluster cells painted with a
//! brush glyph, plus undo history and toolbox state. The JS render layer draws
//! from snapshots of this state and feeds pointer events back in.

pub mod models;
pub mod undo;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::core::*;
pub use models::toolbox::*;
pub use models::editor_state::EditorState;
pub use undo::History;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Mojistack editor WASM module initialized");
}
