//! Models module for the Mojistack editor
//!
//! This module contains the data structures for the grid canvas,
//! the brush toolbox, and the aggregate editor session state.

pub mod core;
pub mod toolbox;
pub mod editor_state;

// Re-export commonly used types (self:: keeps `core` from clashing with the
// builtin crate of the same name)
pub use self::core::*;
pub use toolbox::*;
pub use editor_state::EditorState;
