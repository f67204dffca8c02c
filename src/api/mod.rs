//! Mojistack editor WASM API
//!
//! This module provides the JavaScript-facing API for the emoji-art editor.
//! It includes shared utilities for serialization, error handling, and
//! logging, plus the editing commands organized by functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: shared serialization, error handling, and logging utilities
//! - `error`: API-boundary error type
//! - `types`: result structs returned across the boundary
//! - `core`: session lifecycle, edit commands, and state reads
//! - `export`: clipboard/text export

pub mod helpers;
pub mod error;
pub mod types;
pub mod core;
pub mod export;

// Re-export all public functions to keep a flat JS-facing surface
pub use self::core::*;
pub use export::{export_json, export_text};
