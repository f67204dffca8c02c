//! Grapheme cluster handling utilities
//!
//! Cells and brushes hold extended grapheme clusters, not `char`s: one
//! visible emoji can span several code points (variation selectors, ZWJ
//! family sequences, flags). Splitting on code points would tear those
//! apart, so everything goes through `unicode-segmentation`.

use unicode_segmentation::UnicodeSegmentation;
use wasm_bindgen::prelude::*;

/// Split text into extended grapheme clusters
pub fn split_graphemes(text: &str) -> Vec<String> {
    text.graphemes(true).map(str::to_string).collect()
}

/// Count extended grapheme clusters in text
pub fn count_graphemes(text: &str) -> usize {
    text.graphemes(true).count()
}

/// First grapheme cluster of text, or `None` when empty
pub fn first_grapheme(text: &str) -> Option<String> {
    text.graphemes(true).next().map(str::to_string)
}

/// Whether text is exactly one grapheme cluster
pub fn is_single_grapheme(text: &str) -> bool {
    let mut graphemes = text.graphemes(true);
    graphemes.next().is_some() && graphemes.next().is_none()
}

/// Grapheme segmenter exposed to the JS side, used by the brush input to
/// validate and trim what the user typed.
#[wasm_bindgen]
pub struct GraphemeSegmenter {}

#[wasm_bindgen]
impl GraphemeSegmenter {
    /// Create a new grapheme segmenter
    #[wasm_bindgen(constructor)]
    pub fn new() -> GraphemeSegmenter {
        GraphemeSegmenter {}
    }

    /// Split text into grapheme clusters
    #[wasm_bindgen(js_name = segmentText)]
    pub fn segment_text(&self, text: &str) -> js_sys::Array {
        let array = js_sys::Array::new();
        for grapheme in text.graphemes(true) {
            array.push(&JsValue::from_str(grapheme));
        }
        array
    }

    /// Count grapheme clusters in text
    #[wasm_bindgen(js_name = countGraphemes)]
    pub fn count_graphemes(&self, text: &str) -> usize {
        count_graphemes(text)
    }

    /// Check if a string is a single valid grapheme cluster
    #[wasm_bindgen(js_name = isValidGrapheme)]
    pub fn is_valid_grapheme(&self, text: &str) -> bool {
        is_single_grapheme(text)
    }
}

impl Default for GraphemeSegmenter {
    fn default() -> Self {
        Self::new()
    }
}
