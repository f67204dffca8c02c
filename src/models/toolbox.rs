//! Toolbox state for brush selection
//!
//! Tracks the active tool, the current brush glyph, and the recently used
//! brush strip shown under the canvas.

use serde::{Deserialize, Serialize};

use crate::models::core::BLANK_GLYPH;
use crate::utils::grapheme::first_grapheme;

/// Brush a fresh session starts with.
pub const DEFAULT_BRUSH: &str = "😇";

/// Maximum number of glyphs kept in the recent-brush list.
pub const RECENT_BRUSH_CAP: usize = 8;

/// Painting tool selected in the controls bar
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Paint,
    Eraser,
}

impl Tool {
    /// Parse the tool name used by the JS controls ("paint" / "eraser")
    pub fn from_name(name: &str) -> Option<Tool> {
        match name {
            "paint" => Some(Tool::Paint),
            "eraser" => Some(Tool::Eraser),
            _ => None,
        }
    }
}

/// Brush selection state
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Toolbox {
    /// Glyph painted by the paint tool
    pub brush: String,

    /// Currently selected tool
    pub active_tool: Tool,

    /// Recently used brushes, most recent first, deduplicated and capped
    pub recent: Vec<String>,
}

impl Toolbox {
    /// Select a brush glyph and switch to the paint tool.
    ///
    /// The brush text input can deliver surrounding whitespace or more than
    /// one cluster; only the first grapheme cluster of the trimmed input is
    /// kept. Empty input leaves the toolbox untouched. Returns whether any
    /// state changed.
    pub fn pick_brush(&mut self, input: &str) -> bool {
        let glyph = match first_grapheme(input.trim()) {
            Some(glyph) => glyph,
            None => return false,
        };

        if self.brush == glyph
            && self.active_tool == Tool::Paint
            && self.recent.first() == Some(&glyph)
        {
            return false;
        }

        self.brush = glyph.clone();
        self.active_tool = Tool::Paint;
        self.recent.retain(|recent| *recent != glyph);
        self.recent.insert(0, glyph);
        self.recent.truncate(RECENT_BRUSH_CAP);
        true
    }

    /// Switch between paint and eraser. Returns whether the tool changed.
    pub fn activate_tool(&mut self, tool: Tool) -> bool {
        if self.active_tool == tool {
            return false;
        }
        self.active_tool = tool;
        true
    }

    /// Glyph a cell click paints with the current tool. The eraser always
    /// writes the blank glyph, whatever brush is selected.
    pub fn active_glyph(&self) -> &str {
        match self.active_tool {
            Tool::Paint => &self.brush,
            Tool::Eraser => BLANK_GLYPH,
        }
    }
}

impl Default for Toolbox {
    fn default() -> Self {
        Self {
            brush: DEFAULT_BRUSH.to_string(),
            active_tool: Tool::Paint,
            recent: vec![DEFAULT_BRUSH.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_brush_updates_recent() {
        let mut toolbox = Toolbox::default();

        assert!(toolbox.pick_brush("🔥"));
        assert_eq!(toolbox.brush, "🔥");
        assert_eq!(toolbox.recent, vec!["🔥", DEFAULT_BRUSH]);
    }

    #[test]
    fn test_pick_brush_twice_keeps_single_entry() {
        let mut toolbox = Toolbox::default();

        toolbox.pick_brush("🔥");
        toolbox.pick_brush("🔥");

        assert_eq!(toolbox.recent.iter().filter(|g| *g == "🔥").count(), 1);
        assert_eq!(toolbox.recent.first().map(String::as_str), Some("🔥"));
    }

    #[test]
    fn test_pick_current_brush_at_front_is_noop() {
        let mut toolbox = Toolbox::default();

        // Default brush already sits at the front of the recent list
        assert!(!toolbox.pick_brush(DEFAULT_BRUSH));
    }

    #[test]
    fn test_pick_brush_trims_to_first_grapheme() {
        let mut toolbox = Toolbox::default();

        assert!(toolbox.pick_brush("  🔥🌈  "));
        assert_eq!(toolbox.brush, "🔥");
    }

    #[test]
    fn test_pick_brush_empty_input_is_noop() {
        let mut toolbox = Toolbox::default();
        let before = toolbox.clone();

        assert!(!toolbox.pick_brush(""));
        assert!(!toolbox.pick_brush("   "));
        assert_eq!(toolbox, before);
    }

    #[test]
    fn test_pick_brush_reactivates_paint() {
        let mut toolbox = Toolbox::default();
        toolbox.activate_tool(Tool::Eraser);

        toolbox.pick_brush("🔥");
        assert_eq!(toolbox.active_tool, Tool::Paint);
    }

    #[test]
    fn test_recent_list_is_capped() {
        let mut toolbox = Toolbox::default();
        let glyphs = ["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘", "🌙"];
        for glyph in glyphs {
            toolbox.pick_brush(glyph);
        }

        assert_eq!(toolbox.recent.len(), RECENT_BRUSH_CAP);
        assert_eq!(toolbox.recent.first().map(String::as_str), Some("🌙"));
    }

    #[test]
    fn test_eraser_paints_blank() {
        let mut toolbox = Toolbox::default();

        assert_eq!(toolbox.active_glyph(), DEFAULT_BRUSH);
        assert!(toolbox.activate_tool(Tool::Eraser));
        assert_eq!(toolbox.active_glyph(), BLANK_GLYPH);

        // Re-activating the same tool is a no-op
        assert!(!toolbox.activate_tool(Tool::Eraser));
    }
}
