// Test undo behavior over editing sessions

use mojistack_wasm::models::core::{Grid, BLANK_GLYPH, DEFAULT_PATTERN};
use mojistack_wasm::models::toolbox::Tool;
use mojistack_wasm::models::EditorState;
use mojistack_wasm::undo::History;

#[test]
fn test_undo_after_one_paint_restores_pre_paint_grid() {
    let mut state = EditorState::default();
    let before = state.grid.clone();

    state.pick_brush("🔥");
    assert!(state.paint_cell(1, 1));
    assert_ne!(state.grid, before);

    assert!(state.undo());
    assert_eq!(state.grid, before);
}

#[test]
fn test_undo_walks_back_through_edits() {
    let mut state = EditorState::default();
    state.pick_brush("🔥");

    state.paint_cell(0, 0);
    let after_first = state.grid.clone();
    state.paint_cell(0, 1);
    state.paint_cell(0, 2);

    assert!(state.undo());
    assert!(state.undo());
    assert_eq!(state.grid, after_first);

    assert!(state.undo());
    assert_eq!(state.grid.to_text(), DEFAULT_PATTERN);
}

#[test]
fn test_undo_on_empty_history_is_idempotent() {
    let mut state = EditorState::default();
    let before = state.grid.clone();

    assert!(!state.undo());
    assert!(!state.undo());
    assert_eq!(state.grid, before);
}

#[test]
fn test_noop_edits_never_create_undo_steps() {
    let mut state = EditorState::default();

    // Repaint with the glyph the cell already holds
    state.pick_brush("⛈");
    assert!(!state.paint_cell(1, 1));

    // Out-of-bounds click
    assert!(!state.paint_cell(10, 10));

    // Erase an already blank cell
    state.clear_grid();
    state.undo();
    state.activate_tool(Tool::Eraser);
    state.paint_cell(0, 0);
    state.paint_cell(0, 0);

    // Only the real erase is on the stack
    assert_eq!(state.history.depth(), 1);
    assert_eq!(state.grid.glyph_at(0, 0), Some(BLANK_GLYPH));
}

#[test]
fn test_clear_is_one_undo_step() {
    let mut state = EditorState::default();

    assert!(state.clear_grid());
    assert!(state.undo());
    assert_eq!(state.grid.to_text(), DEFAULT_PATTERN);

    // Clearing a blank canvas adds nothing to undo
    state.clear_grid();
    assert!(!state.clear_grid());
    assert_eq!(state.history.depth(), 1);
}

#[test]
fn test_history_cap_keeps_most_recent_snapshots() {
    let mut history = History::new(3);
    for n in 0..5 {
        history.commit(Grid::filled(1, 1, &n.to_string()));
    }

    assert_eq!(history.depth(), 3);
    assert_eq!(history.undo(), Some(Grid::filled(1, 1, "4")));
    assert_eq!(history.undo(), Some(Grid::filled(1, 1, "3")));
    assert_eq!(history.undo(), Some(Grid::filled(1, 1, "2")));
    assert_eq!(history.undo(), None);
}
