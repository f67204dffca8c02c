//! Core data structures for the Mojistack editor
//!
//! This module defines the canvas grid: a rectangular arrangement of cells,
//! each holding exactly one visible grapheme cluster. A cluster may span
//! several code points (variation selectors, ZWJ sequences), so cells are
//! `String`s and all splitting is grapheme-aware.

use serde::{Deserialize, Serialize};

use crate::utils::grapheme::{is_single_grapheme, split_graphemes};

/// Glyph written into erased and cleared cells.
pub const BLANK_GLYPH: &str = " ";

/// Canvas a fresh session starts from.
pub const DEFAULT_PATTERN: &str = "☀️🌫🌦\n🌫⛈🌈\n🌧🌈💰";

/// One horizontal line of the canvas. Column index = position in `cells`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// One grapheme cluster per cell
    pub cells: Vec<String>,
}

impl Row {
    /// Create a row of `cols` copies of `glyph`
    pub fn filled(cols: usize, glyph: &str) -> Self {
        Self {
            cells: vec![glyph.to_string(); cols],
        }
    }
}

/// The canvas: an ordered stack of rows.
///
/// Invariants: every row has the same number of cells, and every cell holds
/// exactly one grapheme cluster. All constructors and edit operations
/// preserve both.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub rows: Vec<Row>,
}

impl Grid {
    /// Create a `rows` x `cols` grid uniformly filled with `glyph`
    pub fn filled(rows: usize, cols: usize, glyph: &str) -> Self {
        Self {
            rows: (0..rows).map(|_| Row::filled(cols, glyph)).collect(),
        }
    }

    /// Parse a grid from newline-separated text, one grapheme cluster per
    /// cell. Short lines are padded with [`BLANK_GLYPH`] so the rectangle
    /// invariant holds.
    pub fn from_text(text: &str) -> Self {
        let mut rows: Vec<Row> = text
            .lines()
            .map(|line| Row {
                cells: split_graphemes(line),
            })
            .collect();

        let width = rows.iter().map(|row| row.cells.len()).max().unwrap_or(0);
        for row in &mut rows {
            while row.cells.len() < width {
                row.cells.push(BLANK_GLYPH.to_string());
            }
        }

        Self { rows }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }

    /// Glyph at `(row, col)`, or `None` when out of bounds
    pub fn glyph_at(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.cells.get(col).map(String::as_str)
    }

    /// Return a new grid with cell `(row, col)` replaced by `glyph`.
    ///
    /// Returns `None` when the coordinates are out of bounds or the cell
    /// already holds `glyph`; callers keep the current grid and must not
    /// push a history snapshot for the no-op.
    pub fn painted(&self, row: usize, col: usize, glyph: &str) -> Option<Grid> {
        let current = self.glyph_at(row, col)?;
        if current == glyph {
            return None;
        }

        let mut next = self.clone();
        next.rows[row].cells[col] = glyph.to_string();
        Some(next)
    }

    /// Return a same-sized grid with every cell set to `fill`, or `None`
    /// when the grid is already uniformly `fill` (no-op, keep current grid).
    pub fn cleared(&self, fill: &str) -> Option<Grid> {
        let already_uniform = self
            .rows
            .iter()
            .all(|row| row.cells.iter().all(|cell| cell == fill));
        if already_uniform {
            return None;
        }

        Some(Grid::filled(self.row_count(), self.col_count(), fill))
    }

    /// Check the rectangle and single-grapheme invariants. Grids built by
    /// this crate always satisfy them; grids deserialized from the JS side
    /// must be checked before use.
    pub fn validate(&self) -> Result<(), String> {
        let width = self.col_count();
        for (row_index, row) in self.rows.iter().enumerate() {
            if row.cells.len() != width {
                return Err(format!(
                    "Row {} has {} cells, expected {}",
                    row_index,
                    row.cells.len(),
                    width
                ));
            }
            for (col_index, cell) in row.cells.iter().enumerate() {
                if !is_single_grapheme(cell) {
                    return Err(format!(
                        "Cell ({}, {}) is not a single grapheme cluster: {:?}",
                        row_index, col_index, cell
                    ));
                }
            }
        }
        Ok(())
    }

    /// Serialize for clipboard export: rows joined by newline, cells
    /// concatenated with no separator. [`Grid::from_text`] reconstructs the
    /// same grid from this text.
    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.cells.concat())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_text(DEFAULT_PATTERN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_splits_graphemes() {
        let grid = Grid::from_text(DEFAULT_PATTERN);

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.col_count(), 3);
        // The sun glyph carries a variation selector (2 code points, 1 cell)
        assert_eq!(grid.glyph_at(0, 0), Some("☀️"));
        assert_eq!(grid.glyph_at(2, 2), Some("💰"));
    }

    #[test]
    fn test_from_text_pads_short_lines() {
        let grid = Grid::from_text("🔥🔥🔥\n🔥");

        assert_eq!(grid.col_count(), 3);
        assert_eq!(grid.glyph_at(1, 1), Some(BLANK_GLYPH));
        assert_eq!(grid.glyph_at(1, 2), Some(BLANK_GLYPH));
    }

    #[test]
    fn test_painted_replaces_single_cell() {
        let grid = Grid::from_text(DEFAULT_PATTERN);
        let next = grid.painted(1, 1, "🔥").expect("paint should apply");

        assert_eq!(next.glyph_at(1, 1), Some("🔥"));
        assert_eq!(next.rows[0], grid.rows[0]);
        assert_eq!(next.rows[2], grid.rows[2]);
    }

    #[test]
    fn test_painted_same_glyph_is_noop() {
        let grid = Grid::from_text(DEFAULT_PATTERN);
        assert!(grid.painted(1, 1, "⛈").is_none());
    }

    #[test]
    fn test_painted_out_of_bounds_is_noop() {
        let grid = Grid::from_text(DEFAULT_PATTERN);
        assert!(grid.painted(3, 0, "🔥").is_none());
        assert!(grid.painted(0, 3, "🔥").is_none());
    }

    #[test]
    fn test_cleared_fills_every_cell() {
        let grid = Grid::from_text(DEFAULT_PATTERN);
        let blank = grid.cleared(BLANK_GLYPH).expect("clear should apply");

        assert_eq!(blank.row_count(), 3);
        assert_eq!(blank.col_count(), 3);
        assert!(blank.rows.iter().all(|r| r.cells.iter().all(|c| c == BLANK_GLYPH)));

        // Clearing an already blank grid is a no-op
        assert!(blank.cleared(BLANK_GLYPH).is_none());
    }

    #[test]
    fn test_validate_accepts_own_constructions() {
        assert!(Grid::from_text(DEFAULT_PATTERN).validate().is_ok());
        assert!(Grid::filled(2, 5, "🌈").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_ragged_rows() {
        let grid = Grid {
            rows: vec![Row::filled(3, "🌈"), Row::filled(2, "🌈")],
        };
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_multi_cluster_cells() {
        let mut grid = Grid::filled(1, 2, "🌈");
        grid.rows[0].cells[1] = "🌈🌈".to_string();
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_to_text_round_trip() {
        let grid = Grid::from_text(DEFAULT_PATTERN);

        assert_eq!(grid.to_text(), DEFAULT_PATTERN);
        assert_eq!(Grid::from_text(&grid.to_text()), grid);
    }
}
