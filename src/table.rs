//! Named tables with incremental column-width tracking.
//!
//! This module provides `Table` and `TableStore`, the structural core of the
//! crate. A table accumulates a header and rows cell-by-cell; the store keeps
//! per-column widths up to date as content arrives, so rendering stays a pure
//! formatting pass over precomputed widths.
//!
//! The key invariants:
//!
//! - Once a table has a fixed column count, every later header or row must
//!   match it exactly.
//! - A header can be set at most once per table, but may arrive after rows.
//! - `column_widths[i]` is always the maximum character count seen in column
//!   i across the header and all rows. Widths never shrink.
//! - Cells never contain line breaks.
//! - A failed addition leaves the store untouched, including lazy creation.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::MdgenError;
use crate::Result;

/// Width of a cell in characters.
///
/// Widths are character counts, not byte lengths, so non-ASCII cells line up
/// in the rendered grid.
fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

/// Reject cells containing a line break.
fn check_cells(cells: &[String]) -> Result<()> {
    for cell in cells {
        if cell.contains('\n') || cell.contains('\r') {
            return Err(MdgenError::InvalidCell { cell: cell.clone() });
        }
    }
    Ok(())
}

/// A named grid of header and rows with tracked per-column widths.
///
/// Tables are built through [`TableStore`]; the accessors here expose the
/// accumulated state to the renderer and to callers that want to inspect it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header cells (empty until a header is added)
    header: Vec<String>,
    /// Data rows in insertion order
    rows: Vec<Vec<String>>,
    /// Fixed column count; 0 means undetermined
    column_count: usize,
    /// Per-column maximum character count across header and rows
    column_widths: Vec<usize>,
    /// Whether a header has been added
    has_header: bool,
}

impl Table {
    /// Header cells; empty if no header was added.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows in insertion order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Per-column widths (maximum character count seen so far).
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Fixed column count; 0 while the table is still empty.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Whether a header has been added.
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Element-wise max of the tracked widths against a new line of cells.
    /// Initializes the width vector on first content.
    fn widen(&mut self, cells: &[String]) {
        if self.column_widths.is_empty() {
            self.column_widths = cells.iter().map(|c| cell_width(c)).collect();
        } else {
            for (width, cell) in self.column_widths.iter_mut().zip(cells) {
                *width = (*width).max(cell_width(cell));
            }
        }
    }
}

/// Store of zero or more named tables.
///
/// Tables are created lazily: the first `add_header`/`add_row` for an unseen
/// name creates an empty table. All invariant checks run before any state is
/// touched, so a failing call never creates or modifies a table.
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    tables: HashMap<String, Table>,
}

impl TableStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a table by name.
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Whether a table with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Add a header to a table, creating the table if needed.
    ///
    /// The header may arrive before or after rows. Fails if the table already
    /// has a header, if the cell count disagrees with an established column
    /// count, or if any cell contains a line break.
    pub fn add_header(&mut self, name: &str, header: Vec<String>) -> Result<()> {
        check_cells(&header)?;

        if let Some(table) = self.tables.get(name) {
            if table.has_header {
                return Err(MdgenError::DuplicateHeader {
                    table: name.to_string(),
                });
            }
            if table.column_count != 0 && table.column_count != header.len() {
                return Err(MdgenError::ColumnCountMismatch {
                    table: name.to_string(),
                    expected: table.column_count,
                    actual: header.len(),
                });
            }
        }

        debug!("table '{}': adding header with {} columns", name, header.len());

        let table = self.tables.entry(name.to_string()).or_default();
        table.widen(&header);
        table.column_count = header.len();
        table.header = header;
        table.has_header = true;
        Ok(())
    }

    /// Add a data row to a table, creating the table if needed.
    ///
    /// The first header or row fixes the column count; later additions must
    /// match it. Fails if the cell count disagrees or if any cell contains a
    /// line break.
    pub fn add_row(&mut self, name: &str, row: Vec<String>) -> Result<()> {
        check_cells(&row)?;

        if let Some(table) = self.tables.get(name) {
            if table.column_count != 0 && table.column_count != row.len() {
                return Err(MdgenError::ColumnCountMismatch {
                    table: name.to_string(),
                    expected: table.column_count,
                    actual: row.len(),
                });
            }
        }

        let table = self.tables.entry(name.to_string()).or_default();
        table.widen(&row);
        table.column_count = row.len();
        table.rows.push(row);
        Ok(())
    }

    /// Reset a table to the empty state, creating it if absent.
    pub fn reset(&mut self, name: &str) {
        debug!("table '{}': reset", name);
        self.tables.insert(name.to_string(), Table::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_lazy_creation_on_first_row() {
        let mut store = TableStore::new();
        assert!(!store.contains("t"));
        store.add_row("t", cells(&["a", "b"])).unwrap();
        assert!(store.contains("t"));
        let table = store.get("t").unwrap();
        assert_eq!(table.column_count(), 2);
        assert!(!table.has_header());
    }

    #[test]
    fn test_widths_track_maximum_per_column() {
        let mut store = TableStore::new();
        store.add_header("actors", cells(&["name", "surname"])).unwrap();
        store.add_row("actors", cells(&["john", "travolta"])).unwrap();
        store.add_row("actors", cells(&["will", "smith"])).unwrap();
        store.add_row("actors", cells(&["tom", "hanks"])).unwrap();

        let table = store.get("actors").unwrap();
        assert_eq!(table.column_widths(), &[4, 8]); // "name"/"john", "travolta"
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_widths_never_shrink() {
        let mut store = TableStore::new();
        store.add_row("t", cells(&["longest", "x"])).unwrap();
        store.add_row("t", cells(&["a", "b"])).unwrap();
        assert_eq!(store.get("t").unwrap().column_widths(), &[7, 1]);
    }

    #[test]
    fn test_header_after_rows_is_legal() {
        let mut store = TableStore::new();
        store.add_row("t", cells(&["1", "2"])).unwrap();
        store.add_header("t", cells(&["alpha", "b"])).unwrap();

        let table = store.get("t").unwrap();
        assert!(table.has_header());
        assert_eq!(table.column_widths(), &[5, 1]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_duplicate_header_fails() {
        let mut store = TableStore::new();
        store.add_header("t", cells(&["a"])).unwrap();
        let err = store.add_header("t", cells(&["a"])).unwrap_err();
        assert!(matches!(err, MdgenError::DuplicateHeader { .. }));
    }

    #[test]
    fn test_column_count_mismatch_on_row() {
        let mut store = TableStore::new();
        store.add_header("t", cells(&["a", "b"])).unwrap();
        let err = store.add_row("t", cells(&["only one"])).unwrap_err();
        match err {
            MdgenError::ColumnCountMismatch { expected, actual, .. } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_column_count_mismatch_on_late_header() {
        let mut store = TableStore::new();
        store.add_row("t", cells(&["1", "2", "3"])).unwrap();
        let err = store.add_header("t", cells(&["a", "b"])).unwrap_err();
        assert!(matches!(err, MdgenError::ColumnCountMismatch { .. }));
    }

    #[test]
    fn test_line_break_in_cell_rejected() {
        let mut store = TableStore::new();
        let err = store.add_row("t", cells(&["one\ntwo"])).unwrap_err();
        assert!(matches!(err, MdgenError::InvalidCell { .. }));
        let err = store.add_header("t", cells(&["a\r\nb"])).unwrap_err();
        assert!(matches!(err, MdgenError::InvalidCell { .. }));
    }

    #[test]
    fn test_failed_addition_mutates_nothing() {
        let mut store = TableStore::new();

        // A rejected cell on an unseen name must not create the table.
        assert!(store.add_row("t", cells(&["bad\ncell"])).is_err());
        assert!(!store.contains("t"));

        // A mismatched row must not disturb widths or row count.
        store.add_header("t", cells(&["head", "er"])).unwrap();
        let before = store.get("t").unwrap().clone();
        assert!(store.add_row("t", cells(&["x"])).is_err());
        assert_eq!(store.get("t").unwrap(), &before);
    }

    #[test]
    fn test_widths_count_characters_not_bytes() {
        let mut store = TableStore::new();
        store.add_row("t", cells(&["héllo", "日本"])).unwrap();
        assert_eq!(store.get("t").unwrap().column_widths(), &[5, 2]);
    }

    #[test]
    fn test_reset_clears_table() {
        let mut store = TableStore::new();
        store.add_header("t", cells(&["a"])).unwrap();
        store.add_row("t", cells(&["1"])).unwrap();
        store.reset("t");

        let table = store.get("t").unwrap();
        assert_eq!(table.column_count(), 0);
        assert!(!table.has_header());
        assert_eq!(table.row_count(), 0);
        assert!(table.column_widths().is_empty());

        // A fresh header with a different shape is accepted again.
        store.add_header("t", cells(&["x", "y", "z"])).unwrap();
        assert_eq!(store.get("t").unwrap().column_count(), 3);
    }

    #[test]
    fn test_table_serializes_to_json() {
        let mut store = TableStore::new();
        store.add_header("t", cells(&["a", "b"])).unwrap();
        store.add_row("t", cells(&["1", "22"])).unwrap();

        let json = serde_json::to_string(store.get("t").unwrap()).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, store.get("t").unwrap());
        assert_eq!(back.column_widths(), &[1, 2]);
    }
}
