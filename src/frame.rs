//! Dataframe ingestion: turning external tabular data into table content.
//!
//! Any value exposing named columns and row-indexed cell access can be
//! ingested through the [`Dataframe`] trait. The crate ships [`Frame`], a
//! small rectangular implementation, for callers without their own source.
//!
//! Ingestion is all-or-nothing: every cell is converted and validated
//! before the table store is touched, so a rejected frame leaves the target
//! name unused.

use std::fmt::Display;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::MdgenError;
use crate::table::TableStore;
use crate::Result;

/// Name of a dataframe column.
///
/// `Nested` represents hierarchical (multi-level) column names, which some
/// tabular sources produce. Ingestion rejects them; the variant exists so
/// such sources can still implement [`Dataframe`] faithfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnName {
    /// Plain single-level column name
    Flat(String),
    /// Multi-level column name (unsupported by ingestion)
    Nested(Vec<String>),
}

/// External tabular data with named columns and row-indexed cells.
pub trait Dataframe {
    /// Column names, left to right.
    fn column_names(&self) -> Vec<ColumnName>;

    /// Number of data rows.
    fn row_count(&self) -> usize;

    /// Cell at (row, column), converted to its string representation.
    fn cell(&self, row: usize, column: usize) -> String;
}

/// Options controlling cell conversion during ingestion.
///
/// Leading/trailing whitespace is always trimmed from every cell; that is
/// not configurable. Newline replacement is opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Replace embedded line breaks instead of rejecting the cell
    replace_newlines: bool,
    /// Substitute string for replaced line breaks
    replace_with: String,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            replace_newlines: false,
            replace_with: "; ".to_string(),
        }
    }
}

impl IngestOptions {
    /// Create options with newline replacement off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: replace embedded line breaks with `substitute`.
    pub fn replace_newlines(mut self, substitute: impl Into<String>) -> Self {
        self.replace_newlines = true;
        self.replace_with = substitute.into();
        self
    }

    /// Convert one raw cell: optional newline replacement, mandatory trim.
    fn convert(&self, raw: &str) -> String {
        let replaced = if self.replace_newlines {
            raw.replace("\r\n", "\n").replace('\n', &self.replace_with)
        } else {
            raw.to_string()
        };
        replaced.trim().to_string()
    }
}

/// Ingest a dataframe into the table store under `name`.
///
/// Fails with [`MdgenError::DuplicateTable`] if the name is taken, with
/// [`MdgenError::UnsupportedStructure`] on multi-level column names, and
/// with [`MdgenError::InvalidCell`] if a converted cell still contains a
/// line break. On success the store holds a table with the frame's columns
/// as header and its rows in original order.
pub fn ingest<D: Dataframe>(
    tables: &mut TableStore,
    name: &str,
    frame: &D,
    options: &IngestOptions,
) -> Result<()> {
    if tables.contains(name) {
        return Err(MdgenError::DuplicateTable(name.to_string()));
    }

    let mut header = Vec::new();
    for column in frame.column_names() {
        match column {
            ColumnName::Flat(text) => header.push(options.convert(&text)),
            ColumnName::Nested(levels) => {
                return Err(MdgenError::UnsupportedStructure(format!(
                    "multi-level column names are not supported (got {:?})",
                    levels
                )));
            }
        }
    }

    // Convert and validate every cell up front so a bad cell cannot leave a
    // half-ingested table behind.
    let columns = header.len();
    let mut rows = Vec::with_capacity(frame.row_count());
    for row in 0..frame.row_count() {
        let cells: Vec<String> = (0..columns)
            .map(|column| options.convert(&frame.cell(row, column)))
            .collect();
        rows.push(cells);
    }
    for cell in header.iter().chain(rows.iter().flatten()) {
        if cell.contains('\n') || cell.contains('\r') {
            return Err(MdgenError::InvalidCell { cell: cell.clone() });
        }
    }

    debug!(
        "ingesting frame into table '{}': {} columns, {} rows",
        name,
        columns,
        rows.len()
    );

    tables.add_header(name, header)?;
    for row in rows {
        tables.add_row(name, row)?;
    }
    Ok(())
}

/// A small rectangular dataframe of string cells.
///
/// Built column-first, filled row by row. Cell values can be anything that
/// implements `Display`; they are stringified on insertion. Every row must
/// have exactly one cell per column; ragged rows are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<ColumnName>,
    rows: Vec<Vec<String>>,
}

impl Frame {
    /// Create a frame with flat column names and no rows.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|c| ColumnName::Flat(c.into()))
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Create a frame with explicit (possibly nested) column names.
    pub fn with_columns(columns: Vec<ColumnName>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row of cells, stringifying each value.
    ///
    /// Fails with [`MdgenError::UnsupportedStructure`] if the cell count does
    /// not match the frame's column count, keeping the frame rectangular.
    pub fn push_row<I, C>(&mut self, cells: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = C>,
        C: Display,
    {
        let row: Vec<String> = cells.into_iter().map(|c| c.to_string()).collect();
        if row.len() != self.columns.len() {
            return Err(MdgenError::UnsupportedStructure(format!(
                "row has {} cells but the frame has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(self)
    }
}

impl Dataframe for Frame {
    fn column_names(&self) -> Vec<ColumnName> {
        self.columns.clone()
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, column: usize) -> String {
        self.rows[row][column].clone()
    }
}
