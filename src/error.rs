//! Error types for mdgen

use thiserror::Error;

/// Errors that can occur while assembling or rendering a document
#[derive(Error, Debug)]
pub enum MdgenError {
    /// A header was added to a table that already has one
    #[error("table '{table}' already has a header")]
    DuplicateHeader { table: String },

    /// A header or row disagrees with the table's established column count
    #[error("table '{table}' has {expected} columns but {actual} cells were given")]
    ColumnCountMismatch {
        table: String,
        expected: usize,
        actual: usize,
    },

    /// A cell value contains a line break
    #[error("cell '{cell}' contains a line break; multi-line cells are not supported")]
    InvalidCell { cell: String },

    /// Ingestion input with a shape that cannot be represented: hierarchical
    /// (multi-level) column names, or a row whose cell count does not match
    /// the column list
    #[error("unsupported tabular structure: {0}")]
    UnsupportedStructure(String),

    /// Ingestion targets a table name that already exists
    #[error("table '{0}' already exists")]
    DuplicateTable(String),

    /// A section reference named zero or two of {block, table}
    #[error("a section reference must name exactly one of a block or a table")]
    AmbiguousReference,

    /// A section reference names a block or table that does not exist
    #[error("cannot reference unknown {kind} '{name}'")]
    UnknownReference { kind: String, name: String },

    /// Render requested for a block that was never created
    #[error("unknown block: '{0}'")]
    UnknownBlock(String),

    /// Render requested for a table that was never created
    #[error("unknown table: '{0}'")]
    UnknownTable(String),
}
