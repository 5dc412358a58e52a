//! # mdgen
//!
//! A small document-assembly library: build named text blocks (headings,
//! paragraphs, code fences) and named tables, group them into named
//! sections, and render any section to a markup string.
//!
//! ## Overview
//!
//! Content accumulates incrementally in three name-keyed stores:
//!
//! - **Blocks**: ordered sequences of pre-formatted lines
//! - **Tables**: header + rows with per-column widths tracked as cells
//!   arrive, so headers may arrive after rows and rendering is a pure
//!   formatting pass
//! - **Sections**: ordered lists of block/table references, rendered by
//!   concatenation
//!
//! Tables render as Pandoc-style grid tables (`+---+---+` rules, `|`
//! borders, `===` header separator). The [`DocGenerator`] trait defines the
//! dialect capability set; [`MarkdownGenerator`] is the Pandoc markdown
//! implementation.
//!
//! ## Example
//!
//! ```rust
//! use mdgen::{DocGenerator, MarkdownGenerator};
//!
//! let mut doc = MarkdownGenerator::new();
//!
//! // Prose goes into named blocks.
//! doc.h1("intro", "About");
//! doc.paragraph("intro", "This document lists famous actors.");
//!
//! // Tables check column counts and track widths as content arrives.
//! doc.add_header("actors", ["name", "surname"]).unwrap();
//! doc.add_row("actors", ["john", "travolta"]).unwrap();
//!
//! // Sections stitch blocks and tables together, in order.
//! doc.add_to_section(None, Some("intro"), None).unwrap();
//! doc.add_to_section(None, None, Some("actors")).unwrap();
//!
//! let text = doc.render_section(None).unwrap();
//! assert!(text.contains("# About"));
//! assert!(text.contains("|john|travolta|"));
//! ```
//!
//! Tabular data from elsewhere can be ingested wholesale through the
//! [`Dataframe`] trait; see [`Frame`] for the built-in implementation.

pub mod block;
pub mod error;
pub mod frame;
pub mod generator;
pub mod output;
pub mod section;
pub mod table;

pub use block::BlockStore;
pub use error::MdgenError;
pub use frame::{ColumnName, Dataframe, Frame, IngestOptions};
pub use generator::{DocGenerator, MarkdownGenerator};
pub use output::grid::render_grid;
pub use section::{SectionRef, SectionStore};
pub use table::{Table, TableStore};

/// Result type for mdgen operations
pub type Result<T> = std::result::Result<T, MdgenError>;
