//! Document generators: the capability trait and the markdown dialect.
//!
//! [`DocGenerator`] is the capability set every markup dialect provides:
//! heading levels 1-3, paragraphs, code blocks, and block/section rendering.
//! A dialect is a concrete type owning its own stores — new dialects are new
//! types, nothing is shared between generator instances.
//!
//! [`MarkdownGenerator`] is the Pandoc markdown dialect, and additionally
//! exposes the table and ingestion entry points.

use log::debug;

use crate::block::BlockStore;
use crate::error::MdgenError;
use crate::frame::{ingest, Dataframe, IngestOptions};
use crate::output::grid::render_grid;
use crate::section::{SectionRef, SectionStore, DEFAULT_SECTION};
use crate::table::{Table, TableStore};
use crate::Result;

/// The capability set of a markup dialect.
///
/// Formatting operations append pre-formatted lines to a named block;
/// rendering operations turn blocks and sections into markup strings.
pub trait DocGenerator {
    /// Append a level-1 heading to a block.
    fn h1(&mut self, block_name: &str, text: &str);

    /// Append a level-2 heading to a block.
    fn h2(&mut self, block_name: &str, text: &str);

    /// Append a level-3 heading to a block.
    fn h3(&mut self, block_name: &str, text: &str);

    /// Append a paragraph to a block.
    fn paragraph(&mut self, block_name: &str, text: &str);

    /// Append a fenced code block to a block.
    fn codeblock(&mut self, block_name: &str, text: &str);

    /// Render a block as a markup string.
    fn render_textblock(&self, block_name: &str) -> Result<String>;

    /// Render a section, or the default section when unnamed.
    ///
    /// Rendering the default section clears it afterward; named sections are
    /// left intact. A section that was never created renders as empty.
    fn render_section(&mut self, section_name: Option<&str>) -> Result<String>;
}

/// Pandoc markdown generator.
///
/// Owns a block store, a table store and a section store. Headings use
/// `#` markers, code blocks use `~~~~~~` fences, and tables render as grid
/// tables (see [`crate::output::grid`]).
#[derive(Debug, Clone, Default)]
pub struct MarkdownGenerator {
    blocks: BlockStore,
    tables: TableStore,
    sections: SectionStore,
}

impl MarkdownGenerator {
    /// Create an empty generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Add a header to a table, creating the table if needed.
    ///
    /// See [`TableStore::add_header`] for the invariants.
    pub fn add_header<I, S>(&mut self, table_name: &str, header: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables
            .add_header(table_name, header.into_iter().map(Into::into).collect())
    }

    /// Add a data row to a table, creating the table if needed.
    ///
    /// See [`TableStore::add_row`] for the invariants.
    pub fn add_row<I, S>(&mut self, table_name: &str, row: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables
            .add_row(table_name, row.into_iter().map(Into::into).collect())
    }

    /// Ingest a dataframe as a new table.
    ///
    /// Fails if `table_name` already exists, if the frame has multi-level
    /// column names, or if a converted cell still contains a line break.
    pub fn ingest_frame<D: Dataframe>(
        &mut self,
        table_name: &str,
        frame: &D,
        options: &IngestOptions,
    ) -> Result<()> {
        ingest(&mut self.tables, table_name, frame, options)
    }

    /// Add a block or table reference to a section.
    ///
    /// Exactly one of `block_name`/`table_name` must be given and must name
    /// an existing block/table. The default section is used when
    /// `section_name` is `None`.
    pub fn add_to_section(
        &mut self,
        section_name: Option<&str>,
        block_name: Option<&str>,
        table_name: Option<&str>,
    ) -> Result<()> {
        self.sections.add_reference(
            section_name,
            block_name,
            table_name,
            &self.blocks,
            &self.tables,
        )
    }

    /// Render a table as a grid-table string.
    pub fn render_table(&self, table_name: &str) -> Result<String> {
        let table = self
            .tables
            .get(table_name)
            .ok_or_else(|| MdgenError::UnknownTable(table_name.to_string()))?;
        Ok(render_grid(table))
    }

    /// Append a heading with the given number of `#` markers.
    fn heading(&mut self, block_name: &str, level: usize, text: &str) {
        let markers = "#".repeat(level);
        self.blocks.append_lines(
            block_name,
            [String::new(), format!("{} {}", markers, text)],
        );
    }
}

impl DocGenerator for MarkdownGenerator {
    fn h1(&mut self, block_name: &str, text: &str) {
        self.heading(block_name, 1, text);
    }

    fn h2(&mut self, block_name: &str, text: &str) {
        self.heading(block_name, 2, text);
    }

    fn h3(&mut self, block_name: &str, text: &str) {
        self.heading(block_name, 3, text);
    }

    fn paragraph(&mut self, block_name: &str, text: &str) {
        self.blocks
            .append_lines(block_name, [String::new(), text.to_string()]);
    }

    fn codeblock(&mut self, block_name: &str, text: &str) {
        self.blocks.append_lines(
            block_name,
            [
                String::new(),
                "~~~~~~".to_string(),
                text.to_string(),
                "~~~~~~".to_string(),
            ],
        );
    }

    fn render_textblock(&self, block_name: &str) -> Result<String> {
        self.blocks.render(block_name)
    }

    fn render_section(&mut self, section_name: Option<&str>) -> Result<String> {
        let name = SectionStore::resolve_name(section_name);
        debug!("rendering section '{}'", name);

        let mut pieces = Vec::new();
        if let Some(refs) = self.sections.get(name) {
            for entry in refs {
                let piece = match entry {
                    SectionRef::Block(block_name) => self.blocks.render(block_name)?,
                    SectionRef::Table(table_name) => self.render_table(table_name)?,
                };
                pieces.push(piece);
            }
        }

        // Repeated default-section renders must not replay earlier content.
        if name == DEFAULT_SECTION {
            self.sections.reset(name);
        }

        Ok(pieces.join("\n"))
    }
}
