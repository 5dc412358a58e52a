//! Sections: named, ordered lists of block and table references.
//!
//! A section does not own any content. It records *references* into the
//! block and table stores, in the order they should appear, and the
//! generator resolves them at render time. One reserved section name serves
//! as the default target when the caller supplies none.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::block::BlockStore;
use crate::error::MdgenError;
use crate::table::TableStore;
use crate::Result;

/// Name of the reserved default section.
pub(crate) const DEFAULT_SECTION: &str = "_DEFAULT_SECTION_";

/// A reference to a named block or a named table.
///
/// This is a closed set: sections contain exactly these two kinds of
/// content, and render-time dispatch matches on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum SectionRef {
    /// Reference to a block in the block store
    Block(String),
    /// Reference to a table in the table store
    Table(String),
}

/// Store of zero or more named reference lists.
///
/// Sections are created lazily when first referenced. The same block or
/// table may be referenced any number of times, in any section.
#[derive(Debug, Clone, Default)]
pub struct SectionStore {
    sections: HashMap<String, Vec<SectionRef>>,
}

impl SectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an optional section name to a concrete one.
    pub(crate) fn resolve_name(name: Option<&str>) -> &str {
        name.unwrap_or(DEFAULT_SECTION)
    }

    /// References of a section, if it was ever created.
    pub fn get(&self, name: &str) -> Option<&[SectionRef]> {
        self.sections.get(name).map(|refs| refs.as_slice())
    }

    /// Append a block or table reference to a section.
    ///
    /// Exactly one of `block` and `table` must be given, and the referenced
    /// entity must already exist in its store. The section is created lazily;
    /// when `section` is `None` the default section is used.
    pub fn add_reference(
        &mut self,
        section: Option<&str>,
        block: Option<&str>,
        table: Option<&str>,
        blocks: &BlockStore,
        tables: &TableStore,
    ) -> Result<()> {
        let entry = match (block, table) {
            (Some(block_name), None) => {
                if !blocks.contains(block_name) {
                    return Err(MdgenError::UnknownReference {
                        kind: "block".to_string(),
                        name: block_name.to_string(),
                    });
                }
                SectionRef::Block(block_name.to_string())
            }
            (None, Some(table_name)) => {
                if !tables.contains(table_name) {
                    return Err(MdgenError::UnknownReference {
                        kind: "table".to_string(),
                        name: table_name.to_string(),
                    });
                }
                SectionRef::Table(table_name.to_string())
            }
            _ => return Err(MdgenError::AmbiguousReference),
        };

        let name = Self::resolve_name(section);
        self.sections.entry(name.to_string()).or_default().push(entry);
        Ok(())
    }

    /// Reset a section to the empty state, creating it if absent.
    pub fn reset(&mut self, name: &str) {
        self.sections.insert(name.to_string(), Vec::new());
    }
}
