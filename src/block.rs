//! Named blocks of pre-formatted text lines.
//!
//! A block is an ordered sequence of lines that were already formatted by a
//! markup dialect (headings, paragraphs, code fences). The store only
//! appends and joins; it never interprets line content.

use std::collections::HashMap;

use log::trace;

use crate::error::MdgenError;
use crate::Result;

/// Store of zero or more named line sequences.
///
/// Blocks are created lazily on first append. Each formatting call appends a
/// fixed set of lines, so a block is never left partially written.
#[derive(Debug, Clone, Default)]
pub struct BlockStore {
    blocks: HashMap<String, Vec<String>>,
}

impl BlockStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a block with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    /// Append lines to a block, creating the block if needed.
    pub fn append_lines<I>(&mut self, name: &str, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        trace!("block '{}': appending lines", name);
        self.blocks
            .entry(name.to_string())
            .or_default()
            .extend(lines);
    }

    /// Render a block: all lines joined by line breaks, plus a trailing one.
    pub fn render(&self, name: &str) -> Result<String> {
        let lines = self
            .blocks
            .get(name)
            .ok_or_else(|| MdgenError::UnknownBlock(name.to_string()))?;
        Ok(format!("{}\n", lines.join("\n")))
    }

    /// Reset a block to the empty state, creating it if absent.
    pub fn reset(&mut self, name: &str) {
        self.blocks.insert(name.to_string(), Vec::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_creates_block_lazily() {
        let mut store = BlockStore::new();
        assert!(!store.contains("intro"));
        store.append_lines("intro", vec!["a".to_string()]);
        assert!(store.contains("intro"));
    }

    #[test]
    fn test_render_joins_with_trailing_newline() {
        let mut store = BlockStore::new();
        store.append_lines("b", vec!["one".to_string(), "two".to_string()]);
        store.append_lines("b", vec!["three".to_string()]);
        assert_eq!(store.render("b").unwrap(), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_render_unknown_block_fails() {
        let store = BlockStore::new();
        let err = store.render("missing").unwrap_err();
        assert!(matches!(err, MdgenError::UnknownBlock(name) if name == "missing"));
    }

    #[test]
    fn test_reset_empties_block() {
        let mut store = BlockStore::new();
        store.append_lines("b", vec!["gone".to_string()]);
        store.reset("b");
        assert_eq!(store.render("b").unwrap(), "\n");
    }
}
