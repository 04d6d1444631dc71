//! Per-invocation configuration handed to a style rule.
//!
//! The external renderer builds a [`RenderConfig`] for each block instance
//! it is about to style: the block's already-rendered content, plus any
//! per-instance data a rule might branch on. Today that data is the
//! zero-based row index of a table cell, which the reference theme uses to
//! bold header rows.

use crate::render::Rendered;

/// The bundle a style rule receives at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    content: Rendered,
    row: Option<usize>,
}

impl RenderConfig {
    /// Configuration for an ordinary block: just its rendered content.
    pub fn new(content: Rendered) -> Self {
        Self { content, row: None }
    }

    /// Configuration for a table cell in the given zero-based row.
    pub fn table_cell(content: Rendered, row: usize) -> Self {
        Self {
            content,
            row: Some(row),
        }
    }

    /// The cell's zero-based row index, when styling a table cell.
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    /// Borrows the rendered content.
    pub fn content(&self) -> &Rendered {
        &self.content
    }

    /// Takes ownership of the rendered content for wrapping.
    pub fn into_content(self) -> Rendered {
        self.content
    }
}
