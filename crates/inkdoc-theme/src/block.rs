//! The closed set of semantic block kinds a theme can style.

use serde::{Deserialize, Serialize};

/// A semantic category of structured-document element.
///
/// This enumeration is closed: the document parser tags every block it
/// produces with one of these kinds, and a complete theme registers a rule
/// for each of them. Extending the set means adding a variant here, which
/// makes every exhaustive `match` in the codebase flag the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// Inline body text.
    Text,
    /// Inline link text.
    Link,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Paragraph,
    Blockquote,
    CodeBlock,
    Image,
    ListItem,
    /// The checkbox marker of a task-list item.
    TaskListMarker,
    Table,
    /// A single table cell; its rule sees the cell's row index.
    TableCell,
    ThematicBreak,
}

impl BlockKind {
    /// Every kind, for coverage checks.
    pub const ALL: [BlockKind; 17] = [
        BlockKind::Text,
        BlockKind::Link,
        BlockKind::Heading1,
        BlockKind::Heading2,
        BlockKind::Heading3,
        BlockKind::Heading4,
        BlockKind::Heading5,
        BlockKind::Heading6,
        BlockKind::Paragraph,
        BlockKind::Blockquote,
        BlockKind::CodeBlock,
        BlockKind::Image,
        BlockKind::ListItem,
        BlockKind::TaskListMarker,
        BlockKind::Table,
        BlockKind::TableCell,
        BlockKind::ThematicBreak,
    ];

    /// Stable lowerCamel name, matching the document model's vocabulary.
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Link => "link",
            BlockKind::Heading1 => "heading1",
            BlockKind::Heading2 => "heading2",
            BlockKind::Heading3 => "heading3",
            BlockKind::Heading4 => "heading4",
            BlockKind::Heading5 => "heading5",
            BlockKind::Heading6 => "heading6",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Blockquote => "blockquote",
            BlockKind::CodeBlock => "codeBlock",
            BlockKind::Image => "image",
            BlockKind::ListItem => "listItem",
            BlockKind::TaskListMarker => "taskListMarker",
            BlockKind::Table => "table",
            BlockKind::TableCell => "tableCell",
            BlockKind::ThematicBreak => "thematicBreak",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_covers_every_kind_once() {
        let unique: HashSet<_> = BlockKind::ALL.iter().collect();
        assert_eq!(unique.len(), BlockKind::ALL.len());
    }

    #[test]
    fn test_names_are_unique() {
        let unique: HashSet<_> = BlockKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(unique.len(), BlockKind::ALL.len());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(BlockKind::CodeBlock.to_string(), "codeBlock");
        assert_eq!(BlockKind::TaskListMarker.to_string(), "taskListMarker");
    }
}
