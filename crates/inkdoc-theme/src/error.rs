//! Error types for theme configuration.
//!
//! Everything here is a configuration defect to fix before shipping a
//! theme. Rules and color resolution are pure and total, so no error can
//! arise from them at render time; the only failure mode is asking a theme
//! for a kind it never covered.

use std::fmt;

use crate::block::BlockKind;

/// Error type for theme lookup and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A block of this kind was encountered but the theme has no rule for
    /// it. Surfaced before any styling happens (fail-fast policy).
    MissingRule(BlockKind),

    /// Validation found kinds with no registered rule.
    Incomplete { missing: Vec<BlockKind> },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::MissingRule(kind) => {
                write!(f, "no style rule registered for block kind `{kind}`")
            }
            ThemeError::Incomplete { missing } => {
                let names: Vec<&str> = missing.iter().map(|k| k.name()).collect();
                write!(f, "theme is missing rules for: {}", names.join(", "))
            }
        }
    }
}

impl std::error::Error for ThemeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rule_display() {
        let err = ThemeError::MissingRule(BlockKind::CodeBlock);
        assert!(err.to_string().contains("codeBlock"));
    }

    #[test]
    fn test_incomplete_display_lists_kinds() {
        let err = ThemeError::Incomplete {
            missing: vec![BlockKind::Table, BlockKind::TableCell],
        };
        let message = err.to_string();
        assert!(message.contains("table"));
        assert!(message.contains("tableCell"));
    }
}
