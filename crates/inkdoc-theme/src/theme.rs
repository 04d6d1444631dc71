//! Theme registry: the mapping from block kind to style rule.
//!
//! A theme is built once with chained [`add`](Theme::add) calls and then
//! treated as frozen. Each call consumes the theme and returns the updated
//! value, so partially built themes can be shared and reused as bases for
//! variants without aliasing hazards:
//!
//! ```rust
//! use inkdoc_theme::{BlockKind, Length, Theme};
//!
//! let theme = Theme::named("minimal")
//!     .add(BlockKind::Paragraph, |config| {
//!         config.into_content().margin(Length::em(0.8), Length::ZERO)
//!     })
//!     .add(BlockKind::ListItem, |config| {
//!         config.into_content().margin(Length::em(0.8), Length::ZERO)
//!     });
//!
//! assert!(theme.rule(BlockKind::Paragraph).is_some());
//! ```
//!
//! # Lookup policy
//!
//! A missing entry is a configuration error, not a silent no-op.
//! [`apply`](Theme::apply) fails fast with
//! [`ThemeError::MissingRule`] before any styling happens. A renderer that
//! prefers to degrade to unstyled output substitutes
//! [`StyleRule::identity`] explicitly at its own call site. Test suites
//! should assert full coverage up front with [`validate`](Theme::validate).
//!
//! # Concurrency
//!
//! Construction is single-threaded by nature of the consuming builder.
//! Once published, a theme is safe for concurrent lookup from any number
//! of render passes: rules are shared immutable function values and
//! lookups never mutate the registry.

use std::collections::HashMap;

use crate::block::BlockKind;
use crate::context::RenderConfig;
use crate::error::ThemeError;
use crate::render::Rendered;
use crate::rule::StyleRule;

/// A named mapping from [`BlockKind`] to [`StyleRule`].
#[derive(Debug, Clone, Default)]
pub struct Theme {
    name: Option<String>,
    rules: HashMap<BlockKind, StyleRule>,
}

impl Theme {
    /// Creates an empty, unnamed theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            rules: HashMap::new(),
        }
    }

    /// Sets the name on this theme, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the theme name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the rule for one block kind, returning the updated theme.
    ///
    /// Calls may be chained in any order; the result is independent of
    /// order except that a later call for the same kind replaces the
    /// earlier one. Entries for every other kind are unaffected.
    pub fn add<F>(self, kind: BlockKind, rule: F) -> Self
    where
        F: Fn(RenderConfig) -> Rendered + Send + Sync + 'static,
    {
        self.add_rule(kind, StyleRule::new(rule))
    }

    /// Sets an already-wrapped rule for one block kind.
    ///
    /// Useful when two kinds share a rule value, or when merging rules
    /// taken from another theme.
    pub fn add_rule(mut self, kind: BlockKind, rule: StyleRule) -> Self {
        self.rules.insert(kind, rule);
        self
    }

    /// Returns the stored rule for a kind, or `None` if unset.
    pub fn rule(&self, kind: BlockKind) -> Option<&StyleRule> {
        self.rules.get(&kind)
    }

    /// Looks up the rule for `kind` and applies it to one block instance.
    ///
    /// # Errors
    ///
    /// [`ThemeError::MissingRule`] if the theme never registered a rule
    /// for this kind.
    pub fn apply(&self, kind: BlockKind, config: RenderConfig) -> Result<Rendered, ThemeError> {
        match self.rules.get(&kind) {
            Some(rule) => Ok(rule.apply(config)),
            None => Err(ThemeError::MissingRule(kind)),
        }
    }

    /// Checks that every block kind has a rule.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Incomplete`] listing the uncovered kinds.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let missing: Vec<BlockKind> = BlockKind::ALL
            .iter()
            .copied()
            .filter(|kind| !self.rules.contains_key(kind))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ThemeError::Incomplete { missing })
        }
    }

    /// Merges another theme into this one.
    ///
    /// Rules from `other` take precedence, so a base theme can be layered
    /// under a variant's overrides. The name of `self` is kept.
    pub fn merge(mut self, other: Theme) -> Self {
        self.rules.extend(other.rules);
        self
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::Length;
    use crate::render::{FontWeight, TextAttributes};

    fn passthrough(config: RenderConfig) -> Rendered {
        config.into_content()
    }

    #[test]
    fn test_new_is_empty() {
        let theme = Theme::new();
        assert!(theme.is_empty());
        assert_eq!(theme.len(), 0);
        assert_eq!(theme.name(), None);
    }

    #[test]
    fn test_named() {
        assert_eq!(Theme::named("docc").name(), Some("docc"));
        assert_eq!(Theme::new().with_name("docc").name(), Some("docc"));
    }

    #[test]
    fn test_add_registers_rule() {
        let theme = Theme::new().add(BlockKind::Paragraph, passthrough);
        assert_eq!(theme.len(), 1);
        assert!(theme.rule(BlockKind::Paragraph).is_some());
        assert!(theme.rule(BlockKind::Heading1).is_none());
    }

    #[test]
    fn test_last_write_wins_for_same_kind() {
        let theme = Theme::new()
            .add(BlockKind::Heading1, |config| {
                config.into_content().margin(Length::em(0.8), Length::ZERO)
            })
            .add(BlockKind::Heading1, passthrough);

        let output = theme
            .apply(BlockKind::Heading1, RenderConfig::new(Rendered::text("h")))
            .unwrap();
        assert_eq!(output, Rendered::text("h"));
    }

    #[test]
    fn test_overwrite_leaves_other_kinds_untouched() {
        let base = Theme::new()
            .add(BlockKind::Paragraph, passthrough)
            .add(BlockKind::Heading1, passthrough);
        let paragraph_before = base.rule(BlockKind::Paragraph).unwrap().clone();

        let rebuilt = base
            .add(BlockKind::Heading1, |config| {
                config
                    .into_content()
                    .styled(TextAttributes::new().weight(FontWeight::Bold))
            })
            .add(BlockKind::Heading1, passthrough);

        assert!(rebuilt
            .rule(BlockKind::Paragraph)
            .unwrap()
            .same_rule(&paragraph_before));
    }

    #[test]
    fn test_order_independence_across_kinds() {
        let forward = Theme::new()
            .add(BlockKind::Text, passthrough)
            .add(BlockKind::Link, passthrough);
        let backward = Theme::new()
            .add(BlockKind::Link, passthrough)
            .add(BlockKind::Text, passthrough);

        for kind in [BlockKind::Text, BlockKind::Link] {
            let config = RenderConfig::new(Rendered::text("x"));
            assert_eq!(
                forward.apply(kind, config.clone()).unwrap(),
                backward.apply(kind, config).unwrap()
            );
        }
    }

    #[test]
    fn test_apply_missing_rule_fails_fast() {
        let theme = Theme::new();
        let err = theme
            .apply(BlockKind::Blockquote, RenderConfig::new(Rendered::text("q")))
            .unwrap_err();
        assert_eq!(err, ThemeError::MissingRule(BlockKind::Blockquote));
    }

    #[test]
    fn test_validate_reports_missing_kinds() {
        let theme = Theme::new().add(BlockKind::Text, passthrough);
        match theme.validate() {
            Err(ThemeError::Incomplete { missing }) => {
                assert_eq!(missing.len(), BlockKind::ALL.len() - 1);
                assert!(!missing.contains(&BlockKind::Text));
            }
            other => panic!("expected Incomplete, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_full_coverage() {
        let mut theme = Theme::new();
        for kind in BlockKind::ALL {
            theme = theme.add(kind, passthrough);
        }
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = Theme::named("base")
            .add(BlockKind::Text, passthrough)
            .add(BlockKind::Paragraph, passthrough);
        let variant = Theme::new().add(BlockKind::Paragraph, |config| {
            config.into_content().margin(Length::em(1.6), Length::ZERO)
        });
        let variant_rule = variant.rule(BlockKind::Paragraph).unwrap().clone();

        let merged = base.merge(variant);
        assert_eq!(merged.name(), Some("base"));
        assert_eq!(merged.len(), 2);
        assert!(merged
            .rule(BlockKind::Paragraph)
            .unwrap()
            .same_rule(&variant_rule));
    }

    #[test]
    fn test_shared_rule_between_kinds() {
        let bullet = StyleRule::new(|config| config.into_content());
        let theme = Theme::new()
            .add_rule(BlockKind::ListItem, bullet.clone())
            .add_rule(BlockKind::TaskListMarker, bullet);

        assert!(theme
            .rule(BlockKind::ListItem)
            .unwrap()
            .same_rule(theme.rule(BlockKind::TaskListMarker).unwrap()));
    }
}
