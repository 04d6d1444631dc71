//! Style rules: the stored transformations a theme maps block kinds to.

use std::fmt;
use std::sync::Arc;

use crate::context::RenderConfig;
use crate::render::Rendered;

/// A transformation from a block's render configuration to its decorated
/// output.
///
/// Rules come in two shapes, stored uniformly:
///
/// - *configuration-driven* rules inspect the per-instance data in the
///   [`RenderConfig`] (a table cell's row index, say);
/// - *static* rules ignore it and apply a constant decoration.
///
/// A rule is an immutable shared function value: cloning is cheap, and a
/// built theme can be read from any number of render passes concurrently.
#[derive(Clone)]
pub struct StyleRule(Arc<dyn Fn(RenderConfig) -> Rendered + Send + Sync>);

impl StyleRule {
    /// Wraps a rule function.
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(RenderConfig) -> Rendered + Send + Sync + 'static,
    {
        Self(Arc::new(rule))
    }

    /// The documented fallback rule: passes content through unstyled.
    ///
    /// Lookup on a [`Theme`](crate::Theme) fails fast on a missing kind;
    /// callers preferring lenient behavior substitute this explicitly.
    pub fn identity() -> Self {
        Self::new(RenderConfig::into_content)
    }

    /// Applies the rule to one block instance.
    pub fn apply(&self, config: RenderConfig) -> Rendered {
        (self.0)(config)
    }

    /// True if both values share the same underlying rule function.
    ///
    /// Rules have no structural equality; this is identity comparison,
    /// useful for asserting that a registry entry was left untouched.
    pub fn same_rule(&self, other: &StyleRule) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StyleRule(..)")
    }
}
