//! The declarative output a style rule produces.
//!
//! A rule does not draw anything. It wraps the block's already-rendered
//! content in a tree of decoration nodes — margins, padding, fills,
//! borders, text attributes — which a rendering backend then interprets
//! with whatever primitives it has. Nesting order is semantic: an outer
//! node bounds an inner one, so a background placed outside a scroll
//! container clips the scrollable region rather than scrolling with it.
//!
//! Decorations are applied with chained combinators, innermost first:
//!
//! ```rust
//! use inkdoc_theme::{AdaptiveColor, Length, Rendered, Rgba};
//!
//! let fill = AdaptiveColor::uniform(Rgba::from_rgba(0xf5f5_f7ff));
//! let block = Rendered::text("let x = 1;")
//!     .scrollable()
//!     .background(fill)
//!     .clipped(15.0)
//!     .margin(Length::em(0.8), Length::ZERO);
//! ```

use serde::{Deserialize, Serialize};

use crate::color::AdaptiveColor;
use crate::measure::Length;

/// Horizontal placement of content inside a wider container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Align {
    Leading,
    Center,
    Trailing,
}

/// Font weight, in the steps themes actually use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    Regular,
    Semibold,
    Bold,
}

/// Font family variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    Default,
    Monospaced,
}

/// Text attributes a rule may set on its content.
///
/// Every field is optional and the builder is additive: setting the weight
/// leaves a previously set size in place. Unset fields inherit from
/// whatever encloses the block.
///
/// ```rust
/// use inkdoc_theme::{FontWeight, Length, TextAttributes};
///
/// let attrs = TextAttributes::new()
///     .size(Length::em(2.0))
///     .weight(FontWeight::Semibold);
/// assert_eq!(attrs.size, Some(Length::em(2.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextAttributes {
    pub weight: Option<FontWeight>,
    pub size: Option<Length>,
    pub family: Option<FontFamily>,
    pub color: Option<AdaptiveColor>,
}

impl TextAttributes {
    /// Attributes with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn size(mut self, size: Length) -> Self {
        self.size = Some(size);
        self
    }

    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = Some(family);
        self
    }

    pub fn color(mut self, color: AdaptiveColor) -> Self {
        self.color = Some(color);
        self
    }

    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layers these attributes over inherited ones.
    ///
    /// Fields set here win; unset fields fall through to `inherited`.
    pub fn over(self, inherited: TextAttributes) -> TextAttributes {
        TextAttributes {
            weight: self.weight.or(inherited.weight),
            size: self.size.or(inherited.size),
            family: self.family.or(inherited.family),
            color: self.color.or(inherited.color),
        }
    }
}

/// A block's rendered output: leaf content wrapped in decoration nodes.
///
/// The `Content` leaf carries the inline content the document renderer has
/// already produced for the block; rules transform it without inspecting
/// it. `Divider` is the one self-producing leaf, used by thematic breaks.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Already-rendered inline content, opaque to the styling engine.
    Content(String),
    /// A horizontal rule in the given color.
    Divider { color: AdaptiveColor },
    /// Vertical spacing outside the block. Margins of adjacent blocks do
    /// not collapse; each block contributes its own.
    Margin {
        top: Length,
        bottom: Length,
        child: Box<Rendered>,
    },
    /// Spacing inside the block's decoration.
    Padding {
        vertical: Length,
        horizontal: Length,
        child: Box<Rendered>,
    },
    /// Fill behind the child.
    Background {
        color: AdaptiveColor,
        child: Box<Rendered>,
    },
    /// Stroke around the child, drawn over any fill beneath it.
    Border {
        color: AdaptiveColor,
        child: Box<Rendered>,
    },
    /// Rounded-corner clipping of everything inside.
    Clip { radius: f32, child: Box<Rendered> },
    /// Horizontally scrollable containment. The container's bounds stay
    /// fixed; only the inner content extent grows.
    Scroll { child: Box<Rendered> },
    /// Text attributes applied to all content inside.
    Styled {
        attrs: TextAttributes,
        child: Box<Rendered>,
    },
    /// Extra leading between wrapped lines.
    LineSpacing { amount: Length, child: Box<Rendered> },
    /// A minimum width with the child aligned inside it.
    MinWidth {
        width: Length,
        align: Align,
        child: Box<Rendered>,
    },
    /// Expansion to the full available width.
    FillWidth { align: Align, child: Box<Rendered> },
}

impl Rendered {
    /// Leaf content from an already-rendered string.
    pub fn text(content: impl Into<String>) -> Self {
        Rendered::Content(content.into())
    }

    pub fn margin(self, top: Length, bottom: Length) -> Self {
        Rendered::Margin {
            top,
            bottom,
            child: Box::new(self),
        }
    }

    /// Uniform padding on all sides.
    pub fn padding(self, length: Length) -> Self {
        self.padding_axes(length, length)
    }

    pub fn padding_axes(self, vertical: Length, horizontal: Length) -> Self {
        Rendered::Padding {
            vertical,
            horizontal,
            child: Box::new(self),
        }
    }

    pub fn background(self, color: AdaptiveColor) -> Self {
        Rendered::Background {
            color,
            child: Box::new(self),
        }
    }

    pub fn border(self, color: AdaptiveColor) -> Self {
        Rendered::Border {
            color,
            child: Box::new(self),
        }
    }

    pub fn clipped(self, radius: f32) -> Self {
        Rendered::Clip {
            radius,
            child: Box::new(self),
        }
    }

    pub fn scrollable(self) -> Self {
        Rendered::Scroll {
            child: Box::new(self),
        }
    }

    pub fn styled(self, attrs: TextAttributes) -> Self {
        Rendered::Styled {
            attrs,
            child: Box::new(self),
        }
    }

    pub fn line_spacing(self, amount: Length) -> Self {
        Rendered::LineSpacing {
            amount,
            child: Box::new(self),
        }
    }

    pub fn min_width(self, width: Length, align: Align) -> Self {
        Rendered::MinWidth {
            width,
            align,
            child: Box::new(self),
        }
    }

    pub fn fill_width(self, align: Align) -> Self {
        Rendered::FillWidth {
            align,
            child: Box::new(self),
        }
    }

    /// The node directly inside this one, if any.
    pub fn child(&self) -> Option<&Rendered> {
        match self {
            Rendered::Content(_) | Rendered::Divider { .. } => None,
            Rendered::Margin { child, .. }
            | Rendered::Padding { child, .. }
            | Rendered::Background { child, .. }
            | Rendered::Border { child, .. }
            | Rendered::Clip { child, .. }
            | Rendered::Scroll { child }
            | Rendered::Styled { child, .. }
            | Rendered::LineSpacing { child, .. }
            | Rendered::MinWidth { child, .. }
            | Rendered::FillWidth { child, .. } => Some(child),
        }
    }

    /// The outermost margin node's lengths, or zero if the tree has none.
    ///
    /// Backends lay blocks out with this, adding each block's own top and
    /// bottom spacing without collapsing against neighbors.
    pub fn margins(&self) -> (Length, Length) {
        let mut node = Some(self);
        while let Some(current) = node {
            if let Rendered::Margin { top, bottom, .. } = current {
                return (*top, *bottom);
            }
            node = current.child();
        }
        (Length::ZERO, Length::ZERO)
    }

    /// Walks inward looking for a node matching `predicate`, returning the
    /// depth of the first hit.
    pub fn find_depth(&self, predicate: impl Fn(&Rendered) -> bool) -> Option<usize> {
        let mut node = Some(self);
        let mut depth = 0;
        while let Some(current) = node {
            if predicate(current) {
                return Some(depth);
            }
            node = current.child();
            depth += 1;
        }
        None
    }
}
