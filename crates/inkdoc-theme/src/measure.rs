//! Relative measurements in `em` and `rem` units.
//!
//! Theme values are written in font-relative units so a theme scales with
//! whatever base size the host renderer picks:
//!
//! - `em` — relative to the current font size (a heading's own size, say)
//! - `rem` — relative to the root font size of the document
//!
//! The two unit kinds are not directly comparable; arithmetic between them
//! is only meaningful after each resolves against its base via a [`Scale`]:
//!
//! ```rust
//! use inkdoc_theme::{Length, Scale};
//!
//! let scale = Scale::new(16.0).with_font_size(32.0);
//! assert_eq!(Length::em(0.5).resolve(&scale), 16.0);
//! assert_eq!(Length::rem(0.5).resolve(&scale), 8.0);
//! ```

use serde::{Deserialize, Serialize};

/// A length relative to a font-size base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    /// Multiple of the current font size.
    Em(f32),
    /// Multiple of the root font size.
    Rem(f32),
}

impl Length {
    /// Exact zero, resolving to zero under every scale.
    pub const ZERO: Length = Length::Em(0.0);

    /// A length in `em` units.
    pub const fn em(value: f32) -> Self {
        Length::Em(value)
    }

    /// A length in `rem` units.
    pub const fn rem(value: f32) -> Self {
        Length::Rem(value)
    }

    /// Resolves against the given scale context.
    pub fn resolve(self, scale: &Scale) -> f32 {
        match self {
            Length::Em(value) => value * scale.font_size,
            Length::Rem(value) => value * scale.root_size,
        }
    }

    /// True if this length resolves to zero under every scale.
    pub fn is_zero(self) -> bool {
        match self {
            Length::Em(value) | Length::Rem(value) => value == 0.0,
        }
    }
}

/// The base sizes relative lengths resolve against.
///
/// The external renderer owns this: it knows the document's root size and
/// the font size in effect for the element being measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    /// Root font size of the document.
    pub root_size: f32,
    /// Font size currently in effect.
    pub font_size: f32,
}

impl Scale {
    /// A scale whose current font size equals the root size.
    pub const fn new(root_size: f32) -> Self {
        Self {
            root_size,
            font_size: root_size,
        }
    }

    /// Replaces the current font size, keeping the root.
    pub const fn with_font_size(self, font_size: f32) -> Self {
        Self {
            root_size: self.root_size,
            font_size,
        }
    }
}

impl Default for Scale {
    /// A unit scale: one `em` and one `rem` both resolve to `1.0`.
    fn default() -> Self {
        Self::new(1.0)
    }
}
