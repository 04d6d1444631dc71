//! Convenient imports for theme authoring.
//!
//! ```rust
//! use inkdoc_theme::prelude::*;
//!
//! let theme = Theme::named("plain").add(BlockKind::Paragraph, |config| {
//!     config.into_content().margin(Length::em(0.8), Length::ZERO)
//! });
//! ```

pub use crate::block::BlockKind;
pub use crate::color::{AdaptiveColor, ColorMode, Rgba};
pub use crate::context::RenderConfig;
pub use crate::error::ThemeError;
pub use crate::measure::{Length, Scale};
pub use crate::render::{Align, FontFamily, FontWeight, Rendered, TextAttributes};
pub use crate::rule::StyleRule;
pub use crate::theme::Theme;
