//! # inkdoc-theme — block-kind themes for structured document rendering
//!
//! `inkdoc-theme` is a declarative, composable styling engine: a theme maps
//! each semantic block kind of a structured document (headings, paragraphs,
//! blockquotes, code blocks, tables, ...) to a style rule, and an adaptive
//! color mechanism defers the light-versus-dark decision until a backend
//! resolves colors with the appearance mode it has detected.
//!
//! The crate styles; it does not parse or draw. The document parser that
//! produces the block tree and the rendering backend that interprets the
//! decoration tree are external collaborators (see `inkdoc-term` for a
//! terminal backend).
//!
//! ## Core Concepts
//!
//! - [`BlockKind`]: the closed set of semantic block categories
//! - [`Theme`]: the registry from block kind to [`StyleRule`], built with
//!   a consuming chain of `add` calls
//! - [`Rendered`]: the decoration tree a rule wraps block content in
//! - [`AdaptiveColor`]: a light/dark color pair resolved per render pass
//! - [`Length`]: `em`/`rem` measurements resolved against a [`Scale`]
//! - [`docc`]: the reference theme, covering every block kind
//!
//! ## Quick Start
//!
//! ```rust
//! use inkdoc_theme::{docc, BlockKind, ColorMode, RenderConfig, Rendered};
//!
//! let theme = docc();
//! theme.validate().unwrap();
//!
//! // The external renderer styles one block instance:
//! let block = theme
//!     .apply(
//!         BlockKind::Paragraph,
//!         RenderConfig::new(Rendered::text("Hello, world.")),
//!     )
//!     .unwrap();
//!
//! // ...and resolves any adaptive colors it finds against the current
//! // appearance mode, supplied at render time:
//! let text = inkdoc_theme::docc::palette::TEXT.resolve(ColorMode::Dark);
//! assert_eq!(text.to_rgba(), 0xf5f5_f7ff);
//! ```
//!
//! ## Building a Theme
//!
//! Each `add` call consumes the theme and returns the updated value, so
//! chains compose and partial themes can seed variants:
//!
//! ```rust
//! use inkdoc_theme::{docc, BlockKind, Length, Theme};
//!
//! let airy = docc().merge(Theme::new().add(BlockKind::Paragraph, |config| {
//!     config.into_content().margin(Length::em(1.6), Length::ZERO)
//! }));
//! assert!(airy.validate().is_ok());
//! ```
//!
//! ## Missing Rules Fail Fast
//!
//! A theme that is asked to style a kind it never covered returns
//! [`ThemeError::MissingRule`] before any styling happens; there is no
//! silent unstyled fallback unless a caller opts into
//! [`StyleRule::identity`] explicitly.

pub mod block;
pub mod color;
pub mod context;
pub mod docc;
mod error;
pub mod measure;
pub mod prelude;
pub mod render;
pub mod rule;
pub mod theme;

pub use block::BlockKind;
pub use color::{AdaptiveColor, ColorMode, Rgba};
pub use context::RenderConfig;
pub use docc::{docc, DOCC};
pub use error::ThemeError;
pub use measure::{Length, Scale};
pub use render::{Align, FontFamily, FontWeight, Rendered, TextAttributes};
pub use rule::StyleRule;
pub use theme::Theme;
