//! # inkdoc-term — terminal backend for inkdoc themes
//!
//! The styling core in `inkdoc-theme` is platform-agnostic: rules produce
//! a declarative decoration tree and adaptive colors wait for an explicit
//! appearance mode. This crate is the thin adapter that closes the loop on
//! a terminal:
//!
//! - [`detect_color_mode`] asks the OS whether the user prefers light or
//!   dark, projecting the answer onto the core's closed two-mode domain
//!   ([`set_mode_detector`] overrides it for tests);
//! - [`TermRenderer`] interprets decoration trees as ANSI text at a fixed
//!   column width.
//!
//! ## Quick Start
//!
//! ```rust
//! use inkdoc_term::{detect_color_mode, TermRenderer};
//! use inkdoc_theme::{docc, BlockKind, RenderConfig, Rendered};
//!
//! let renderer = TermRenderer::new(detect_color_mode());
//! let theme = docc();
//!
//! let output = renderer
//!     .render_document(
//!         &theme,
//!         [
//!             (BlockKind::Heading1, RenderConfig::new(Rendered::text("Title"))),
//!             (BlockKind::Paragraph, RenderConfig::new(Rendered::text("Body."))),
//!         ],
//!     )
//!     .unwrap();
//! println!("{output}");
//! ```

mod ansi;
mod mode;

pub use ansi::{ansi256, TermRenderer};
pub use mode::{detect_color_mode, set_mode_detector};
