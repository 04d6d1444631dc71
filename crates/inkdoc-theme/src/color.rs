//! Adaptive color values for light/dark display modes.
//!
//! Colors in a theme are defined once, at theme-construction time, as an
//! [`AdaptiveColor`] pair. Nothing is resolved until a rendering backend
//! asks for a concrete value with the mode it has detected:
//!
//! ```rust
//! use inkdoc_theme::{AdaptiveColor, ColorMode, Rgba};
//!
//! const TEXT: AdaptiveColor = AdaptiveColor::new(
//!     Rgba::from_rgba(0x1d1d_1fff),
//!     Rgba::from_rgba(0xf5f5_f7ff),
//! );
//!
//! assert_eq!(TEXT.resolve(ColorMode::Light), Rgba::from_rgba(0x1d1d_1fff));
//! assert_eq!(TEXT.resolve(ColorMode::Dark), Rgba::from_rgba(0xf5f5_f7ff));
//! ```
//!
//! Resolution is a pure function of the stored pair and the mode argument.
//! The same value may be resolved under different modes across render
//! passes (a window moving between light and dark), so no mode is ever
//! cached inside the color.
//!
//! Mode detection itself lives outside this crate; see the note on
//! [`ColorMode`] below.

use serde::{Deserialize, Serialize};

/// The display appearance a color is resolved under.
///
/// This is a closed two-value domain. Platforms that expose additional
/// system appearances (high contrast, unspecified, etc.) must project them
/// onto one of these two before calling [`AdaptiveColor::resolve`]; that
/// mapping belongs to the platform adapter, not to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorMode {
    /// Light mode (light background, dark text).
    Light,
    /// Dark mode (dark background, light text).
    Dark,
}

/// A concrete RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Decomposes a packed 32-bit `0xRRGGBBAA` value.
    ///
    /// The most significant byte is red, the least significant is alpha.
    /// This is the canonical encoding for palette constants; every 32-bit
    /// pattern is a valid color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use inkdoc_theme::Rgba;
    ///
    /// let c = Rgba::from_rgba(0x0066_ccff);
    /// assert_eq!((c.r, c.g, c.b, c.a), (0x00, 0x66, 0xcc, 0xff));
    /// ```
    pub const fn from_rgba(rgba: u32) -> Self {
        Self {
            r: (rgba >> 24) as u8,
            g: (rgba >> 16) as u8,
            b: (rgba >> 8) as u8,
            a: rgba as u8,
        }
    }

    /// Recomposes the packed 32-bit `0xRRGGBBAA` value.
    ///
    /// Exact inverse of [`from_rgba`](Self::from_rgba) for every input.
    pub const fn to_rgba(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Red channel as a unit-interval value.
    pub fn red_f32(self) -> f32 {
        self.r as f32 / 255.0
    }

    /// Green channel as a unit-interval value.
    pub fn green_f32(self) -> f32 {
        self.g as f32 / 255.0
    }

    /// Blue channel as a unit-interval value.
    pub fn blue_f32(self) -> f32 {
        self.b as f32 / 255.0
    }

    /// Alpha channel as a unit-interval value.
    pub fn alpha_f32(self) -> f32 {
        self.a as f32 / 255.0
    }
}

/// A color that resolves differently under light and dark appearance.
///
/// Both branches are concrete [`Rgba`] values by construction, so an
/// adaptive color can never be built from other adaptive colors — there is
/// no ambiguous recursive resolution to worry about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdaptiveColor {
    light: Rgba,
    dark: Rgba,
}

impl AdaptiveColor {
    /// Wraps a light and a dark variant into one adaptive value.
    pub const fn new(light: Rgba, dark: Rgba) -> Self {
        Self { light, dark }
    }

    /// An adaptive color that is the same in both modes.
    pub const fn uniform(color: Rgba) -> Self {
        Self {
            light: color,
            dark: color,
        }
    }

    /// Picks the concrete color for the given mode.
    ///
    /// Total over the two-element mode domain, deterministic, and free of
    /// side effects; repeated calls with the same mode return bit-identical
    /// components.
    pub const fn resolve(self, mode: ColorMode) -> Rgba {
        match mode {
            ColorMode::Light => self.light,
            ColorMode::Dark => self.dark,
        }
    }

    /// The light-mode variant.
    pub const fn light(self) -> Rgba {
        self.light
    }

    /// The dark-mode variant.
    pub const fn dark(self) -> Rgba {
        self.dark
    }
}
