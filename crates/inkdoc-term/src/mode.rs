//! Color mode detection for adaptive themes.
//!
//! The styling core never observes ambient appearance state; every color
//! resolution takes the mode as an explicit parameter. This module is the
//! thin platform adapter that supplies that parameter: it asks the OS for
//! the current appearance and projects the answer onto the closed
//! two-value [`ColorMode`] domain.
//!
//! Detection runs per render pass, so a window moving between light and
//! dark picks up the new mode on its next render. Use
//! [`set_mode_detector`] to override detection for testing:
//!
//! ```rust
//! use inkdoc_term::set_mode_detector;
//! use inkdoc_theme::ColorMode;
//!
//! set_mode_detector(|| ColorMode::Dark);
//! assert_eq!(inkdoc_term::detect_color_mode(), ColorMode::Dark);
//! ```

use inkdoc_theme::ColorMode;
use once_cell::sync::Lazy;
use std::sync::Mutex;

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine the user's color mode.
///
/// This is useful for testing or when an application wants to force a
/// specific mode regardless of the OS setting. Tests that call this should
/// run serially and restore their changes.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects the user's preferred color mode.
///
/// Queries the OS via the `dark-light` crate unless the detector has been
/// overridden with [`set_mode_detector`].
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => ColorMode::Light,
        // Unspecified or undetectable appearance projects onto dark,
        // the prevailing terminal default.
        _ => ColorMode::Dark,
    }
}
