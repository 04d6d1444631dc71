//! Terminal interpretation of the declarative decoration tree.
//!
//! [`TermRenderer`] is a rendering backend in the sense the styling core
//! expects: it owns the appearance mode for the pass, resolves adaptive
//! colors against it, and maps each decoration node onto a character-grid
//! primitive. Lengths resolve against a [`Scale`] and round up to whole
//! cells; font sizes and rounded corners have no terminal counterpart and
//! degrade to no-ops.
//!
//! ```rust
//! use inkdoc_term::TermRenderer;
//! use inkdoc_theme::{docc, BlockKind, ColorMode, RenderConfig, Rendered};
//!
//! let renderer = TermRenderer::with_width(ColorMode::Dark, 60);
//! let output = renderer
//!     .render_block(
//!         &docc(),
//!         BlockKind::Paragraph,
//!         RenderConfig::new(Rendered::text("Hello.")),
//!     )
//!     .unwrap();
//! assert!(output.contains("Hello."));
//! ```

use console::{measure_text_width, truncate_str, Color, Style};
use inkdoc_theme::{
    AdaptiveColor, Align, BlockKind, ColorMode, FontWeight, Length, RenderConfig, Rendered, Rgba,
    Scale, TextAttributes, Theme, ThemeError,
};

/// Converts a resolved color to the nearest ANSI 256-color palette index.
///
/// Grayscale values map onto the 24-step ramp, everything else onto the
/// 6x6x6 color cube. Alpha is ignored; terminals have no compositing.
pub fn ansi256(color: Rgba) -> u8 {
    let Rgba { r, g, b, .. } = color;
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// A fixed-width ANSI renderer for one appearance mode.
///
/// Construction captures the mode for the whole pass, so every adaptive
/// color in the document resolves consistently; re-detect the mode and
/// build a fresh renderer for the next pass.
#[derive(Debug, Clone)]
pub struct TermRenderer {
    mode: ColorMode,
    width: usize,
    scale: Scale,
    force_styling: bool,
}

impl TermRenderer {
    /// A renderer for the current terminal width (80 columns when the
    /// width cannot be determined).
    pub fn new(mode: ColorMode) -> Self {
        let width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80);
        Self::with_width(mode, width)
    }

    /// A renderer with an explicit container width in columns.
    pub fn with_width(mode: ColorMode, width: usize) -> Self {
        Self {
            mode,
            width,
            scale: Scale::default(),
            force_styling: false,
        }
    }

    /// Replaces the measurement scale (unit scale by default: one `em` is
    /// one cell).
    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Emits ANSI codes even when stdout is not a terminal.
    pub fn force_styling(mut self, force: bool) -> Self {
        self.force_styling = force;
        self
    }

    /// The appearance mode this renderer resolves colors under.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// The container width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Renders one decoration tree to ANSI text.
    pub fn render(&self, rendered: &Rendered) -> String {
        self.eval(rendered, TextAttributes::new(), self.width).join("\n")
    }

    /// Styles and renders one block instance.
    ///
    /// # Errors
    ///
    /// [`ThemeError::MissingRule`] if the theme has no rule for `kind`.
    pub fn render_block(
        &self,
        theme: &Theme,
        kind: BlockKind,
        config: RenderConfig,
    ) -> Result<String, ThemeError> {
        let rendered = theme.apply(kind, config)?;
        Ok(self.render(&rendered))
    }

    /// Renders a sequence of blocks in document order.
    ///
    /// Each block carries its own margins, so the gap between adjacent
    /// blocks is the first block's bottom margin plus the second's top
    /// margin — margins never collapse.
    ///
    /// # Errors
    ///
    /// Fails on the first block whose kind has no rule in `theme`.
    pub fn render_document<I>(&self, theme: &Theme, blocks: I) -> Result<String, ThemeError>
    where
        I: IntoIterator<Item = (BlockKind, RenderConfig)>,
    {
        let mut lines = Vec::new();
        for (kind, config) in blocks {
            let rendered = theme.apply(kind, config)?;
            lines.extend(self.eval(&rendered, TextAttributes::new(), self.width));
        }
        Ok(lines.join("\n"))
    }

    fn eval(&self, node: &Rendered, inherited: TextAttributes, width: usize) -> Vec<String> {
        match node {
            Rendered::Content(text) => {
                let style = self.text_style(&inherited);
                text.split('\n')
                    .map(|line| style.apply_to(line).to_string())
                    .collect()
            }
            Rendered::Divider { color } => {
                let rule = "\u{2500}".repeat(width);
                vec![self.fg_style(*color).apply_to(rule).to_string()]
            }
            Rendered::Styled { attrs, child } => self.eval(child, attrs.over(inherited), width),
            // No sub-cell leading or rounded corners on a character grid.
            Rendered::LineSpacing { child, .. } => self.eval(child, inherited, width),
            Rendered::Clip { child, .. } => self.eval(child, inherited, width),
            Rendered::Margin { top, bottom, child } => {
                let mut lines = vec![String::new(); self.cells(*top)];
                lines.extend(self.eval(child, inherited, width));
                lines.extend(vec![String::new(); self.cells(*bottom)]);
                lines
            }
            Rendered::Padding {
                vertical,
                horizontal,
                child,
            } => {
                let h = self.cells(*horizontal);
                let v = self.cells(*vertical);
                let inner_width = width.saturating_sub(2 * h);
                let pad = " ".repeat(h);
                let mut lines = vec![String::new(); v];
                lines.extend(
                    self.eval(child, inherited, inner_width)
                        .into_iter()
                        .map(|line| format!("{pad}{line}")),
                );
                lines.extend(vec![String::new(); v]);
                lines
            }
            Rendered::Background { color, child } => {
                let style = self.bg_style(*color);
                // A reset inside the line ends the fill early; this
                // adapter paints per line, not per cell.
                self.eval(child, inherited, width)
                    .into_iter()
                    .map(|line| {
                        let pad = width.saturating_sub(measure_text_width(&line));
                        style
                            .apply_to(format!("{line}{}", " ".repeat(pad)))
                            .to_string()
                    })
                    .collect()
            }
            Rendered::Border { color, child } => {
                let style = self.fg_style(*color);
                let inner_width = width.saturating_sub(2);
                let bar = style.apply_to("\u{2502}").to_string();
                let horizontal = "\u{2500}".repeat(inner_width);

                let mut lines = Vec::new();
                lines.push(
                    style
                        .apply_to(format!("\u{250c}{horizontal}\u{2510}"))
                        .to_string(),
                );
                for line in self.eval(child, inherited, inner_width) {
                    let pad = inner_width.saturating_sub(measure_text_width(&line));
                    lines.push(format!("{bar}{line}{}{bar}", " ".repeat(pad)));
                }
                lines.push(
                    style
                        .apply_to(format!("\u{2514}{horizontal}\u{2518}"))
                        .to_string(),
                );
                lines
            }
            Rendered::Scroll { child } => {
                // The container width is fixed; content wider than it is
                // clipped, never the other way around.
                self.eval(child, inherited, width)
                    .into_iter()
                    .map(|line| truncate_str(&line, width, "\u{2026}").into_owned())
                    .collect()
            }
            Rendered::MinWidth {
                width: min,
                align,
                child,
            } => {
                let min = self.cells(*min);
                self.eval(child, inherited, width)
                    .into_iter()
                    .map(|line| align_line(line, min, *align))
                    .collect()
            }
            Rendered::FillWidth { align, child } => self
                .eval(child, inherited, width)
                .into_iter()
                .map(|line| align_line(line, width, *align))
                .collect(),
        }
    }

    /// Resolves a relative length to whole cells, rounding up.
    fn cells(&self, length: Length) -> usize {
        length.resolve(&self.scale).max(0.0).ceil() as usize
    }

    fn base_style(&self) -> Style {
        if self.force_styling {
            Style::new().force_styling(true)
        } else {
            Style::new()
        }
    }

    fn text_style(&self, attrs: &TextAttributes) -> Style {
        let mut style = self.base_style();
        if matches!(attrs.weight, Some(FontWeight::Semibold | FontWeight::Bold)) {
            style = style.bold();
        }
        if let Some(color) = attrs.color {
            style = style.fg(Color::Color256(ansi256(color.resolve(self.mode))));
        }
        // Font size and family variant have no terminal counterpart.
        style
    }

    fn fg_style(&self, color: AdaptiveColor) -> Style {
        self.base_style()
            .fg(Color::Color256(ansi256(color.resolve(self.mode))))
    }

    fn bg_style(&self, color: AdaptiveColor) -> Style {
        self.base_style()
            .bg(Color::Color256(ansi256(color.resolve(self.mode))))
    }
}

fn align_line(line: String, target: usize, align: Align) -> String {
    let current = measure_text_width(&line);
    if current >= target {
        return line;
    }
    let gap = target - current;
    match align {
        Align::Leading => format!("{line}{}", " ".repeat(gap)),
        Align::Trailing => format!("{}{line}", " ".repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{line}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}
