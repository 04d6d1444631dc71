//! The reference "DocC" theme.
//!
//! A fully populated registry mimicking the DocC documentation style:
//! semibold headings on an em scale, bordered aside blockquotes, scrollable
//! code blocks on a tinted fill, and horizontally ruled tables with bold
//! header rows. Every block kind is covered, so [`Theme::validate`] always
//! passes for this theme.
//!
//! ```rust
//! use inkdoc_theme::{docc, BlockKind, RenderConfig, Rendered};
//!
//! let theme = docc();
//! theme.validate().unwrap();
//!
//! let heading = theme
//!     .apply(BlockKind::Heading1, RenderConfig::new(Rendered::text("Title")))
//!     .unwrap();
//! ```

use once_cell::sync::Lazy;

use crate::block::BlockKind;
use crate::context::RenderConfig;
use crate::measure::Length;
use crate::render::{Align, FontFamily, FontWeight, Rendered, TextAttributes};
use crate::theme::Theme;

/// The DocC palette: adaptive colors with the documented light and dark
/// 32-bit `0xRRGGBBAA` values. Every entry supplies both variants; nothing
/// falls back to a system default outside the two-mode domain.
pub mod palette {
    use crate::color::{AdaptiveColor, Rgba};

    pub const TEXT: AdaptiveColor =
        AdaptiveColor::new(Rgba::from_rgba(0x1d1d_1fff), Rgba::from_rgba(0xf5f5_f7ff));
    pub const SECONDARY_TEXT: AdaptiveColor =
        AdaptiveColor::new(Rgba::from_rgba(0x6e6e_73ff), Rgba::from_rgba(0x8686_8bff));
    pub const LINK: AdaptiveColor =
        AdaptiveColor::new(Rgba::from_rgba(0x0066_ccff), Rgba::from_rgba(0x2997_ffff));
    pub const NOTE_BACKGROUND: AdaptiveColor =
        AdaptiveColor::new(Rgba::from_rgba(0xf5f5_f7ff), Rgba::from_rgba(0x3232_32ff));
    pub const NOTE_BORDER: AdaptiveColor =
        AdaptiveColor::new(Rgba::from_rgba(0x6969_69ff), Rgba::from_rgba(0x9a9a_9eff));
    pub const CODE_BACKGROUND: AdaptiveColor =
        AdaptiveColor::new(Rgba::from_rgba(0xf5f5_f7ff), Rgba::from_rgba(0x3333_36ff));
    pub const GRID: AdaptiveColor =
        AdaptiveColor::new(Rgba::from_rgba(0xd2d2_d7ff), Rgba::from_rgba(0x4242_45ff));
}

/// Corner radius shared by every clipped container in this theme.
const CONTAINER_RADIUS: f32 = 15.0;

/// The shared list-bullet primitive.
///
/// Task-list markers render identically to an unordered list's disc
/// bullet, so both delegate to this rather than duplicating the glyph.
fn list_bullet() -> Rendered {
    Rendered::text("\u{2022}")
}

fn heading(
    config: RenderConfig,
    line_spacing: Option<Length>,
    size: Option<Length>,
    top: Length,
) -> Rendered {
    let mut attrs = TextAttributes::new().weight(FontWeight::Semibold);
    if let Some(size) = size {
        attrs = attrs.size(size);
    }
    let mut block = config.into_content();
    if let Some(amount) = line_spacing {
        block = block.line_spacing(amount);
    }
    block.styled(attrs).margin(top, Length::ZERO)
}

/// Builds the DocC theme.
///
/// The theme is immutable by convention once built; callers wanting a
/// variant start from this value and [`merge`](Theme::merge) overrides on
/// top.
pub fn docc() -> Theme {
    Theme::named("docc")
        .add(BlockKind::Text, |config| {
            config
                .into_content()
                .styled(TextAttributes::new().color(palette::TEXT))
        })
        .add(BlockKind::Link, |config| {
            config
                .into_content()
                .styled(TextAttributes::new().color(palette::LINK))
        })
        .add(BlockKind::Heading1, |config| {
            heading(config, None, Some(Length::em(2.0)), Length::em(0.8))
        })
        .add(BlockKind::Heading2, |config| {
            heading(
                config,
                Some(Length::em(0.0625)),
                Some(Length::em(1.88235)),
                Length::em(1.6),
            )
        })
        .add(BlockKind::Heading3, |config| {
            heading(
                config,
                Some(Length::em(0.07143)),
                Some(Length::em(1.64706)),
                Length::em(1.6),
            )
        })
        .add(BlockKind::Heading4, |config| {
            heading(
                config,
                Some(Length::em(0.083335)),
                Some(Length::em(1.41176)),
                Length::em(1.6),
            )
        })
        .add(BlockKind::Heading5, |config| {
            heading(
                config,
                Some(Length::em(0.09091)),
                Some(Length::em(1.29412)),
                Length::em(1.6),
            )
        })
        .add(BlockKind::Heading6, |config| {
            heading(config, Some(Length::em(0.235295)), None, Length::em(1.6))
        })
        .add(BlockKind::Paragraph, |config| {
            config
                .into_content()
                .line_spacing(Length::em(0.235295))
                .margin(Length::em(0.8), Length::ZERO)
        })
        .add(BlockKind::Blockquote, |config| {
            // Fill beneath stroke: the border wraps the background.
            config
                .into_content()
                .padding(Length::rem(0.94118))
                .fill_width(Align::Leading)
                .background(palette::NOTE_BACKGROUND)
                .border(palette::NOTE_BORDER)
                .clipped(CONTAINER_RADIUS)
                .margin(Length::em(1.6), Length::ZERO)
        })
        .add(BlockKind::CodeBlock, |config| {
            // Scroll sits innermost so the clipped fill bounds the
            // scrollable region instead of scrolling with the content.
            config
                .into_content()
                .line_spacing(Length::em(0.333335))
                .styled(
                    TextAttributes::new()
                        .family(FontFamily::Monospaced)
                        .size(Length::rem(0.88235)),
                )
                .padding_axes(Length::rem(0.47059), Length::rem(0.82353))
                .scrollable()
                .background(palette::CODE_BACKGROUND)
                .clipped(CONTAINER_RADIUS)
                .margin(Length::em(0.8), Length::ZERO)
        })
        .add(BlockKind::Image, |config| {
            config
                .into_content()
                .fill_width(Align::Center)
                .margin(Length::em(1.6), Length::em(1.6))
        })
        .add(BlockKind::ListItem, |config| {
            config
                .into_content()
                .margin(Length::em(0.8), Length::ZERO)
        })
        .add(BlockKind::TaskListMarker, |_config| {
            // Rendered as a plain bullet list; the checkbox state is not
            // drawn in this theme.
            list_bullet().min_width(Length::em(1.5), Align::Trailing)
        })
        .add(BlockKind::Table, |config| {
            config
                .into_content()
                .border(palette::GRID)
                .margin(Length::em(1.6), Length::ZERO)
        })
        .add(BlockKind::TableCell, |config| {
            let mut attrs = TextAttributes::new();
            if config.row() == Some(0) {
                attrs = attrs.weight(FontWeight::Semibold);
            }
            config
                .into_content()
                .styled(attrs)
                .line_spacing(Length::em(0.235295))
                .padding(Length::rem(0.58824))
        })
        .add(BlockKind::ThematicBreak, |_config| {
            Rendered::Divider {
                color: palette::GRID,
            }
            .margin(Length::em(2.35), Length::em(2.35))
        })
}

/// The DocC theme, built once and shared.
pub static DOCC: Lazy<Theme> = Lazy::new(docc);
