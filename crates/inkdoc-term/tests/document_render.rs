//! End-to-end rendering of a small document with the reference theme.

use inkdoc_term::TermRenderer;
use inkdoc_theme::{docc, BlockKind, ColorMode, RenderConfig, Rendered};

fn document() -> Vec<(BlockKind, RenderConfig)> {
    vec![
        (
            BlockKind::Heading1,
            RenderConfig::new(Rendered::text("Styling")),
        ),
        (
            BlockKind::Paragraph,
            RenderConfig::new(Rendered::text("Themes map block kinds to rules.")),
        ),
        (
            BlockKind::CodeBlock,
            RenderConfig::new(Rendered::text("let theme = docc();")),
        ),
        (
            BlockKind::TableCell,
            RenderConfig::table_cell(Rendered::text("Kind"), 0),
        ),
        (
            BlockKind::TableCell,
            RenderConfig::table_cell(Rendered::text("paragraph"), 1),
        ),
        (BlockKind::ThematicBreak, RenderConfig::new(Rendered::text(""))),
    ]
}

#[test]
fn renders_full_document_in_both_modes() {
    let theme = docc();
    for mode in [ColorMode::Light, ColorMode::Dark] {
        let output = TermRenderer::with_width(mode, 60)
            .render_document(&theme, document())
            .unwrap();
        assert!(output.contains("Styling"));
        assert!(output.contains("let theme = docc();"));
        assert!(output.contains('\u{2500}'), "thematic break missing");
    }
}

#[test]
fn header_cell_is_bold_only_in_row_zero() {
    let theme = docc();
    let renderer = TermRenderer::with_width(ColorMode::Dark, 60).force_styling(true);

    let header = renderer
        .render_block(
            &theme,
            BlockKind::TableCell,
            RenderConfig::table_cell(Rendered::text("Kind"), 0),
        )
        .unwrap();
    let body = renderer
        .render_block(
            &theme,
            BlockKind::TableCell,
            RenderConfig::table_cell(Rendered::text("Kind"), 1),
        )
        .unwrap();

    assert!(header.contains("\u{1b}[1m"), "got: {header:?}");
    assert!(!body.contains("\u{1b}[1m"), "got: {body:?}");
}

#[test]
fn code_block_keeps_its_width_as_content_grows() {
    let theme = docc();
    let renderer = TermRenderer::with_width(ColorMode::Dark, 50);

    let width_of = |source: &str| {
        let output = renderer
            .render_block(
                &theme,
                BlockKind::CodeBlock,
                RenderConfig::new(Rendered::text(source)),
            )
            .unwrap();
        output
            .lines()
            .map(console::measure_text_width)
            .max()
            .unwrap()
    };

    let short = width_of("x");
    let long = width_of(&"very_long_identifier ".repeat(20));
    assert_eq!(short, long, "container width must not track content width");
}
