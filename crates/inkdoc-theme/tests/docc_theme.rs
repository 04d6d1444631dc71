//! Black-box tests of the reference theme through the public API.

use inkdoc_theme::{
    docc, BlockKind, ColorMode, FontWeight, Length, RenderConfig, Rendered, TextAttributes, Theme,
};

#[test]
fn docc_styles_every_block_kind() {
    let theme = docc();
    theme.validate().unwrap();

    for kind in BlockKind::ALL {
        let config = match kind {
            BlockKind::TableCell => RenderConfig::table_cell(Rendered::text("cell"), 1),
            _ => RenderConfig::new(Rendered::text("content")),
        };
        theme
            .apply(kind, config)
            .unwrap_or_else(|err| panic!("{kind}: {err}"));
    }
}

#[test]
fn rebuilding_one_kind_preserves_the_rest() {
    let base = docc();
    let untouched: Vec<_> = BlockKind::ALL
        .iter()
        .copied()
        .filter(|&k| k != BlockKind::Heading1)
        .map(|k| (k, base.rule(k).unwrap().clone()))
        .collect();

    let rebuilt = base
        .add(BlockKind::Heading1, |config| {
            config
                .into_content()
                .styled(TextAttributes::new().weight(FontWeight::Bold))
        })
        .add(BlockKind::Heading1, |config| config.into_content());

    for (kind, rule) in untouched {
        assert!(
            rebuilt.rule(kind).unwrap().same_rule(&rule),
            "rule for {kind} changed"
        );
    }
}

#[test]
fn variant_theme_layers_over_docc() {
    let variant = docc().merge(Theme::new().add(BlockKind::Paragraph, |config| {
        config.into_content().margin(Length::em(1.6), Length::ZERO)
    }));

    variant.validate().unwrap();
    let paragraph = variant
        .apply(BlockKind::Paragraph, RenderConfig::new(Rendered::text("p")))
        .unwrap();
    assert_eq!(paragraph.margins(), (Length::em(1.6), Length::ZERO));

    // The base theme is unaffected by the variant.
    let original = docc()
        .apply(BlockKind::Paragraph, RenderConfig::new(Rendered::text("p")))
        .unwrap();
    assert_eq!(original.margins(), (Length::em(0.8), Length::ZERO));
}

#[test]
fn palette_resolution_is_stable_within_a_pass() {
    // Every rule in a pass resolving the same adaptive color under the
    // same mode must see identical components.
    let color = inkdoc_theme::docc::palette::CODE_BACKGROUND;
    let first = color.resolve(ColorMode::Dark);
    for _ in 0..10 {
        assert_eq!(color.resolve(ColorMode::Dark), first);
    }
}
