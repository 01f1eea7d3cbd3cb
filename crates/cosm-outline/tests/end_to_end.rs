//! End-to-end tests: bitmap art in, placed glyphs out
//!
//! These drive the public API only: `GlyphBuilder` for single glyphs,
//! `GlyphBatch` plus `BatchReport` for a small alphabet, and `SvgWriter`
//! for the import document.

use cosm_core::kurbo::Shape;
use cosm_core::{CosmError, FontConfig, PixelGrid};
use cosm_outline::{
    assemble_grid, BatchReport, ContourNormalizer, GlyphBatch, GlyphBuilder, GlyphSource,
    PassThrough, SvgWriter,
};
use std::sync::Arc;

const LOWER_A: &str = "
    .##.
    ...#
    .###
    #..#
    .###
    ....
    ....
";

const UPPER_A: &str = "
    .##.
    #..#
    ####
    #..#
    #..#
    ....
    ....
";

const PERIOD: &str = "
    .
    .
    .
    .
    #
    .
    .
";

const LOWER_G: &str = "
    .###
    #..#
    #..#
    .###
    ...#
    ...#
    ###.
";

fn grid(art: &str) -> PixelGrid {
    PixelGrid::parse(art).unwrap()
}

#[test]
fn test_alphabet_builds_into_glyph_set() {
    let builder = GlyphBuilder::new(FontConfig::default());
    let batch = GlyphBatch::new(builder.clone());
    let sources = vec![
        GlyphSource::new("a", grid(LOWER_A)),
        GlyphSource::new("_a", grid(UPPER_A)),
        GlyphSource::new("_.", grid(PERIOD)),
        GlyphSource::new("g", grid(LOWER_G)),
    ];

    let report = BatchReport::collect(batch.build(&sources), &builder);
    assert!(report.is_success(), "{:?}", report.failures);
    let chars: Vec<char> = report.glyphs.iter().map(|g| g.character).collect();
    assert_eq!(chars, vec!['.', 'A', 'a', 'g']);
    assert_eq!(report.glyphs.ascent(), 700.0);
    assert_eq!(report.glyphs.descent(), 200.0);
}

#[test]
fn test_every_glyph_spans_the_ascent() {
    let config = FontConfig::default();
    let builder = GlyphBuilder::new(config.clone());
    for art in [LOWER_A, UPPER_A, PERIOD, LOWER_G] {
        let glyph = builder.build("x", &grid(art)).unwrap();
        let scaled = glyph.transform.scale * glyph.source.view_box().height;
        assert!((scaled - config.metrics.ascent).abs() < 1e-9);
    }
}

#[test]
fn test_descender_rows_hang_lower() {
    let builder = GlyphBuilder::new(FontConfig::default());
    let g = builder.build("g", &grid(LOWER_G)).unwrap();
    let a = builder.build("a", &grid(LOWER_A)).unwrap();
    assert_eq!(g.transform, a.transform);

    let g_bounds = g.outline.bounding_box().unwrap();
    let a_bounds = a.outline.bounding_box().unwrap();
    // Same grid height, so the top rows line up.
    assert_eq!(g_bounds.y1, a_bounds.y1);
    // Two extra rows of 60 source units each.
    let drop = a_bounds.y0 - g_bounds.y0;
    assert!((drop - 120.0 * g.transform.scale).abs() <= 1.0, "drop {drop}");
    // The top row starts where the scaled viewbox top lands.
    let top = 700.0 - g.transform.baseline_offset;
    assert!((g_bounds.y1 - top).abs() <= 0.5);
}

#[test]
fn test_period_has_no_side_bearings() {
    let builder = GlyphBuilder::with_normalizer(FontConfig::default(), Arc::new(PassThrough));
    let period = builder.build("_.", &grid(PERIOD)).unwrap();
    assert_eq!(period.character, '.');
    assert_eq!(period.transform.left_side_bearing, 0);
    assert_eq!(period.transform.right_side_bearing, 0);

    let bounds = period.outline.bounding_box().unwrap();
    assert!(bounds.x0.abs() < 1e-9);
    assert_eq!(
        period.advance_width,
        (period.source.view_box().width * period.transform.scale).round() as i32
    );
}

#[test]
fn test_normalized_outline_is_integral_and_clockwise() {
    let builder = GlyphBuilder::new(FontConfig::default());
    let glyph = builder.build("_a", &grid(UPPER_A)).unwrap();
    assert_eq!(glyph.character, 'A');
    for contour in glyph.outline.contours() {
        assert!(contour.area() < 0.0);
        for el in contour.elements() {
            if let Some(p) = el.end_point() {
                assert_eq!(p.x, p.x.round());
                assert_eq!(p.y, p.y.round());
            }
        }
    }
}

#[test]
fn test_custom_metrics_from_json() {
    let config = FontConfig::from_json(
        r#"{ "metrics": { "ascent": 800.0, "side_bearing": 20 },
             "bearings": { "no_left": "", "no_right": "" } }"#,
    )
    .unwrap();
    let builder = GlyphBuilder::with_normalizer(config, Arc::new(ContourNormalizer::default()));
    let glyph = builder.build("_.", &grid(PERIOD)).unwrap();
    assert_eq!(glyph.transform.left_side_bearing, 20);
    assert_eq!(glyph.transform.right_side_bearing, 20);
    assert!((glyph.transform.scale * glyph.source.view_box().height - 800.0).abs() < 1e-9);
}

#[test]
fn test_bad_inputs_are_reported() {
    let builder = GlyphBuilder::new(FontConfig::default());
    assert!(matches!(
        builder.build("ab", &grid(LOWER_A)),
        Err(CosmError::UnmappableGlyphName(_))
    ));
    assert!(matches!(
        builder.build("a", &PixelGrid::default()),
        Err(CosmError::MalformedGrid(_))
    ));
    assert!(PixelGrid::parse("##\n#").is_err());
}

#[test]
fn test_svg_document_round_trips_view_box() {
    let config = FontConfig::default();
    let outline = assemble_grid(&grid(LOWER_A), &config.metrics).unwrap();
    let svg = SvgWriter::default().document(&outline);
    assert!(svg.contains(r#"viewBox="0 0 200.00 332.50""#));
    assert_eq!(svg.matches("<path ").count(), outline.contours().len());
}
