// this_file: crates/cosm-outline/src/placement.rs

//! Placement of assembled outlines in font space.
//!
//! Every bitmap, whatever its pixel height, is scaled so its viewbox spans the
//! font ascent, then dropped by the baseline offset so the descender rows hang
//! below the baseline. Side bearings come from the character's exemptions.

use cosm_core::{FontConfig, GridError, Metrics, Outline, PlacementTransform, Result, ViewBox};
use kurbo::Affine;

/// Transform plus the advance it implies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub transform: PlacementTransform,
    pub advance_width: i32,
}

/// Compute scale, baseline offset, bearings and advance for one glyph.
pub fn compute_placement(ch: char, view_box: &ViewBox, config: &FontConfig) -> Result<Placement> {
    let metrics = &config.metrics;
    if !(view_box.height.is_finite() && view_box.height > 0.0) {
        return Err(GridError::ZeroDimension {
            width: view_box.width as usize,
            height: view_box.height as usize,
        }
        .into());
    }

    let scale = metrics.ascent / view_box.height;
    let baseline_offset = f64::from(metrics.baseline_row) * 2.0 * metrics.unit_height * scale;
    let lsb = config.bearings.left(ch, metrics.side_bearing);
    let rsb = config.bearings.right(ch, metrics.side_bearing);
    let advance_width = (view_box.width * scale + f64::from(lsb) + f64::from(rsb)).round() as i32;

    Ok(Placement {
        transform: PlacementTransform {
            scale,
            baseline_offset,
            left_side_bearing: lsb,
            right_side_bearing: rsb,
        },
        advance_width,
    })
}

/// What an outline importer does with a source-space document: flip y so
/// the bottom edge of the viewbox lands on `y = 0`.
pub fn import_affine(view_box: &ViewBox) -> Affine {
    Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, view_box.height])
}

/// Import and place an assembled outline.
///
/// The result's viewbox is the glyph's em box: the advance by the full
/// ascent-plus-descent height.
pub fn place(outline: &Outline, placement: &Placement, metrics: &Metrics) -> Outline {
    let affine = placement.transform.affine() * import_affine(&outline.view_box());
    let em_box = ViewBox::new(
        f64::from(placement.advance_width),
        metrics.ascent + metrics.descent,
    );
    outline.transformed(affine, em_box)
}
