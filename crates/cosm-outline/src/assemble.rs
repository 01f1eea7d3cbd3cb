// this_file: crates/cosm-outline/src/assemble.rs

//! Outline assembly.

use cosm_core::{Metrics, Outline, PixelGrid, Result, ViewBox, VERTICAL_COMPRESSION};

use crate::scan::scan;
use crate::shapes::{generate, Primitive};

/// Viewbox of a `grid_width x grid_height` bitmap.
///
/// Both sides are measured in horizontal units; the height is then squashed
/// by [`VERTICAL_COMPRESSION`].
pub fn view_box(grid_width: usize, grid_height: usize, metrics: &Metrics) -> ViewBox {
    ViewBox::new(
        grid_width as f64 * metrics.unit_width,
        grid_height as f64 * metrics.unit_width * VERTICAL_COMPRESSION,
    )
}

/// Join primitive contours, in the order given, into one outline.
pub fn assemble(
    primitives: &[Primitive],
    grid_width: usize,
    grid_height: usize,
    metrics: &Metrics,
) -> Outline {
    let contours = primitives.iter().map(Primitive::contour).collect();
    Outline::new(contours, view_box(grid_width, grid_height, metrics))
}

/// Every primitive of a grid, in scan order
pub fn primitives(grid: &PixelGrid, metrics: &Metrics) -> Result<Vec<Primitive>> {
    scan(grid).map(|run| generate(run, metrics)).collect()
}

/// Scan, generate and assemble in one step.
pub fn assemble_grid(grid: &PixelGrid, metrics: &Metrics) -> Result<Outline> {
    let primitives = primitives(grid, metrics)?;
    log::trace!(
        "{}x{} grid: {} primitives ({} dots)",
        grid.width(),
        grid.height(),
        primitives.len(),
        primitives.iter().filter(|p| p.is_circle()).count()
    );
    Ok(assemble(&primitives, grid.width(), grid.height(), metrics))
}
