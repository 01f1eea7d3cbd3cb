// this_file: crates/cosm-cli/src/bitmap.rs

//! Glyph bitmap discovery and decoding.

use std::path::{Path, PathBuf};

use cosm_core::{CosmError, GridError, PixelGrid, Result};
use image::GrayAlphaImage;

/// Every `*.png` directly inside `dir`, sorted by path.
pub fn glyph_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// File stem used for character resolution
pub fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Decode an image file into a grid of opaque black pixels.
pub fn decode(path: &Path) -> Result<PixelGrid> {
    let image = image::open(path).map_err(|err| CosmError::Decode {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let grid = grid_from_image(&image.to_luma_alpha8())?;
    log::debug!(
        "Decoded {}: {}x{}, {} set",
        path.display(),
        grid.width(),
        grid.height(),
        grid.ink_count()
    );
    Ok(grid)
}

/// A pixel is set only when it is pure black and fully opaque.
pub fn grid_from_image(image: &GrayAlphaImage) -> std::result::Result<PixelGrid, GridError> {
    let (width, height) = image.dimensions();
    let pixels = image.pixels().map(|p| p.0 == [0, 255]).collect();
    PixelGrid::new(width as usize, height as usize, pixels)
}
