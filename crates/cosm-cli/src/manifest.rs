// this_file: crates/cosm-cli/src/manifest.rs

//! JSON manifest handed to the font container step.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use cosm_core::{GlyphSet, GlyphSpec};
use cosm_outline::SvgWriter;
use serde::{Deserialize, Serialize};

/// Vertical metrics plus every glyph in code point order
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub ascent: f64,
    pub descent: f64,
    pub glyphs: Vec<GlyphEntry>,
}

/// One glyph as the font container needs it
#[derive(Debug, Serialize, Deserialize)]
pub struct GlyphEntry {
    pub character: char,
    pub codepoint: u32,
    pub stem: String,
    pub advance_width: i32,
    pub left_side_bearing: i32,
    pub right_side_bearing: i32,
    pub scale: f64,
    pub baseline_offset: f64,
    pub contours: usize,
    /// Font-space outline as SVG path data
    pub path: String,
}

impl GlyphEntry {
    fn new(glyph: &GlyphSpec, writer: &SvgWriter) -> Self {
        Self {
            character: glyph.character,
            codepoint: glyph.codepoint(),
            stem: glyph.stem.clone(),
            advance_width: glyph.advance_width,
            left_side_bearing: glyph.transform.left_side_bearing,
            right_side_bearing: glyph.transform.right_side_bearing,
            scale: glyph.transform.scale,
            baseline_offset: glyph.transform.baseline_offset,
            contours: glyph.outline.contours().len(),
            path: writer.outline_data(&glyph.outline),
        }
    }
}

impl Manifest {
    pub fn from_glyph_set(glyphs: &GlyphSet, writer: &SvgWriter) -> Self {
        Self {
            ascent: glyphs.ascent(),
            descent: glyphs.descent(),
            glyphs: glyphs
                .iter()
                .map(|glyph| GlyphEntry::new(glyph, writer))
                .collect(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, self).context("Failed to serialize manifest")?;
        writeln!(out).context("Failed to write manifest")?;
        out.flush().context("Failed to write manifest")?;
        Ok(())
    }
}
