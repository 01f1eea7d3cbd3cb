// this_file: crates/cosm-cli/src/commands/build.rs

//! Build command implementation
//!
//! Decodes a directory of glyph bitmaps, builds every glyph in parallel and
//! writes the manifest. A bad bitmap costs only its own glyph.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use cosm_core::{CosmError, GlyphSet, OutlineNormalizer};
use cosm_outline::{
    BatchReport, ContourNormalizer, GlyphBatch, GlyphBuilder, GlyphSource, PassThrough, SvgWriter,
};
use rayon::prelude::*;

use super::load_config;
use crate::bitmap;
use crate::cli::BuildArgs;
use crate::manifest::Manifest;

pub fn run(args: &BuildArgs) -> Result<()> {
    let start = Instant::now();

    if args.jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.jobs)
            .build_global()
            .context("Failed to initialize thread pool")?;
    }

    let config = load_config(args.config.as_deref())?;
    let normalizer: Arc<dyn OutlineNormalizer> = if args.raw {
        Arc::new(PassThrough)
    } else {
        Arc::new(ContourNormalizer::default())
    };
    let builder = GlyphBuilder::with_normalizer(config, normalizer);

    let files = bitmap::glyph_files(&args.glyphs)
        .with_context(|| format!("Failed to list glyphs in {}", args.glyphs.display()))?;
    if files.is_empty() {
        bail!("No *.png bitmaps found in {}", args.glyphs.display());
    }
    log::info!("Decoding {} bitmaps from {}", files.len(), args.glyphs.display());

    let (sources, decode_failures) = decode_all(&files);
    let batch = GlyphBatch::new(builder);
    let mut report = BatchReport::collect(batch.build(&sources), batch.builder());
    report.failures.extend(decode_failures);

    let writer = SvgWriter::default();
    Manifest::from_glyph_set(&report.glyphs, &writer).write(&args.output)?;

    if let Some(dir) = &args.svg_dir {
        write_svgs(&report.glyphs, &writer, dir)?;
    }

    if !args.quiet {
        println!(
            "Built {} glyphs into {} in {:.2}s",
            report.glyphs.len(),
            args.output.display(),
            start.elapsed().as_secs_f64()
        );
        for (stem, err) in &report.failures {
            eprintln!("  {stem}: {err}");
        }
    }

    if !report.failures.is_empty() {
        bail!("{} glyphs failed", report.failures.len());
    }
    Ok(())
}

/// Decode every file; failures are kept per stem, not fatal.
fn decode_all(files: &[PathBuf]) -> (Vec<GlyphSource>, Vec<(String, CosmError)>) {
    let decoded: Vec<(String, cosm_core::Result<_>)> = files
        .par_iter()
        .map(|path| (bitmap::stem(path), bitmap::decode(path)))
        .collect();

    let mut sources = Vec::with_capacity(decoded.len());
    let mut failures = Vec::new();
    for (stem, result) in decoded {
        match result {
            Ok(grid) => sources.push(GlyphSource::new(stem, grid)),
            Err(err) => {
                log::warn!("Skipping '{}': {}", stem, err);
                failures.push((stem, err));
            }
        }
    }
    (sources, failures)
}

/// One import document per glyph, named after its stem.
fn write_svgs(glyphs: &GlyphSet, writer: &SvgWriter, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    for glyph in glyphs.iter() {
        let path = dir.join(format!("{}.svg", glyph.stem));
        std::fs::write(&path, writer.document(&glyph.source))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    log::debug!("Wrote {} SVG documents to {}", glyphs.len(), dir.display());
    Ok(())
}
