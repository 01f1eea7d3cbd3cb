// this_file: crates/cosm-outline/src/batch.rs

//! Parallel glyph building for a whole directory of bitmaps.
//!
//! Glyphs do not depend on each other, so a batch fans out over rayon and
//! comes back in input order. Only [`BatchReport::collect`] touches the
//! [`GlyphSet`], on the calling thread.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use cosm_core::{CosmError, GlyphSet, GlyphSpec, PixelGrid, Result};
use rayon::prelude::*;

use crate::pipeline::GlyphBuilder;

/// One bitmap waiting to become a glyph
#[derive(Debug, Clone)]
pub struct GlyphSource {
    /// File stem the character is resolved from
    pub stem: String,
    pub grid: PixelGrid,
}

impl GlyphSource {
    pub fn new(stem: impl Into<String>, grid: PixelGrid) -> Self {
        Self {
            stem: stem.into(),
            grid,
        }
    }
}

/// Outcome for one source
#[derive(Debug)]
pub struct BatchResult {
    /// Position of the source in the batch
    pub index: usize,
    pub stem: String,
    pub result: Result<GlyphSpec>,
    pub elapsed: Duration,
}

/// Progress after each finished glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub completed: usize,
    pub total: usize,
}

type ProgressFn = Arc<dyn Fn(ProgressUpdate) + Send + Sync>;

/// Builds many glyphs in parallel with one [`GlyphBuilder`]
#[derive(Debug, Clone)]
pub struct GlyphBatch {
    builder: GlyphBuilder,
}

impl GlyphBatch {
    pub fn new(builder: GlyphBuilder) -> Self {
        Self { builder }
    }

    pub fn builder(&self) -> &GlyphBuilder {
        &self.builder
    }

    /// Build every source; results keep the input order.
    pub fn build(&self, sources: &[GlyphSource]) -> Vec<BatchResult> {
        self.build_internal(sources, None)
    }

    /// Build every source, reporting after each glyph.
    pub fn build_with_progress<F>(&self, sources: &[GlyphSource], progress: F) -> Vec<BatchResult>
    where
        F: Fn(ProgressUpdate) + Send + Sync + 'static,
    {
        self.build_internal(sources, Some(Arc::new(progress)))
    }

    fn build_internal(
        &self,
        sources: &[GlyphSource],
        progress: Option<ProgressFn>,
    ) -> Vec<BatchResult> {
        if sources.is_empty() {
            return Vec::new();
        }

        let total = sources.len();
        let counter = AtomicUsize::new(0);

        sources
            .par_iter()
            .enumerate()
            .map(|(index, source)| {
                let start = Instant::now();
                let result = self.builder.build(&source.stem, &source.grid);
                let elapsed = start.elapsed();
                if let Some(callback) = progress.as_ref() {
                    let completed = counter.fetch_add(1, Ordering::SeqCst) + 1;
                    callback(ProgressUpdate { completed, total });
                }
                BatchResult {
                    index,
                    stem: source.stem.clone(),
                    result,
                    elapsed,
                }
            })
            .collect()
    }
}

/// Successes gathered into a [`GlyphSet`], failures kept per stem
#[derive(Debug)]
pub struct BatchReport {
    pub glyphs: GlyphSet,
    pub failures: Vec<(String, CosmError)>,
    pub elapsed: Duration,
}

impl BatchReport {
    /// Insert every successful glyph into a fresh set in input order.
    ///
    /// When two stems resolve to the same character the later one wins.
    pub fn collect(results: Vec<BatchResult>, builder: &GlyphBuilder) -> Self {
        let mut glyphs = GlyphSet::new(&builder.config().metrics);
        let mut failures = Vec::new();
        let mut elapsed = Duration::ZERO;

        for item in results {
            elapsed += item.elapsed;
            match item.result {
                Ok(glyph) => {
                    glyphs.insert(glyph);
                }
                Err(err) => {
                    log::warn!("Skipping '{}': {}", item.stem, err);
                    failures.push((item.stem, err));
                }
            }
        }

        log::info!(
            "Built {} glyphs, {} failed ({:.1?} total build time)",
            glyphs.len(),
            failures.len(),
            elapsed
        );

        Self {
            glyphs,
            failures,
            elapsed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
