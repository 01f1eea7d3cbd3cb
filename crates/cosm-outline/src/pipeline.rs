// this_file: crates/cosm-outline/src/pipeline.rs

//! One bitmap in, one finished glyph out.

use std::sync::Arc;

use cosm_core::{
    CosmError, FontConfig, GlyphSpec, GridError, OutlineNormalizer, PixelGrid, Result,
};

use crate::assemble::assemble_grid;
use crate::naming::resolve;
use crate::normalize::ContourNormalizer;
use crate::placement::{compute_placement, place};

/// Builds glyphs against one configuration and normalizer
#[derive(Clone)]
pub struct GlyphBuilder {
    config: Arc<FontConfig>,
    normalizer: Arc<dyn OutlineNormalizer>,
}

impl GlyphBuilder {
    /// Builder with the default [`ContourNormalizer`].
    pub fn new(config: FontConfig) -> Self {
        Self::with_normalizer(config, Arc::new(ContourNormalizer::default()))
    }

    pub fn with_normalizer(config: FontConfig, normalizer: Arc<dyn OutlineNormalizer>) -> Self {
        Self {
            config: Arc::new(config),
            normalizer,
        }
    }

    pub fn config(&self) -> &FontConfig {
        &self.config
    }

    /// Resolve the name, then scan, assemble, place and normalize the grid.
    pub fn build(&self, stem: &str, grid: &PixelGrid) -> Result<GlyphSpec> {
        let character = resolve(stem, &self.config.escapes)?;

        if grid.is_empty() {
            return Err(CosmError::MalformedGrid(GridError::ZeroDimension {
                width: grid.width(),
                height: grid.height(),
            }));
        }

        let metrics = &self.config.metrics;
        let source = assemble_grid(grid, metrics)?;
        let placement = compute_placement(character, &source.view_box(), &self.config)?;
        let placed = place(&source, &placement, metrics);
        let outline = self.normalizer.normalize(placed)?;

        log::debug!(
            "Glyph {:?} from '{}': {} contours, advance {}, scale {:.4} ({})",
            character,
            stem,
            outline.contours().len(),
            placement.advance_width,
            placement.transform.scale,
            self.normalizer.name()
        );

        Ok(GlyphSpec {
            character,
            stem: stem.to_string(),
            source,
            outline,
            transform: placement.transform,
            advance_width: placement.advance_width,
        })
    }
}

impl std::fmt::Debug for GlyphBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphBuilder")
            .field("config", &self.config)
            .field("normalizer", &self.normalizer.name())
            .finish()
    }
}
