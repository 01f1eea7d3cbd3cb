//! Cosm Core: the shared vocabulary of the bitmap-to-outline pipeline
//!
//! Every glyph starts life as a [`PixelGrid`] and ends as a [`GlyphSpec`]
//! stored in a [`GlyphSet`]. This crate holds those types, the build-wide
//! [`FontConfig`], the error taxonomy and the [`OutlineNormalizer`] seam.
//! The algorithms that connect them live in `cosm-outline`.
//!
//! ## The Pipeline
//!
//! 1. **Scan** - each row of the grid splits into runs of set pixels
//! 2. **Generate** - each run becomes a circle or a pill
//! 3. **Assemble** - the primitives join into one [`Outline`] with a viewbox
//! 4. **Place** - scale, baseline offset and side bearings move it into font space
//! 5. **Normalize** - an [`OutlineNormalizer`] tidies the placed contours
//!
//! The glyph's character comes from its bitmap file stem, resolved through the
//! [`EscapeTable`].

pub mod config;
pub mod error;
pub mod glyph_set;
pub mod grid;
pub mod traits;
pub mod types;

pub use config::{BearingPolicy, EscapeTable, FontConfig, Metrics, KAPPA, VERTICAL_COMPRESSION};
pub use error::{CosmError, GridError, NameError, Result};
pub use glyph_set::GlyphSet;
pub use grid::PixelGrid;
pub use traits::OutlineNormalizer;
pub use types::{GlyphSpec, Outline, PlacementTransform, Run, ViewBox};

// Re-export kurbo so downstream crates share the path types used by `Outline`.
pub use kurbo;
