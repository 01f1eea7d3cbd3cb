// this_file: crates/cosm-outline/src/lib.rs

//! Cosm Outline: from pixel grid to placed glyph outline
//!
//! The stages run in the order the modules are listed in:
//!
//! - [`scan`] splits each row into maximal runs of set pixels
//! - [`shapes`] turns a run into a dot or a pill of cubic arcs
//! - [`assemble`] joins the primitives and sizes the viewbox
//! - [`placement`] computes scale, baseline offset, bearings and advance
//! - [`normalize`] snaps, prunes and orients the placed contours
//!
//! [`naming`] resolves the character from a bitmap file stem,
//! [`pipeline::GlyphBuilder`] strings the stages together for one bitmap and
//! [`batch::GlyphBatch`] runs it over many in parallel. [`svg`] writes
//! outlines back out.
//!
//! ```
//! use cosm_core::{FontConfig, PixelGrid};
//! use cosm_outline::GlyphBuilder;
//!
//! let grid = PixelGrid::parse("###\n#..\n###\n..#\n###\n...\n...").unwrap();
//! let glyph = GlyphBuilder::new(FontConfig::default()).build("s", &grid).unwrap();
//! assert_eq!(glyph.character, 's');
//! assert_eq!(glyph.outline.contours().len(), 5);
//! ```

pub mod assemble;
pub mod batch;
pub mod naming;
pub mod normalize;
pub mod pipeline;
pub mod placement;
pub mod scan;
pub mod shapes;
pub mod svg;

#[cfg(test)]
mod proptests;

pub use assemble::{assemble, assemble_grid, view_box};
pub use batch::{BatchReport, BatchResult, GlyphBatch, GlyphSource, ProgressUpdate};
pub use naming::resolve;
pub use normalize::{ContourNormalizer, PassThrough};
pub use pipeline::GlyphBuilder;
pub use placement::{compute_placement, import_affine, place, Placement};
pub use scan::{scan, Runs};
pub use shapes::{generate, Primitive};
pub use svg::SvgWriter;
