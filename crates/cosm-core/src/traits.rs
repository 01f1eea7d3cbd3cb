//! Seams to external collaborators
//!
//! A font editor cleans up imported contours before they are stored: it
//! removes overlaps, rounds to the integer grid and fixes winding. The
//! pipeline reaches that step only through [`OutlineNormalizer`].

use crate::error::Result;
use crate::types::Outline;

/// Post-process a placed outline
///
/// ```
/// use cosm_core::{Outline, OutlineNormalizer, Result};
///
/// struct KeepEverything;
///
/// impl OutlineNormalizer for KeepEverything {
///     fn name(&self) -> &'static str {
///         "keep"
///     }
///
///     fn normalize(&self, outline: Outline) -> Result<Outline> {
///         Ok(outline)
///     }
/// }
/// ```
pub trait OutlineNormalizer: Send + Sync {
    /// Used in logs
    fn name(&self) -> &'static str;

    /// Take a font-space outline and return its cleaned-up form.
    fn normalize(&self, outline: Outline) -> Result<Outline>;
}
