//! The aggregation point for finished glyphs

use std::collections::BTreeMap;

use crate::config::Metrics;
use crate::types::GlyphSpec;

/// Finished glyphs keyed by character, plus the vertical metrics they share
///
/// Stands in for the font container: glyphs are inserted one at a time by a
/// single owner, and a font writer reads them back in code point order.
#[derive(Debug, Clone, Default)]
pub struct GlyphSet {
    ascent: f64,
    descent: f64,
    glyphs: BTreeMap<char, GlyphSpec>,
}

impl GlyphSet {
    pub fn new(metrics: &Metrics) -> Self {
        Self {
            ascent: metrics.ascent,
            descent: metrics.descent,
            glyphs: BTreeMap::new(),
        }
    }

    pub fn ascent(&self) -> f64 {
        self.ascent
    }

    pub fn descent(&self) -> f64 {
        self.descent
    }

    /// Add a glyph, returning the one it replaced, if any.
    pub fn insert(&mut self, glyph: GlyphSpec) -> Option<GlyphSpec> {
        let replaced = self.glyphs.insert(glyph.character, glyph);
        if let Some(old) = &replaced {
            log::warn!(
                "Glyph {:?} from '{}' replaced by a later bitmap",
                old.character,
                old.stem
            );
        }
        replaced
    }

    pub fn get(&self, ch: char) -> Option<&GlyphSpec> {
        self.glyphs.get(&ch)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyphs in code point order
    pub fn iter(&self) -> impl Iterator<Item = &GlyphSpec> {
        self.glyphs.values()
    }
}

impl Extend<GlyphSpec> for GlyphSet {
    fn extend<I: IntoIterator<Item = GlyphSpec>>(&mut self, iter: I) {
        for glyph in iter {
            self.insert(glyph);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Outline, PlacementTransform};

    fn glyph(character: char, stem: &str, advance_width: i32) -> GlyphSpec {
        GlyphSpec {
            character,
            stem: stem.to_string(),
            source: Outline::default(),
            outline: Outline::default(),
            transform: PlacementTransform {
                scale: 1.0,
                baseline_offset: 0.0,
                left_side_bearing: 0,
                right_side_bearing: 0,
            },
            advance_width,
        }
    }

    #[test]
    fn test_glyphs_iterate_in_codepoint_order() {
        let mut set = GlyphSet::new(&Metrics::default());
        set.extend([glyph('b', "b", 1), glyph('A', "_a", 2), glyph('a', "a", 3)]);
        let order: Vec<char> = set.iter().map(|g| g.character).collect();
        assert_eq!(order, vec!['A', 'a', 'b']);
        assert_eq!(set.ascent(), 700.0);
        assert_eq!(set.descent(), 200.0);
    }

    #[test]
    fn test_insert_replaces_same_character() {
        let mut set = GlyphSet::new(&Metrics::default());
        assert!(set.insert(glyph('x', "x", 100)).is_none());
        let replaced = set.insert(glyph('x', "x", 200)).unwrap();
        assert_eq!(replaced.advance_width, 100);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get('x').unwrap().advance_width, 200);
    }
}
