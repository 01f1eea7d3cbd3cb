//! The data structures that flow through the pipeline

use kurbo::{Affine, BezPath, Rect, Shape};

/// A maximal horizontal stretch of set pixels in one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub row: usize,
    pub start: usize,
    pub length: usize,
}

impl Run {
    pub fn new(row: usize, start: usize, length: usize) -> Self {
        Self { row, start, length }
    }

    /// One past the last column of the run
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Size of the coordinate rectangle an outline is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Closed contours plus the viewbox they live in
///
/// Assembled outlines use source space (y grows downward, origin at the top
/// left of the bitmap). Placed outlines use font space (y grows upward,
/// origin on the baseline at the left edge of the advance).
#[derive(Debug, Clone, Default)]
pub struct Outline {
    contours: Vec<BezPath>,
    view_box: ViewBox,
}

impl Outline {
    pub fn new(contours: Vec<BezPath>, view_box: ViewBox) -> Self {
        Self { contours, view_box }
    }

    pub fn contours(&self) -> &[BezPath] {
        &self.contours
    }

    pub fn into_contours(self) -> Vec<BezPath> {
        self.contours
    }

    pub fn view_box(&self) -> ViewBox {
        self.view_box
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Apply `affine` to every contour and adopt a new viewbox.
    pub fn transformed(&self, affine: Affine, view_box: ViewBox) -> Self {
        let contours = self
            .contours
            .iter()
            .map(|contour| affine * contour)
            .collect();
        Self { contours, view_box }
    }

    /// All contours as one path
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for contour in &self.contours {
            path.extend(contour.elements().iter().copied());
        }
        path
    }

    /// Ink bounds, or `None` for an outline without contours
    pub fn bounding_box(&self) -> Option<Rect> {
        self.contours
            .iter()
            .map(Shape::bounding_box)
            .reduce(|acc, rect| acc.union(rect))
    }

    /// Total unsigned ink area, assuming contours do not overlap
    pub fn ink_area(&self) -> f64 {
        self.contours.iter().map(|contour| contour.area().abs()).sum()
    }
}

/// Scale and offsets that move an imported outline onto the baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementTransform {
    pub scale: f64,
    pub baseline_offset: f64,
    pub left_side_bearing: i32,
    pub right_side_bearing: i32,
}

impl PlacementTransform {
    /// Scale first, then translate by `(lsb, -baseline_offset)`.
    pub fn affine(&self) -> Affine {
        Affine::translate((f64::from(self.left_side_bearing), -self.baseline_offset))
            * Affine::scale(self.scale)
    }
}

/// A finished glyph, ready for a font container
#[derive(Debug, Clone)]
pub struct GlyphSpec {
    pub character: char,
    /// File stem the glyph was loaded from
    pub stem: String,
    /// Outline as assembled, in source space
    pub source: Outline,
    /// Placed and normalized outline, in font space
    pub outline: Outline,
    pub transform: PlacementTransform,
    pub advance_width: i32,
}

impl GlyphSpec {
    pub fn codepoint(&self) -> u32 {
        u32::from(self.character)
    }
}
