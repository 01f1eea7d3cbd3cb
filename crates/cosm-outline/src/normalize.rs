// this_file: crates/cosm-outline/src/normalize.rs

//! Outline normalizers.
//!
//! Overlap removal is left to the font editor; what happens here is the
//! cleanup a glyph needs before it is stored: coordinates snapped to the
//! integer grid, zero-length edges and empty contours removed, and every
//! contour wound clockwise in font space (the TrueType outer direction).

use cosm_core::{Outline, OutlineNormalizer, Result};
use kurbo::{BezPath, ParamCurve, PathEl, PathSeg, Point, Shape};

/// Hands outlines back untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl OutlineNormalizer for PassThrough {
    fn name(&self) -> &'static str {
        "pass-through"
    }

    fn normalize(&self, outline: Outline) -> Result<Outline> {
        Ok(outline)
    }
}

/// Per-contour cleanup of placed outlines
///
/// Each contour must be a single closed subpath, which is what the shape
/// generator emits.
#[derive(Debug, Clone, Copy)]
pub struct ContourNormalizer {
    pub round: bool,
    pub simplify: bool,
    pub correct_direction: bool,
    /// Contours with less unsigned area than this are dropped when simplifying
    pub min_area: f64,
}

impl Default for ContourNormalizer {
    fn default() -> Self {
        Self {
            round: true,
            simplify: true,
            correct_direction: true,
            min_area: 0.5,
        }
    }
}

impl OutlineNormalizer for ContourNormalizer {
    fn name(&self) -> &'static str {
        "contour"
    }

    fn normalize(&self, outline: Outline) -> Result<Outline> {
        let view_box = outline.view_box();
        let before = outline.contours().len();

        let contours: Vec<BezPath> = outline
            .into_contours()
            .into_iter()
            .map(|contour| {
                if self.round {
                    round_path(&contour)
                } else {
                    contour
                }
            })
            .map(|contour| {
                if self.simplify {
                    drop_short_lines(&contour, 1e-6)
                } else {
                    contour
                }
            })
            .filter(|contour| !self.simplify || contour.area().abs() >= self.min_area)
            .map(|contour| {
                if self.correct_direction && contour.area() > 0.0 {
                    reverse_contour(&contour)
                } else {
                    contour
                }
            })
            .collect();

        if contours.len() != before {
            log::debug!("Dropped {} empty contours", before - contours.len());
        }

        Ok(Outline::new(contours, view_box))
    }
}

fn round_path(path: &BezPath) -> BezPath {
    path.elements()
        .iter()
        .map(|el| match *el {
            PathEl::MoveTo(p) => PathEl::MoveTo(p.round()),
            PathEl::LineTo(p) => PathEl::LineTo(p.round()),
            PathEl::QuadTo(p1, p2) => PathEl::QuadTo(p1.round(), p2.round()),
            PathEl::CurveTo(p1, p2, p3) => PathEl::CurveTo(p1.round(), p2.round(), p3.round()),
            PathEl::ClosePath => PathEl::ClosePath,
        })
        .collect()
}

/// Remove line segments shorter than `tolerance`.
fn drop_short_lines(path: &BezPath, tolerance: f64) -> BezPath {
    let mut current: Option<Point> = None;
    path.elements()
        .iter()
        .filter(|el| {
            let keep = match (el, current) {
                (PathEl::LineTo(p), Some(prev)) => p.distance(prev) >= tolerance,
                _ => true,
            };
            if keep {
                current = el.end_point();
            }
            keep
        })
        .copied()
        .collect()
}

/// Same contour, opposite winding, same start point.
fn reverse_contour(path: &BezPath) -> BezPath {
    let segments: Vec<PathSeg> = path.segments().collect();
    let Some(last) = segments.last() else {
        return path.clone();
    };

    let mut reversed = BezPath::new();
    reversed.move_to(last.end());
    for (i, segment) in segments.iter().enumerate().rev() {
        match segment.reverse() {
            // The closing edge is implied by `close_path`.
            PathSeg::Line(_) if i == 0 => {}
            PathSeg::Line(line) => reversed.line_to(line.p1),
            PathSeg::Quad(quad) => reversed.quad_to(quad.p1, quad.p2),
            PathSeg::Cubic(cubic) => reversed.curve_to(cubic.p1, cubic.p2, cubic.p3),
        }
    }
    reversed.close_path();
    reversed
}
