// this_file: crates/cosm-outline/src/svg.rs

//! SVG output for outlines.
//!
//! [`SvgWriter::document`] produces the import document an outline editor
//! expects: one filled `<path>` per contour inside a `viewBox` that matches the
//! outline's own. [`SvgWriter::path_data`] gives the bare `d` attribute for
//! manifests and debugging.

use std::fmt::Write;

use cosm_core::Outline;
use kurbo::{BezPath, PathEl, Point};

/// Writes path data with a fixed number of decimals
#[derive(Debug, Clone, Copy)]
pub struct SvgWriter {
    precision: usize,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl SvgWriter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Absolute `M`/`L`/`Q`/`C`/`Z` commands for `path`.
    pub fn path_data(&self, path: &BezPath) -> String {
        let mut data = String::with_capacity(path.elements().len() * 16);
        for el in path.elements() {
            if !data.is_empty() {
                data.push(' ');
            }
            let (cmd, points, count) = match *el {
                PathEl::MoveTo(p) => ('M', [p, p, p], 1),
                PathEl::LineTo(p) => ('L', [p, p, p], 1),
                PathEl::QuadTo(p1, p2) => ('Q', [p1, p2, p2], 2),
                PathEl::CurveTo(p1, p2, p3) => ('C', [p1, p2, p3], 3),
                PathEl::ClosePath => ('Z', [Point::ZERO; 3], 0),
            };
            data.push(cmd);
            for (i, point) in points[..count].iter().enumerate() {
                if i > 0 {
                    data.push(' ');
                }
                self.append_number(&mut data, point.x);
                data.push(',');
                self.append_number(&mut data, point.y);
            }
        }
        data
    }

    /// Path data for every contour of `outline`, joined.
    pub fn outline_data(&self, outline: &Outline) -> String {
        self.path_data(&outline.to_bez_path())
    }

    /// Standalone SVG document, one black path per contour.
    pub fn document(&self, outline: &Outline) -> String {
        let view_box = outline.view_box();
        let mut svg = String::with_capacity(256 + outline.contours().len() * 256);

        svg.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 "#);
        self.append_number(&mut svg, view_box.width);
        svg.push(' ');
        self.append_number(&mut svg, view_box.height);
        svg.push_str("\">\n");

        for contour in outline.contours() {
            let _ = writeln!(
                &mut svg,
                r#"  <path d="{}" fill="black"/>"#,
                self.path_data(contour)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Fixed-precision number; values that round to zero print unsigned.
    fn append_number(&self, buf: &mut String, value: f64) {
        let start = buf.len();
        let _ = write!(buf, "{value:.p$}", p = self.precision);
        let negative_zero = buf[start..].starts_with('-')
            && buf[start + 1..].bytes().all(|b| b == b'0' || b == b'.');
        if negative_zero {
            buf.remove(start);
        }
    }
}
