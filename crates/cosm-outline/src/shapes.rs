// this_file: crates/cosm-outline/src/shapes.rs

//! Pill and dot primitives.
//!
//! A run of one pixel becomes a dot (a circle one unit wide); a longer run
//! becomes a pill, a rectangle one unit tall whose corners are rounded by half
//! a unit. Both are drawn with cubic quarter arcs using [`KAPPA`].

use cosm_core::{CosmError, Metrics, Result, Run, KAPPA};
use kurbo::{BezPath, Point};

/// Rounded shape for one run, in source space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Circle {
        center: Point,
        radius: f64,
    },
    Pill {
        /// Top-left corner of the bounding rectangle
        origin: Point,
        width: f64,
        height: f64,
        /// Corner radius, never larger than half the width or height
        radius: f64,
    },
}

/// Turn a run into its primitive.
///
/// Fails with [`CosmError::DegenerateRun`] for a zero-length run.
pub fn generate(run: Run, metrics: &Metrics) -> Result<Primitive> {
    let unit = metrics.unit_width;
    let x = run.start as f64 * unit;
    let y = run.row as f64 * metrics.unit_height;

    match run.length {
        0 => Err(CosmError::DegenerateRun {
            row: run.row,
            start: run.start,
        }),
        1 => {
            let radius = unit / 2.0;
            Ok(Primitive::Circle {
                center: Point::new(x + radius, y + radius),
                radius,
            })
        }
        length => {
            let width = length as f64 * unit;
            let height = unit;
            Ok(Primitive::Pill {
                origin: Point::new(x, y),
                width,
                height,
                radius: (unit / 2.0).min(width / 2.0).min(height / 2.0),
            })
        }
    }
}

impl Primitive {
    /// The closed contour for this shape.
    pub fn contour(&self) -> BezPath {
        match *self {
            Primitive::Circle { center, radius } => circle(center, radius),
            Primitive::Pill {
                origin,
                width,
                height,
                radius,
            } => pill(origin, width, height, radius),
        }
    }

    /// Exact area of the ideal shape (true arcs, not their cubic approximation)
    pub fn nominal_area(&self) -> f64 {
        use std::f64::consts::PI;

        match *self {
            Primitive::Circle { radius, .. } => PI * radius * radius,
            Primitive::Pill {
                width,
                height,
                radius,
                ..
            } => width * height - 4.0 * (radius * radius - PI / 4.0 * radius * radius),
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Primitive::Circle { .. })
    }
}

fn circle(c: Point, r: f64) -> BezPath {
    let k = r * KAPPA;
    let mut path = BezPath::new();
    path.move_to((c.x + r, c.y));
    path.curve_to((c.x + r, c.y + k), (c.x + k, c.y + r), (c.x, c.y + r));
    path.curve_to((c.x - k, c.y + r), (c.x - r, c.y + k), (c.x - r, c.y));
    path.curve_to((c.x - r, c.y - k), (c.x - k, c.y - r), (c.x, c.y - r));
    path.curve_to((c.x + k, c.y - r), (c.x + r, c.y - k), (c.x + r, c.y));
    path.close_path();
    path
}

fn pill(origin: Point, w: f64, h: f64, r: f64) -> BezPath {
    let (x, y) = (origin.x, origin.y);
    let k = r * KAPPA;
    let mut path = BezPath::new();
    path.move_to((x + r, y));
    path.line_to((x + w - r, y));
    path.curve_to((x + w - r + k, y), (x + w, y + r - k), (x + w, y + r));
    path.line_to((x + w, y + h - r));
    path.curve_to((x + w, y + h - r + k), (x + w - r + k, y + h), (x + w - r, y + h));
    path.line_to((x + r, y + h));
    path.curve_to((x + r - k, y + h), (x, y + h - r + k), (x, y + h - r));
    path.line_to((x, y + r));
    path.curve_to((x, y + r - k), (x + r - k, y), (x + r, y));
    path.close_path();
    path
}
