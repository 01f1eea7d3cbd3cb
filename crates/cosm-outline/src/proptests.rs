// this_file: crates/cosm-outline/src/proptests.rs

use cosm_core::{EscapeTable, FontConfig, Metrics, PixelGrid, Run, ViewBox};
use kurbo::Shape;
use proptest::prelude::*;

use crate::{compute_placement, generate, resolve, scan};

fn grids() -> impl Strategy<Value = PixelGrid> {
    (1usize..12, 1usize..12).prop_flat_map(|(width, height)| {
        prop::collection::vec(any::<bool>(), width * height)
            .prop_map(move |pixels| PixelGrid::new(width, height, pixels).unwrap())
    })
}

// Property: runs cover exactly the set pixels, once each
proptest! {
    #[test]
    fn prop_runs_cover_ink(grid in grids()) {
        let mut covered = vec![false; grid.width() * grid.height()];
        for run in scan(&grid) {
            for x in run.start..run.end() {
                let idx = run.row * grid.width() + x;
                prop_assert!(!covered[idx], "pixel covered twice");
                covered[idx] = true;
            }
        }
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                prop_assert_eq!(covered[y * grid.width() + x], grid.get(x, y));
            }
        }
    }
}

// Property: runs are maximal and come out in row-major order
proptest! {
    #[test]
    fn prop_runs_are_maximal_and_ordered(grid in grids()) {
        let runs: Vec<Run> = scan(&grid).collect();
        for run in &runs {
            prop_assert!(run.length >= 1);
            if run.start > 0 {
                prop_assert!(!grid.get(run.start - 1, run.row));
            }
            prop_assert!(!grid.get(run.end(), run.row));
        }
        for pair in runs.windows(2) {
            prop_assert!((pair[0].row, pair[0].start) < (pair[1].row, pair[1].start));
        }
    }
}

// Property: generated contours stay within 0.1% of the ideal area
proptest! {
    #[test]
    fn prop_primitive_area(row in 0usize..20, start in 0usize..20, length in 1usize..30) {
        let metrics = Metrics::default();
        let primitive = generate(Run::new(row, start, length), &metrics).unwrap();
        let actual = primitive.contour().area().abs();
        let nominal = primitive.nominal_area();
        prop_assert!((actual - nominal).abs() / nominal < 1e-3);
        prop_assert_eq!(primitive.is_circle(), length == 1);
    }
}

// Property: the scaled viewbox height is always the ascent
proptest! {
    #[test]
    fn prop_scale_maps_height_to_ascent(width in 1usize..64, height in 1usize..64) {
        let config = FontConfig::default();
        let vb = crate::view_box(width, height, &config.metrics);
        let placement = compute_placement('m', &vb, &config).unwrap();
        let scaled = placement.transform.scale * vb.height;
        prop_assert!((scaled - config.metrics.ascent).abs() < 1e-9);
        prop_assert!(placement.advance_width >= 0);
    }
}

// Property: advance is within half a unit of the exact sum
proptest! {
    #[test]
    fn prop_advance_is_rounded_sum(width in 0.0f64..2000.0, height in 1.0f64..2000.0) {
        let config = FontConfig::default();
        let vb = ViewBox::new(width, height);
        let placement = compute_placement('x', &vb, &config).unwrap();
        let exact = width * placement.transform.scale
            + f64::from(placement.transform.left_side_bearing)
            + f64::from(placement.transform.right_side_bearing);
        prop_assert!((f64::from(placement.advance_width) - exact).abs() <= 0.5);
    }
}

// Property: single-character stems other than the marker resolve to themselves
proptest! {
    #[test]
    fn prop_plain_stem_is_verbatim(ch in any::<char>().prop_filter("marker", |c| *c != '_')) {
        let stem = ch.to_string();
        prop_assert_eq!(resolve(&stem, &EscapeTable::default()).unwrap(), ch);
    }
}

// Property: escaped ASCII lowercase resolves to its uppercase, every time
proptest! {
    #[test]
    fn prop_escaped_lowercase(ch in "[a-z]") {
        let escapes = EscapeTable::default();
        let stem = format!("_{ch}");
        let first = resolve(&stem, &escapes).unwrap();
        prop_assert_eq!(first, resolve(&stem, &escapes).unwrap());
        prop_assert_eq!(first.to_string(), ch.to_uppercase());
    }
}
