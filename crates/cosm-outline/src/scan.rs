// this_file: crates/cosm-outline/src/scan.rs

//! Row-wise run detection.

use cosm_core::{PixelGrid, Run};

/// Split a grid into runs of set pixels, top row first, left to right.
///
/// The iterator is lazy and borrows the grid; call `scan` again to restart.
pub fn scan(grid: &PixelGrid) -> Runs<'_> {
    Runs { grid, y: 0, x: 0 }
}

/// Iterator returned by [`scan`]
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    grid: &'a PixelGrid,
    y: usize,
    x: usize,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let width = self.grid.width();
        while self.y < self.grid.height() {
            let row = self.grid.row(self.y);

            while self.x < width && !row[self.x] {
                self.x += 1;
            }

            if self.x < width {
                let start = self.x;
                while self.x < width && row[self.x] {
                    self.x += 1;
                }
                return Some(Run::new(self.y, start, self.x - start));
            }

            self.y += 1;
            self.x = 0;
        }
        None
    }
}

impl std::iter::FusedIterator for Runs<'_> {}
