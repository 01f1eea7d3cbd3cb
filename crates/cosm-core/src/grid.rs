//! Monochrome pixel grids
//!
//! A [`PixelGrid`] is the decoded form of one glyph bitmap: a rectangular
//! mask of set (ink) and unset (paper) pixels, row-major, `y = 0` at the top.

use crate::error::GridError;

/// Immutable boolean mask for one glyph
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl PixelGrid {
    /// Wrap a row-major pixel buffer.
    ///
    /// The buffer must hold exactly `width * height` values.
    pub fn new(width: usize, height: usize, pixels: Vec<bool>) -> Result<Self, GridError> {
        let expected = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(GridError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from rows of equal length.
    ///
    /// No rows at all gives the empty `0x0` grid; rows that are all empty are
    /// rejected since the grid would have height without width.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Ok(Self::default());
        };

        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridError::ZeroDimension {
                width,
                height: rows.len(),
            });
        }

        let mut pixels = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            pixels.extend_from_slice(values);
        }

        Ok(Self {
            width,
            height: rows.len(),
            pixels,
        })
    }

    /// Parse a text picture, one line per row.
    ///
    /// `#`, `X` and `@` are set pixels and `.` is unset. Whitespace around a
    /// row is indentation, not pixels, and blank lines at the start and end
    /// are ignored, so indented string literals read naturally.
    ///
    /// ```
    /// use cosm_core::PixelGrid;
    ///
    /// let grid = PixelGrid::parse("
    ///     .X.
    ///     XXX
    /// ").unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 2));
    /// assert!(grid.get(1, 0));
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .skip_while(|line| line.is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(0, |last| last + 1);

        let mut rows = Vec::with_capacity(end);
        for (row, line) in lines[..end].iter().enumerate() {
            let cells = line
                .chars()
                .enumerate()
                .map(|(column, ch)| match ch {
                    '#' | 'X' | '@' => Ok(true),
                    '.' => Ok(false),
                    _ => Err(GridError::InvalidCell { ch, row, column }),
                })
                .collect::<Result<Vec<bool>, _>>()?;
            rows.push(cells);
        }

        Self::from_rows(&rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the pixel at `(x, y)` is set; out-of-range reads are unset.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    /// One row of the mask
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Number of set pixels
    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|&&set| set).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_buffer_length() {
        let err = PixelGrid::new(2, 2, vec![true; 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::BufferSize {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows = vec![vec![true, false], vec![true]];
        let err = PixelGrid::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_zero_width() {
        let rows: Vec<Vec<bool>> = vec![vec![], vec![]];
        assert!(matches!(
            PixelGrid::from_rows(&rows),
            Err(GridError::ZeroDimension { width: 0, height: 2 })
        ));
    }

    #[test]
    fn test_empty_grid() {
        let rows: Vec<Vec<bool>> = Vec::new();
        let grid = PixelGrid::from_rows(&rows).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.ink_count(), 0);
    }

    #[test]
    fn test_parse_picture() {
        let grid = PixelGrid::parse(
            "
            #..#
            .##.
            ",
        )
        .unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.row(0), &[true, false, false, true]);
        assert!(grid.get(1, 1));
        assert!(!grid.get(4, 0), "out of range reads are unset");
        assert_eq!(grid.ink_count(), 4);
    }

    #[test]
    fn test_parse_rejects_unknown_cells() {
        assert!(matches!(
            PixelGrid::parse("#?"),
            Err(GridError::InvalidCell {
                ch: '?',
                row: 0,
                column: 1
            })
        ));
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        let err = PixelGrid::new(usize::MAX, 2, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            GridError::TooLarge {
                width: usize::MAX,
                height: 2
            }
        );
    }

    #[test]
    fn test_parse_treats_edge_whitespace_as_layout() {
        let grid = PixelGrid::parse("#. \n##").unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.row(0), &[true, false]);

        let grid = PixelGrid::parse(" #.\r\n\t##").unwrap();
        assert_eq!(grid.row(0), &[true, false]);
        assert_eq!(grid.row(1), &[true, true]);
    }

    #[test]
    fn test_parse_rejects_interior_space() {
        assert!(matches!(
            PixelGrid::parse("# #"),
            Err(GridError::InvalidCell {
                ch: ' ',
                row: 0,
                column: 1
            })
        ));
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let grid = PixelGrid::parse("#.").unwrap();
        let _ = grid.row(1);
    }
}
