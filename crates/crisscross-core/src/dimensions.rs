//! Grid sizes and the row-major cell index.
//!
//! A [`GridDimensions`] value is a rectangle of `rows × cols` cells whose cell
//! count is known to fit in `usize`. Cells are numbered in row-major order,
//! left to right then top to bottom, which is also the order the page expects
//! its cell elements in:
//!
//! ```text
//! index = row * cols + col
//! ```
//!
//! # Examples
//!
//! ```
//! use crisscross_core::{CellDescriptor, GridDimensions};
//!
//! let dims = GridDimensions::new(2, 3)?;
//! assert_eq!(dims.cell_count(), 6);
//! assert_eq!(dims.index_of(CellDescriptor::new(1, 1)), Some(4));
//! assert_eq!(dims.cell_at(5), Some(CellDescriptor::new(1, 2)));
//! assert!(!dims.contains(CellDescriptor::new(2, 0)));
//! # Ok::<(), crisscross_core::GridError>(())
//! ```

use std::iter::FusedIterator;

use crate::{CellDescriptor, GridError};

/// The size of a rectangular grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    rows: usize,
    cols: usize,
}

impl GridDimensions {
    /// The 15×15 grid shown on the puzzle page.
    pub const PUZZLE: Self = Self { rows: 15, cols: 15 };

    /// Smallest allowed side of a stored board.
    pub const BOARD_MIN_SIDE: usize = 1;

    /// Largest allowed side of a stored board.
    pub const BOARD_MAX_SIDE: usize = 21;

    /// Largest integer a JavaScript number represents exactly (`2^53 - 1`).
    const JS_MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    /// Creates dimensions of `rows × cols` cells.
    ///
    /// Zero rows or columns are allowed and describe an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooManyCells`] if `rows * cols` overflows `usize`.
    pub const fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows.checked_mul(cols).is_none() {
            return Err(GridError::TooManyCells { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Creates dimensions for a stored puzzle board.
    ///
    /// Boards are at least 1×1 and at most 21×21.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::BoardSizeOutOfRange`] if either side is outside
    /// [`BOARD_MIN_SIDE`](Self::BOARD_MIN_SIDE)..=[`BOARD_MAX_SIDE`](Self::BOARD_MAX_SIDE).
    pub fn board(rows: usize, cols: usize) -> Result<Self, GridError> {
        let range = Self::BOARD_MIN_SIDE..=Self::BOARD_MAX_SIDE;
        if !range.contains(&rows) || !range.contains(&cols) {
            return Err(GridError::BoardSizeOutOfRange { rows, cols });
        }
        Self::new(rows, cols)
    }

    /// Creates dimensions from JavaScript numbers.
    ///
    /// Both values must be non-negative integers no larger than
    /// `Number.MAX_SAFE_INTEGER` that also fit in `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] for negative, fractional,
    /// non-finite or oversized values, and [`GridError::TooManyCells`] if the
    /// product overflows.
    pub fn from_js_numbers(rows: f64, cols: f64) -> Result<Self, GridError> {
        Self::new(js_dimension(rows)?, js_dimension(cols)?)
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Returns `rows * cols`.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.cell_count() == 0
    }

    /// Returns `true` if `cell` lies inside the grid.
    #[must_use]
    pub const fn contains(self, cell: CellDescriptor) -> bool {
        cell.row() < self.rows && cell.col() < self.cols
    }

    /// Checks that `cell` lies inside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellOutOfBounds`] otherwise.
    pub const fn check_cell(self, cell: CellDescriptor) -> Result<(), GridError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::CellOutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns the row-major index of `cell`, or `None` if it is out of bounds.
    #[must_use]
    pub const fn index_of(self, cell: CellDescriptor) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row() * self.cols + cell.col())
        } else {
            None
        }
    }

    /// Returns the cell at row-major `index`, or `None` past the last cell.
    #[must_use]
    pub const fn cell_at(self, index: usize) -> Option<CellDescriptor> {
        if index < self.cell_count() {
            Some(CellDescriptor::new(index / self.cols, index % self.cols))
        } else {
            None
        }
    }

    /// Returns an iterator over every cell in row-major order.
    #[must_use]
    pub const fn cells(self) -> Cells {
        Cells {
            dims: self,
            front: 0,
            back: self.cell_count(),
        }
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn js_dimension(value: f64) -> Result<usize, GridError> {
    let is_integer = value.is_finite() && value.fract() == 0.0;
    if !is_integer || value < 0.0 || value > GridDimensions::JS_MAX_SAFE_INTEGER {
        return Err(GridError::InvalidDimension { value });
    }
    usize::try_from(value as u64).map_err(|_| GridError::InvalidDimension { value })
}

/// Row-major iterator over the cells of a [`GridDimensions`].
///
/// Created by [`GridDimensions::cells`].
#[derive(Debug, Clone)]
pub struct Cells {
    dims: GridDimensions,
    front: usize,
    back: usize,
}

impl Iterator for Cells {
    type Item = CellDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let cell = self.dims.cell_at(self.front);
        self.front += 1;
        cell
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Cells {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.dims.cell_at(self.back)
    }
}

impl ExactSizeIterator for Cells {}

impl FusedIterator for Cells {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puzzle_is_15_by_15() {
        assert_eq!(GridDimensions::PUZZLE.rows(), 15);
        assert_eq!(GridDimensions::PUZZLE.cols(), 15);
        assert_eq!(GridDimensions::PUZZLE.cell_count(), 225);
    }

    #[test]
    fn test_new_allows_empty() {
        assert!(GridDimensions::new(0, 5).unwrap().is_empty());
        assert!(GridDimensions::new(5, 0).unwrap().is_empty());
        assert!(GridDimensions::new(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_new_rejects_overflow() {
        assert_eq!(
            GridDimensions::new(usize::MAX, 2),
            Err(GridError::TooManyCells {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert!(GridDimensions::new(usize::MAX, 1).is_ok());
        assert!(GridDimensions::new(usize::MAX, 0).is_ok());
    }

    mod board {
        use super::*;

        #[test]
        fn test_accepts_range_limits() {
            assert!(GridDimensions::board(1, 1).is_ok());
            assert!(GridDimensions::board(21, 21).is_ok());
            assert!(GridDimensions::board(15, 15).is_ok());
        }

        #[test]
        fn test_rejects_outside_range() {
            for (rows, cols) in [(0, 5), (5, 0), (22, 5), (5, 22)] {
                assert_eq!(
                    GridDimensions::board(rows, cols),
                    Err(GridError::BoardSizeOutOfRange { rows, cols })
                );
            }
        }
    }

    mod js_numbers {
        use super::*;

        #[test]
        fn test_accepts_integers() {
            let dims = GridDimensions::from_js_numbers(15.0, 3.0).unwrap();
            assert_eq!((dims.rows(), dims.cols()), (15, 3));
            assert!(GridDimensions::from_js_numbers(0.0, 0.0).unwrap().is_empty());
            assert!(GridDimensions::from_js_numbers(-0.0, 4.0).unwrap().is_empty());
        }

        #[test]
        fn test_rejects_invalid_numbers() {
            for value in [
                -1.0,
                1.5,
                f64::NAN,
                f64::INFINITY,
                f64::NEG_INFINITY,
                1e300,
            ] {
                let err = GridDimensions::from_js_numbers(value, 1.0).unwrap_err();
                assert!(matches!(err, GridError::InvalidDimension { .. }), "{value}");
                let err = GridDimensions::from_js_numbers(1.0, value).unwrap_err();
                assert!(matches!(err, GridError::InvalidDimension { .. }), "{value}");
            }
        }

        #[test]
        fn test_error_reports_value() {
            assert_eq!(
                GridDimensions::from_js_numbers(-3.0, 1.0),
                Err(GridError::InvalidDimension { value: -3.0 })
            );
        }
    }

    mod index {
        use super::*;

        #[test]
        fn test_index_of() {
            let dims = GridDimensions::new(2, 3).unwrap();
            assert_eq!(dims.index_of(CellDescriptor::new(0, 0)), Some(0));
            assert_eq!(dims.index_of(CellDescriptor::new(0, 2)), Some(2));
            assert_eq!(dims.index_of(CellDescriptor::new(1, 0)), Some(3));
            assert_eq!(dims.index_of(CellDescriptor::new(1, 2)), Some(5));
            assert_eq!(dims.index_of(CellDescriptor::new(2, 0)), None);
            assert_eq!(dims.index_of(CellDescriptor::new(0, 3)), None);
        }

        #[test]
        fn test_cell_at() {
            let dims = GridDimensions::new(2, 3).unwrap();
            assert_eq!(dims.cell_at(4), Some(CellDescriptor::new(1, 1)));
            assert_eq!(dims.cell_at(6), None);
            assert_eq!(GridDimensions::new(3, 0).unwrap().cell_at(0), None);
        }

        #[test]
        fn test_every_index_maps_back() {
            let dims = GridDimensions::PUZZLE;
            for index in 0..dims.cell_count() {
                let cell = dims.cell_at(index).unwrap();
                assert_eq!(dims.index_of(cell), Some(index));
            }
        }

        #[test]
        fn test_check_cell() {
            let dims = GridDimensions::PUZZLE;
            assert!(dims.check_cell(CellDescriptor::new(14, 14)).is_ok());
            assert_eq!(
                dims.check_cell(CellDescriptor::new(15, 0)),
                Err(GridError::CellOutOfBounds {
                    cell: CellDescriptor::new(15, 0),
                    rows: 15,
                    cols: 15,
                })
            );
        }
    }

    mod cells {
        use super::*;

        #[test]
        fn test_exact_size() {
            let mut cells = GridDimensions::new(3, 4).unwrap().cells();
            assert_eq!(cells.len(), 12);
            cells.next();
            cells.next_back();
            assert_eq!(cells.len(), 10);
        }

        #[test]
        fn test_reverse() {
            let cells: Vec<_> = GridDimensions::new(2, 2).unwrap().cells().rev().collect();
            assert_eq!(
                cells,
                [
                    CellDescriptor::new(1, 1),
                    CellDescriptor::new(1, 0),
                    CellDescriptor::new(0, 1),
                    CellDescriptor::new(0, 0),
                ]
            );
        }

        #[test]
        fn test_fused_after_end() {
            let mut cells = GridDimensions::new(1, 1).unwrap().cells();
            assert_eq!(cells.next(), Some(CellDescriptor::new(0, 0)));
            assert_eq!(cells.next(), None);
            assert_eq!(cells.next(), None);
            assert_eq!(cells.next_back(), None);
        }
    }
}
