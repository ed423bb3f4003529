//! Row-major grid construction.

use crate::{CellDescriptor, GridDimensions, GridError};

/// Builds the descriptors of every cell in a `rows × cols` grid.
///
/// Cells are returned in row-major order: all of row 0 from left to right,
/// then row 1, and so on. Appending elements in this order reproduces the
/// visual layout of the grid.
///
/// A grid with zero rows or zero columns yields an empty vector.
///
/// # Errors
///
/// Returns [`GridError::TooManyCells`] if `rows * cols` overflows `usize`.
///
/// # Examples
///
/// ```
/// use crisscross_core::{CellDescriptor, build_grid};
///
/// assert_eq!(build_grid(1, 1)?, [CellDescriptor::new(0, 0)]);
/// assert!(build_grid(0, 5)?.is_empty());
/// # Ok::<(), crisscross_core::GridError>(())
/// ```
pub fn build_grid(rows: usize, cols: usize) -> Result<Vec<CellDescriptor>, GridError> {
    Ok(GridDimensions::new(rows, cols)?.cells().collect())
}
