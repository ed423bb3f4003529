//! Grid cell addressing.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// The position of one cell in a grid.
///
/// Rows count from the top and columns from the left, both starting at 0.
/// A descriptor carries no bounds of its own; see
/// [`GridDimensions::contains`](crate::GridDimensions::contains).
///
/// # Examples
///
/// ```
/// use crisscross_core::CellDescriptor;
///
/// let cell = CellDescriptor::new(2, 7);
/// assert_eq!(cell.row(), 2);
/// assert_eq!(cell.col(), 7);
/// assert_eq!(cell.to_string(), "(2, 7)");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CellDescriptor {
    row: usize,
    col: usize,
}

impl CellDescriptor {
    /// Creates a descriptor for the given row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the 0-indexed row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the 0-indexed column.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }
}

impl Display for CellDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for CellDescriptor {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
