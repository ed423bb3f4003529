//! Errors raised while sizing or addressing a grid.

use crate::CellDescriptor;

/// Errors produced by [`GridDimensions`](crate::GridDimensions) and
/// [`build_grid`](crate::build_grid).
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A dimension was negative, fractional, non-finite or too large.
    #[display("invalid grid dimension: {value}")]
    InvalidDimension {
        /// The rejected value.
        value: f64,
    },
    /// `rows * cols` does not fit in `usize`.
    #[display("grid of {rows}x{cols} cells is too large")]
    TooManyCells {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A board side is outside the supported range.
    #[display("board size {rows}x{cols} is out of range (each side must be 1-21)")]
    BoardSizeOutOfRange {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A cell lies outside the grid.
    #[display("cell {cell} is out of bounds for a {rows}x{cols} grid")]
    CellOutOfBounds {
        /// The offending cell.
        cell: CellDescriptor,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },
}
