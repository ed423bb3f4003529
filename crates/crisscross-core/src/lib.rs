//! Core data structures for criss-cross puzzle grids.
//!
//! This crate knows nothing about the page the grid is rendered into. It only
//! enumerates grid positions, so the layout logic can be tested without a
//! browser.
//!
//! # Overview
//!
//! - [`cell`]: [`CellDescriptor`], the (row, column) address of one cell
//! - [`dimensions`]: [`GridDimensions`], grid size, bounds checks and the
//!   row-major index mapping
//! - [`grid`]: [`build_grid`], the row-major enumeration of every cell
//! - [`error`]: [`GridError`]
//!
//! # Examples
//!
//! ```
//! use crisscross_core::{CellDescriptor, build_grid};
//!
//! let cells = build_grid(2, 3)?;
//! assert_eq!(cells.len(), 6);
//! assert_eq!(cells[0], CellDescriptor::new(0, 0));
//! assert_eq!(cells[3], CellDescriptor::new(1, 0));
//! # Ok::<(), crisscross_core::GridError>(())
//! ```

pub mod cell;
pub mod dimensions;
pub mod error;
pub mod grid;

pub use self::{
    cell::CellDescriptor,
    dimensions::{Cells, GridDimensions},
    error::GridError,
    grid::build_grid,
};
