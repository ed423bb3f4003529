//! Page configuration.
//!
//! The page has no runtime configuration source; [`PageConfig::default`] is
//! the configuration the puzzle page runs with.

use crisscross_core::{GridDimensions, GridError};
use serde::{Deserialize, Serialize};

/// Where the grid goes and how large it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// Element id of the container the cells are appended to.
    pub container_id: String,
    /// Markup of each cell element.
    pub markup: CellMarkup,
}

impl PageConfig {
    /// Element id of the puzzle container.
    pub const PUZZLE_CONTAINER_ID: &'static str = "puzzle";

    /// Returns the grid size as [`GridDimensions`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooManyCells`] if `rows * cols` overflows.
    pub const fn dimensions(&self) -> Result<GridDimensions, GridError> {
        GridDimensions::new(self.rows, self.cols)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            rows: GridDimensions::PUZZLE.rows(),
            cols: GridDimensions::PUZZLE.cols(),
            container_id: Self::PUZZLE_CONTAINER_ID.to_owned(),
            markup: CellMarkup::default(),
        }
    }
}

/// Tag, class and attribute names used for cell elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMarkup {
    /// Element tag name.
    pub tag: String,
    /// Class marking an element as a grid cell.
    pub class: String,
    /// Attribute holding the decimal row index.
    pub row_attribute: String,
    /// Attribute holding the decimal column index.
    pub col_attribute: String,
}

impl Default for CellMarkup {
    fn default() -> Self {
        Self {
            tag: "div".to_owned(),
            class: "cell".to_owned(),
            row_attribute: "data-row".to_owned(),
            col_attribute: "data-col".to_owned(),
        }
    }
}
