//! Attaching the cell grid to a host document.

use crisscross_core::{CellDescriptor, GridError};

use crate::{CellMarkup, HostDocument, HostError, PageConfig};

/// Errors that can occur while attaching the grid.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AttachError {
    /// No element with the configured container id exists.
    #[display("container element #{id} not found")]
    ContainerNotFound {
        /// The id that was looked up.
        id: String,
    },
    /// The configured grid size is unusable.
    #[display("invalid grid: {_0}")]
    Grid(#[from] GridError),
    /// A host DOM operation failed.
    #[display("host operation failed: {_0}")]
    Host(#[from] HostError),
}

/// What [`attach_grid`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachSummary {
    /// Id of the container the cells were appended to.
    pub container_id: String,
    /// Number of cell elements appended.
    pub cells: usize,
}

/// Builds the cell grid and appends it to the configured container.
///
/// The container is looked up first and every cell element is created before
/// the first one is appended, so a missing container or a failure while
/// creating cells leaves the document untouched. Cells are appended in
/// row-major order.
///
/// Calling this twice on the same document appends a second set of cells.
///
/// # Errors
///
/// Returns [`AttachError::ContainerNotFound`] if the container is missing,
/// [`AttachError::Grid`] if the configured size overflows, and
/// [`AttachError::Host`] if a host operation fails.
pub fn attach_grid<D>(document: &mut D, config: &PageConfig) -> Result<AttachSummary, AttachError>
where
    D: HostDocument,
{
    let container = document.get_element_by_id(&config.container_id).ok_or_else(|| {
        AttachError::ContainerNotFound {
            id: config.container_id.clone(),
        }
    })?;
    let dims = config.dimensions()?;

    let elements = dims
        .cells()
        .map(|cell| create_cell(document, &config.markup, cell))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!(
        "created {} cell elements for a {}x{} grid",
        elements.len(),
        dims.rows(),
        dims.cols()
    );

    for element in &elements {
        document.append_child(&container, element)?;
    }

    let summary = AttachSummary {
        container_id: config.container_id.clone(),
        cells: elements.len(),
    };
    log::info!(
        "attached {} cells to #{}",
        summary.cells,
        summary.container_id
    );
    Ok(summary)
}

/// Creates one detached cell element tagged with its position.
///
/// # Errors
///
/// Returns [`HostError`] if the host rejects the tag, class or attributes.
pub fn create_cell<D>(
    document: &mut D,
    markup: &CellMarkup,
    cell: CellDescriptor,
) -> Result<D::Element, HostError>
where
    D: HostDocument,
{
    let element = document.create_element(&markup.tag)?;
    document.add_class(&element, &markup.class)?;
    document.set_attribute(&element, &markup.row_attribute, &cell.row().to_string())?;
    document.set_attribute(&element, &markup.col_attribute, &cell.col().to_string())?;
    Ok(element)
}
