//! Page glue for the criss-cross puzzle grid.
//!
//! The grid layout itself comes from [`crisscross_core`]. This crate turns it
//! into host elements: [`attach_grid`] looks up the `#puzzle` container,
//! creates one `div.cell` per grid position tagged with `data-row` and
//! `data-col`, and appends them in row-major order.
//!
//! Hosts are abstracted by [`HostDocument`]. The browser host lives in
//! [`platform`] (WASM only); [`MemoryDocument`] is an in-memory host used for
//! native rendering and tests.
//!
//! # Examples
//!
//! ```
//! use crisscross_web::{MemoryDocument, PageConfig, attach_grid};
//!
//! let mut document = MemoryDocument::new();
//! let puzzle = document.append_container("div", "puzzle");
//!
//! let summary = attach_grid(&mut document, &PageConfig::default())?;
//! assert_eq!(summary.cells, 225);
//! assert_eq!(document.children(puzzle).count(), 225);
//! # Ok::<(), crisscross_web::AttachError>(())
//! ```

pub mod attach;
#[cfg(target_arch = "wasm32")]
pub mod bindings;
pub mod config;
pub mod host;
pub mod memory;
pub mod platform;
pub mod version;

pub use self::{
    attach::{AttachError, AttachSummary, attach_grid, create_cell},
    config::{CellMarkup, PageConfig},
    host::{HostDocument, HostError},
    memory::{MemoryDocument, MemoryElement, NodeId},
};
