//! Platform-specific startup and host glue.
//!
//! `#[cfg]` usage is kept to this module. The `native` module wires up
//! terminal diagnostics, while the `wasm` module provides the browser
//! document, the readiness hook and console logging.

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use native::init_diagnostics;
#[cfg(target_arch = "wasm32")]
pub use wasm::{WebDocument, init_diagnostics, run_when_ready};
