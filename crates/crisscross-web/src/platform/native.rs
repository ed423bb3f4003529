//! Native diagnostics.

/// Installs the panic reporter and the `RUST_LOG`-driven logger.
pub fn init_diagnostics() {
    better_panic::install();
    env_logger::init();
}
