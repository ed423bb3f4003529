//! Criss-cross puzzle page entry point.
//!
//! In the browser this attaches the cell grid to `#puzzle` once the document
//! has been parsed. Natively it renders the same grid into an in-memory page
//! and prints the container's HTML to stdout.

use crisscross_web::{PageConfig, attach_grid, platform, version};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), crisscross_web::AttachError> {
    use crisscross_web::MemoryDocument;

    platform::init_diagnostics();
    log::info!(
        "Starting Crisscross renderer, version={}",
        version::build_version()
    );

    let config = PageConfig::default();
    let mut document = MemoryDocument::new();
    let container = document.append_container("div", &config.container_id);
    attach_grid(&mut document, &config)?;

    println!("{}", document.to_html(container));
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use crisscross_web::platform::WebDocument;

    platform::init_diagnostics();
    log::info!(
        "Starting Crisscross WASM page, version={}",
        version::build_version()
    );

    let registered = platform::run_when_ready(|| {
        log::info!("DOM fully loaded and parsed");
        let result = WebDocument::current()
            .map_err(crisscross_web::AttachError::from)
            .and_then(|mut document| attach_grid(&mut document, &PageConfig::default()));
        if let Err(err) = result {
            log::error!("failed to attach the puzzle grid: {err}");
        }
    });
    if let Err(err) = registered {
        log::error!("failed to wait for the document: {err}");
    }
}
