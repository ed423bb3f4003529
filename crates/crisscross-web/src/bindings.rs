//! JavaScript bindings.

use crisscross_core::{CellDescriptor, GridDimensions};
use wasm_bindgen::prelude::*;

/// Returns `[{ row, col }, ...]` for every cell of a `rows × cols` grid in
/// row-major order.
///
/// Throws an `Error` if either dimension is negative, fractional or not finite.
#[wasm_bindgen(js_name = buildGrid)]
pub fn build_grid(rows: f64, cols: f64) -> Result<JsValue, JsValue> {
    let dims =
        GridDimensions::from_js_numbers(rows, cols).map_err(|e| js_error(&e.to_string()))?;
    let cells: Vec<CellDescriptor> = dims.cells().collect();
    serde_wasm_bindgen::to_value(&cells).map_err(|e| js_error(&e.to_string()))
}

fn js_error(message: &str) -> JsValue {
    JsValue::from(js_sys::Error::new(message))
}
