#![cfg(target_arch = "wasm32")]

use std::{cell::Cell, rc::Rc};

use crisscross_core::CellDescriptor;
use crisscross_web::{
    PageConfig, attach_grid, bindings,
    platform::{self, WebDocument},
};
use wasm_bindgen::JsCast as _;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_container(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document
        .document_element()
        .unwrap()
        .append_child(&container)
        .unwrap();
    container
}

#[wasm_bindgen_test]
fn test_attaches_puzzle_grid_to_dom() {
    let container = mount_container("puzzle");
    let mut document = WebDocument::current().unwrap();

    let summary = attach_grid(&mut document, &PageConfig::default()).unwrap();
    assert_eq!(summary.cells, 225);
    assert_eq!(container.child_element_count(), 225);

    let first = container.first_element_child().unwrap();
    assert_eq!(first.tag_name(), "DIV");
    assert!(first.class_list().contains("cell"));
    assert_eq!(first.get_attribute("data-row").as_deref(), Some("0"));
    assert_eq!(first.get_attribute("data-col").as_deref(), Some("0"));

    let second = first.next_element_sibling().unwrap();
    assert_eq!(second.get_attribute("data-row").as_deref(), Some("0"));
    assert_eq!(second.get_attribute("data-col").as_deref(), Some("1"));

    let last = container.last_element_child().unwrap();
    assert_eq!(last.get_attribute("data-row").as_deref(), Some("14"));
    assert_eq!(last.get_attribute("data-col").as_deref(), Some("14"));

    container.remove();
}

#[wasm_bindgen_test]
fn test_missing_container_in_dom() {
    let mut document = WebDocument::current().unwrap();
    let config = PageConfig {
        container_id: "no-such-container".to_owned(),
        ..PageConfig::default()
    };

    let err = attach_grid(&mut document, &config).unwrap_err();
    assert_eq!(err.to_string(), "container element #no-such-container not found");
}

#[wasm_bindgen_test]
fn test_run_when_ready_on_parsed_document() {
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);

    platform::run_when_ready(move || flag.set(true)).unwrap();
    assert!(ran.get());
}

#[wasm_bindgen_test]
fn test_build_grid_returns_row_major_objects() {
    let value = bindings::build_grid(2.0, 3.0).unwrap();
    let cells: Vec<CellDescriptor> = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(
        cells,
        [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)].map(CellDescriptor::from)
    );
}

#[wasm_bindgen_test]
fn test_build_grid_throws_on_negative_dimension() {
    let err = bindings::build_grid(-1.0, 2.0).unwrap_err();
    let err = err.dyn_into::<js_sys::Error>().unwrap();
    assert_eq!(String::from(err.message()), "invalid grid dimension: -1");
}

#[wasm_bindgen_test]
fn test_init_diagnostics_is_idempotent() {
    platform::init_diagnostics();
    platform::init_diagnostics();
    log::debug!("diagnostics initialized");
}
