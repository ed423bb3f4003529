//! Browser backend.
//!
//! This module owns the `web-sys` integration: the [`WebDocument`] host, the
//! one-shot readiness hook and diagnostics setup. Panics are reported to the
//! console and surfaced with an alert, since the page has no other error UI.

use std::sync::Once;

use wasm_bindgen::{JsCast as _, JsValue, closure::Closure};
use web_sys::{AddEventListenerOptions, Document, Element};

use crate::{HostDocument, HostError};

/// The browser document.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    /// Returns the document of the current window.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] outside a window context (e.g. in a worker).
    pub fn current() -> Result<Self, HostError> {
        let document = web_sys::window()
            .ok_or_else(|| HostError::new("window", "no global window"))?
            .document()
            .ok_or_else(|| HostError::new("window.document", "window has no document"))?;
        Ok(Self { document })
    }
}

impl HostDocument for WebDocument {
    type Element = Element;

    fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create_element(&mut self, tag: &str) -> Result<Element, HostError> {
        self.document
            .create_element(tag)
            .map_err(|e| js_host_error("createElement", &e))
    }

    fn add_class(&mut self, element: &Element, class: &str) -> Result<(), HostError> {
        element
            .class_list()
            .add_1(class)
            .map_err(|e| js_host_error("classList.add", &e))
    }

    fn set_attribute(
        &mut self,
        element: &Element,
        name: &str,
        value: &str,
    ) -> Result<(), HostError> {
        element
            .set_attribute(name, value)
            .map_err(|e| js_host_error("setAttribute", &e))
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<(), HostError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| js_host_error("appendChild", &e))
    }
}

fn js_host_error(operation: &'static str, value: &JsValue) -> HostError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    HostError::new(operation, message)
}

/// Runs `callback` once the document has been parsed.
///
/// While the document is still loading, the callback is registered as a
/// one-shot `DOMContentLoaded` listener. Otherwise the event has already
/// fired and the callback runs immediately.
///
/// # Errors
///
/// Returns [`HostError`] if there is no document or the listener cannot be
/// registered.
pub fn run_when_ready<F>(callback: F) -> Result<(), HostError>
where
    F: FnOnce() + 'static,
{
    let WebDocument { document } = WebDocument::current()?;
    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let listener = Closure::once_into_js(callback);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            listener.unchecked_ref(),
            &options,
        )
        .map_err(|e| js_host_error("addEventListener", &e))
}

/// Installs the panic hooks and routes `log` records to the browser console.
///
/// Only the first call has an effect.
pub fn init_diagnostics() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        install_panic_alert_hook();
        console_log::init_with_level(log::Level::Debug).ok();
    });
}

fn install_panic_alert_hook() {
    console_error_panic_hook::set_once();

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        previous(panic_info);

        let message = panic_info.to_string();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "The puzzle page has crashed.\n\n{message}\n\nSee the developer console for details."
            ));
        }
    }));
}
