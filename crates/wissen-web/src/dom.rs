//! Small DOM helpers. Lookups that fail return `None` instead of erroring.

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

/// The global window, if running in a browser.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The current document.
pub fn document() -> Option<Document> {
    window()?.document()
}

/// First element matching `selector` under the document.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// First element matching `selector` under `root`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Every element matching `selector` under the document, in order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every element matching `selector` under `root`, in order.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Adds or removes `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        tracing::debug!(class, error = ?e, "Class toggle failed");
    }
}

/// Sets an attribute, ignoring failures.
pub fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        tracing::debug!(name, error = ?e, "Attribute update failed");
    }
}

/// Sets `name` to `"true"` or `"false"`.
pub fn set_bool_attr(element: &Element, name: &str, value: bool) {
    set_attr(element, name, if value { "true" } else { "false" });
}

/// Removes an attribute, ignoring failures.
pub fn remove_attr(element: &Element, name: &str) {
    if let Err(e) = element.remove_attribute(name) {
        tracing::debug!(name, error = ?e, "Attribute removal failed");
    }
}

/// Focuses `element` when it is an HTML element.
pub fn focus(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.focus() {
            tracing::debug!(error = ?e, "Focus failed");
        }
    }
}

/// Reads `data-page` from the body.
pub fn body_page(document: &Document) -> Option<String> {
    document
        .body()
        .and_then(|body| body.get_attribute("data-page"))
        .filter(|page| !page.is_empty())
}

/// Current URL path, or empty when unavailable.
pub fn location_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Renders a thrown JS value for log and error messages.
pub fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Attaches a passive `handler` to `event` on `target` for the page
/// lifetime.
pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(target, event, handler).forget();
}

/// Like [`listen`], for handlers that call `preventDefault`.
pub fn listen_active<F>(target: &EventTarget, event: &'static str, handler: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event,
        EventListenerOptions::enable_prevent_default(),
        handler,
    )
    .forget();
}
