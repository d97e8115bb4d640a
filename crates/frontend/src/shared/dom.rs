//! Small DOM helpers for the imperative parts of the page
//! (scrolling, cloning in-page sections, reading the viewport).
//!
//! Every helper is a silent no-op when the element it needs is missing.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn element_exists(id: &str) -> bool {
    !id.is_empty()
        && document()
            .and_then(|d| d.get_element_by_id(id))
            .is_some()
}

/// Smooth scroll so `element` starts at the top of the viewport.
pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_selector_into_view(selector: &str) {
    if let Some(element) = document().and_then(|d| d.query_selector(selector).ok().flatten()) {
        scroll_into_view_smooth(&element);
    }
}

/// Replace the children of `container` with a deep copy of the element with
/// id `anchor_id`. Returns `false` when that element does not exist.
pub fn clone_section_into(container: &Element, anchor_id: &str) -> bool {
    let Some(source) = document().and_then(|d| d.get_element_by_id(anchor_id)) else {
        return false;
    };
    let Ok(copy) = source.clone_node_with_deep(true) else {
        return false;
    };

    // The copy must not duplicate the id of the original section
    if let Some(copy) = copy.dyn_ref::<Element>() {
        copy.remove_attribute("id").ok();
        copy.remove_attribute("hidden").ok();
    }

    container.set_inner_html("");
    container.append_child(&copy).is_ok()
}

/// Viewport width in CSS pixels, if it can be read.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}
