//! Page fixtures for the in-browser tests.

use crate::dom;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventInit, Storage};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Replaces the whole body, dropping elements (and listeners) from earlier tests.
pub fn mount(html: &str) {
    dom::document()
        .body()
        .expect("document has a body")
        .set_inner_html(html);
}

pub fn el(id: &str) -> Element {
    dom::by_id(id).unwrap_or_else(|| panic!("fixture is missing #{id}"))
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn fire(target: &Element, event: &str) {
    dispatch(target, event, false);
}

pub fn fire_bubbling(target: &Element, event: &str) {
    dispatch(target, event, true);
}

fn dispatch(target: &Element, event: &str, bubbles: bool) {
    let init = EventInit::new();
    init.set_bubbles(bubbles);
    let event = Event::new_with_event_init_dict(event, &init).expect("event");
    target.dispatch_event(&event).expect("dispatch");
}

pub fn local_storage() -> Storage {
    dom::window()
        .local_storage()
        .ok()
        .flatten()
        .expect("test browser provides localStorage")
}

/// Sets `location.hash` without adding a history entry; `""` clears it.
pub fn set_hash(hash: &str) -> Result<(), JsValue> {
    let location = dom::window().location();
    let url = format!("{}{}{}", location.pathname()?, location.search()?, hash);
    dom::window()
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
}
