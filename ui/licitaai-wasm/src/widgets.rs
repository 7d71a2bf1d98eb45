//! Bindings to the page's Bootstrap bundle.
//!
//! Only the tab widget is driven from here; collapse is observed through its
//! `shown.bs.collapse` / `hidden.bs.collapse` events. When the bundle is not
//! loaded the constructor throws and the caller treats it as "no widget".

use wasm_bindgen::prelude::*;
use web_sys::Element;

pub const TAB_SHOWN: &str = "shown.bs.tab";
pub const COLLAPSE_SHOWN: &str = "shown.bs.collapse";
pub const COLLAPSE_HIDDEN: &str = "hidden.bs.collapse";

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    type Tab;

    #[wasm_bindgen(constructor, catch)]
    fn new(trigger: &Element) -> Result<Tab, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn show(this: &Tab) -> Result<(), JsValue>;
}

pub fn show_tab(trigger: &Element) -> Result<(), JsValue> {
    Tab::new(trigger)?.show()
}
