//! Filter chip removal: `.filter-chip a[data-remove="<param>"]`.

use crate::dom;
use crate::events;
use la_core::{Settings, query};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Url};

pub fn init(settings: &Rc<Settings>) -> Result<usize, JsValue> {
    let chips = dom::query_all(".filter-chip a[data-remove]");
    for chip in &chips {
        let link = chip.clone();
        let settings = settings.clone();
        events::listen(chip, "click", move |event: Event| {
            event.prevent_default();
            let param = dom::data(&link, "remove").unwrap_or_default();
            if let Err(err) = navigate_without(&param, &settings.reset_params) {
                gloo_console::warn!("[licitaai] filter removal failed:", err);
            }
        })?;
    }
    Ok(chips.len())
}

fn navigate_without(param: &str, reset_params: &[String]) -> Result<(), JsValue> {
    let location = dom::window().location();
    let url = Url::new(&location.href()?)?;

    let names: Vec<&str> = std::iter::once(param)
        .chain(reset_params.iter().map(String::as_str))
        .collect();
    url.set_search(&query::strip_params(&url.search(), names.as_slice()));

    location.set_href(&url.href())
}
