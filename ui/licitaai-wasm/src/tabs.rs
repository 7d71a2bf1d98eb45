//! Tab fragment routing.
//!
//! The URL fragment is authoritative: a shown tab replaces it (no new history
//! entry) and a fragment present on load selects its tab.

use crate::dom;
use crate::events;
use crate::widgets;
use la_core::routing;
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub fn init() -> Result<usize, JsValue> {
    let links = dom::query_all(".la-tabs a[data-bs-toggle='tab']");
    for link in &links {
        link.set_attribute("role", "tab")?;
        let target = link.clone();
        events::listen(link, widgets::TAB_SHOWN, move |_| {
            if let Some(href) = target.get_attribute("href") {
                replace_fragment(&href);
            }
        })?;
    }

    if let Err(err) = show_linked_tab() {
        gloo_console::warn!("[licitaai] deep-linked tab not shown:", err);
    }
    Ok(links.len())
}

fn replace_fragment(href: &str) {
    if let Ok(history) = dom::window().history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(href));
    }
}

fn show_linked_tab() -> Result<(), JsValue> {
    let hash = dom::window().location().hash()?;
    let candidates: Vec<Element> = dom::query_all(".la-tabs a[href]");
    let hrefs: Vec<String> = candidates
        .iter()
        .map(|a| a.get_attribute("href").unwrap_or_default())
        .collect();

    match routing::match_fragment(&hash, hrefs.iter().map(String::as_str)) {
        Some(index) => widgets::show_tab(&candidates[index]),
        None => Ok(()),
    }
}
