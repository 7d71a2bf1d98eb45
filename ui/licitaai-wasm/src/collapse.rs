//! Keeps `aria-expanded` on collapse togglers in step with their target.

use crate::dom;
use crate::events;
use crate::widgets;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

pub fn init() -> Result<usize, JsValue> {
    let mut wired = 0;
    for toggler in dom::query_all("[data-bs-toggle='collapse']") {
        let Some(target) = dom::data(&toggler, "bs-target").and_then(|sel| dom::query(&sel)) else {
            continue;
        };
        for (event, expanded) in [
            (widgets::COLLAPSE_SHOWN, "true"),
            (widgets::COLLAPSE_HIDDEN, "false"),
        ] {
            let toggler = toggler.clone();
            let panel = target.clone();
            events::listen(&target, event, move |e: Event| {
                // nested collapses bubble their events up to this panel
                if is_from(&e, &panel) {
                    let _ = toggler.set_attribute("aria-expanded", expanded);
                }
            })?;
        }
        wired += 1;
    }
    Ok(wired)
}

fn is_from(event: &Event, panel: &Element) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .is_some_and(|el| el == *panel)
}
