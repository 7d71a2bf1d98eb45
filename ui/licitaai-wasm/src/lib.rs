//! LicitaAI page enhancements (Rust + WASM).
//!
//! One initialisation pass over a server-rendered page. Each module looks for
//! its own opt-in anchors and stays inert when they are missing, so the same
//! bundle serves every template. Components never share state.

pub mod checklist;
pub mod chips;
pub mod clipboard;
pub mod collapse;
pub mod countdown;
pub mod dom;
pub mod events;
pub mod schedule;
pub mod search;
pub mod storage;
pub mod tabs;
pub mod widgets;

#[cfg(test)]
mod fixture;

use la_core::Settings;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Runs when the bundle is instantiated; defers to `DOMContentLoaded` while
/// the page is still parsing.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // route panic messages to console.error
    console_error_panic_hook::set_once();

    if dom::document().ready_state() == "loading" {
        events::listen_once(&dom::document(), "DOMContentLoaded", |_| init())?;
    } else {
        init();
    }
    Ok(())
}

/// Wire every component. A failing component is logged and skipped.
fn init() {
    let settings = Rc::new(load_settings());

    report("countdown", countdown::init(&settings));
    report("checklist", checklist::init());
    report("clipboard", clipboard::init(&settings));
    report("tabs", tabs::init());
    report("search", search::init(&settings));
    report("filter chips", chips::init(&settings));
    report("collapse", collapse::init());
}

fn report(component: &str, outcome: Result<usize, JsValue>) {
    match outcome {
        Ok(0) => {}
        Ok(wired) => gloo_console::debug!(format!("[licitaai] {component}: {wired} wired")),
        Err(err) => gloo_console::warn!(format!("[licitaai] {component} disabled:"), err),
    }
}

/// Reads the optional `#la-config` JSON block; defaults otherwise.
fn load_settings() -> Settings {
    let Some(raw) = dom::by_id("la-config").and_then(|el| el.text_content()) else {
        return Settings::default();
    };
    match Settings::from_json(&raw) {
        Ok(settings) => settings,
        Err(err) => {
            gloo_console::warn!(format!("[licitaai] {err}; using defaults"));
            Settings::default()
        }
    }
}
