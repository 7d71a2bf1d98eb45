//! Deadline countdown.
//!
//! `#countdown[data-deadline]` with optional `#cd-days`, `#cd-hours`,
//! `#cd-mins`, `#cd-secs` children. Keeps ticking after expiry; the display
//! just stays at zero.

use crate::dom;
use gloo_timers::callback::Interval;
use la_core::{Remaining, Settings};
use wasm_bindgen::JsValue;

const FIELD_IDS: [&str; 4] = ["cd-days", "cd-hours", "cd-mins", "cd-secs"];

pub fn init(settings: &Settings) -> Result<usize, JsValue> {
    let Some(root) = dom::by_id("countdown") else {
        return Ok(0);
    };
    let raw = dom::data(&root, "deadline").unwrap_or_default();
    // NaN for unparsable input; `Remaining` clamps it to zero
    let deadline = js_sys::Date::new(&JsValue::from_str(&raw)).get_time();
    let fields = FIELD_IDS.map(dom::by_id);

    let render = move || {
        let remaining = Remaining::between(deadline, js_sys::Date::now());
        for (slot, text) in fields.iter().zip(remaining.fields()) {
            if let Some(el) = slot {
                dom::set_text(el, &text);
            }
        }
    };
    render();
    Interval::new(settings.tick_ms, render).forget();

    Ok(1)
}
