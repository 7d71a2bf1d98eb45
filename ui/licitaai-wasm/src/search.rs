//! Debounced submit of the list filter form from `#filter-q`.

use crate::dom;
use crate::events;
use crate::schedule::GlooSchedule;
use la_core::{Debounce, Settings};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

pub fn init(settings: &Settings) -> Result<usize, JsValue> {
    let Some(input) = dom::by_id_typed::<HtmlInputElement>("filter-q") else {
        return Ok(0);
    };

    let debounce = RefCell::new(Debounce::new(GlooSchedule, settings.debounce_ms));
    let field = input.clone();
    events::listen(&input, "input", move |_| {
        let field = field.clone();
        debounce.borrow_mut().trigger(move || submit(&field));
    })?;

    Ok(1)
}

fn submit(input: &HtmlInputElement) {
    let Some(form) = input.form() else {
        return;
    };
    if let Err(err) = form.submit() {
        gloo_console::warn!("[licitaai] search submit failed:", err);
    }
}
