//! Requirement checklist persistence.
//!
//! The first `[data-opp-id]` element names the opportunity; every
//! `.chk-item input[type='checkbox'][data-req-id]` below is restored from and
//! saved to `la_chk_<id>`.

use crate::dom;
use crate::events;
use crate::storage::LocalStore;
use la_core::{Checklist, CoreError};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

const CHECKED_CLASS: &str = "checked";

pub fn init() -> Result<usize, JsValue> {
    let Some(opp_id) = dom::query("[data-opp-id]").and_then(|el| dom::data(&el, "opp-id")) else {
        return Ok(0);
    };
    let store = LocalStore::open();
    if !store.is_available() {
        gloo_console::warn!("[licitaai] localStorage unavailable; checklist will not persist");
    }
    let Some(checklist) = Checklist::for_opportunity(store, &opp_id) else {
        return Ok(0);
    };
    let checklist = Rc::new(checklist);

    let mut wired = 0;
    for el in dom::query_all(".chk-item input[type='checkbox']") {
        let Ok(checkbox) = el.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let Some(req_id) = dom::data(&checkbox, "req-id") else {
            continue;
        };
        let item = dom::closest(&checkbox, ".chk-item");

        // stored state wins over server-rendered or browser-restored checks
        let stored = checklist.is_checked(&req_id);
        checkbox.set_checked(stored);
        if let Some(item) = &item {
            dom::toggle_class(item, CHECKED_CLASS, stored);
        }

        let checklist = checklist.clone();
        let input = checkbox.clone();
        events::listen(&checkbox, "change", move |_| {
            let checked = input.checked();
            match checklist.record(&req_id, checked) {
                Ok(_) | Err(CoreError::StorageUnavailable) => {}
                Err(err) => gloo_console::warn!(format!("[licitaai] checklist not saved: {err}")),
            }
            if let Some(item) = &item {
                dom::toggle_class(item, CHECKED_CLASS, checked);
            }
        })?;
        wired += 1;
    }

    Ok(wired)
}
