//! Listener registration.
//!
//! Handlers live as long as the page, so closures are leaked with `forget()`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnOnce(Event) + 'static,
{
    let cb = Closure::once(handler);
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    )?;
    cb.forget();
    Ok(())
}
