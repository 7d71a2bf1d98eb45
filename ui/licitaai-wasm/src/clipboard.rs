//! Copy buttons.
//!
//! `#btn-copy` copies the `#opp-title` text plus the page URL;
//! `#btn-copy-summary` copies the visible text of `#ai-summary-content`.
//! Only a successful clipboard write swaps the button markup.

use crate::dom;
use crate::events;
use crate::schedule::GlooSchedule;
use js_sys::Reflect;
use la_core::{Feedback, Markup, Settings, clipboard};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Element, HtmlElement};

/// A button whose inner HTML carries the copy feedback.
pub struct ButtonMarkup(pub Element);

impl Markup for ButtonMarkup {
    fn markup(&self) -> String {
        self.0.inner_html()
    }

    fn set_markup(&self, html: &str) {
        self.0.set_inner_html(html);
    }
}

pub type CopyFeedback = Feedback<ButtonMarkup, GlooSchedule>;

pub fn feedback_for(button: &Element, settings: &Settings) -> Rc<CopyFeedback> {
    Rc::new(Feedback::new(
        ButtonMarkup(button.clone()),
        settings.copied_markup.as_str(),
        GlooSchedule,
        settings.copy_feedback_ms,
    ))
}

pub fn init(settings: &Rc<Settings>) -> Result<usize, JsValue> {
    let mut wired = 0;

    if let Some(button) = dom::by_id("btn-copy") {
        let feedback = feedback_for(&button, settings);
        events::listen(&button, "click", move |_| {
            let title = dom::by_id("opp-title").and_then(|el| el.text_content());
            let text = clipboard::title_and_url(title.as_deref(), &dom::current_href());
            copy_with_feedback(text, feedback.clone());
        })?;
        wired += 1;
    }

    if let Some(button) = dom::by_id("btn-copy-summary") {
        let feedback = feedback_for(&button, settings);
        events::listen(&button, "click", move |_| {
            let Some(summary) = dom::by_id_typed::<HtmlElement>("ai-summary-content") else {
                return;
            };
            copy_with_feedback(clipboard::summary(&summary.inner_text()), feedback.clone());
        })?;
        wired += 1;
    }

    Ok(wired)
}

fn copy_with_feedback(text: String, feedback: Rc<CopyFeedback>) {
    spawn_local(async move {
        match write_text(&text).await {
            Ok(()) => feedback.show(),
            Err(err) => gloo_console::debug!("[licitaai] clipboard write failed:", err),
        }
    });
}

async fn write_text(text: &str) -> Result<(), JsValue> {
    let navigator = dom::window().navigator();
    // `navigator.clipboard` is undefined outside secure contexts
    if Reflect::get(&navigator, &JsValue::from_str("clipboard"))?.is_undefined() {
        return Err(JsValue::from_str("clipboard API unavailable"));
    }
    JsFuture::from(navigator.clipboard().write_text(text)).await?;
    Ok(())
}
