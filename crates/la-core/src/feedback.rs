//! Temporary markup swap on a button, e.g. "Copiado!" after a clipboard write.
//!
//! The original markup is captured on the first swap only; a repeated swap
//! while the feedback is up just restarts the restore timer.

use crate::debounce::{Debounce, Schedule};
use std::cell::RefCell;
use std::rc::Rc;

pub trait Markup {
    fn markup(&self) -> String;
    fn set_markup(&self, html: &str);
}

struct Swap<T> {
    target: T,
    shown: String,
    original: RefCell<Option<String>>,
}

impl<T: Markup> Swap<T> {
    fn restore(&self) {
        if let Some(original) = self.original.borrow_mut().take() {
            self.target.set_markup(&original);
        }
    }
}

pub struct Feedback<T, S: Schedule> {
    swap: Rc<Swap<T>>,
    restore: RefCell<Debounce<S>>,
}

impl<T: Markup + 'static, S: Schedule> Feedback<T, S> {
    pub fn new(target: T, shown: impl Into<String>, schedule: S, restore_ms: u32) -> Self {
        Self {
            swap: Rc::new(Swap {
                target,
                shown: shown.into(),
                original: RefCell::new(None),
            }),
            restore: RefCell::new(Debounce::new(schedule, restore_ms)),
        }
    }

    pub fn show(&self) {
        let swap = &self.swap;
        swap.original
            .borrow_mut()
            .get_or_insert_with(|| swap.target.markup());
        swap.target.set_markup(&swap.shown);

        // weak so a button dropped mid-window is not kept alive by its timer
        let pending = Rc::downgrade(&self.swap);
        self.restore.borrow_mut().trigger(move || {
            if let Some(swap) = pending.upgrade() {
                swap.restore();
            }
        });
    }
}
