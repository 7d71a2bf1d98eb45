//! Virtual timers for unit tests.

use crate::debounce::Schedule;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct Timer {
    due: u64,
    cancelled: Rc<Cell<bool>>,
    task: Option<Box<dyn FnOnce()>>,
}

/// Tasks run only when `advance_to` passes their due time.
#[derive(Clone, Default)]
pub(crate) struct ManualClock {
    pub(crate) now: Rc<Cell<u64>>,
    timers: Rc<RefCell<Vec<Timer>>>,
}

pub(crate) struct ManualHandle(Rc<Cell<bool>>);

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl ManualClock {
    pub(crate) fn advance_to(&self, t: u64) {
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                timers.retain(|timer| !timer.cancelled.get() && timer.task.is_some());
                timers.sort_by_key(|timer| timer.due);
                match timers.first_mut() {
                    Some(timer) if timer.due <= t => {
                        self.now.set(timer.due);
                        timer.task.take()
                    }
                    _ => None,
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.now.set(t);
    }

    /// Timers armed and not yet fired or cancelled.
    pub(crate) fn pending(&self) -> usize {
        self.timers
            .borrow()
            .iter()
            .filter(|timer| !timer.cancelled.get() && timer.task.is_some())
            .count()
    }
}

impl Schedule for ManualClock {
    type Handle = ManualHandle;

    fn after<F>(&self, delay_ms: u32, task: F) -> ManualHandle
    where
        F: FnOnce() + 'static,
    {
        let cancelled = Rc::new(Cell::new(false));
        self.timers.borrow_mut().push(Timer {
            due: self.now.get() + u64::from(delay_ms),
            cancelled: cancelled.clone(),
            task: Some(Box::new(task)),
        });
        ManualHandle(cancelled)
    }
}
