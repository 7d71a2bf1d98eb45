//! Trailing-edge debounce over an abstract timer.

/// Timer facility. Dropping the returned handle must cancel the timer.
pub trait Schedule {
    type Handle;

    fn after<F>(&self, delay_ms: u32, task: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}

/// Holds at most one pending task; every `trigger` replaces it, so the task
/// only runs once `delay_ms` pass without another trigger.
pub struct Debounce<S: Schedule> {
    schedule: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Schedule> Debounce<S> {
    pub fn new(schedule: S, delay_ms: u32) -> Self {
        Self {
            schedule,
            delay_ms,
            pending: None,
        }
    }

    pub fn trigger<F>(&mut self, task: F)
    where
        F: FnOnce() + 'static,
    {
        // drop first so the old timer is cleared before the new one is armed
        self.pending = None;
        self.pending = Some(self.schedule.after(self.delay_ms, task));
    }
}
