//! Browser timers behind `la_core::Schedule`.

use gloo_timers::callback::Timeout;
use la_core::Schedule;

/// Dropping the returned `Timeout` clears it.
pub struct GlooSchedule;

impl Schedule for GlooSchedule {
    type Handle = Timeout;

    fn after<F>(&self, delay_ms: u32, task: F) -> Timeout
    where
        F: FnOnce() + 'static,
    {
        Timeout::new(delay_ms, task)
    }
}
