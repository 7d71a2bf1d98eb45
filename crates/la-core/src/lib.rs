//! Page-independent logic behind the LicitaAI browser enhancements.
//!
//! Nothing in here touches the DOM. The `licitaai-wasm` crate resolves the
//! page anchors and feeds plain values into these modules, which keeps every
//! decision testable with a regular `cargo test`.

pub mod checklist;
pub mod clipboard;
pub mod config;
pub mod countdown;
pub mod debounce;
pub mod error;
pub mod feedback;
pub mod query;
pub mod routing;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use checklist::{Checklist, ChecklistState, storage_key};
pub use config::Settings;
pub use countdown::Remaining;
pub use debounce::{Debounce, Schedule};
pub use error::CoreError;
pub use feedback::{Feedback, Markup};
pub use store::{KeyValueStore, MemoryStore, NoopStore};
