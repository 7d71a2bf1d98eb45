//! Per-opportunity requirement checklist.
//!
//! State lives under `la_chk_<OpportunityId>` as a JSON object mapping
//! requirement ids to booleans. Fields we did not write are carried through
//! every read-modify-write untouched.

use crate::error::CoreError;
use crate::store::KeyValueStore;
use serde_json::{Map, Value};

pub const KEY_PREFIX: &str = "la_chk_";

pub fn storage_key(opportunity_id: &str) -> String {
    format!("{KEY_PREFIX}{opportunity_id}")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChecklistState {
    entries: Map<String, Value>,
}

impl ChecklistState {
    /// Absent, malformed or non-object blobs all read as a fresh checklist.
    pub fn parse(raw: Option<&str>) -> Self {
        let entries = raw
            .and_then(|text| serde_json::from_str::<Value>(text).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default();
        Self { entries }
    }

    pub fn is_checked(&self, requirement_id: &str) -> bool {
        self.entries.get(requirement_id).is_some_and(truthy)
    }

    pub fn set(&mut self, requirement_id: &str, checked: bool) {
        self.entries
            .insert(requirement_id.to_owned(), Value::Bool(checked));
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(&self.entries).map_err(CoreError::Serialize)
    }
}

/// Loose truthiness, so blobs written by older scripts (`1`, `"yes"`) still count.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Checklist bound to exactly one opportunity's key.
pub struct Checklist<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Checklist<S> {
    /// Returns `None` for an empty opportunity id; such pages have no checklist.
    pub fn for_opportunity(store: S, opportunity_id: &str) -> Option<Self> {
        if opportunity_id.is_empty() {
            return None;
        }
        Some(Self {
            store,
            key: storage_key(opportunity_id),
        })
    }

    /// Current stored state. Read failures degrade to an empty checklist.
    pub fn load(&self) -> ChecklistState {
        match self.store.get(&self.key) {
            Ok(raw) => ChecklistState::parse(raw.as_deref()),
            Err(_) => ChecklistState::default(),
        }
    }

    pub fn is_checked(&self, requirement_id: &str) -> bool {
        self.load().is_checked(requirement_id)
    }

    /// Re-reads the blob, applies one toggle and writes the whole state back once.
    pub fn record(&self, requirement_id: &str, checked: bool) -> Result<ChecklistState, CoreError> {
        let mut state = self.load();
        state.set(requirement_id, checked);
        self.store.set(&self.key, &state.to_json()?)?;
        Ok(state)
    }
}
