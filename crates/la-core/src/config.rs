//! Runtime settings.
//!
//! A page may embed `<script type="application/json" id="la-config">` to tune
//! timings or the copy feedback markup. Every field is optional.

use crate::error::CoreError;
use serde::Deserialize;

pub const DEFAULT_TICK_MS: u32 = 1_000;
pub const DEFAULT_DEBOUNCE_MS: u32 = 600;
pub const DEFAULT_COPY_FEEDBACK_MS: u32 = 1_800;
pub const DEFAULT_COPIED_MARKUP: &str = r#"<i class="bi bi-check2 me-1"></i>Copiado!"#;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tick_ms: u32,
    pub debounce_ms: u32,
    pub copy_feedback_ms: u32,
    pub copied_markup: String,
    /// Query parameters dropped together with any filter chip.
    pub reset_params: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            copied_markup: DEFAULT_COPIED_MARKUP.to_owned(),
            reset_params: vec!["page".to_owned()],
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(raw).map_err(CoreError::Config)?;
        Ok(settings.sanitized())
    }

    /// Zero intervals fall back to the defaults; a zero tick would spin.
    fn sanitized(mut self) -> Self {
        if self.tick_ms == 0 {
            self.tick_ms = DEFAULT_TICK_MS;
        }
        if self.debounce_ms == 0 {
            self.debounce_ms = DEFAULT_DEBOUNCE_MS;
        }
        if self.copy_feedback_ms == 0 {
            self.copy_feedback_ms = DEFAULT_COPY_FEEDBACK_MS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() -> anyhow::Result<()> {
        let settings = Settings::from_json("{}")?;
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.debounce_ms, 600);
        assert_eq!(settings.copy_feedback_ms, 1_800);
        assert_eq!(settings.reset_params, vec!["page".to_owned()]);
        Ok(())
    }

    #[test]
    fn partial_override_keeps_other_defaults() -> anyhow::Result<()> {
        let settings = Settings::from_json(r#"{"debounce_ms": 250, "extra": true}"#)?;
        assert_eq!(settings.debounce_ms, 250);
        assert_eq!(settings.tick_ms, DEFAULT_TICK_MS);
        assert_eq!(settings.copied_markup, DEFAULT_COPIED_MARKUP);
        Ok(())
    }

    #[test]
    fn zero_intervals_are_replaced() -> anyhow::Result<()> {
        let settings = Settings::from_json(r#"{"tick_ms": 0, "copy_feedback_ms": 0}"#)?;
        assert_eq!(settings.tick_ms, DEFAULT_TICK_MS);
        assert_eq!(settings.copy_feedback_ms, DEFAULT_COPY_FEEDBACK_MS);
        Ok(())
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
