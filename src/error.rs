//! Setup failures for [`PageEffects`](crate::page::PageEffects).
//!
//! A missing optional element is never an error. `NoWindow`, `NoDocument` and
//! `Config` stop the effects from starting; `Selector` and `Listener` disable
//! only the behavior they occur in.

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum EffectsError {
    /// No global `window` (not running in a browser page).
    #[error("no window available")]
    NoWindow,

    /// The window has no document.
    #[error("no document available")]
    NoDocument,

    /// The browser rejected a selector from the config.
    #[error("invalid selector {selector:?}")]
    Selector { selector: String },

    /// A listener could not be attached.
    #[error("failed to attach {event} listener")]
    Listener { event: &'static str },

    /// Config JSON could not be parsed.
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<EffectsError> for JsValue {
    fn from(err: EffectsError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
