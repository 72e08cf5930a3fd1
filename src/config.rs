//! Page contract used to wire the effects.
//!
//! Defaults describe the portfolio page the effects ship with. A host page
//! with different markup can pass a JSON object to override individual keys
//! (camelCase); absent keys keep their defaults and unknown keys are rejected.

use serde::Deserialize;

use crate::consts::{
    ANCHOR_SELECTOR, FADE_SELECTOR, HERO_SELECTOR, LOADED_CLASS, PARALLAX_FACTOR, PROFILE_IMAGE_SELECTOR,
    TITLE_SELECTOR, TYPE_START_DELAY_MS, TYPE_STEP_MS, VISIBLE_CLASS,
};
use crate::error::EffectsError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct EffectsConfig {
    pub hero_selector: String,
    pub title_selector: String,
    pub anchor_selector: String,
    pub profile_image_selector: String,
    pub fade_selector: String,
    pub loaded_class: String,
    pub visible_class: String,
    pub parallax_factor: f64,
    pub type_start_delay_ms: u32,
    pub type_step_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            hero_selector: HERO_SELECTOR.to_owned(),
            title_selector: TITLE_SELECTOR.to_owned(),
            anchor_selector: ANCHOR_SELECTOR.to_owned(),
            profile_image_selector: PROFILE_IMAGE_SELECTOR.to_owned(),
            fade_selector: FADE_SELECTOR.to_owned(),
            loaded_class: LOADED_CLASS.to_owned(),
            visible_class: VISIBLE_CLASS.to_owned(),
            parallax_factor: PARALLAX_FACTOR,
            type_start_delay_ms: TYPE_START_DELAY_MS,
            type_step_ms: TYPE_STEP_MS,
        }
    }
}

impl EffectsConfig {
    /// Parse overrides from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::Config`] for malformed JSON, wrong value types,
    /// or unknown keys.
    pub fn from_json(raw: &str) -> Result<Self, EffectsError> {
        Ok(serde_json::from_str(raw)?)
    }
}
