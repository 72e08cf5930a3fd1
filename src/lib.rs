//! Scroll, typing, and reveal effects for the portfolio landing page.
//!
//! This crate is compiled to WebAssembly and loaded by the page. The host
//! calls [`init`] (or [`init_with_config`]) once; everything after that is
//! driven by browser events. Each effect is independent: a missing element
//! disables only its own effect.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | DOM lookup, listener wiring, and the one-time start |
//! | [`config`] | Selectors, marker classes, and timings with JSON overrides |
//! | [`parallax`] | Damped background offset for the hero section |
//! | [`typewriter`] | Character cursor and reveal timeline for the title |
//! | [`anchor`] | Fragment parsing for in-page links |
//! | [`viewport`] | Containment test and one-way reveal latch |
//! | [`error`] | Setup failure type |
//! | [`consts`] | Fixed page contract defaults |

use wasm_bindgen::prelude::*;

pub mod anchor;
pub mod config;
pub mod consts;
pub mod error;
pub mod page;
pub mod parallax;
pub mod typewriter;
pub mod viewport;

use config::EffectsConfig;

/// Start the effects with the default page contract.
///
/// # Errors
///
/// Fails when there is no window or document, or a listener cannot be
/// attached.
#[wasm_bindgen]
pub fn init() -> Result<(), JsValue> {
    boot(EffectsConfig::default())
}

/// Start the effects with selector/class/timing overrides given as a JSON
/// object, e.g. `{"titleSelector": "h1.name"}`.
///
/// # Errors
///
/// Fails on malformed JSON, plus everything [`init`] can fail on.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(json: &str) -> Result<(), JsValue> {
    install_logging();
    let config = EffectsConfig::from_json(json).inspect_err(|err| log::error!("{err}"))?;
    boot(config)
}

fn boot(config: EffectsConfig) -> Result<(), JsValue> {
    install_logging();
    page::start(config).inspect_err(|err| log::error!("page effects failed to start: {err}"))?;
    Ok(())
}

fn install_logging() {
    console_error_panic_hook::set_once();
    // The host page may already have a logger installed.
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("keeping existing logger: {err}");
    }
}
