//! DOM wiring for the page effects.
//!
//! ARCHITECTURE
//! ============
//! Each behavior resolves its target once at install time and moves that
//! handle into the listener closure it registers. Closures never share state
//! with each other. There is no teardown: listeners and timers are leaked with
//! `forget` and live until the page unloads.
//!
//! Behaviors install independently. A rejected selector or listener disables
//! only the behavior it belongs to; the rest are still wired and the failure
//! is counted in [`InstalledEffects::failed`].
//!
//! The profile image gets its `loaded` marker from its `load` event, with one
//! exception: an image that already finished loading before install is marked
//! immediately, since its `load` event will not fire again. Either way the
//! marker is added at most once and never removed.

use std::cell::Cell;
use std::fmt;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement, ScrollBehavior,
    ScrollIntoViewOptions, Window,
};

use crate::anchor::on_anchor_click;
use crate::config::EffectsConfig;
use crate::error::EffectsError;
use crate::parallax::background_position;
use crate::typewriter::Typewriter;
use crate::viewport::{Rect, RevealLatch, Viewport};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Mark the effects as started for this page. Returns `false` if they
/// already were.
pub(crate) fn claim_start() -> bool {
    STARTED.with(|started| !started.replace(true))
}

/// Undo [`claim_start`] so a later `init` can try again.
pub(crate) fn release_start() {
    STARTED.with(|started| started.set(false));
}

/// Which behaviors found their target and were wired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstalledEffects {
    pub parallax: bool,
    pub typewriter: bool,
    pub anchors: usize,
    pub image_reveal: bool,
    pub fade_candidates: usize,
    /// Behaviors (or individual anchors) that could not be wired.
    pub failed: usize,
}

impl InstalledEffects {
    /// Nothing was wired and nothing failed: the page has none of the targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Unwrap one behavior's wiring result, counting and logging a failure.
    pub fn record<T>(&mut self, behavior: &str, result: Result<T, EffectsError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("{behavior} disabled: {err}");
                self.failed += 1;
                None
            }
        }
    }
}

impl fmt::Display for InstalledEffects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |b: bool| if b { "on" } else { "off" };
        write!(
            f,
            "parallax={} typewriter={} anchors={} image_reveal={} fade_candidates={} failed={}",
            on_off(self.parallax),
            on_off(self.typewriter),
            self.anchors,
            on_off(self.image_reveal),
            self.fade_candidates,
            self.failed
        )
    }
}

/// Handle to the wired page. Holds nothing but the install summary; the
/// behaviors themselves live in their listener closures.
#[derive(Debug)]
pub struct PageEffects {
    installed: InstalledEffects,
}

impl PageEffects {
    /// Resolve every target and attach its behavior. Absent targets are
    /// skipped; a failing behavior is logged and counted without stopping
    /// the others.
    #[must_use]
    pub fn install(window: &Window, document: &Document, config: &EffectsConfig) -> Self {
        let mut installed = InstalledEffects::default();

        let parallax = wire_parallax(window, document, config);
        installed.parallax = installed.record("parallax", parallax).unwrap_or(false);

        let typewriter = wire_typewriter(document, config);
        installed.typewriter = installed.record("typewriter", typewriter).unwrap_or(false);

        if let Some(anchors) = installed.record("smooth scroll", query_all(document, &config.anchor_selector)) {
            for anchor in anchors {
                if installed.record("smooth scroll", attach_smooth_scroll(document, &anchor)).is_some() {
                    installed.anchors += 1;
                }
            }
        }

        let image = wire_load_reveal(document, config);
        installed.image_reveal = installed.record("image reveal", image).unwrap_or(false);

        let fade = wire_fade_in(window, document, config);
        installed.fade_candidates = installed.record("fade-in", fade).unwrap_or(0);

        Self { installed }
    }

    #[must_use]
    pub fn installed_behaviors(&self) -> InstalledEffects {
        self.installed
    }
}

/// Install once the document is parsed: immediately if it already is,
/// otherwise on `DOMContentLoaded`. Later calls are ignored.
///
/// # Errors
///
/// Fails when there is no window or document, or the ready listener cannot
/// be attached. A failed start can be retried.
pub fn start(config: EffectsConfig) -> Result<(), EffectsError> {
    let window = web_sys::window().ok_or(EffectsError::NoWindow)?;
    let document = window.document().ok_or(EffectsError::NoDocument)?;

    if !claim_start() {
        log::warn!("page effects already started; ignoring repeated init");
        return Ok(());
    }

    if is_loading(&document) {
        let doc_for_cb = document.clone();
        let cb: Closure<dyn FnMut()> = Closure::once(move || install_and_log(&window, &doc_for_cb, &config));
        if let Err(err) = listen(&document, "DOMContentLoaded", &cb) {
            release_start();
            return Err(err);
        }
        cb.forget();
    } else {
        install_and_log(&window, &document, &config);
    }
    Ok(())
}

fn install_and_log(window: &Window, document: &Document, config: &EffectsConfig) {
    let installed = PageEffects::install(window, document, config).installed_behaviors();
    if installed.is_empty() {
        log::debug!("no effect targets found on this page");
    } else if installed.failed > 0 {
        log::warn!("page effects partly installed: {installed}");
    } else {
        log::info!("page effects installed: {installed}");
    }
}

// --- Behaviors ---

fn wire_parallax(window: &Window, document: &Document, config: &EffectsConfig) -> Result<bool, EffectsError> {
    match query_one(document, &config.hero_selector)?.map(|el| el.dyn_into::<HtmlElement>()) {
        Some(Ok(hero)) => {
            attach_parallax(window, hero, config.parallax_factor)?;
            Ok(true)
        }
        Some(Err(_)) => {
            log::debug!("{} is not an HTML element; parallax skipped", config.hero_selector);
            Ok(false)
        }
        None => {
            log::debug!("no {}; parallax skipped", config.hero_selector);
            Ok(false)
        }
    }
}

fn attach_parallax(window: &Window, hero: HtmlElement, factor: f64) -> Result<(), EffectsError> {
    let win = window.clone();
    let cb = Closure::wrap(Box::new(move |_: Event| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        if let Err(err) = hero.style().set_property("background-position", &background_position(scroll_y, factor)) {
            log::warn!("parallax update failed: {err:?}");
        }
    }) as Box<dyn FnMut(Event)>);
    listen(window, "scroll", &cb)?;
    cb.forget();
    Ok(())
}

fn wire_typewriter(document: &Document, config: &EffectsConfig) -> Result<bool, EffectsError> {
    let Some(title) = query_one(document, &config.title_selector)? else {
        return Ok(false);
    };
    let writer = Typewriter::new(&title.text_content().unwrap_or_default());
    title.set_text_content(Some(""));
    type_next(title, writer, config.type_start_delay_ms, config.type_step_ms);
    Ok(true)
}

fn type_next(title: Element, writer: Typewriter, start_ms: u32, step_ms: u32) {
    let Some(delay) = writer.next_delay(start_ms, step_ms) else {
        return;
    };
    Timeout::new(delay, move || {
        let mut writer = writer;
        if let Some(shown) = writer.step() {
            title.set_text_content(Some(shown));
        }
        type_next(title, writer, start_ms, step_ms);
    })
    .forget();
}

fn attach_smooth_scroll(document: &Document, anchor: &Element) -> Result<(), EffectsError> {
    let doc = document.clone();
    let link = anchor.clone();
    let cb = Closure::wrap(Box::new(move |event: Event| {
        let href = link.get_attribute("href").unwrap_or_default();
        let click = on_anchor_click(&href);
        if click.suppress_default {
            event.prevent_default();
        }
        match click.target.and_then(|id| doc.get_element_by_id(id)) {
            Some(target) => {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
            None => log::debug!("in-page link {href:?} has no target"),
        }
    }) as Box<dyn FnMut(Event)>);
    listen(anchor, "click", &cb)?;
    cb.forget();
    Ok(())
}

fn wire_load_reveal(document: &Document, config: &EffectsConfig) -> Result<bool, EffectsError> {
    let Some(image) = query_one(document, &config.profile_image_selector)? else {
        return Ok(false);
    };
    let mut latch = RevealLatch::default();
    let already_loaded = image
        .dyn_ref::<HtmlImageElement>()
        .is_some_and(|img| img.complete() && img.natural_width() > 0);
    if already_loaded && mark_loaded(&mut latch) {
        add_class(&image, &config.loaded_class);
    }

    let target = image.clone();
    let class = config.loaded_class.clone();
    let cb = Closure::wrap(Box::new(move |_: Event| {
        if mark_loaded(&mut latch) {
            add_class(&target, &class);
        }
    }) as Box<dyn FnMut(Event)>);
    listen(&image, "load", &cb)?;
    cb.forget();
    Ok(true)
}

/// A load was observed. Returns `true` only the first time, when the
/// marker should be added.
pub(crate) fn mark_loaded(latch: &mut RevealLatch) -> bool {
    latch.observe(true)
}

fn wire_fade_in(window: &Window, document: &Document, config: &EffectsConfig) -> Result<usize, EffectsError> {
    let fade = query_all(document, &config.fade_selector)?;
    let count = fade.len();
    if count > 0 {
        attach_fade_in(window, document, fade, &config.visible_class)?;
    }
    Ok(count)
}

fn attach_fade_in(window: &Window, document: &Document, elements: Vec<Element>, class: &str) -> Result<(), EffectsError> {
    let win = window.clone();
    let doc = document.clone();
    let class = class.to_owned();
    let mut candidates: Vec<(Element, RevealLatch)> =
        elements.into_iter().map(|el| (el, RevealLatch::default())).collect();
    let cb = Closure::wrap(Box::new(move |_: Event| {
        let viewport = current_viewport(&win, &doc);
        for (el, latch) in &mut candidates {
            if latch.is_revealed() {
                continue;
            }
            if latch.observe(viewport.contains(&client_rect(el))) {
                add_class(el, &class);
            }
        }
    }) as Box<dyn FnMut(Event)>);
    listen(window, "scroll", &cb)?;
    cb.forget();
    Ok(())
}

// --- DOM helpers ---

fn is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}

fn query_one(document: &Document, selector: &str) -> Result<Option<Element>, EffectsError> {
    document
        .query_selector(selector)
        .map_err(|_| EffectsError::Selector { selector: selector.to_owned() })
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, EffectsError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|_| EffectsError::Selector { selector: selector.to_owned() })?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    Ok(out)
}

fn listen<T: ?Sized>(target: &EventTarget, event: &'static str, cb: &Closure<T>) -> Result<(), EffectsError> {
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|_| EffectsError::Listener { event })
}

fn add_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        log::warn!("failed to add class {class:?}: {err:?}");
    }
}

fn client_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.top(), r.left(), r.bottom(), r.right())
}

/// Window inner size, falling back to the root element's client size when
/// the window reports nothing.
fn current_viewport(window: &Window, document: &Document) -> Viewport {
    let root = document.document_element();
    let width = dimension(window.inner_width(), || root.as_ref().map_or(0, Element::client_width));
    let height = dimension(window.inner_height(), || root.as_ref().map_or(0, Element::client_height));
    Viewport::new(width, height)
}

fn dimension(inner: Result<JsValue, JsValue>, fallback: impl FnOnce() -> i32) -> f64 {
    match inner.map(|v| v.as_f64()) {
        Ok(Some(v)) if v > 0.0 => v,
        _ => f64::from(fallback()),
    }
}
