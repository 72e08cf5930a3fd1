//! Fixed page contract: selectors, marker classes, and effect timings.

// ── Selectors ───────────────────────────────────────────────────

/// Section whose background shifts with scroll.
pub const HERO_SELECTOR: &str = ".hero-section";

/// Element whose text is typed out on load.
pub const TITLE_SELECTOR: &str = ".typewriter-text";

/// Anchors pointing at a fragment on the same page.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Portrait image revealed once it finishes loading.
pub const PROFILE_IMAGE_SELECTOR: &str = ".profile-image";

/// Elements revealed when scrolled fully into view.
pub const FADE_SELECTOR: &str = ".fade-in";

// ── Marker classes ──────────────────────────────────────────────

/// Class added to the profile image after its `load` event.
pub const LOADED_CLASS: &str = "loaded";

/// Class added to a fade candidate once it has been inside the viewport.
pub const VISIBLE_CLASS: &str = "visible";

// ── Timings / math ──────────────────────────────────────────────

/// Fraction of the scroll offset applied to the hero background.
pub const PARALLAX_FACTOR: f64 = 0.2;

/// Delay before the first typed character, in milliseconds.
pub const TYPE_START_DELAY_MS: u32 = 500;

/// Delay between typed characters, in milliseconds.
pub const TYPE_STEP_MS: u32 = 100;
