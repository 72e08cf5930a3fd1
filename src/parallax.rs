//! Damped background offset for the hero section.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

/// Background offset in CSS pixels for a vertical scroll position.
///
/// Recomputed from scratch on each scroll event, so there is no accumulated
/// state to drift.
#[must_use]
pub fn background_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

/// CSS `background-position` value for a vertical scroll position.
#[must_use]
pub fn background_position(scroll_y: f64, factor: f64) -> String {
    format!("center {}px", background_offset(scroll_y, factor))
}
