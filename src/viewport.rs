//! Viewport containment for scroll-triggered reveals.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Element bounding box in viewport (client) coordinates, CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    #[must_use]
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }
}

/// Visible area of the page, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// All four edges of `rect` lie within `[0, 0] × [width, height]`.
    #[must_use]
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= self.height && rect.right <= self.width
    }
}

/// One-way marker: flips to revealed on the first in-view observation and
/// never flips back.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Record an observation. Returns `true` only for the observation that
    /// caused the reveal.
    pub fn observe(&mut self, in_view: bool) -> bool {
        if self.revealed || !in_view {
            return false;
        }
        self.revealed = true;
        true
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
