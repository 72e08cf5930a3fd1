//! In-page link targets.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// What a click on an in-page link does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorClick<'a> {
    /// Cancel the browser's default jump. Always set, target or not.
    pub suppress_default: bool,
    /// Element id to scroll to, if the href names one.
    pub target: Option<&'a str>,
}

/// Decide the response to a click on a link with this `href`.
#[must_use]
pub fn on_anchor_click(href: &str) -> AnchorClick<'_> {
    AnchorClick { suppress_default: true, target: fragment_target(href) }
}

/// Element id named by an in-page `href` such as `#about`.
///
/// Returns `None` for hrefs that do not start with `#` and for a bare `#`,
/// which names no element.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}
