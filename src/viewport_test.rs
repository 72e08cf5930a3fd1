use super::*;

fn vp() -> Viewport {
    Viewport::new(1280.0, 720.0)
}

// --- Viewport::contains ---

#[test]
fn rect_inside_is_visible() {
    assert!(vp().contains(&Rect::new(100.0, 100.0, 300.0, 400.0)));
}

#[test]
fn rect_matching_viewport_edges_is_visible() {
    assert!(vp().contains(&Rect::new(0.0, 0.0, 720.0, 1280.0)));
}

#[test]
fn rect_above_is_not_visible() {
    assert!(!vp().contains(&Rect::new(-300.0, 100.0, -100.0, 400.0)));
}

#[test]
fn rect_below_is_not_visible() {
    assert!(!vp().contains(&Rect::new(800.0, 100.0, 1000.0, 400.0)));
}

#[test]
fn rect_left_is_not_visible() {
    assert!(!vp().contains(&Rect::new(100.0, -500.0, 300.0, -10.0)));
}

#[test]
fn rect_right_is_not_visible() {
    assert!(!vp().contains(&Rect::new(100.0, 1300.0, 300.0, 1500.0)));
}

#[test]
fn rect_straddling_bottom_edge_is_not_visible() {
    assert!(!vp().contains(&Rect::new(600.0, 100.0, 721.0, 400.0)));
}

#[test]
fn zero_sized_viewport_only_holds_degenerate_rect_at_origin() {
    let empty = Viewport::new(0.0, 0.0);
    assert!(empty.contains(&Rect::new(0.0, 0.0, 0.0, 0.0)));
    assert!(!empty.contains(&Rect::new(0.0, 0.0, 1.0, 1.0)));
}

// --- RevealLatch ---

#[test]
fn latch_starts_hidden() {
    let latch = RevealLatch::default();
    assert!(!latch.is_revealed());
}

#[test]
fn latch_ignores_out_of_view() {
    let mut latch = RevealLatch::default();
    assert!(!latch.observe(false));
    assert!(!latch.is_revealed());
}

#[test]
fn latch_fires_once() {
    let mut latch = RevealLatch::default();
    assert!(latch.observe(true));
    assert!(!latch.observe(true));
    assert!(latch.is_revealed());
}

#[test]
fn latch_never_reverts_on_scroll_away() {
    let mut latch = RevealLatch::default();
    latch.observe(true);
    for in_view in [false, false, true, false] {
        latch.observe(in_view);
        assert!(latch.is_revealed());
    }
}
