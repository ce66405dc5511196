use focus_core::DialBounds;
use glam::Vec2;
use web_sys as web;

/// Pointer position in client coordinates.
#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Dial bounds from the element's client rect, re-read on every event so
/// scrolling and resizing never go stale.
#[inline]
pub fn dial_bounds(el: &web::Element) -> DialBounds {
    let rect = el.get_bounding_client_rect();
    DialBounds::from_rect(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Only the primary button (or touch/pen contact) starts a drag.
#[inline]
pub fn is_primary(ev: &web::PointerEvent) -> bool {
    ev.is_primary() && ev.button() == 0
}
