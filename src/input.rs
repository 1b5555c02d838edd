use crate::core::Viewport;
use glam::Vec2;
use web_sys as web;

/// Pointer position in client (CSS pixel) space.
#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// `true` while only the primary button is held.
#[inline]
pub fn primary_held(ev: &web::MouseEvent) -> bool {
    ev.buttons() == 1
}

#[inline]
pub fn is_primary_button(ev: &web::MouseEvent) -> bool {
    ev.button() == 0
}

/// Canvas rectangle in client space, used to turn pointers into NDC.
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    let rect = canvas.get_bounding_client_rect();
    Viewport::at(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
    .ok()
}
