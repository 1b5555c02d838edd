use crate::core::Gallery;
use crate::modal;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    gallery: &Rc<RefCell<Gallery>>,
    document: &web::Document,
) {
    if ev.repeat() || !is_dismiss_key(&ev.key()) {
        return;
    }
    let closed = gallery.borrow_mut().dismiss_modal();
    if closed || modal::is_shown(document) {
        modal::hide(document);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(gallery: Rc<RefCell<Gallery>>, document: web::Document) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &gallery, &document);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
