use crate::constants::{MODAL_HIDDEN_CLASS, MODAL_ID, MODAL_IMAGE_ID, MODAL_SHOWN_CLASS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Show `#modal` with `src` in `#modal-image`.
pub fn show(document: &web::Document, src: &str) {
    if let Some(img) = document.get_element_by_id(MODAL_IMAGE_ID) {
        match img.dyn_ref::<web::HtmlImageElement>() {
            Some(img) => img.set_src(src),
            None => {
                _ = img.set_attribute("src", src);
            }
        }
    }
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        let cl = el.class_list();
        _ = cl.remove_1(MODAL_HIDDEN_CLASS);
        _ = cl.add_1(MODAL_SHOWN_CLASS);
    } else {
        log::warn!("[modal] missing #{}", MODAL_ID);
    }
}

pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        let cl = el.class_list();
        _ = cl.remove_1(MODAL_SHOWN_CLASS);
        _ = cl.add_1(MODAL_HIDDEN_CLASS);
    }
}

#[inline]
pub fn is_shown(document: &web::Document) -> bool {
    document
        .get_element_by_id(MODAL_ID)
        .map(|el| el.class_list().contains(MODAL_SHOWN_CLASS))
        .unwrap_or(false)
}

/// Call `on_dismiss` for clicks on the modal backdrop itself, not its content.
pub fn wire_backdrop_dismiss(document: &web::Document, mut on_dismiss: impl FnMut() + 'static) {
    let Some(el) = document.get_element_by_id(MODAL_ID) else {
        return;
    };
    let backdrop: web::EventTarget = el.clone().into();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if ev.target().as_ref() == Some(&backdrop) {
            on_dismiss();
        }
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
