use crate::core::{Gallery, Gesture, PointerOutcome};
use crate::input;
use crate::modal;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gallery: Rc<RefCell<Gallery>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_primary_button(&ev) {
            return;
        }
        w.gallery.borrow_mut().pointer_down(input::pointer_client(&ev));
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut gallery = w.gallery.borrow_mut();
        let was_dragging = matches!(gallery.gesture(), Gesture::Dragging { .. });
        let outcome = gallery.pointer_move(input::pointer_client(&ev), input::primary_held(&ev));
        if let PointerOutcome::Rotate { .. } = outcome {
            if !was_dragging {
                log::debug!("[drag] begin");
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_primary_button(&ev) {
            return;
        }
        let Some(surface) = input::canvas_viewport(&w.canvas) else {
            w.gallery.borrow_mut().cancel_gesture();
            return;
        };
        let shown = w
            .gallery
            .borrow_mut()
            .pointer_up(input::pointer_client(&ev), &surface);
        if let Some(show) = shown {
            modal::show(&w.document, &show.source);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointercancel(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.gallery.borrow_mut().cancel_gesture();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
