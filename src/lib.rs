#![cfg(target_arch = "wasm32")]
use crate::core::{Gallery, ItemId, LoadProgress};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod images;
mod input;
mod mesh;
mod modal;
mod render;

// Keep the canvas backing store and the gallery viewport in step with the window.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, gallery: &Rc<RefCell<Gallery>>) {
    let canvas_resize = canvas.clone();
    let gallery = gallery.clone();
    dom::add_window_listener("resize", move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        let (w, h) = dom::canvas_css_size(&canvas_resize);
        if let Err(e) = gallery.borrow_mut().resize(w, h) {
            log::warn!("[resize] ignored: {}", e);
        }
    });
}

fn wire_modal_dismiss(document: &web::Document, gallery: &Rc<RefCell<Gallery>>) {
    let gallery = gallery.clone();
    let doc = document.clone();
    modal::wire_backdrop_dismiss(document, move || {
        gallery.borrow_mut().dismiss_modal();
        modal::hide(&doc);
    });
}

fn wire_visibility(document: &web::Document, handle: frame::LoopHandle) {
    let doc = document.clone();
    dom::add_document_listener(document, "visibilitychange", move || {
        if doc.hidden() {
            handle.stop();
        } else {
            handle.start();
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::ensure_canvas(&document)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let config = dom::gallery_config(&document);
    let paths = config.image_paths.clone();
    let (width, height) = dom::canvas_css_size(&canvas);
    let gallery = Rc::new(RefCell::new(Gallery::new(config, width, height)?));
    log::info!(
        "[layout] viewport {:.0}x{:.0}, sphere radius {:.1}, {} images",
        width,
        height,
        gallery.borrow().radius(),
        paths.len()
    );
    modal::hide(&document);

    // Renderer first so every completed image can be uploaded straight away.
    let gpu = Rc::new(RefCell::new(frame::init_gpu(&canvas, paths.len()).await));
    if gpu.borrow().is_none() {
        log::warn!("[gpu] rendering disabled; interaction still active");
    }

    wire_canvas_resize(&canvas, &gallery);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        gallery: gallery.clone(),
    });
    events::wire_global_keydown(gallery.clone(), document.clone());
    wire_modal_dismiss(&document, &gallery);

    {
        let gallery = gallery.clone();
        let gpu = gpu.clone();
        images::load_all(&paths, move |index, img| {
            match gallery.borrow_mut().on_image_loaded(index) {
                Ok(LoadProgress::Complete) => log::info!("[load] all images loaded"),
                Ok(LoadProgress::Pending { .. }) => {}
                Err(e) => {
                    log::warn!("[load] {}", e);
                    return;
                }
            }
            if let Some(g) = gpu.borrow_mut().as_mut() {
                g.upload_image(ItemId(index), img);
            }
        })?;
    }

    // Rotation and rendering driven by requestAnimationFrame
    let handle = frame::start_loop(frame::FrameContext {
        gallery: gallery.clone(),
        gpu,
        canvas,
    });
    wire_visibility(&document, handle);
    Ok(())
}
