use crate::constants::{CANVAS_ID, CONTAINER_ID, IMAGES_ATTR};
use crate::core::GalleryConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Find `#app-canvas`, creating it inside `#container` (or `<body>`) when the
/// page does not provide one.
pub fn ensure_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", CANVAS_ID, e)));
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute("style", "display:block;width:100%;height:100%");
    let parent: web::Node = match document.get_element_by_id(CONTAINER_ID) {
        Some(el) => el.into(),
        None => document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?
            .into(),
    };
    parent
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(canvas)
}

/// Image list from `data-images` on `#container`, falling back to the defaults.
pub fn gallery_config(document: &web::Document) -> GalleryConfig {
    let config = GalleryConfig::default();
    let raw = document
        .get_element_by_id(CONTAINER_ID)
        .and_then(|el| el.get_attribute(IMAGES_ATTR));
    match raw.as_deref().and_then(GalleryConfig::parse_image_list) {
        Some(paths) => {
            log::info!("[load] using {} images from {}", paths.len(), IMAGES_ATTR);
            config.with_images(paths)
        }
        None => config,
    }
}

/// CSS size of the canvas, the space pointer events and the camera live in.
/// Falls back to the window's inner size before the canvas has been laid out.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    if rect.width() > 0.0 && rect.height() > 0.0 {
        return (rect.width() as f32, rect.height() as f32);
    }
    window_inner_size().unwrap_or((rect.width() as f32, rect.height() as f32))
}

pub fn window_inner_size() -> Option<(f32, f32)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_document_listener(
    document: &web::Document,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
