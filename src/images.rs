use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Start loading every image; `on_loaded(index, img)` fires once per decoded
/// image, in completion order. Failed images are logged and never reported.
pub fn load_all(
    paths: &[String],
    on_loaded: impl Fn(usize, &web::HtmlImageElement) + 'static,
) -> anyhow::Result<()> {
    let on_loaded: Rc<dyn Fn(usize, &web::HtmlImageElement)> = Rc::new(on_loaded);
    for (index, path) in paths.iter().enumerate() {
        let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        img.set_cross_origin(Some("anonymous"));

        let loaded = img.clone();
        let handler = on_loaded.clone();
        let on_load = Closure::wrap(Box::new(move || {
            handler(index, &loaded);
        }) as Box<dyn FnMut()>);
        _ = img.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        on_load.forget();

        let failed_path = path.clone();
        let on_error = Closure::wrap(Box::new(move || {
            log::warn!("[load] failed to load {}; it will be left out", failed_path);
        }) as Box<dyn FnMut()>);
        _ = img.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_error.forget();

        img.set_src(path);
    }
    log::info!("[load] requested {} images", paths.len());
    Ok(())
}
