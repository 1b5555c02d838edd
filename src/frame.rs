use crate::core::Gallery;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub gallery: Rc<RefCell<Gallery>>,
    pub gpu: Rc<RefCell<Option<render::GpuState>>>,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    /// Advance the rotation and draw. Returns `false` once the loop is stopped.
    pub fn frame(&mut self) -> bool {
        let tick = self.gallery.borrow_mut().tick();
        if !tick.should_render() {
            return false;
        }
        if let Some(g) = self.gpu.borrow_mut().as_mut() {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let gallery = self.gallery.borrow();
            match g.render(&gallery) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
        true
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    expected_items: usize,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, expected_items).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Cancellable `requestAnimationFrame` loop around a [`FrameContext`].
#[derive(Clone)]
pub struct LoopHandle {
    gallery: Rc<RefCell<Gallery>>,
    tick: TickClosure,
    pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn start(&self) {
        self.gallery.borrow_mut().start();
        if self.pending.get().is_none() {
            request_frame(&self.tick, &self.pending);
            log::info!("[loop] started");
        }
    }

    pub fn stop(&self) {
        self.gallery.borrow_mut().stop();
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        log::info!("[loop] stopped");
    }
}

fn request_frame(tick: &TickClosure, pending: &Rc<Cell<Option<i32>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("[loop] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> LoopHandle {
    let gallery = frame_ctx.gallery.clone();
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        if frame_ctx.borrow_mut().frame() {
            request_frame(&tick_clone, &pending_clone);
        }
    }) as Box<dyn FnMut()>));

    let handle = LoopHandle {
        gallery,
        tick,
        pending,
    };
    handle.start();
    handle
}
