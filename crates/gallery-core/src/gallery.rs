//! Gallery state: items, camera, gesture, rotation and modal in one place.
//!
//! Front-ends forward raw events here and act on what comes back; the
//! auto-spin decision is always derived from the gesture and modal state.

use crate::camera::{Camera, Viewport};
use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::hit::{self, Hits, SceneView};
use crate::interaction::{Gesture, InteractionState, PointerOutcome};
use crate::item::{GalleryItem, ItemId};
use crate::layout::{self, LayoutParams};
use crate::loading::{LoadProgress, LoadTracker};
use crate::modal::ModalState;
use crate::rotation::{RotationDriver, RotationTransform, Tick};
use glam::{Mat4, Vec2};

/// Request to present an item's image at full size.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowImage {
    pub item: ItemId,
    pub source: String,
}

pub struct Gallery {
    config: GalleryConfig,
    viewport: Viewport,
    radius: f32,
    camera: Camera,
    items: Vec<GalleryItem>,
    loads: LoadTracker,
    interaction: InteractionState,
    driver: RotationDriver,
    modal: ModalState,
    layout_passes: usize,
}

impl Gallery {
    pub fn new(config: GalleryConfig, width: f32, height: f32) -> Result<Self, GalleryError> {
        let viewport = Viewport::new(width, height)?;
        let radius = config.sphere_radius(width, height);
        let camera = Camera::for_sphere(&viewport, radius, &config);
        let loads = LoadTracker::new(config.image_paths.len());
        let interaction = InteractionState::new(config.drag_threshold_px, config.drag_sensitivity);
        let driver = RotationDriver::new(config.auto_spin_step);
        Ok(Self {
            config,
            viewport,
            radius,
            camera,
            items: Vec::new(),
            loads,
            interaction,
            driver,
            modal: ModalState::Closed,
            layout_passes: 0,
        })
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn image_paths(&self) -> &[String] {
        &self.config.image_paths
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.iter().find(|it| it.id == id)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn rotation(&self) -> RotationTransform {
        self.driver.transform()
    }

    pub fn group_matrix(&self) -> Mat4 {
        self.driver.transform().matrix()
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn gesture(&self) -> Gesture {
        self.interaction.gesture()
    }

    /// Number of layout passes run so far (load completion plus resizes).
    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    pub fn is_loaded(&self) -> bool {
        self.loads.is_complete()
    }

    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            radius: self.radius,
            offset_factor: self.config.item_offset_factor,
            size_factor: self.config.plane_size_factor,
        }
    }

    /// Record that image `index` finished loading and add its item.
    ///
    /// The completion that fills the set triggers the single layout pass.
    pub fn on_image_loaded(&mut self, index: usize) -> Result<LoadProgress, GalleryError> {
        let progress = self.loads.record(index)?;
        let source = self.config.image_paths[index].clone();
        self.items.push(GalleryItem::new(ItemId(index), source));
        match progress {
            LoadProgress::Complete => {
                self.relayout();
                log::info!(
                    "[layout] all {} images loaded; placed at radius {:.1}",
                    self.items.len(),
                    self.radius
                );
            }
            LoadProgress::Pending { loaded, expected } => {
                log::debug!("[load] image {} done ({}/{})", index, loaded, expected);
            }
        }
        Ok(progress)
    }

    /// Apply new viewport dimensions: radius, camera and (once loaded) layout.
    ///
    /// An in-flight gesture is cancelled so a drag cannot continue against a
    /// re-projected view.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), GalleryError> {
        let viewport = Viewport::new(width, height)?;
        if !self.interaction.is_idle() {
            log::info!("[resize] cancelling in-flight gesture");
            self.interaction.cancel();
        }
        self.viewport = viewport;
        self.radius = self.config.sphere_radius(width, height);
        self.camera = Camera::for_sphere(&self.viewport, self.radius, &self.config);
        if self.loads.is_complete() {
            self.relayout();
        }
        log::debug!("[resize] {}x{} radius {:.1}", width, height, self.radius);
        Ok(())
    }

    fn relayout(&mut self) {
        let params = self.layout_params();
        layout::distribute(&mut self.items, &params);
        self.layout_passes += 1;
    }

    /// Primary button pressed. Ignored while the modal covers the view.
    pub fn pointer_down(&mut self, pos: Vec2) {
        if self.modal.is_open() {
            return;
        }
        self.interaction.press(pos);
    }

    pub fn pointer_move(&mut self, pos: Vec2, primary_held: bool) -> PointerOutcome {
        let outcome = self.interaction.move_to(pos, primary_held);
        if let PointerOutcome::Rotate { yaw, pitch } = outcome {
            self.driver.rotate_by(yaw, pitch);
        }
        outcome
    }

    /// Primary button released over a surface described by `surface`.
    ///
    /// Returns a request to show an image when the gesture was a click whose
    /// nearest hit is a gallery item.
    pub fn pointer_up(&mut self, pos: Vec2, surface: &Viewport) -> Option<ShowImage> {
        match self.interaction.release(pos) {
            PointerOutcome::Click(at) => {
                let hits = self.hit_test(at, surface);
                let id = hit::nearest_item(&hits)?;
                let source = self.item(id)?.source.clone();
                self.modal.open(id, source.clone());
                log::info!("[click] open item {} ({})", id, source);
                Some(ShowImage { item: id, source })
            }
            PointerOutcome::DragEnded => {
                let r = self.rotation();
                log::debug!("[drag] end yaw={:.3} pitch={:.3}", r.yaw, r.pitch);
                None
            }
            _ => None,
        }
    }

    pub fn hit_test(&self, pointer: Vec2, surface: &Viewport) -> Hits {
        let scene = SceneView {
            group: self.group_matrix(),
            shell_radius: self.radius,
            items: &self.items,
        };
        hit::hit_test(pointer, surface, &self.camera, &scene)
    }

    /// Drop the current gesture without classifying it (e.g. `pointercancel`).
    pub fn cancel_gesture(&mut self) {
        self.interaction.cancel();
    }

    /// Close the modal; `false` when nothing was open.
    pub fn dismiss_modal(&mut self) -> bool {
        let closed = self.modal.dismiss();
        if closed {
            log::info!("[modal] dismissed");
        }
        closed
    }

    #[inline]
    pub fn auto_spin_enabled(&self) -> bool {
        !self.interaction.is_dragging() && !self.modal.is_open()
    }

    pub fn tick(&mut self) -> Tick {
        let spin = self.auto_spin_enabled();
        self.driver.tick(spin)
    }

    pub fn start(&mut self) {
        self.driver.start();
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }
}
