use crate::constants::*;

/// Gallery tuning and asset list.
///
/// `Default` mirrors the constants in [`crate::constants`]; front-ends usually
/// only swap the image list via [`GalleryConfig::with_images`].
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub image_paths: Vec<String>,
    pub radius_factor: f32,
    pub item_offset_factor: f32,
    pub plane_size_factor: f32,
    pub camera_distance_factor: f32,
    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub drag_threshold_px: f32,
    pub drag_sensitivity: f32,
    pub auto_spin_step: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_paths: DEFAULT_IMAGE_FILES.iter().map(|s| s.to_string()).collect(),
            radius_factor: SPHERE_RADIUS_FACTOR,
            item_offset_factor: ITEM_OFFSET_FACTOR,
            plane_size_factor: PLANE_SIZE_FACTOR,
            camera_distance_factor: CAMERA_DISTANCE_FACTOR,
            camera_fov_deg: CAMERA_FOV_DEG,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            drag_sensitivity: DRAG_SENSITIVITY,
            auto_spin_step: AUTO_SPIN_STEP,
        }
    }
}

impl GalleryConfig {
    pub fn with_images<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a comma separated image list, ignoring blank entries.
    /// Returns `None` when nothing usable is left so callers keep the defaults.
    pub fn parse_image_list(raw: &str) -> Option<Vec<String>> {
        let paths: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        (!paths.is_empty()).then_some(paths)
    }

    #[inline]
    pub fn sphere_radius(&self, width: f32, height: f32) -> f32 {
        width.min(height) * self.radius_factor
    }
}
