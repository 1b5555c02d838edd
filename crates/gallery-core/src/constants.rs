// Shared tuning constants for the gallery core and its front-ends.

// Sphere layout
pub const SPHERE_RADIUS_FACTOR: f32 = 0.3; // radius = min(width, height) * factor
pub const ITEM_OFFSET_FACTOR: f32 = 0.05; // items float this far outside the shell (fraction of radius)
pub const PLANE_SIZE_FACTOR: f32 = 0.5; // square item side as a fraction of the radius

// Camera
pub const CAMERA_DISTANCE_FACTOR: f32 = 3.0; // eye sits on +Z at radius * factor
pub const CAMERA_FOV_DEG: f32 = 70.0; // vertical
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Interaction
pub const DRAG_THRESHOLD_PX: f32 = 2.0; // per-axis, exclusive
pub const DRAG_SENSITIVITY: f32 = 0.005; // radians per pixel
pub const AUTO_SPIN_STEP: f32 = 0.001; // radians per frame

// Assets
pub const DEFAULT_IMAGE_FILES: [&str; 10] = [
    "/images/kosmita1.png",
    "/images/kosmita2.png",
    "/images/kosmita3.png",
    "/images/kosmita4.png",
    "/images/kosmita5.png",
    "/images/kosmita6.png",
    "/images/kosmita7.png",
    "/images/kosmita8.png",
    "/images/kosmita9.png",
    "/images/kosmita10.png",
];
