// DOM hooks expected in the host page
pub const CONTAINER_ID: &str = "container";
pub const CANVAS_ID: &str = "app-canvas";
pub const MODAL_ID: &str = "modal";
pub const MODAL_IMAGE_ID: &str = "modal-image";
pub const IMAGES_ATTR: &str = "data-images"; // optional comma separated override on #container

// Modal classes toggled on show/hide
pub const MODAL_HIDDEN_CLASS: &str = "hidden";
pub const MODAL_SHOWN_CLASS: &str = "show";

// Scene look
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0]; // black background
pub const SHELL_COLOR: [f32; 3] = [0.4, 0.4, 0.4]; // 0x666666
pub const SHELL_OPACITY: f32 = 0.2;

// Wireframe tessellation of the shell
pub const SHELL_WIDTH_SEGMENTS: u32 = 32;
pub const SHELL_HEIGHT_SEGMENTS: u32 = 32;
