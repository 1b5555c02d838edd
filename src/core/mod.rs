pub use gallery_core::*;

// Shaders bundled as string constants
pub static GALLERY_WGSL: &str = include_str!("../../shaders/gallery.wgsl");
