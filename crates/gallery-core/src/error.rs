use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GalleryError {
    #[error("image index {index} is outside the configured list of {expected} images")]
    UnknownImage { index: usize, expected: usize },
    #[error("image {0} was reported as loaded more than once")]
    DuplicateCompletion(usize),
    #[error("viewport must have a positive size, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}
