pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod gallery;
pub mod hit;
pub mod interaction;
pub mod item;
pub mod layout;
pub mod loading;
pub mod modal;
pub mod rotation;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use gallery::*;
pub use hit::*;
pub use interaction::*;
pub use item::*;
pub use layout::*;
pub use loading::*;
pub use modal::*;
pub use rotation::*;
