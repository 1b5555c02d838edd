//! Camera and viewport description for the gallery view.
//!
//! The web front-end builds its view-projection matrix from here and the hit
//! tester unprojects pointer rays with the same matrices.

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::hit::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Rectangle of the drawing surface in pointer (client) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, GalleryError> {
        Self::at(0.0, 0.0, width, height)
    }

    pub fn at(left: f32, top: f32, width: f32, height: f32) -> Result<Self, GalleryError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(GalleryError::InvalidViewport { width, height });
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Map a pointer position to normalized device coordinates.
    ///
    /// Screen Y grows downwards while device Y grows upwards, hence the flip.
    #[inline]
    pub fn to_ndc(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(
            (pointer.x - self.left) / self.width * 2.0 - 1.0,
            -((pointer.y - self.top) / self.height) * 2.0 + 1.0,
        )
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera on +Z looking at the sphere center from `radius * distance_factor`.
    ///
    /// The far plane is pushed out when the configured one would clip the back
    /// of the shell on large viewports.
    pub fn for_sphere(viewport: &Viewport, radius: f32, config: &GalleryConfig) -> Self {
        let distance = radius * config.camera_distance_factor;
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: config.camera_fov_deg.to_radians(),
            znear: config.camera_near,
            zfar: config.camera_far.max(distance + radius * 2.0),
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray from the eye through a point in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (p1 - self.eye).normalize(),
        }
    }
}
