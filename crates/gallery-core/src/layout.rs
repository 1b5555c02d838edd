//! Fibonacci-sphere placement of gallery items.
//!
//! Directions follow a golden-angle spiral: the vertical coordinate steps
//! linearly from +1 to -1 while the azimuth advances by the golden angle per
//! index. Every function here is pure; items are only written by [`distribute`].

use crate::item::GalleryItem;
use glam::{Mat3, Mat4, Quat, Vec3};
use std::f32::consts::PI;

/// Angular step between successive items, `PI * (3 - sqrt(5))` (about 2.39996 rad).
#[inline]
pub fn golden_angle() -> f32 {
    PI * (3.0 - 5.0_f32.sqrt())
}

/// World-space pose of one item plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Unit direction from the sphere center.
    pub direction: Vec3,
    pub position: Vec3,
    /// Rotates local +Z onto `direction`.
    pub orientation: Quat,
    /// Side length of the square plane.
    pub size: f32,
}

impl Placement {
    /// Local-to-group transform of a unit quad spanning `[-0.5, 0.5]` on X and Y.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.size, self.size, 1.0),
            self.orientation,
            self.position,
        )
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }
}

/// Layout inputs shared by every item in one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub radius: f32,
    pub offset_factor: f32,
    pub size_factor: f32,
}

impl LayoutParams {
    #[inline]
    pub fn shell_distance(&self) -> f32 {
        self.radius * (1.0 + self.offset_factor)
    }

    #[inline]
    pub fn plane_size(&self) -> f32 {
        self.radius * self.size_factor
    }
}

/// Unit direction of item `index` out of `count`.
///
/// A single item has no vertical span to interpolate over and sits on the
/// equator (`y = 0`) instead of dividing by zero.
pub fn fibonacci_direction(index: usize, count: usize) -> Vec3 {
    let y = if count <= 1 {
        0.0
    } else {
        1.0 - (index as f32 / (count - 1) as f32) * 2.0
    };
    let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
    let theta = golden_angle() * index as f32;
    Vec3::new(theta.cos() * radius_at_y, y, theta.sin() * radius_at_y)
}

/// Orientation whose local +Z looks from `position` towards `position * 2`.
///
/// Uses world +Y as the up hint; at the poles, where that hint is parallel to
/// the facing direction, local +X falls back to world +X.
pub fn outward_orientation(position: Vec3) -> Quat {
    let target = position * 2.0;
    let z = (target - position).normalize_or_zero();
    if z == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let x = Vec3::Y.cross(z);
    let x = if x.length_squared() < 1e-12 {
        Vec3::X
    } else {
        x.normalize()
    };
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}

pub fn placement(index: usize, count: usize, params: &LayoutParams) -> Placement {
    let direction = fibonacci_direction(index, count);
    let position = direction * params.shell_distance();
    Placement {
        direction,
        position,
        orientation: outward_orientation(position),
        size: params.plane_size(),
    }
}

/// All placements for `count` items, in index order.
pub fn compute(count: usize, params: &LayoutParams) -> Vec<Placement> {
    (0..count).map(|i| placement(i, count, params)).collect()
}

/// Assign a placement to every item, indexed by its position in `items`.
///
/// Idempotent for a fixed `(items.len(), params)`; an empty slice is a no-op.
pub fn distribute(items: &mut [GalleryItem], params: &LayoutParams) {
    let count = items.len();
    for (i, item) in items.iter_mut().enumerate() {
        item.placement = Some(placement(i, count, params));
    }
}
