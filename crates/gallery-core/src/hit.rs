//! Pointer ray casting against the rotating group.
//!
//! The group holds the wireframe shell and the item planes. Both are
//! single-sided: a ray only hits the shell where it enters the sphere and only
//! hits a plane from its outward face, so items on the far side are shadowed
//! by the shell in front of them.

use crate::camera::{Camera, Viewport};
use crate::item::{GalleryItem, ItemId};
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Shell,
    Item(ItemId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub target: HitTarget,
    pub distance: f32,
}

/// Hits ordered nearest-first.
pub type Hits = SmallVec<[Hit; 4]>;

/// Everything the hit tester needs to know about the scene graph.
#[derive(Clone, Copy, Debug)]
pub struct SceneView<'a> {
    pub group: Mat4,
    pub shell_radius: f32,
    pub items: &'a [GalleryItem],
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Intersect a unit quad (`[-0.5, 0.5]` on local X/Y, facing local +Z) placed by `world`.
///
/// Back-facing hits are rejected.
pub fn ray_quad(ray: &Ray, world: Mat4) -> Option<f32> {
    let center = world.transform_point3(Vec3::ZERO);
    let normal = world.transform_vector3(Vec3::Z).normalize_or_zero();
    let denom = ray.dir.dot(normal);
    if denom >= -1e-6 {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    let local = world.inverse().transform_point3(ray.at(t));
    (local.x.abs() <= 0.5 && local.y.abs() <= 0.5).then_some(t)
}

/// Cast `ray` into the scene and collect every hit, nearest first.
pub fn cast(ray: &Ray, scene: &SceneView<'_>) -> Hits {
    let mut hits = Hits::new();
    if scene.shell_radius > 0.0 {
        if let Some(t) = ray_sphere(ray.origin, ray.dir, Vec3::ZERO, scene.shell_radius) {
            hits.push(Hit {
                target: HitTarget::Shell,
                distance: t,
            });
        }
    }
    for item in scene.items {
        let Some(placement) = item.placement else {
            continue;
        };
        if placement.size <= 0.0 {
            continue;
        }
        if let Some(t) = ray_quad(ray, scene.group * placement.local_matrix()) {
            hits.push(Hit {
                target: HitTarget::Item(item.id),
                distance: t,
            });
        }
    }
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Full pointer-to-hits pipeline: NDC conversion, unprojection, cast.
pub fn hit_test(
    pointer: Vec2,
    viewport: &Viewport,
    camera: &Camera,
    scene: &SceneView<'_>,
) -> Hits {
    let ray = camera.ray_through_ndc(viewport.to_ndc(pointer));
    cast(&ray, scene)
}

/// The item under the pointer, if the nearest hit is one.
///
/// Only the nearest hit counts: a shell hit in front of an item hides it.
#[inline]
pub fn nearest_item(hits: &[Hit]) -> Option<ItemId> {
    match hits.first()?.target {
        HitTarget::Item(id) => Some(id),
        HitTarget::Shell => None,
    }
}
