//! Hittable trait and HitRecord for ray-object intersection.

use prism_core::{Material, Scene};
use prism_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// A miss is represented by `None` wherever a `HitRecord` is expected, so a
/// record always describes a real surface point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs, in units of `|ray.direction|`
    pub t: f32,
    /// Point of intersection
    pub position: Vec3,
    /// Unit surface normal
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

impl Hittable for Scene {
    /// Closest hit over every primitive in the scene.
    ///
    /// Cylinders are tested first, then spheres, then planes. A candidate
    /// replaces the current best only when its `t` is strictly smaller, so
    /// on an exact tie the first primitive tested wins. The upper bound of
    /// `ray_t` seeds the best distance.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let candidates = self
            .cylinders
            .iter()
            .map(|c| c as &dyn Hittable)
            .chain(self.spheres.iter().map(|s| s as &dyn Hittable))
            .chain(self.planes.iter().map(|p| p as &dyn Hittable));

        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for object in candidates {
            if let Some(rec) = object.hit(ray, ray_t) {
                if rec.t < closest_so_far {
                    closest_so_far = rec.t;
                    closest = Some(rec);
                }
            }
        }

        closest
    }
}

/// Find the closest hit of `ray` in `scene` strictly inside `ray_t`.
#[inline]
pub fn intersect_scene(scene: &Scene, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
    scene.hit(ray, ray_t)
}
