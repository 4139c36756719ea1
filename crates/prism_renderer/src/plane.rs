//! Infinite plane intersection.

use crate::hittable::{HitRecord, Hittable};
use prism_core::Plane;
use prism_math::{Interval, Ray};

impl Hittable for Plane {
    /// A ray parallel to the plane divides by zero; the resulting infinite
    /// or NaN `t` never passes the open interval test.
    ///
    /// The stored normal is reported as-is, also for rays arriving from
    /// behind the plane.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let t = -(ray.origin.dot(self.normal) + self.offset) / ray.direction.dot(self.normal);
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(HitRecord {
            t,
            position: ray.at(t),
            normal: self.normal,
            material: self.material,
        })
    }
}
