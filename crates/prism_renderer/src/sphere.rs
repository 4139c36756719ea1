//! Sphere intersection.

use crate::hittable::{HitRecord, Hittable};
use prism_core::Sphere;
use prism_math::{smallest_root_in_interval, solve_quadratic, Interval, Ray};

/// Slack added to the radius when deciding whether a ray starts inside.
const INSIDE_EPSILON: f32 = 1e-3;

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let (t0, t1) = solve_quadratic(a, b, c)?;
        let t = smallest_root_in_interval(t0, t1, ray_t)?;

        let position = ray.at(t);
        let outward_normal = (position - self.center).normalize();

        // Rays leaving the sphere (e.g. refracted through glass) see the inside
        let normal = if oc.length() < self.radius + INSIDE_EPSILON {
            -outward_normal
        } else {
            outward_normal
        };

        Some(HitRecord {
            t,
            position,
            normal,
            material: self.material,
        })
    }
}
