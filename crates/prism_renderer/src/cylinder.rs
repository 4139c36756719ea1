//! Infinite cylinder intersection.

use crate::hittable::{HitRecord, Hittable};
use prism_core::Cylinder;
use prism_math::{smallest_root_in_interval, solve_quadratic, Interval, Ray};

impl Hittable for Cylinder {
    /// Solves the sphere-like quadratic after removing the axial component
    /// from both the ray direction and the origin offset.
    ///
    /// The normal always points away from the axis; unlike the sphere it is
    /// not flipped for rays starting inside.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let axis = self.axis_direction;
        let oc = ray.origin - self.axis_point;

        let d_axial = ray.direction.dot(axis);
        let oc_axial = oc.dot(axis);

        let a = ray.direction.length_squared() - d_axial * d_axial;
        let b = 2.0 * (ray.direction.dot(oc) - d_axial * oc_axial);
        let c = oc.length_squared() - self.radius * self.radius - oc_axial * oc_axial;

        let (t0, t1) = solve_quadratic(a, b, c)?;
        let t = smallest_root_in_interval(t0, t1, ray_t)?;

        let position = ray.at(t);

        // Closest point on the axis to the hit
        let m = d_axial * t + oc_axial;
        let normal = (position - (self.axis_point + axis * m)).normalize();

        Some(HitRecord {
            t,
            position,
            normal,
            material: self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::Material;
    use prism_math::Vec3;

    const RAY_T: Interval = Interval::new(1e-4, 1e4);

    fn vertical(axis_point: Vec3, radius: f32) -> Cylinder {
        Cylinder::new(axis_point, Vec3::Y, radius, Material::paper())
    }

    #[test]
    fn test_cylinder_hit() {
        let cylinder = vertical(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 3.0, 5.0), Vec3::NEG_Z);

        let rec = cylinder.hit(&ray, RAY_T).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!((rec.position - Vec3::new(0.0, 3.0, 1.0)).length() < 1e-5);
        assert!((rec.normal - Vec3::Z).length() < 1e-5);
        assert_eq!(rec.material, Material::paper());
    }

    #[test]
    fn test_normal_measured_from_offset_axis() {
        let cylinder = vertical(Vec3::new(10.0, -2.0, -4.0), 0.5);
        let ray = Ray::new(Vec3::new(5.0, 7.0, -4.0), Vec3::X);

        let rec = cylinder.hit(&ray, RAY_T).unwrap();
        assert!((rec.t - 4.5).abs() < 1e-5);
        assert!((rec.normal - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_tilted_axis_normal_is_perpendicular() {
        let axis = Vec3::new(1.0, 4.0, 1.0).normalize();
        let cylinder = Cylinder::new(Vec3::new(3.0, 1.0, -5.0), axis, 0.25, Material::plastic());

        // Aimed straight at a point on the axis
        let origin = Vec3::new(0.0, 0.0, 1.0);
        let ray = Ray::new(origin, (cylinder.axis_point - origin).normalize());

        let rec = cylinder.hit(&ray, RAY_T).unwrap();
        assert!((rec.normal.length() - 1.0).abs() < 1e-4);
        assert!(rec.normal.dot(axis).abs() < 1e-3);

        // Hit lies on the surface: radial distance equals the radius
        let offset = rec.position - cylinder.axis_point;
        let radial = offset - axis * offset.dot(axis);
        assert!((radial.length() - 0.25).abs() < 1e-3);
    }

    #[test]
    fn test_tangent_ray_is_miss() {
        let cylinder = vertical(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(1.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(cylinder.hit(&ray, RAY_T).is_none());
    }

    #[test]
    fn test_ray_parallel_to_axis_is_miss() {
        let cylinder = vertical(Vec3::ZERO, 1.0);

        // Inside and outside the tube
        let inside = Ray::new(Vec3::new(0.2, -5.0, 0.0), Vec3::Y);
        let outside = Ray::new(Vec3::new(3.0, -5.0, 0.0), Vec3::Y);
        assert!(cylinder.hit(&inside, RAY_T).is_none());
        assert!(cylinder.hit(&outside, RAY_T).is_none());
    }

    #[test]
    fn test_ray_from_inside_keeps_outward_normal() {
        let cylinder = vertical(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = cylinder.hit(&ray, RAY_T).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-5);
        assert!((rec.normal - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_cylinder_miss() {
        let cylinder = vertical(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(cylinder.hit(&ray, RAY_T).is_none());
    }
}
