//! Local shading: ambient, Phong diffuse/specular per point light, and hard
//! shadows.
//!
//! Lights are not attenuated with distance.

use crate::hittable::{HitRecord, Hittable};
use crate::Color;
use prism_core::{PointLight, Scene};
use prism_math::{reflect, Interval, Ray, Vec3};

/// Shadow rays span surface point (t = 0) to light (t = 1); the lower bound
/// keeps a surface from shadowing itself.
pub const SHADOW_INTERVAL: Interval = Interval::new(0.01, 1.0);

/// 1.0 if nothing lies between `point` and the light, 0.0 otherwise.
pub fn light_visibility(scene: &Scene, point: Vec3, light: &PointLight) -> f32 {
    // Not normalized: t = 1 is the light itself
    let shadow_ray = Ray::between(point, light.position);
    if scene.hit(&shadow_ray, SHADOW_INTERVAL).is_some() {
        0.0
    } else {
        1.0
    }
}

/// Radiance reflected towards the viewer from a single light.
pub fn shade_from_light(scene: &Scene, ray: &Ray, hit: &HitRecord, light: &PointLight) -> Color {
    let light_direction = (light.position - hit.position).normalize();
    let view_direction = (hit.position - ray.origin).normalize();
    let reflected_direction = reflect(view_direction, hit.normal);

    let diffuse_term = light_direction.dot(hit.normal).max(0.0);
    let specular_term = light_direction
        .dot(reflected_direction)
        .max(0.0)
        .powf(hit.material.glossiness);

    let visibility = light_visibility(scene, hit.position, light);

    visibility
        * light.color
        * (specular_term * hit.material.specular + diffuse_term * hit.material.diffuse)
}

/// Procedural sky seen by rays that hit nothing.
pub fn background(ray: &Ray) -> Color {
    Color::splat(0.2) + Color::new(0.8, 0.6, 0.5) * ray.direction.y.max(0.0)
}

/// Radiance leaving the hit point along `ray`, or the sky on a miss.
pub fn shade(scene: &Scene, ray: &Ray, hit: Option<&HitRecord>) -> Color {
    let Some(hit) = hit else {
        return background(ray);
    };

    scene
        .lights
        .iter()
        .fold(scene.ambient * hit.material.diffuse, |shading, light| {
            shading + shade_from_light(scene, ray, hit, light)
        })
}
