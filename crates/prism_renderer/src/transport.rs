//! Fixed-depth reflection and refraction chains.
//!
//! Each chain follows a single path (no branching). The chain weight is
//! multiplied by the current surface's reflectiveness or refractiveness
//! before every bounce, and each bounce adds `weight * shade(next hit)`.
//! A chain stops at its depth limit or on the step after a miss.

use crate::hittable::{HitRecord, Hittable};
use crate::shading::shade;
use crate::{Color, RenderConfig};
use prism_core::{Material, Scene};
use prism_math::{reflect, refract, Interval, Ray, Vec3};

/// Index of the medium a refracted ray travels through.
///
/// Held constant for every refraction bounce: entering and leaving an
/// object are bent with the same ratio.
pub const MEDIUM_INDEX: f32 = 1.0;

/// The two secondary transport modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Reflection,
    Refraction,
}

impl Transport {
    /// Factor applied to the running chain weight at a surface.
    pub fn weight(self, material: &Material) -> f32 {
        match self {
            Transport::Reflection => material.reflectiveness,
            Transport::Refraction => material.refractiveness,
        }
    }

    /// Direction of the next ray leaving `hit`, given the ray that arrived.
    pub fn next_direction(self, ray: &Ray, hit: &HitRecord) -> Vec3 {
        match self {
            Transport::Reflection => reflect(ray.direction, hit.normal.normalize()),
            Transport::Refraction => refract(
                ray.direction,
                hit.normal,
                hit.material.refractiveness / MEDIUM_INDEX,
            ),
        }
    }

    /// Maximum number of bounces for this mode.
    pub fn depth(self, config: &RenderConfig) -> u32 {
        match self {
            Transport::Reflection => config.reflection_depth,
            Transport::Refraction => config.refraction_depth,
        }
    }

    /// Interval used to intersect bounce rays of this mode.
    pub fn interval(self, config: &RenderConfig) -> Interval {
        match self {
            Transport::Reflection => Interval::new(config.reflection_t_min, config.t_max),
            Transport::Refraction => Interval::new(config.refraction_t_min, config.t_max),
        }
    }
}

/// Accumulated contribution of one chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainResult {
    /// Weighted radiance summed over all bounces
    pub radiance: Color,
    /// Number of bounces actually traced
    pub steps: u32,
}

/// Follow one transport chain starting from the primary `ray` and its `hit`.
pub fn trace_chain(
    scene: &Scene,
    config: &RenderConfig,
    transport: Transport,
    ray: Ray,
    hit: Option<HitRecord>,
) -> ChainResult {
    let ray_t = transport.interval(config);

    let mut radiance = Color::ZERO;
    let mut weight = 1.0;
    let mut steps = 0;

    let mut current_ray = ray;
    let mut current_hit = hit;

    for _ in 0..transport.depth(config) {
        let Some(hit) = current_hit else {
            break;
        };

        weight *= transport.weight(&hit.material);

        let next_ray = Ray::new(hit.position, transport.next_direction(&current_ray, &hit));
        current_hit = scene.hit(&next_ray, ray_t);
        radiance += weight * shade(scene, &next_ray, current_hit.as_ref());

        current_ray = next_ray;
        steps += 1;
    }

    ChainResult { radiance, steps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::background;
    use prism_core::{Plane, PointLight, Sphere};

    const EPS: f32 = 1e-5;

    fn primary(scene: &Scene, ray: &Ray) -> Option<HitRecord> {
        scene.hit(ray, RenderConfig::default().primary_interval())
    }

    fn reflection_chain(scene: &Scene, config: &RenderConfig, ray: Ray) -> ChainResult {
        trace_chain(scene, config, Transport::Reflection, ray, primary(scene, &ray))
    }

    /// A mirror floor below an empty sky.
    fn mirror_floor() -> Scene {
        let mut scene = Scene::new("mirror");
        scene.add_plane(Plane::new(Vec3::Y, 1.0, Material::steel_mirror()));
        scene
    }

    #[test]
    fn test_primary_miss_traces_nothing() {
        let scene = mirror_floor();
        let config = RenderConfig::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        for transport in [Transport::Reflection, Transport::Refraction] {
            let result = trace_chain(&scene, &config, transport, ray, primary(&scene, &ray));
            assert_eq!(result.steps, 0);
            assert_eq!(result.radiance, Color::ZERO);
        }
    }

    #[test]
    fn test_reflection_stops_after_miss() {
        let scene = mirror_floor();
        let config = RenderConfig::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -1.0).normalize());

        let result = reflection_chain(&scene, &config, ray);

        // Bounce off the mirror into the sky, then stop
        assert_eq!(result.steps, 1);
        let sky = background(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, -1.0).normalize()));
        assert!((result.radiance - sky).length() < EPS);
    }

    #[test]
    fn test_reflection_runs_exactly_to_depth() {
        // Two parallel mirrors bounce the ray back and forth forever
        let mut scene = Scene::new("corridor");
        scene.add_plane(Plane::new(Vec3::Y, 1.0, Material::steel_mirror()));
        scene.add_plane(Plane::new(Vec3::NEG_Y, 1.0, Material::steel_mirror()));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -1.0).normalize());

        let config = RenderConfig::default();
        let result = reflection_chain(&scene, &config, ray);
        assert_eq!(result.steps, 2);

        let deeper = RenderConfig {
            reflection_depth: 5,
            ..RenderConfig::default()
        };
        let result = reflection_chain(&scene, &deeper, ray);
        assert_eq!(result.steps, 5);
    }

    #[test]
    fn test_weight_compounds() {
        // Half-reflective mirrors without lights: every bounce shades to black
        // except the final escape to the sky
        let half = Material::steel_mirror().with_reflectiveness(0.5);
        let mut scene = Scene::new("half");
        scene.add_plane(Plane::new(Vec3::Y, 1.0, half));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -1.0).normalize());

        let config = RenderConfig::default();
        let result = reflection_chain(&scene, &config, ray);
        let sky = background(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, -1.0).normalize()));
        assert!((result.radiance - 0.5 * sky).length() < EPS);
    }

    #[test]
    fn test_opaque_surfaces_add_nothing() {
        let mut scene = Scene::showcase();
        scene.spheres.clear();
        scene.cylinders.clear();
        scene.planes[0].material = Material::paper();
        scene.add_light(PointLight::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ONE));

        let config = RenderConfig::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -1.0).normalize());

        for transport in [Transport::Reflection, Transport::Refraction] {
            let result = trace_chain(&scene, &config, transport, ray, primary(&scene, &ray));
            assert_eq!(result.radiance, Color::ZERO);
        }
    }

    #[test]
    fn test_refraction_through_glass_sphere() {
        // Ratio 1 keeps the ray straight: it crosses the sphere and escapes
        let glass = Material::glass().with_refractiveness(1.0);
        let mut scene = Scene::new("glass");
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, glass));

        let config = RenderConfig::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = primary(&scene, &ray);
        let result = trace_chain(&scene, &config, Transport::Refraction, ray, hit);

        // In at z = -4, out at z = -6, then off into the sky
        assert_eq!(result.steps, 2);
        let sky = background(&Ray::new(Vec3::ZERO, Vec3::NEG_Z));
        assert!((result.radiance - sky).length() < EPS);
    }

    #[test]
    fn test_refraction_uses_fixed_medium_index() {
        let glass = Material::glass();
        let hit = HitRecord {
            t: 1.0,
            position: Vec3::ZERO,
            normal: Vec3::Y,
            material: glass,
        };
        let ray = Ray::new(Vec3::new(-0.6, 0.8, 0.0), Vec3::new(0.6, -0.8, 0.0));

        let direction = Transport::Refraction.next_direction(&ray, &hit);
        assert_eq!(direction, refract(ray.direction, hit.normal, glass.refractiveness));
    }

    #[test]
    fn test_reflection_normalizes_normal() {
        let hit = HitRecord {
            t: 1.0,
            position: Vec3::ZERO,
            normal: Vec3::new(0.0, 3.0, 0.0),
            material: Material::steel_mirror(),
        };
        let ray = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));

        let direction = Transport::Reflection.next_direction(&ray, &hit);
        assert_eq!(direction, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_total_internal_reflection_escapes_as_zero_ray() {
        // Grazing ray with a ratio above 1: refract gives a zero direction
        let hit = HitRecord {
            t: 1.0,
            position: Vec3::ZERO,
            normal: Vec3::Y,
            material: Material {
                refractiveness: 1.5,
                ..Material::glass()
            },
        };
        let ray = Ray::new(Vec3::new(-0.8, 0.6, 0.0), Vec3::new(0.8, -0.6, 0.0));
        assert_eq!(Transport::Refraction.next_direction(&ray, &hit), Vec3::ZERO);

        // Which misses everything and shades as flat sky
        let scene = Scene::showcase();
        let zero_ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(scene.hit(&zero_ray, RenderConfig::default().primary_interval()).is_none());
        assert_eq!(shade(&scene, &zero_ray, None), Color::splat(0.2));
    }
}
