//! Core Whitted renderer.
//!
//! Implements per-pixel ray tracing with:
//! - Local Phong shading with hard shadows
//! - Independent fixed-depth reflection and refraction chains
//! - Gamma correction

use crate::hittable::Hittable;
use crate::shading::shade;
use crate::transport::{trace_chain, Transport};
use crate::{Camera, Color};
use prism_core::Scene;
use prism_math::{Interval, Ray, Vec2};
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of reflection bounces after the primary hit
    pub reflection_depth: u32,
    /// Number of refraction bounces after the primary hit
    pub refraction_depth: u32,
    /// Lower bound for primary rays
    pub t_min: f32,
    /// Lower bound for reflected rays
    pub reflection_t_min: f32,
    /// Lower bound for refracted rays
    pub refraction_t_min: f32,
    /// Upper bound for every primary and bounce ray
    pub t_max: f32,
    /// Display gamma used when encoding pixels
    pub gamma: f32,
    /// Edge length of a render bucket in pixels
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            reflection_depth: 2,
            refraction_depth: 2,
            t_min: 1e-4,
            reflection_t_min: 1e-4,
            refraction_t_min: 1e-3,
            t_max: 1e4,
            gamma: 2.0,
            bucket_size: crate::bucket::DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Interval used for camera rays.
    pub fn primary_interval(&self) -> Interval {
        Interval::new(self.t_min, self.t_max)
    }
}

/// Compute the linear radiance seen along a camera ray.
///
/// Primary shading plus the reflection chain plus the refraction chain,
/// summed without any normalization between them.
pub fn trace_ray(scene: &Scene, config: &RenderConfig, ray: &Ray) -> Color {
    let hit = scene.hit(ray, config.primary_interval());
    let direct = shade(scene, ray, hit.as_ref());

    let reflected = trace_chain(scene, config, Transport::Reflection, *ray, hit);
    let refracted = trace_chain(scene, config, Transport::Refraction, *ray, hit);

    direct + reflected.radiance + refracted.radiance
}

/// Linear radiance for a fragment coordinate (pixel centers at `.5`,
/// origin at the bottom-left of the image).
pub fn color_for_fragment(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    frag_coord: Vec2,
) -> Color {
    trace_ray(scene, config, &camera.get_ray(frag_coord))
}

/// Linear radiance for the pixel in column `x`, row `y` (row 0 at the top).
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    x: u32,
    y: u32,
) -> Color {
    color_for_fragment(scene, camera, config, camera.frag_coord(x, y))
}

/// Apply display gamma per channel; negative radiance clamps to black.
pub fn tonemap(radiance: Color, gamma: f32) -> Color {
    let exponent = 1.0 / gamma;
    radiance.max(Color::ZERO).powf(exponent)
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a linear color to 8-bit RGBA.
pub fn color_to_rgba(color: Color, gamma: f32) -> [u8; 4] {
    let encoded = tonemap(color, gamma);
    let r = (255.0 * clamp_01(encoded.x)) as u8;
    let g = (255.0 * clamp_01(encoded.y)) as u8;
    let b = (255.0 * clamp_01(encoded.z)) as u8;
    [r, g, b, 255]
}

/// Simple image buffer of linear radiance, row-major, row 0 at the top.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Offset of pixel (x, y) in `pixels`, computed in `usize`.
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to gamma-encoded RGBA bytes.
    pub fn to_rgba(&self, gamma: f32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color, gamma));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer on the calling thread.
///
/// See [`crate::render_parallel`] for the bucketed multi-threaded version;
/// both produce identical images.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    log::info!(
        "Rendering {}x{} on the calling thread",
        camera.image_width,
        camera.image_height
    );

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            image.set(x, y, render_pixel(scene, camera, config, x, y));
        }
    }

    log::info!(
        "Rendered {}x{} in {:.2?}",
        camera.image_width,
        camera.image_height,
        start.elapsed()
    );

    image
}
