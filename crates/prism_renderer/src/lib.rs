//! Prism Renderer - Whitted-style CPU ray tracing
//!
//! Renders a [`prism_core::Scene`] of spheres, planes and infinite cylinders
//! lit by point lights. Each pixel is one camera ray: local Phong shading
//! with hard shadows, plus fixed-depth reflection and refraction chains.

mod bucket;
mod camera;
mod cylinder;
mod hittable;
mod output;
mod plane;
mod renderer;
mod shading;
mod sphere;
mod transport;

#[cfg(test)]
mod test_log;

/// Linear RGB radiance.
pub type Color = prism_math::Vec3;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::Camera;
pub use hittable::{intersect_scene, HitRecord, Hittable};
pub use output::{save_image, write_ppm, OutputError, OutputResult};
pub use renderer::{
    color_for_fragment, color_to_rgba, render, render_pixel, tonemap, trace_ray, ImageBuffer,
    RenderConfig,
};
pub use shading::{background, light_visibility, shade, shade_from_light, SHADOW_INTERVAL};
pub use transport::{trace_chain, ChainResult, Transport, MEDIUM_INDEX};

/// Re-export common math types from prism_math
pub use prism_math::{Interval, Ray, Vec2, Vec3};
