//! Fixed pinhole camera for ray generation.

use prism_math::{Ray, Vec2, Vec3};

/// Distance from the eye to the sensor plane along the view axis.
const SENSOR_DISTANCE: f32 = 1.0;

/// Lower-left corner of the sensor in world units.
const SENSOR_MIN: Vec2 = Vec2::new(-1.0, -0.5);

/// Upper-right corner of the sensor in world units.
const SENSOR_MAX: Vec2 = Vec2::new(1.0, 0.5);

/// Camera looking down -Z from (0, 0, 1) through a 2 x 1 sensor.
///
/// The sensor is fixed; only the number of pixels it is divided into can
/// change. A non-2:1 resolution stretches the image.
#[derive(Clone, Debug)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Cached from the resolution
    pixel_size: Vec2,
}

impl Camera {
    /// Create a new camera with the default 800x400 resolution.
    pub fn new() -> Self {
        Self::default().with_resolution(800, 400)
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self.pixel_size = (SENSOR_MAX - SENSOR_MIN) / Vec2::new(width as f32, height as f32);
        self
    }

    /// Eye position shared by every camera ray.
    pub fn origin(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, SENSOR_DISTANCE)
    }

    /// Size of one pixel on the sensor.
    pub fn pixel_size(&self) -> Vec2 {
        self.pixel_size
    }

    /// Fragment coordinate of the center of pixel (x, y).
    ///
    /// Row 0 is the top of the image, while fragment coordinates grow
    /// upwards from the bottom-left corner. Rows past the bottom edge map
    /// below the sensor instead of wrapping.
    pub fn frag_coord(&self, x: u32, y: u32) -> Vec2 {
        Vec2::new(x as f32 + 0.5, self.image_height as f32 - y as f32 - 0.5)
    }

    /// Generate the ray through a fragment coordinate.
    pub fn get_ray(&self, frag_coord: Vec2) -> Ray {
        let sensor_point = SENSOR_MIN + self.pixel_size * frag_coord;
        let direction = sensor_point.extend(-SENSOR_DISTANCE).normalize();
        Ray::new(self.origin(), direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            image_width: 800,
            image_height: 400,
            pixel_size: Vec2::splat(0.0025),
        }
    }
}
