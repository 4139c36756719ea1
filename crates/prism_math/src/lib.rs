// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod interval;
mod optics;
mod ray;
mod roots;

pub use interval::Interval;
pub use optics::{fresnel_schlick, reflect, refract};
pub use ray::Ray;
pub use roots::{smallest_root_in_interval, solve_quadratic, sort_pair};
