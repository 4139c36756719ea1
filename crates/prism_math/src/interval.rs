/// A range of ray parameters `t`.
///
/// Intersection code only ever accepts values strictly inside the range
/// (see [`Interval::surrounds`]); the excluded lower bound doubles as the
/// self-intersection bias for secondary rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    ///
    /// NaN fails both comparisons. An infinite `x` can never be strictly
    /// inside, even when a bound is itself infinite, so non-finite values
    /// are never accepted.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }
}
