//! Ray representation.

use raykit_kernel_math::Vec3;

/// A ray in 3D space defined by origin and direction.
///
/// The direction is kept exactly as given, never normalized: the ray
/// parameter `t` scales with the direction's magnitude, so `t` is a true
/// distance only when the direction has unit length.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Vec3,
    /// Direction of the ray, not required to be unit length.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
