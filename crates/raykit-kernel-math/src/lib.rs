#![warn(missing_docs)]

//! Math types for the raykit geometry kernel.
//!
//! A single-precision 3D vector with the arithmetic the intersection
//! code needs, a per-coordinate equality tolerance, and a fixed-point
//! diagnostic formatter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Per-coordinate tolerance used by [`Vec3::approx_eq`].
///
/// Distinct from the intersection epsilon in `raykit-kernel-raytrace`:
/// this one bounds coordinate-equality error, the other guards
/// plane-parallelism. They must not be unified.
pub const COORD_EPSILON: f32 = 1e-6;

/// A 3D vector with `f32` components.
///
/// Plain value type: copied everywhere, no normalization invariant.
/// Any finite triple is valid; NaN and infinity flow through the
/// arithmetic per IEEE 754.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// Create a new vector.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Dot product with `other`.
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with `other` (right-handed).
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length, `sqrt(self · self)`.
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Approximate equality: every coordinate differs by less than
    /// [`COORD_EPSILON`].
    ///
    /// Not transitive at the tolerance boundary: `a ≈ b` and `b ≈ c`
    /// do not imply `a ≈ c`.
    pub fn approx_eq(self, other: Vec3) -> bool {
        (self.x - other.x).abs() < COORD_EPSILON
            && (self.y - other.y).abs() < COORD_EPSILON
            && (self.z - other.z).abs() < COORD_EPSILON
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

/// Fixed-point rendering with 8 fractional digits, `[x, y, z]`.
///
/// Diagnostic output only; not a parseable wire format.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.8}, {:.8}, {:.8}]", self.x, self.y, self.z)
    }
}
