//! Triangle representation.

use raykit_kernel_math::Vec3;
use std::fmt;

/// A triangle defined by three vertices in clockwise order.
///
/// The orientation is informational only: the intersection test treats
/// every triangle as double-sided. Coincident or collinear vertices are
/// accepted; such degenerate triangles simply never intersect anything,
/// falling out of the near-zero-determinant check rather than a separate
/// validation path.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// First vertex.
    pub v0: Vec3,
    /// Second vertex.
    pub v1: Vec3,
    /// Third vertex.
    pub v2: Vec3,
}

impl Triangle {
    /// Create a triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }
}

/// Renders as `( V1 = [..], V2 = [..], V3 = [..] )` using the fixed-point
/// vector format. Diagnostic output only.
impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "( V1 = {}, V2 = {}, V3 = {} )",
            self.v0, self.v1, self.v2
        )
    }
}
