//! Ray-triangle intersection (closed-form).
//!
//! Möller-Trumbore: express any point of the triangle in barycentric
//! coordinates, equate it with the ray formula,
//!
//! ```text
//! (1 - u - v) * V0 + u * V1 + v * V2  =  origin + t * direction
//! ```
//!
//! and solve the resulting linear system with Cramer's rule.
//!
//! Reference: Fast, Minimum Storage Ray/Triangle Intersection;
//! Möller and Trumbore, 1997.

use raykit_kernel_math::Vec3;

use crate::{Ray, Triangle};

/// Precision at which a determinant or ray parameter is treated as zero.
///
/// Intentionally tighter than `raykit_kernel_math::COORD_EPSILON`; the two
/// guard different sensitivities (plane-parallelism here, coordinate
/// equality there) and are kept as separate constants.
pub const EPSILON: f32 = 1e-7;

/// Result of a ray-triangle intersection.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Parameter along the ray where the intersection occurs. A distance
    /// only if the ray direction has unit length.
    pub t: f32,
    /// 3D intersection point, `origin + t * direction`.
    pub point: Vec3,
    /// First barycentric coordinate of the hit.
    pub u: f32,
    /// Second barycentric coordinate of the hit.
    pub v: f32,
}

/// Intersect a ray with a triangle, irrespective of triangle facing.
///
/// Returns `Some(hit)` if the ray strikes the triangle strictly ahead of
/// its origin, `None` otherwise. Every miss is reported the same way,
/// whether the ray is (near-)parallel to the triangle's plane, the hit
/// falls outside the barycentric bounds, or the plane crossing lies
/// behind the origin.
///
/// A ray lying exactly in the triangle's plane is reported as a miss even
/// where it overlaps the triangle's area: the determinant check only
/// detects transversal crossings. This is the documented contract of the
/// algorithm, not a defect.
pub fn intersect_triangle(ray: &Ray, triangle: &Triangle) -> Option<RayHit> {
    // Two edges sharing vertex 0
    let edge1 = triangle.v1 - triangle.v0;
    let edge2 = triangle.v2 - triangle.v0;

    let h = ray.direction.cross(edge2);
    let determinant = edge1.dot(h);

    // A negative determinant would mean a back-facing triangle under the
    // clockwise winding convention; triangles are double-sided here, so
    // only the magnitude matters. Near zero, the ray is (almost) parallel
    // to the triangle plane.
    if determinant.abs() < EPSILON {
        return None;
    }

    let inverse_determinant = 1.0 / determinant;

    let s = ray.origin - triangle.v0;
    let u = s.dot(h) * inverse_determinant;

    // Reject on the u bound before doing any more products
    if u < 0.0 || u > 1.0 {
        return None;
    }

    let q = s.cross(edge1);
    let v = inverse_determinant * ray.direction.dot(q);

    // Same early exit on the v bound
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = inverse_determinant * edge2.dot(q);

    if t > EPSILON {
        Some(RayHit {
            t,
            point: ray.at(t),
            u,
            v,
        })
    } else {
        // Line intersection only, at or behind the ray origin
        None
    }
}
