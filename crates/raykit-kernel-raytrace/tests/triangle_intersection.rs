//! Reference scenarios for the ray-triangle intersector.

use raykit_kernel_math::Vec3;
use raykit_kernel_raytrace::{intersect_triangle, Ray, Triangle};

#[test]
fn centered_triangle_intersects_at_zero() {
    let triangle = Triangle::new(
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
    );
    let ray = Ray::new(Vec3::new(0.0, 0.0, -0.6), Vec3::new(0.0, 0.0, 1.0));

    let hit = intersect_triangle(&ray, &triangle).expect("ray crosses the triangle");
    assert!(hit.point.approx_eq(Vec3::new(0.0, 0.0, 0.0)));
    assert!(((hit.point - ray.origin).length() - 0.6).abs() < 1e-6);
}

#[test]
fn non_centered_triangle_intersects() {
    let triangle = Triangle::new(
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(3.5, 2.2, 0.0),
        Vec3::new(3.9, 0.0, 0.0),
    );
    let ray = Ray::new(Vec3::new(2.2, 0.2, -1.39), Vec3::new(0.0, 0.0, 1.0));

    let hit = intersect_triangle(&ray, &triangle).expect("ray crosses the triangle");
    assert!(hit.point.approx_eq(Vec3::new(2.2, 0.2, 0.0)));
    assert!(((hit.point - ray.origin).length() - 1.39).abs() < 1e-6);
}

#[test]
fn ray_in_triangle_plane_reports_no_intersection() {
    // The ray runs inside the triangle's own plane and passes through its
    // area. The determinant check treats this as parallel, so no hit is
    // reported; in-plane overlap is outside the algorithm's contract.
    let triangle = Triangle::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
    );
    let ray = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

    assert!(intersect_triangle(&ray, &triangle).is_none());
}

#[test]
fn ray_parallel_to_triangle_misses_both_ways() {
    // Triangle in the y = 0 plane, ray offset below it and parallel to it
    let triangle = Triangle::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, 1.0),
    );
    let origin = Vec3::new(0.0, -1.0, 0.0);
    let direction = Vec3::new(0.0, 0.0, 1.0);

    assert!(intersect_triangle(&Ray::new(origin, direction), &triangle).is_none());
    assert!(intersect_triangle(&Ray::new(origin, -1.0 * direction), &triangle).is_none());
}

#[test]
fn ray_pointing_away_does_not_intersect() {
    let triangle = Triangle::new(
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
    );
    // Reversed direction of a known hit configuration
    let ray = Ray::new(Vec3::new(0.0, 0.0, -0.6), Vec3::new(0.0, 0.0, -1.0));

    assert!(intersect_triangle(&ray, &triangle).is_none());
}
