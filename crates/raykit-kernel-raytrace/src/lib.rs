#![warn(missing_docs)]

//! Ray-triangle intersection for the raykit geometry kernel.
//!
//! A closed-form Möller-Trumbore intersector over the `Vec3` type from
//! `raykit-kernel-math`. Every call is a pure function of its inputs:
//! no shared state, no I/O, trivially safe to invoke from many threads.
//!
//! # Example
//!
//! ```
//! use raykit_kernel_math::Vec3;
//! use raykit_kernel_raytrace::{intersect_triangle, Ray, Triangle};
//!
//! let triangle = Triangle::new(
//!     Vec3::new(-1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//! );
//! let ray = Ray::new(Vec3::new(0.0, 0.0, -0.6), Vec3::new(0.0, 0.0, 1.0));
//!
//! let hit = intersect_triangle(&ray, &triangle).unwrap();
//! assert!(hit.point.approx_eq(Vec3::zero()));
//! ```

mod intersect;
mod ray;
mod triangle;

pub use intersect::{intersect_triangle, RayHit, EPSILON};
pub use ray::Ray;
pub use triangle::Triangle;
