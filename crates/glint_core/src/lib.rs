//! Glint Core - Scene model for the ray tracer.
//!
//! This crate provides:
//!
//! - **Materials**: [`Material`] with ambient/specular coefficients,
//!   a mirror flag and a refractive index
//! - **Primitives**: analytic [`Sphere`] and [`Plane`] shapes with
//!   ray intersection and shadow queries
//! - **Scene**: an ordered, immutable primitive list plus a single
//!   point [`Light`]
//!
//! # Example
//!
//! ```
//! use glint_core::{Light, Material, Primitive, Scene, Sphere};
//! use glint_math::{Ray, Vec3};
//!
//! let mut scene = Scene::new(Light::new(Vec3::new(0.0, 2.0, 0.0)));
//! scene.add(Primitive::sphere(
//!     Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.75),
//!     Material::with_color(Vec3::new(1.0, 0.5, 0.0)),
//! ));
//!
//! let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
//! let (_, hit) = scene.closest_hit(&ray).unwrap();
//! assert!((hit.t - 4.25).abs() < 1e-4);
//! ```

pub mod material;
pub mod primitive;
pub mod scene;

// Re-export commonly used types
pub use material::{Material, IOR_AIR};
pub use primitive::{Hit, Plane, Primitive, Shape, Sphere};
pub use scene::{Light, Scene};
