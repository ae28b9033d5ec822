//! Glint Renderer - recursive Whitted-style ray tracing.
//!
//! The per-pixel pipeline: a pinhole [`Camera`] generates one primary
//! ray per pixel, [`trace_ray`] intersects it against the scene, shades
//! the nearest hit with Phong terms and shadow testing, and follows
//! reflected/refracted rays to a bounded depth. Results land in a
//! [`FrameBuffer`] and are written out as PPM or PNG.

mod camera;
mod framebuffer;
mod output;
mod renderer;
mod shading;
mod tracer;

pub use camera::Camera;
pub use framebuffer::{color_to_rgb8, FrameBuffer};
pub use output::{write_png, write_ppm, OutputError, OutputResult};
pub use renderer::{render, RenderConfig};
pub use shading::{diffuse_specular, phong};
pub use tracer::trace_ray;

/// Re-export math and scene types used throughout the API.
pub use glint_core::{Hit, Light, Material, Plane, Primitive, Scene, Shape, Sphere, IOR_AIR};
pub use glint_math::{Interval, Ray, Vec3};
