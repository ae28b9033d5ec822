// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// Reflect a direction about a surface normal.
///
/// `n` must be unit length; `v` may have any length and the result
/// keeps its scale.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
