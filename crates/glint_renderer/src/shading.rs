//! Phong local illumination.
//!
//! Pure functions over a surface point's normal, light and view
//! directions. The tracer composes these with its own ambient and
//! occlusion handling, so the diffuse + specular part is exposed
//! separately from the full model.

use glint_math::{reflect, Vec3};

/// Point light intensity I_i.
const LIGHT_INTENSITY: f32 = 1.0;

/// Specular highlight color k_s, fixed white.
const SPECULAR_COLOR: Vec3 = Vec3::ONE;

/// Diffuse + specular terms:
/// `k_d * I_i * max(0, N.L) + k_s * I_i * max(0, R.V)^p`
/// where R is the light direction reflected about the normal.
///
/// All direction arguments must be unit length and point away from the
/// surface. No clamping happens here.
pub fn diffuse_specular(
    normal: Vec3,
    light_dir: Vec3,
    view_dir: Vec3,
    diffuse: Vec3,
    exponent: f32,
) -> Vec3 {
    let diffuse_term = diffuse * LIGHT_INTENSITY * normal.dot(light_dir).max(0.0);

    // R = 2(N.L)N - L
    let reflected_light = reflect(-light_dir, normal);
    let specular_term =
        SPECULAR_COLOR * LIGHT_INTENSITY * reflected_light.dot(view_dir).max(0.0).powf(exponent);

    diffuse_term + specular_term
}

/// Full Phong model:
/// `L = k_a * I_a + k_d * I_i * max(0, N.L) + k_s * I_i * max(0, R.V)^p`
///
/// The ambient intensity I_a is folded into `ambient`, and `color`
/// serves as both k_a and k_d. Each channel is clamped to [0, 1] once,
/// after all terms are summed.
pub fn phong(
    normal: Vec3,
    light_dir: Vec3,
    view_dir: Vec3,
    ambient: f32,
    color: Vec3,
    exponent: f32,
) -> Vec3 {
    let radiance =
        color * ambient + diffuse_specular(normal, light_dir, view_dir, color, exponent);
    radiance.clamp(Vec3::ZERO, Vec3::ONE)
}
