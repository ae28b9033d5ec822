//! Recursive Whitted-style tracing.
//!
//! [`trace_ray`] owns the termination policy: a miss returns the
//! background color, and once the recursion depth passes the budget a
//! constant white is returned so an exhausted mirror/glass chain is
//! distinguishable from a miss.

use glint_core::Scene;
use glint_math::{reflect, Ray, Vec3};

use crate::renderer::RenderConfig;
use crate::shading::diffuse_specular;

/// Offset applied along a secondary ray's direction so the new ray does
/// not immediately re-hit the surface it left.
const SELF_HIT_EPS: f32 = 1e-3;

/// Terminal color returned when the recursion budget is exhausted.
const DEPTH_EXHAUSTED: Vec3 = Vec3::ONE;

/// Trace one ray into the scene, recursing through reflections and
/// refractions, and return its radiance.
///
/// Mirrors and dielectrics are perfect here: the recursive result
/// replaces the surface's own color as the shading base instead of
/// blending with it. Occlusion by another primitive suppresses the
/// diffuse and specular terms, leaving only the ambient-scaled base;
/// that path is also the only one that skips the final clamp.
pub fn trace_ray(ray: &Ray, scene: &Scene, config: &RenderConfig, depth: u32) -> Vec3 {
    let Some((index, hit)) = scene.closest_hit(ray) else {
        return config.background;
    };
    let material = &scene.primitive(index).material;

    // Base contribution: the surface's own un-shaded color.
    let mut contribution = material.color;

    // Shadow ray carries the full vector to the light, so t = 1 is the
    // light itself. The hit primitive is excluded from its own test.
    let to_light = scene.light().position - hit.point;
    let occluded = scene.occluded(&Ray::new(hit.point, to_light), index);

    if depth > config.max_depth {
        return DEPTH_EXHAUSTED;
    }

    if material.reflective {
        let direction = reflect(ray.direction().normalize(), hit.normal);
        let bounced = Ray::new(hit.point + SELF_HIT_EPS * direction, direction);
        contribution = trace_ray(&bounced, scene, config, depth + 1);
    } else if material.is_refractive() {
        let direction =
            refracted_direction(ray.direction(), hit.normal, 1.0 / material.refractive_index);
        let bent = Ray::new(hit.point + SELF_HIT_EPS * direction, direction);
        contribution = trace_ray(&bent, scene, config, depth + 1);
    }

    let mut color = contribution * material.ambient;
    if !occluded {
        let view_dir = (ray.origin() - hit.point).normalize();
        let light_dir = to_light.normalize();
        color += diffuse_specular(
            hit.normal,
            light_dir,
            view_dir,
            contribution,
            material.specular_exponent,
        );
        color = color.clamp(Vec3::ZERO, Vec3::ONE);
    }
    color
}

/// Snell's law in vector form, tracing from air (eta = 1/n):
/// `(eta * (N.I) - sqrt(a)) * N - eta * I` with
/// `a = 1 - eta^2 * (1 - (N.I)^2)` and `I` the unit vector back toward
/// the ray origin. When `a` goes negative there is no transmitted
/// direction and the internally reflected ray is returned instead.
fn refracted_direction(direction: Vec3, normal: Vec3, eta: f32) -> Vec3 {
    let incident = -direction.normalize();
    let cos_i = normal.dot(incident);
    let a = 1.0 - eta * eta * (1.0 - cos_i * cos_i);

    if a < 0.0 {
        // Total internal reflection
        reflect(direction.normalize(), normal)
    } else {
        (eta * cos_i - a.sqrt()) * normal - eta * incident
    }
}
