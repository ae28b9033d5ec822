//! Scene: an ordered primitive list plus a single point light.

use glint_math::{Interval, Ray, Vec3};

use crate::primitive::{Hit, Primitive};

/// Minimum accepted ray parameter for primary and secondary rays.
/// Guards against self-intersection from floating-point error.
const T_MIN: f32 = 1e-3;

/// A single point light.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
}

impl Light {
    /// Create a light at the given position.
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

/// The scene the tracer renders: primitives in insertion order and one
/// light. Read-only once rendering starts.
pub struct Scene {
    primitives: Vec<Primitive>,
    light: Light,
}

impl Scene {
    /// Create an empty scene lit by `light`.
    pub fn new(light: Light) -> Self {
        Self {
            primitives: Vec::new(),
            light,
        }
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Access a primitive by index.
    pub fn primitive(&self, index: usize) -> &Primitive {
        &self.primitives[index]
    }

    /// The scene's light.
    pub fn light(&self) -> Light {
        self.light
    }

    /// Closest hit along `ray`: linear scan over every primitive,
    /// keeping the minimum positive t. Returns the index of the hit
    /// primitive together with the hit record, or None on a miss.
    pub fn closest_hit(&self, ray: &Ray) -> Option<(usize, Hit)> {
        let mut nearest: Option<(usize, Hit)> = None;
        let mut closest_so_far = f32::INFINITY;

        for (index, primitive) in self.primitives.iter().enumerate() {
            let range = Interval::new(T_MIN, closest_so_far);
            if let Some(hit) = primitive.intersect(ray, range) {
                closest_so_far = hit.t;
                nearest = Some((index, hit));
            }
        }

        nearest
    }

    /// Shadow query: is the segment from the shadow ray's origin to the
    /// light (t = 1) blocked by any primitive other than `skip`?
    ///
    /// `skip` is the primitive being shaded; excluding it keeps the
    /// shadow test anti-reflexive.
    pub fn occluded(&self, shadow_ray: &Ray, skip: usize) -> bool {
        self.primitives
            .iter()
            .enumerate()
            .any(|(index, primitive)| index != skip && primitive.occludes(shadow_ray))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::primitive::Sphere;

    fn sphere_at(z: f32, radius: f32) -> Primitive {
        Primitive::sphere(
            Sphere::new(Vec3::new(0.0, 0.0, z), radius),
            Material::default(),
        )
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new(Light::new(Vec3::Y));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(scene.is_empty());
        assert!(scene.closest_hit(&ray).is_none());
    }

    #[test]
    fn test_closest_hit_picks_nearest() {
        let mut scene = Scene::new(Light::new(Vec3::Y));
        scene.add(sphere_at(-10.0, 1.0)); // farther, inserted first
        scene.add(sphere_at(-5.0, 0.75)); // nearer

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let (index, hit) = scene.closest_hit(&ray).unwrap();
        assert_eq!(index, 1);
        assert!((hit.t - 4.25).abs() < 1e-4);
    }

    #[test]
    fn test_closest_hit_insertion_order_independent() {
        let mut scene = Scene::new(Light::new(Vec3::Y));
        scene.add(sphere_at(-5.0, 0.75)); // nearer inserted first this time
        scene.add(sphere_at(-10.0, 1.0));

        let (index, hit) = scene.closest_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).unwrap();
        assert_eq!(index, 0);
        assert!((hit.t - 4.25).abs() < 1e-4);
    }

    #[test]
    fn test_shadow_is_anti_reflexive() {
        let mut scene = Scene::new(Light::new(Vec3::new(0.0, 5.0, -5.0)));
        scene.add(sphere_at(-5.0, 0.75));

        // Shadow ray from the sphere's own surface toward the light.
        let point = Vec3::new(0.0, 0.75, -5.0);
        let shadow_ray = Ray::new(point, scene.light().position - point);
        assert!(!scene.occluded(&shadow_ray, 0));
    }

    #[test]
    fn test_occlusion_by_other_primitive() {
        let mut scene = Scene::new(Light::new(Vec3::new(0.0, 0.0, 0.0)));
        scene.add(sphere_at(-5.0, 0.75)); // shaded primitive
        scene.add(sphere_at(-2.5, 0.5)); // blocker halfway to the light

        let point = Vec3::new(0.0, 0.0, -4.25);
        let shadow_ray = Ray::new(point, scene.light().position - point);
        assert!(scene.occluded(&shadow_ray, 0));
    }
}
