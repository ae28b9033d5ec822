//! Analytic scene primitives and ray intersection.

use glint_math::{Interval, Ray, Vec3};

use crate::material::Material;

/// A ray-plane denominator below this magnitude counts as parallel.
const PARALLEL_EPS: f32 = 1e-6;

/// Start of the shadow occlusion window, in units of the
/// point-to-light distance. Keeps surfaces grazing the shaded point
/// from registering as occluders.
const SHADOW_EPS: f32 = 1e-3;

/// Record of a ray-primitive intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward surface normal at the intersection
    pub normal: Vec3,
}

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Vec3, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self { center, radius }
    }

    /// Solve |O + tD - C|^2 = r^2 for the nearest root inside `t_range`.
    fn intersect(&self, ray: &Ray, t_range: Interval) -> Option<Hit> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Smallest root in range first, then the far root. Taking the
        // smallest valid root is the nearest-hit policy; the far root
        // still matters when the origin is inside the sphere.
        let mut root = (h - sqrtd) / a;
        if !t_range.surrounds(root) {
            root = (h + sqrtd) / a;
            if !t_range.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        Some(Hit {
            t: root,
            point,
            normal: (point - self.center) / self.radius,
        })
    }
}

/// An infinite plane given by a unit normal and a point on the plane.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl Plane {
    /// Create a new plane. The normal is normalized here once.
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal: normal.normalize(),
            point,
        }
    }

    /// Ray-plane intersection. Rays parallel to the plane miss.
    fn intersect(&self, ray: &Ray, t_range: Interval) -> Option<Hit> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPS {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !t_range.surrounds(t) {
            return None;
        }

        // The stored normal is the outward normal; it is never flipped.
        Some(Hit {
            t,
            point: ray.at(t),
            normal: self.normal,
        })
    }
}

/// Closed set of shapes the tracer knows how to intersect.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

/// A shape paired with its surface material.
///
/// Primitives are built once during scene construction and are
/// immutable while the render runs.
#[derive(Debug, Clone)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Material,
}

impl Primitive {
    /// Create a sphere primitive.
    pub fn sphere(sphere: Sphere, material: Material) -> Self {
        Self {
            shape: Shape::Sphere(sphere),
            material,
        }
    }

    /// Create a plane primitive.
    pub fn plane(plane: Plane, material: Material) -> Self {
        Self {
            shape: Shape::Plane(plane),
            material,
        }
    }

    /// Nearest intersection with `t` strictly inside `t_range`, or None.
    pub fn intersect(&self, ray: &Ray, t_range: Interval) -> Option<Hit> {
        match &self.shape {
            Shape::Sphere(sphere) => sphere.intersect(ray, t_range),
            Shape::Plane(plane) => plane.intersect(ray, t_range),
        }
    }

    /// Shadow query: does this primitive block the given shadow ray?
    ///
    /// The shadow ray's direction is the unnormalized vector from the
    /// shaded point to the light, so t = 1 is exactly the light. Any
    /// hit strictly inside the (epsilon, 1) window occludes.
    pub fn occludes(&self, shadow_ray: &Ray) -> bool {
        self.intersect(shadow_ray, Interval::new(SHADOW_EPS, 1.0))
            .is_some()
    }
}
