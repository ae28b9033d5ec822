//! Surface material parameters.

use glint_math::Vec3;

/// Refractive index of air, used as the "not refractive" sentinel.
pub const IOR_AIR: f32 = 1.0;

/// Surface material for a scene primitive.
///
/// Colors are RGB with channels conceptually in 0-1; the tracer clamps
/// at composition time rather than at construction.
#[derive(Clone, Debug)]
pub struct Material {
    /// Surface color (RGB, 0-1), used for both ambient and diffuse terms
    pub color: Vec3,

    /// Ambient coefficient (scales the base contribution)
    pub ambient: f32,

    /// Phong specular exponent (> 0)
    pub specular_exponent: f32,

    /// True for a perfect mirror surface
    pub reflective: bool,

    /// Refractive index; [`IOR_AIR`] means the surface does not refract
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Vec3::new(0.5, 0.5, 0.5), // Grey default
            ambient: 0.2,
            specular_exponent: 50.0,
            reflective: false,
            refractive_index: IOR_AIR,
        }
    }
}

impl Material {
    /// Create a plain diffuse material with the given color.
    pub fn with_color(color: Vec3) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Mark the material as a perfect mirror.
    pub fn reflective(mut self) -> Self {
        self.reflective = true;
        self
    }

    /// Give the material a refractive index (1.5 = glass, 2.4 = diamond).
    pub fn refractive(mut self, index: f32) -> Self {
        self.refractive_index = index;
        self
    }

    /// Set the Phong specular exponent.
    pub fn with_specular_exponent(mut self, exponent: f32) -> Self {
        self.specular_exponent = exponent;
        self
    }

    /// Whether the refraction branch applies to this material.
    pub fn is_refractive(&self) -> bool {
        self.refractive_index != IOR_AIR
    }
}
