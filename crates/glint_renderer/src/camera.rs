//! Pinhole camera for primary ray generation.

use glint_math::{Ray, Vec3};

/// Camera generating one ray per pixel, aimed through the pixel center.
///
/// No lens, no sampling: a fixed pinhole at `look_from` with a frustum
/// derived from the vertical field of view.
#[derive(Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    /// Vertical field of view in degrees
    vfov: f32,

    // Cached computed values (set by initialize())
    center: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    top: f32,
    bottom: f32,
    left: f32,
    right: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 600,
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 35.0,
            center: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            top: 0.0,
            bottom: 0.0,
            left: 0.0,
            right: 0.0,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        self.center = self.look_from;

        // Camera basis: w points from the target back toward the eye,
        // so primary rays leave along -w.
        self.w = (self.look_from - self.look_at).normalize();
        self.u = self.vup.cross(self.w).normalize();
        self.v = self.w.cross(self.u);

        // Frustum bounds on the image plane one unit in front
        let aspect = self.image_width as f32 / self.image_height as f32;
        self.top = (self.vfov.to_radians() / 2.0).tan();
        self.bottom = -self.top;
        self.right = self.top * aspect;
        self.left = -self.right;
    }

    /// Generate the primary ray through the center of pixel (i, j).
    /// Row j = 0 is the top of the image.
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let s = self.left
            + (self.right - self.left) * (i as f32 + 0.5) / self.image_width as f32;
        let t = self.top
            + (self.bottom - self.top) * (j as f32 + 0.5) / self.image_height as f32;

        let direction = (-self.w + s * self.u + t * self.v).normalize();
        Ray::new(self.center, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_initialize_basis() {
        let mut camera = Camera::new()
            .with_resolution(800, 600)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_vfov(35.0);
        camera.initialize();

        assert!((camera.w - Vec3::Z).length() < 1e-6);
        assert!((camera.u - Vec3::X).length() < 1e-6);
        assert!((camera.v - Vec3::Y).length() < 1e-6);
        // 4:3 frustum
        assert!((camera.right / camera.top - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let mut camera = Camera::new()
            .with_resolution(100, 100)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_vfov(90.0);
        camera.initialize();

        // 100x100 with pixel centers: rays straddle the exact center,
        // but the middle pixel is close to straight ahead.
        let ray = camera.primary_ray(50, 50);
        assert!(ray.direction().z < -0.99);
        assert!((ray.direction().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_row_zero_is_top_of_image() {
        let mut camera = Camera::new().with_resolution(100, 100);
        camera.initialize();

        let top_ray = camera.primary_ray(50, 0);
        let bottom_ray = camera.primary_ray(50, 99);
        assert!(top_ray.direction().y > 0.0);
        assert!(bottom_ray.direction().y < 0.0);
    }

    #[test]
    fn test_left_pixel_leans_left() {
        let mut camera = Camera::new().with_resolution(100, 100);
        camera.initialize();

        let left_ray = camera.primary_ray(0, 50);
        let right_ray = camera.primary_ray(99, 50);
        assert!(left_ray.direction().x < 0.0);
        assert!(right_ray.direction().x > 0.0);
    }
}
