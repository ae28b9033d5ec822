//! Per-pixel render loop.

use std::time::Instant;

use glint_core::Scene;
use glint_math::Vec3;

use crate::camera::Camera;
use crate::framebuffer::FrameBuffer;
use crate::tracer::trace_ray;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Background color when a ray doesn't hit anything
    pub background: Vec3,
    /// Recursion budget; a trace deeper than this returns white
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Vec3::new(0.5, 0.0, 1.0),
            max_depth: 10,
        }
    }
}

/// Render the scene to a frame buffer.
///
/// Single-threaded scanline loop; each pixel's trace is independent and
/// no scene data is mutated while it runs.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> FrameBuffer {
    let start = Instant::now();
    log::info!(
        "rendering {}x{}, {} primitives, max depth {}",
        camera.image_width,
        camera.image_height,
        scene.len(),
        config.max_depth
    );

    let mut frame = FrameBuffer::new(camera.image_width, camera.image_height);
    for j in 0..camera.image_height {
        for i in 0..camera.image_width {
            let ray = camera.primary_ray(i, j);
            frame.set(i, j, trace_ray(&ray, scene, config, 0));
        }
        log::debug!("scanline {}/{}", j + 1, camera.image_height);
    }

    log::info!("render finished in {:?}", start.elapsed());
    frame
}
