//! glint - offline Whitted ray tracer.
//!
//! Renders the built-in demo scene and writes it to the path given as
//! the first argument (default `glint.ppm`). A `.png` extension picks
//! the PNG writer; anything else gets binary PPM.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glint_core::{Light, Material, Plane, Primitive, Scene, Sphere};
use glint_math::Vec3;
use glint_renderer::{render, write_png, write_ppm, Camera, RenderConfig};

/// Demo scene: four colored spheres over a mirror floor, one of them
/// glass, lit from the upper left.
fn build_scene() -> Scene {
    // Light sits up and to the left of the eye at the origin.
    let light = Light::new(Vec3::new(-1.9, 1.9, 0.0));
    let mut scene = Scene::new(light);

    scene.add(Primitive::sphere(
        Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.75),
        Material::with_color(Vec3::new(1.0, 0.5, 0.0)).with_specular_exponent(500.0),
    ));
    scene.add(Primitive::sphere(
        Sphere::new(Vec3::new(1.0, 0.0, -5.5), 0.5),
        Material::with_color(Vec3::new(0.0, 1.0, 0.5)),
    ));
    scene.add(Primitive::sphere(
        Sphere::new(Vec3::new(-1.0, 0.5, -3.0), 0.2),
        Material::with_color(Vec3::new(0.0, 0.5, 1.0)).reflective(),
    ));
    scene.add(Primitive::sphere(
        Sphere::new(Vec3::new(-0.5, -0.5, -2.5), 0.2),
        Material::with_color(Vec3::new(1.0, 0.5, 0.5)).refractive(1.5),
    ));
    scene.add(Primitive::plane(
        Plane::new(Vec3::Y, Vec3::new(0.0, -1.0, 0.0)),
        Material::with_color(Vec3::new(0.9, 0.9, 0.9)).reflective(),
    ));

    scene
}

fn save_image(frame: &glint_renderer::FrameBuffer, path: &Path) -> Result<()> {
    let pixels = frame.to_rgb8();
    let is_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        write_png(frame.width, frame.height, &pixels, path)
    } else {
        write_ppm(frame.width, frame.height, &pixels, path)
    }
    .with_context(|| format!("failed to write {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();

    let output: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "glint.ppm".to_string())
        .into();

    let scene = build_scene();
    log::info!("scene has {} primitives", scene.len());

    let mut camera = Camera::new()
        .with_resolution(800, 600)
        .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_vfov(35.0);
    camera.initialize();

    let config = RenderConfig::default();
    let frame = render(&camera, &scene, &config);

    save_image(&frame, &output)?;
    log::info!("wrote {}", output.display());
    Ok(())
}
