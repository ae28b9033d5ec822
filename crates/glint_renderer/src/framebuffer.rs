//! Frame buffer for accumulating per-pixel radiance.

use glint_math::{Interval, Vec3};

/// Convert a radiance value to 8-bit RGB.
///
/// Each channel is clamped to [0, 1] and quantized; this clamp also
/// covers the tracer's unclamped shadowed path.
pub fn color_to_rgb8(color: Vec3) -> [u8; 3] {
    let range = Interval::new(0.0, 1.0);
    let r = (255.0 * range.clamp(color.x)) as u8;
    let g = (255.0 * range.clamp(color.y)) as u8;
    let b = (255.0 * range.clamp(color.z)) as u8;
    [r, g, b]
}

/// Row-major floating-point image, top row first.
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Vec3>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Quantize to packed RGB bytes in row-major top-to-bottom order.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rgb8_clamps() {
        assert_eq!(color_to_rgb8(Vec3::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Vec3::ONE), [255, 255, 255]);
        // Out-of-range values clamp rather than wrap
        assert_eq!(color_to_rgb8(Vec3::new(2.0, -1.0, 0.5)), [255, 0, 127]);
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut frame = FrameBuffer::new(4, 3);
        frame.set(2, 1, Vec3::new(0.25, 0.5, 0.75));
        assert_eq!(frame.get(2, 1), Vec3::new(0.25, 0.5, 0.75));
        assert_eq!(frame.get(0, 0), Vec3::ZERO);
    }

    #[test]
    fn test_to_rgb8_layout() {
        let mut frame = FrameBuffer::new(2, 2);
        frame.set(1, 0, Vec3::ONE);

        let bytes = frame.to_rgb8();
        assert_eq!(bytes.len(), 2 * 2 * 3);
        // Second pixel of the top row
        assert_eq!(&bytes[3..6], &[255, 255, 255]);
        assert_eq!(&bytes[0..3], &[0, 0, 0]);
    }
}
