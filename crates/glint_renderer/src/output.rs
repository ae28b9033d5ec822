//! Image file writers.
//!
//! Binary PPM (P6) is the native format; PNG goes through the `image`
//! crate. Both validate that the pixel data matches the stated
//! dimensions before touching the filesystem.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("pixel data is {actual} bytes, expected {expected} for {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type OutputResult<T> = Result<T, OutputError>;

fn check_size(width: u32, height: u32, pixels: &[u8]) -> OutputResult<()> {
    let expected = (width * height * 3) as usize;
    if pixels.len() != expected {
        return Err(OutputError::SizeMismatch {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Write packed RGB bytes as a binary PPM (P6) file.
///
/// The header is the magic token, dimensions and max channel value;
/// pixel rows follow top-to-bottom.
pub fn write_ppm(
    width: u32,
    height: u32,
    pixels: &[u8],
    path: impl AsRef<Path>,
) -> OutputResult<()> {
    check_size(width, height, pixels)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write!(writer, "P6\n{} {}\n255\n", width, height)?;
    writer.write_all(pixels)?;
    writer.flush()?;
    Ok(())
}

/// Write packed RGB bytes as a PNG file.
pub fn write_png(
    width: u32,
    height: u32,
    pixels: &[u8],
    path: impl AsRef<Path>,
) -> OutputResult<()> {
    check_size(width, height, pixels)?;

    // from_raw only fails on a size mismatch, which check_size rules out
    let img = image::RgbImage::from_raw(width, height, pixels.to_vec()).ok_or(
        OutputError::SizeMismatch {
            width,
            height,
            expected: (width * height * 3) as usize,
            actual: pixels.len(),
        },
    )?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_is_rejected() {
        let pixels = vec![0u8; 5];
        let result = write_ppm(2, 2, &pixels, "should_not_exist.ppm");
        assert!(matches!(result, Err(OutputError::SizeMismatch { .. })));
        assert!(!Path::new("should_not_exist.ppm").exists());
    }

    #[test]
    fn test_ppm_header_and_payload() {
        let path = std::env::temp_dir().join("glint_output_test.ppm");
        let pixels = vec![10u8, 20, 30, 40, 50, 60];

        write_ppm(2, 1, &pixels, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[..9], b"P6\n2 1\n25");
        assert_eq!(&written[written.len() - 6..], &pixels[..]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_png_round_trip() {
        let path = std::env::temp_dir().join("glint_output_test.png");
        let pixels = vec![255u8, 0, 0, 0, 255, 0, 0, 0, 255, 128, 128, 128];

        write_png(2, 2, &pixels, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
        std::fs::remove_file(&path).unwrap();
    }
}
