//! Per-output transforms: one function per asset kind. Each call reopens
//! the source file, so no decoded state is shared between outputs.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ColorType, DynamicImage, ImageEncoder, Rgba, RgbaImage};

use crate::error::ConvertError;

/// Render an opaque app icon: any transparent source pixels are flattened
/// onto a white canvas before resizing, and the alpha channel is dropped.
pub fn app_icon(input: &Path, output: &Path, size: u32) -> Result<(), ConvertError> {
    let logo = image::open(input)?.to_rgba8();
    let (w, h) = logo.dimensions();

    // White behind the logo, not black: app icons must not show the
    // renderer's default fill where the source was transparent.
    let mut canvas = RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]));
    imageops::overlay(&mut canvas, &logo, 0, 0);
    let flat = DynamicImage::ImageRgba8(canvas).to_rgb8();

    let resized = imageops::resize(&flat, size, size, FilterType::Lanczos3);
    write_png(output, resized.as_raw(), size, ColorType::Rgb8)?;
    log::debug!("app icon {} -> {} ({size}x{size})", input.display(), output.display());
    Ok(())
}

/// Render a splash logo: resized directly, transparency preserved.
pub fn splash_logo(input: &Path, output: &Path, size: u32) -> Result<(), ConvertError> {
    let logo = image::open(input)?.to_rgba8();
    let resized = imageops::resize(&logo, size, size, FilterType::Lanczos3);
    write_png(output, resized.as_raw(), size, ColorType::Rgba8)?;
    log::debug!("splash logo {} -> {} ({size}x{size})", input.display(), output.display());
    Ok(())
}

fn write_png(path: &Path, data: &[u8], size: u32, color: ColorType) -> Result<(), ConvertError> {
    let file = BufWriter::new(File::create(path)?);
    let encoder = PngEncoder::new_with_quality(file, CompressionType::Best, PngFilter::Adaptive);
    encoder.write_image(data, size, size, color)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Left half opaque red, right half fully transparent.
    fn half_transparent_logo(dir: &TempDir) -> std::path::PathBuf {
        let img = RgbaImage::from_fn(64, 64, |x, _| {
            if x < 32 {
                Rgba([200, 30, 30, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        let path = dir.path().join("logo.png");
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_app_icon_is_opaque_and_white_behind_transparency() {
        let dir = TempDir::new().unwrap();
        let src = half_transparent_logo(&dir);
        let out = dir.path().join("icon.png");

        app_icon(&src, &out, 32).unwrap();

        let icon = image::open(&out).unwrap();
        assert_eq!(icon.color(), ColorType::Rgb8);
        let rgb = icon.to_rgb8();
        assert_eq!(rgb.dimensions(), (32, 32));
        // Deep inside the transparent half, well clear of the edge.
        assert_eq!(rgb.get_pixel(30, 16), &image::Rgb([255, 255, 255]));
    }

    #[test]
    fn test_splash_logo_preserves_alpha() {
        let dir = TempDir::new().unwrap();
        let src = half_transparent_logo(&dir);
        let out = dir.path().join("splash.png");

        splash_logo(&src, &out, 32).unwrap();

        let splash = image::open(&out).unwrap();
        assert_eq!(splash.color(), ColorType::Rgba8);
        let rgba = splash.to_rgba8();
        assert_eq!(rgba.dimensions(), (32, 32));
        assert_eq!(rgba.get_pixel(30, 16)[3], 0);
        assert_eq!(rgba.get_pixel(2, 16)[3], 255);
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("icon.png");
        let err = app_icon(&dir.path().join("nope.png"), &out, 32);
        assert!(err.is_err());
        assert!(!out.exists());
    }
}
